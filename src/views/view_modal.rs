// ============================================================================
// VIEW PACKAGE MODAL - Modal de detalles del paquete (solo lectura)
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::events::on_click;
use crate::dom::{append_child, set_attribute, ElementBuilder};
use crate::models::TravelPackage;
use crate::state::app_state::AppState;
use crate::utils::i18n::t;

/// Renderizar modal de detalles.
/// Única acción: cerrar (señala al padre que lo desmonte, sin otros efectos).
pub fn render_view_package_modal(
    pkg: &TravelPackage,
    state: &AppState,
    on_close: Rc<dyn Fn()>,
) -> Result<Element, JsValue> {
    let lang = state.language.borrow().clone();

    // Solo se renderiza cuando debe mostrarse, por eso "active" de entrada
    let modal = ElementBuilder::new("div")?
        .id("view-package-modal")?
        .class("modal active")
        .build();

    // Overlay (cierra al hacer click)
    let overlay = ElementBuilder::new("div")?.class("modal-overlay").build();
    {
        let on_close_clone = on_close.clone();
        on_click(&overlay, move |_| {
            on_close_clone();
        })?;
    }
    append_child(&modal, &overlay)?;

    // Modal content (previene cierre al click dentro)
    let content = ElementBuilder::new("div")?.class("modal-content").build();
    on_click(&content, |e: web_sys::MouseEvent| {
        e.stop_propagation();
    })?;

    // Header
    let header = ElementBuilder::new("div")?.class("modal-header").build();

    let title = ElementBuilder::new("h2")?
        .text(&t("details_paquet", &lang))
        .build();

    let close_btn = ElementBuilder::new("button")?
        .class("btn-close")
        .text("✕")
        .build();
    {
        let on_close_clone = on_close.clone();
        on_click(&close_btn, move |_| {
            on_close_clone();
        })?;
    }

    append_child(&header, &title)?;
    append_child(&header, &close_btn)?;
    append_child(&content, &header)?;

    // Body: campos de solo lectura
    let body = ElementBuilder::new("div")?.class("modal-body").build();

    let sections = [
        ("titre", pkg.title.as_str()),
        ("description", pkg.content.as_str()),
        ("duree", pkg.days.as_str()),
    ];
    for (key, value) in sections {
        let section = create_detail_section(&t(key, &lang), value)?;
        append_child(&body, &section)?;
    }

    let destinations = create_detail_section(&t("destinations", &lang), &pkg.destinations_joined())?;
    append_child(&body, &destinations)?;

    // Imagen
    let image_frame = ElementBuilder::new("div")?.class("package-image-frame").build();
    let image = ElementBuilder::new("img")?
        .class("package-image")
        .attr("alt", &pkg.title)?
        .build();
    if !pkg.image_url.is_empty() {
        set_attribute(&image, "src", &pkg.image_url)?;
    }
    append_child(&image_frame, &image)?;
    append_child(&body, &image_frame)?;

    append_child(&content, &body)?;

    // Footer: botón Fermer
    let footer = ElementBuilder::new("div")?.class("modal-footer").build();
    let close_footer_btn = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .text(&t("fermer", &lang))
        .build();
    {
        let on_close_clone = on_close.clone();
        on_click(&close_footer_btn, move |_| {
            on_close_clone();
        })?;
    }
    append_child(&footer, &close_footer_btn)?;
    append_child(&content, &footer)?;

    append_child(&modal, &content)?;

    Ok(modal)
}

/// Crear sección de detalle simple (label + valor)
fn create_detail_section(label: &str, value: &str) -> Result<Element, JsValue> {
    let section = ElementBuilder::new("div")?.class("detail-section").build();

    let label_el = ElementBuilder::new("div")?
        .class("detail-label")
        .text(label)
        .build();

    let value_el = ElementBuilder::new("div")?
        .class("detail-value")
        .text(value)
        .build();

    append_child(&section, &label_el)?;
    append_child(&section, &value_el)?;

    Ok(section)
}
