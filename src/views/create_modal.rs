// ============================================================================
// CREATE PACKAGE MODAL - Modal de creación de paquete
// ============================================================================
// Mismo contrato que el de edición pero parte del formulario vacío y exige
// todos los campos (imagen incluida) antes del chequeo de destinos.
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::events::on_click;
use crate::dom::{append_child, ElementBuilder};
use crate::models::TravelPackage;
use crate::state::app_state::AppState;
use crate::state::package_form::FormMode;
use crate::utils::i18n::t;
use crate::views::edit_modal::submit_form;
use crate::views::form_fields::{
    create_destination_section, create_file_field, create_text_field, create_textarea_field,
};

/// Renderizar modal de creación
pub fn render_create_package_modal(
    state: &AppState,
    on_close: Rc<dyn Fn()>,
    on_submit: Rc<dyn Fn(TravelPackage)>,
) -> Result<Element, JsValue> {
    let lang = state.language.borrow().clone();

    let modal = ElementBuilder::new("div")?
        .id("create-package-modal")?
        .class("modal active")
        .build();

    let overlay = ElementBuilder::new("div")?.class("modal-overlay").build();
    {
        let on_close_clone = on_close.clone();
        on_click(&overlay, move |_| {
            on_close_clone();
        })?;
    }
    append_child(&modal, &overlay)?;

    let content = ElementBuilder::new("div")?
        .class("modal-content modal-content-wide")
        .build();
    on_click(&content, |e: web_sys::MouseEvent| {
        e.stop_propagation();
    })?;

    // Header
    let header = ElementBuilder::new("div")?.class("modal-header").build();
    let title = ElementBuilder::new("h2")?
        .text(&t("creer_paquet", &lang))
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

    // Body: formulario vacío
    let body = ElementBuilder::new("div")?.class("modal-body form-grid").build();

    let image_field =
        create_file_field(state, &t("televerser_image", &lang), "create-image", "")?;
    append_child(&body, &image_field)?;

    let title_field = create_text_field(
        state,
        &t("titre_paquet", &lang),
        "create-title",
        "",
        |f, v| f.title = v,
    )?;
    append_child(&body, &title_field)?;

    let days_field =
        create_text_field(state, &t("duree", &lang), "create-days", "", |f, v| {
            f.days = v
        })?;
    append_child(&body, &days_field)?;

    let content_field = create_textarea_field(
        state,
        &t("description", &lang),
        "create-content",
        "",
        |f, v| f.content = v,
    )?;
    append_child(&body, &content_field)?;

    let destination_section = create_destination_section(state)?;
    append_child(&body, &destination_section)?;

    append_child(&content, &body)?;

    // Footer: Annuler + Créer
    let footer = ElementBuilder::new("div")?.class("modal-footer").build();

    let cancel_btn = ElementBuilder::new("button")?
        .class("btn btn-secondary")
        .text(&t("annuler", &lang))
        .build();
    {
        let on_close_clone = on_close.clone();
        on_click(&cancel_btn, move |_| {
            on_close_clone();
        })?;
    }

    let submit_btn = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .text(&t("creer", &lang))
        .build();
    {
        let state_clone = state.clone();
        let on_submit_clone = on_submit.clone();
        on_click(&submit_btn, move |_| {
            submit_form(&state_clone, FormMode::Create, &on_submit_clone);
        })?;
    }

    append_child(&footer, &cancel_btn)?;
    append_child(&footer, &submit_btn)?;
    append_child(&content, &footer)?;

    append_child(&modal, &content)?;

    Ok(modal)
}
