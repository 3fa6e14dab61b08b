// ============================================================================
// PACKAGES PANEL - Listado de paquetes del panel admin
// ============================================================================
// El panel decide qué modal montar y provee los callbacks onClose/onSubmit.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::events::on_click;
use crate::dom::{append_child, set_attribute, ElementBuilder};
use crate::models::TravelPackage;
use crate::services::ApiClient;
use crate::state::app_state::AppState;
use crate::utils::i18n::t;
use crate::views::toast::show_error_toast;

/// Renderizar el panel de paquetes (header + lista de cards)
pub fn render_packages_panel(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.language.borrow().clone();

    let panel = ElementBuilder::new("div")?.class("packages-panel").build();

    // Header
    let header = ElementBuilder::new("div")?.class("app-header").build();

    let title = ElementBuilder::new("h1")?
        .text(&format!("🧳 {}", t("paquets_voyage", &lang)))
        .build();
    append_child(&header, &title)?;

    let actions = ElementBuilder::new("div")?.class("header-actions").build();

    // Refresh (🔄)
    let refresh_btn = ElementBuilder::new("button")?
        .class("btn-icon-header btn-refresh")
        .attr("title", &t("rafraichir", &lang))?
        .text("🔄")
        .build();
    {
        let state_clone = state.clone();
        on_click(&refresh_btn, move |_| {
            reload_packages(&state_clone);
        })?;
    }
    append_child(&actions, &refresh_btn)?;

    // Nuevo paquete (➕)
    let create_btn = ElementBuilder::new("button")?
        .class("btn-icon-header btn-create")
        .attr("title", &t("nouveau_paquet", &lang))?
        .text("➕")
        .build();
    {
        let state_clone = state.clone();
        on_click(&create_btn, move |_| {
            state_clone.open_create_modal();
        })?;
    }
    append_child(&actions, &create_btn)?;

    // Idioma (🌐) - alterna FR/ES y persiste en localStorage
    let lang_btn = ElementBuilder::new("button")?
        .class("btn-icon-header btn-language")
        .attr("title", &lang)?
        .text(&format!("🌐 {}", lang))
        .build();
    {
        let state_clone = state.clone();
        on_click(&lang_btn, move |_| {
            let next = if *state_clone.language.borrow() == "FR" {
                "ES"
            } else {
                "FR"
            };
            state_clone.set_language(next.to_string());
        })?;
    }
    append_child(&actions, &lang_btn)?;

    append_child(&header, &actions)?;
    append_child(&panel, &header)?;

    // Contenido: loading / vacío / cards
    let list = ElementBuilder::new("div")?.class("package-list").build();

    if *state.loading.borrow() {
        let loading_msg = ElementBuilder::new("p")?
            .class("empty-message")
            .text(&t("chargement_paquets", &lang))
            .build();
        append_child(&list, &loading_msg)?;
    } else {
        let packages = state.packages.borrow().clone();

        if packages.is_empty() {
            let empty_msg = ElementBuilder::new("p")?
                .class("empty-message")
                .text(&t("aucun_paquet", &lang))
                .build();
            append_child(&list, &empty_msg)?;
        } else {
            for pkg in &packages {
                let card = render_package_card(state, pkg, &lang)?;
                append_child(&list, &card)?;
            }
        }
    }

    append_child(&panel, &list)?;

    Ok(panel)
}

/// Card de un paquete con acciones Voir / Modifier
fn render_package_card(
    state: &AppState,
    pkg: &TravelPackage,
    lang: &str,
) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?.class("package-card").build();

    let thumb = ElementBuilder::new("img")?
        .class("package-thumb")
        .attr("alt", &pkg.title)?
        .build();
    if !pkg.image_url.is_empty() {
        set_attribute(&thumb, "src", &pkg.image_url)?;
    }
    append_child(&card, &thumb)?;

    let info = ElementBuilder::new("div")?.class("package-info").build();

    let title = ElementBuilder::new("div")?
        .class("package-title")
        .text(&pkg.title)
        .build();
    append_child(&info, &title)?;

    let meta = ElementBuilder::new("div")?
        .class("package-meta")
        .text(&format!("{} • {}", pkg.days, pkg.destinations_joined()))
        .build();
    append_child(&info, &meta)?;

    append_child(&card, &info)?;

    // Acciones
    let card_actions = ElementBuilder::new("div")?.class("package-actions").build();

    let view_btn = ElementBuilder::new("button")?
        .class("btn-icon")
        .attr("title", &t("voir", lang))?
        .text("👁")
        .build();
    {
        let state_clone = state.clone();
        let pkg_clone = pkg.clone();
        on_click(&view_btn, move |_| {
            state_clone.open_view_modal(pkg_clone.clone());
        })?;
    }
    append_child(&card_actions, &view_btn)?;

    let edit_btn = ElementBuilder::new("button")?
        .class("btn-icon-edit")
        .attr("title", &t("modifier", lang))?
        .text("✏️")
        .build();
    {
        let state_clone = state.clone();
        let pkg_clone = pkg.clone();
        on_click(&edit_btn, move |_| {
            state_clone.open_edit_modal(pkg_clone.clone());
        })?;
    }
    append_child(&card_actions, &edit_btn)?;

    append_child(&card, &card_actions)?;

    Ok(card)
}

/// Recargar la lista desde el backend
pub fn reload_packages(state: &AppState) {
    *state.loading.borrow_mut() = true;

    let state_clone = state.clone();
    spawn_local(async move {
        let api = ApiClient::new();
        match api.fetch_packages().await {
            Ok(packages) => {
                log::info!("✅ {} paquetes recibidos", packages.len());
                state_clone.set_packages(packages);
            }
            Err(e) => {
                log::error!("❌ Error obteniendo paquetes: {}", e);
                *state_clone.loading.borrow_mut() = false;
                let lang = state_clone.language.borrow().clone();
                show_error_toast(&format!("{}: {}", t("erreur", &lang), e));
                crate::rerender_app();
            }
        }
    });
}
