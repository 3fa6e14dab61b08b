// ============================================================================
// APP VIEW - Composición raíz del panel admin
// ============================================================================
// Monta el panel de paquetes y, según los flags de visibilidad, el modal
// correspondiente con sus callbacks (onClose / onSubmit).
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::models::TravelPackage;
use crate::services::ApiClient;
use crate::state::app_state::AppState;
use crate::utils::i18n::t;
use crate::views::create_modal::render_create_package_modal;
use crate::views::edit_modal::render_edit_package_modal;
use crate::views::packages_panel::{reload_packages, render_packages_panel};
use crate::views::toast::{show_error_toast, show_success_toast};
use crate::views::view_modal::render_view_package_modal;

/// Renderizar la aplicación completa
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("admin-container").build();

    let panel = render_packages_panel(state)?;
    append_child(&container, &panel)?;

    // Modal de detalles
    if *state.show_view_modal.borrow() {
        if let Some(pkg) = state.selected_package.borrow().as_ref() {
            let on_close: Rc<dyn Fn()> = {
                let state_clone = state.clone();
                Rc::new(move || {
                    state_clone.set_show_view_modal(false);
                })
            };
            let modal = render_view_package_modal(pkg, state, on_close)?;
            append_child(&container, &modal)?;
        }
    }

    // Modal de edición
    if *state.show_edit_modal.borrow() {
        let on_close: Rc<dyn Fn()> = {
            let state_clone = state.clone();
            Rc::new(move || {
                state_clone.set_show_edit_modal(false);
            })
        };
        let on_submit = make_update_handler(state);
        let modal = render_edit_package_modal(state, on_close, on_submit)?;
        append_child(&container, &modal)?;
    }

    // Modal de creación
    if *state.show_create_modal.borrow() {
        let on_close: Rc<dyn Fn()> = {
            let state_clone = state.clone();
            Rc::new(move || {
                state_clone.set_show_create_modal(false);
            })
        };
        let on_submit = make_create_handler(state);
        let modal = render_create_package_modal(state, on_close, on_submit)?;
        append_child(&container, &modal)?;
    }

    Ok(container)
}

/// onSubmit del editor: PUT al backend, cerrar modal y recargar lista
fn make_update_handler(state: &AppState) -> Rc<dyn Fn(TravelPackage)> {
    let state_clone = state.clone();
    Rc::new(move |payload: TravelPackage| {
        let state_async = state_clone.clone();
        spawn_local(async move {
            let api = ApiClient::new();
            let lang = state_async.language.borrow().clone();
            match api.update_package(&payload).await {
                Ok(updated) => {
                    log::info!("✅ Paquete actualizado: {:?}", updated.id);
                    state_async.set_show_edit_modal(false);
                    show_success_toast(&t("paquet_mis_a_jour", &lang));
                    reload_packages(&state_async);
                }
                Err(e) => {
                    // El modal queda abierto para reintentar
                    log::error!("❌ Error actualizando paquete: {}", e);
                    show_error_toast(&format!("{}: {}", t("erreur", &lang), e));
                }
            }
        });
    })
}

/// onSubmit del creador: POST al backend, cerrar modal y recargar lista
fn make_create_handler(state: &AppState) -> Rc<dyn Fn(TravelPackage)> {
    let state_clone = state.clone();
    Rc::new(move |payload: TravelPackage| {
        let state_async = state_clone.clone();
        spawn_local(async move {
            let api = ApiClient::new();
            let lang = state_async.language.borrow().clone();
            match api.create_package(&payload).await {
                Ok(created) => {
                    log::info!("✅ Paquete creado: {:?}", created.id);
                    state_async.set_show_create_modal(false);
                    show_success_toast(&t("paquet_cree", &lang));
                    reload_packages(&state_async);
                }
                Err(e) => {
                    log::error!("❌ Error creando paquete: {}", e);
                    show_error_toast(&format!("{}: {}", t("erreur", &lang), e));
                }
            }
        });
    })
}
