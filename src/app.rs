// ============================================================================
// APP - Aplicación principal
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{console, Element};

use crate::dom::incremental::{update_destination_list, update_modal_visibility, ModalType};
use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::state::app_state::{AppState, IncrementalUpdate};
use crate::views::render_app;

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Option<Element>,
}

impl App {
    /// Crear nueva aplicación y lanzar la carga inicial de paquetes
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();

        // Carga inicial de la lista de paquetes
        crate::views::packages_panel::reload_packages(&state);

        Ok(Self {
            state,
            root: Some(root),
        })
    }

    /// Renderizar aplicación (re-render completo)
    pub fn render(&mut self) -> Result<(), JsValue> {
        console::log_1(&JsValue::from_str("🎬 [APP] App::render() llamado"));

        if let Some(root) = &self.root {
            // Limpiar contenido anterior
            set_inner_html(root, "");

            let app_view = render_app(&self.state)?;
            append_child(root, &app_view)?;
        }
        Ok(())
    }

    /// Actualización incremental del DOM (solo elementos específicos)
    pub fn update_incremental(&self, update_type: IncrementalUpdate) -> Result<(), JsValue> {
        match update_type {
            IncrementalUpdate::Modal(modal_type) => {
                let show = match modal_type {
                    ModalType::View => *self.state.show_view_modal.borrow(),
                    ModalType::Edit => *self.state.show_edit_modal.borrow(),
                    ModalType::Create => *self.state.show_create_modal.borrow(),
                };
                update_modal_visibility(modal_type, show)?;
            }
            IncrementalUpdate::DestinationList => {
                update_destination_list(&self.state)?;
            }
        }
        Ok(())
    }
}
