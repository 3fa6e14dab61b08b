// ============================================================================
// INCREMENTAL DOM - Actualizaciones sin re-render completo
// ============================================================================
// Cerrar un modal lo desmonta del DOM, así la próxima apertura cae al
// re-render completo y pinta el formulario recién reseteado. Agregar/quitar
// un destino solo re-renderiza el contenedor de la lista, preservando el
// resto del formulario (valores de inputs incluidos).
// ============================================================================

use wasm_bindgen::prelude::*;

use crate::dom::{add_class, get_element_by_id, remove_class};
use crate::state::app_state::AppState;

/// Modales del panel de paquetes
#[derive(Clone, Copy, Debug)]
pub enum ModalType {
    View,
    Edit,
    Create,
}

impl ModalType {
    /// ID del nodo raíz del modal en el DOM
    pub fn element_id(&self) -> &'static str {
        match self {
            ModalType::View => "view-package-modal",
            ModalType::Edit => "edit-package-modal",
            ModalType::Create => "create-package-modal",
        }
    }
}

/// Mostrar/ocultar un modal.
/// Mostrar agrega la clase "active"; ocultar desmonta el nodo para que la
/// próxima apertura re-renderice con el formulario reseteado.
/// Error si hay que mostrar un modal que no existe en el DOM.
pub fn update_modal_visibility(modal_type: ModalType, show: bool) -> Result<(), JsValue> {
    if let Some(modal) = get_element_by_id(modal_type.element_id()) {
        if show {
            add_class(&modal, "active")?;
        } else {
            remove_class(&modal, "active")?;
            modal.remove();
        }
        Ok(())
    } else if show {
        log::warn!("⚠️ Modal {:?} no existe, necesita re-render completo", modal_type);
        Err(JsValue::from_str("Modal not found, needs full render"))
    } else {
        // Ocultar un modal inexistente no requiere nada
        Ok(())
    }
}

/// Re-renderizar solo la lista de destinos del formulario abierto
pub fn update_destination_list(state: &AppState) -> Result<(), JsValue> {
    let container = get_element_by_id("destination-list")
        .ok_or_else(|| JsValue::from_str("Destination list not found, needs full render"))?;

    crate::views::form_fields::render_destination_rows(&container, state)
}
