// ============================================================================
// TOAST - Notificación transitoria (validación y errores de servicio)
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;

use crate::dom::{document, ElementBuilder};

/// Duración del toast en pantalla
const TOAST_DURATION_MS: u32 = 3000;

/// Mostrar un toast de error anclado al body.
/// Se auto-destruye; los listeners del modal no se ven afectados.
pub fn show_error_toast(message: &str) {
    if let Err(e) = render_toast(message, "toast toast-error") {
        log::error!("❌ No se pudo mostrar el toast: {:?}", e);
    }
}

/// Mostrar un toast de confirmación (guardado exitoso)
pub fn show_success_toast(message: &str) {
    if let Err(e) = render_toast(message, "toast toast-success") {
        log::error!("❌ No se pudo mostrar el toast: {:?}", e);
    }
}

fn render_toast(message: &str, class: &str) -> Result<(), JsValue> {
    let body = document()
        .and_then(|doc| doc.body())
        .ok_or_else(|| JsValue::from_str("No body"))?;

    let toast = ElementBuilder::new("div")?.class(class).text(message).build();

    body.append_child(&toast)?;

    // Auto-destruir tras el timeout
    let toast_clone = toast.clone();
    Timeout::new(TOAST_DURATION_MS, move || {
        toast_clone.remove();
    })
    .forget();

    Ok(())
}
