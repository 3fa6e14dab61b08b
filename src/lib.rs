// ============================================================================
// TRAVEL ADMIN PWA - PANEL ADMIN DE PAQUETES (RUST PURO)
// ============================================================================
// Arquitectura:
// - Views: Funciones que renderizan DOM (sin lógica)
// - State: Estado global + formulario con Rc<RefCell>
// - Services: SOLO comunicación API
// - Models: Estructuras compartidas con backend
// ============================================================================

mod app;
mod dom;
mod models;
mod services;
mod state;
mod utils;
mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;
use crate::state::app_state::UpdateType;

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    // Inicializar logging
    wasm_logger::init(Config::default());
    log::info!("🚀 Travel Admin - Rust Puro + WASM");

    // Crear y renderizar app
    let mut app = App::new()?;
    app.render()?;

    // Guardar app en variable global
    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Re-render completo de la app
pub fn rerender_app() {
    rerender_app_with_type(UpdateType::FullRender);
}

/// Actualizar la app con tipo específico.
/// Las actualizaciones incrementales caen a re-render completo cuando el
/// nodo objetivo (modal, lista de destinos) todavía no existe en el DOM.
pub fn rerender_app_with_type(update_type: UpdateType) {
    APP.with(|app_cell| {
        match update_type {
            UpdateType::Incremental(inc_type) => {
                let needs_full_render = {
                    if let Some(ref app) = *app_cell.borrow() {
                        match app.update_incremental(inc_type) {
                            Ok(()) => false,
                            Err(e) => {
                                let error_str = format!("{:?}", e);
                                if error_str.contains("needs full render") {
                                    log::info!("🔄 [UPDATE] Cambiando a re-render completo");
                                    true
                                } else {
                                    log::error!(
                                        "❌ Error en actualización incremental: {:?}",
                                        e
                                    );
                                    false
                                }
                            }
                        }
                    } else {
                        log::warn!("⚠️ [UPDATE] App no está inicializada");
                        false
                    }
                };

                // Liberar el borrow anterior antes del re-render completo
                if needs_full_render {
                    if let Some(ref mut app_mut) = *app_cell.borrow_mut() {
                        let _ = app_mut.render();
                    }
                }
            }
            UpdateType::FullRender => {
                if let Some(ref mut app_mut) = *app_cell.borrow_mut() {
                    if let Err(e) = app_mut.render() {
                        log::error!("❌ Error re-renderizando: {:?}", e);
                    }
                } else {
                    log::warn!("⚠️ [RERENDER] App no está inicializada");
                }
            }
        }
    });
}
