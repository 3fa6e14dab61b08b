// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP
// ============================================================================

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::models::TravelPackage;
use crate::utils::constants::BACKEND_URL;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct SavePackageResponse {
    pub success: bool,
    #[serde(default)]
    pub package: Option<TravelPackage>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
        }
    }

    /// Listar todos los paquetes
    pub async fn fetch_packages(&self) -> Result<Vec<TravelPackage>, String> {
        let url = format!("{}/v1/packages", self.base_url);

        log::info!("🧳 Obteniendo paquetes...");

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ));
        }

        response
            .json::<Vec<TravelPackage>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Crear un paquete nuevo
    pub async fn create_package(&self, pkg: &TravelPackage) -> Result<TravelPackage, String> {
        let url = format!("{}/v1/packages", self.base_url);

        log::info!("🧳 Creando paquete: {}", pkg.title);

        let response = Request::post(&url)
            .json(pkg)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ));
        }

        let save = response
            .json::<SavePackageResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        if save.success {
            save.package
                .ok_or_else(|| "No se recibió el paquete en la respuesta".to_string())
        } else {
            Err(save.error.unwrap_or_else(|| "Error creando paquete".to_string()))
        }
    }

    /// Actualizar un paquete existente
    pub async fn update_package(&self, pkg: &TravelPackage) -> Result<TravelPackage, String> {
        let id = pkg
            .id
            .as_ref()
            .ok_or_else(|| "Paquete sin id, imposible actualizar".to_string())?;
        let url = format!("{}/v1/packages/{}", self.base_url, id);

        log::info!("🧳 Actualizando paquete: {}", id);

        let response = Request::put(&url)
            .json(pkg)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ));
        }

        let save = response
            .json::<SavePackageResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        if save.success {
            save.package
                .ok_or_else(|| "No se recibió el paquete en la respuesta".to_string())
        } else {
            Err(save
                .error
                .unwrap_or_else(|| "Error actualizando paquete".to_string()))
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
