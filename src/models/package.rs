use serde::{Deserialize, Serialize};

/// Paquete de viaje - entidad principal del panel admin.
/// Los nombres de campos coinciden con el backend (ImageUrl, _id).
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct TravelPackage {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    /// Descripción del paquete
    pub content: String,
    /// Duración - texto libre (el backend no lo parsea como número)
    pub days: String,
    /// Lista ordenada de destinos (se permiten duplicados)
    #[serde(default)]
    pub destination: Vec<String>,
    /// URL de la imagen (remota) u object URL local antes de subir
    #[serde(rename = "ImageUrl", default)]
    pub image_url: String,
}

impl TravelPackage {
    /// Paquete vacío (punto de partida del formulario de creación)
    pub fn empty() -> Self {
        Self {
            id: None,
            title: String::new(),
            content: String::new(),
            days: String::new(),
            destination: Vec::new(),
            image_url: String::new(),
        }
    }

    /// Destinos unidos por coma para el modal de detalles
    pub fn destinations_joined(&self) -> String {
        self.destination.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializa_con_nombres_de_campo_del_backend() {
        let pkg = TravelPackage {
            id: Some("abc123".to_string()),
            title: "Circuit Andalousie".to_string(),
            content: "7 jours entre Séville et Grenade".to_string(),
            days: "7".to_string(),
            destination: vec!["Séville".to_string(), "Grenade".to_string()],
            image_url: "https://cdn.example.com/andalousie.jpg".to_string(),
        };

        let json = serde_json::to_value(&pkg).unwrap();
        assert_eq!(json["_id"], "abc123");
        assert_eq!(json["ImageUrl"], "https://cdn.example.com/andalousie.jpg");
        assert_eq!(json["destination"][1], "Grenade");
    }

    #[test]
    fn deserializa_sin_id_ni_destinos() {
        let json = r#"{"title":"T","content":"C","days":"3","ImageUrl":""}"#;
        let pkg: TravelPackage = serde_json::from_str(json).unwrap();
        assert!(pkg.id.is_none());
        assert!(pkg.destination.is_empty());
    }

    #[test]
    fn id_ausente_no_se_serializa() {
        let json = serde_json::to_value(&TravelPackage::empty()).unwrap();
        assert!(json.get("_id").is_none());
    }

    #[test]
    fn destinos_unidos_por_coma() {
        let mut pkg = TravelPackage::empty();
        pkg.destination = vec!["Paris".to_string(), "Rome".to_string()];
        assert_eq!(pkg.destinations_joined(), "Paris, Rome");
    }
}
