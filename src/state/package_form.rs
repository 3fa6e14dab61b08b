// ============================================================================
// PACKAGE FORM - Estado del formulario de paquete (lógica pura, sin DOM)
// ============================================================================
// Reemplaza el form-binding dinámico por un struct explícito: los campos se
// validan al hacer submit y devuelven una lista de violaciones.
// ============================================================================

use crate::models::TravelPackage;

/// Modo del formulario: determina qué campos son obligatorios
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum FormMode {
    /// Creación: todos los campos obligatorios, incluida la imagen
    Create,
    /// Edición: la imagen guardada se conserva si no se reemplaza
    Edit,
}

/// Violación de validación de un campo
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct FieldError {
    pub field: &'static str,
    /// Clave i18n del mensaje mostrado en el toast
    pub message_key: &'static str,
}

/// Estado del formulario de un modal (crear/editar).
/// Se construye al abrir el modal y se resetea al cerrarlo.
#[derive(Clone, Default, Debug)]
pub struct PackageForm {
    pub id: Option<String>,
    pub title: String,
    pub days: String,
    pub content: String,
    pub image_url: String,
    /// Lista local de destinos en edición (orden de inserción)
    pub destinations: Vec<String>,
    /// Buffer del input "Ajouter destination"
    pub destination_input: String,
}

impl PackageForm {
    /// Formulario vacío (modal de creación)
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-poblar desde un paquete existente (modal de edición)
    pub fn from_package(pkg: &TravelPackage) -> Self {
        Self {
            id: pkg.id.clone(),
            title: pkg.title.clone(),
            days: pkg.days.clone(),
            content: pkg.content.clone(),
            image_url: pkg.image_url.clone(),
            destinations: pkg.destination.clone(),
            destination_input: String::new(),
        }
    }

    /// Agregar el contenido del buffer a la lista de destinos.
    /// Recorta espacios; si queda vacío no hace nada (el buffer se conserva).
    /// Devuelve true si el buffer fue consumido, para que la vista sepa si
    /// debe limpiar el input del DOM.
    pub fn add_destination(&mut self) -> bool {
        let trimmed = self.destination_input.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.destinations.push(trimmed.to_string());
        self.destination_input.clear();
        true
    }

    /// Quitar el destino en la posición dada (índice fuera de rango: no-op)
    pub fn remove_destination(&mut self, index: usize) {
        if index < self.destinations.len() {
            self.destinations.remove(index);
        }
    }

    /// Volver al formulario vacío (al cerrar el modal)
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Validación a nivel de campo, evaluada al hacer submit.
    /// El chequeo de destinos va al final: en creación los campos de texto
    /// e imagen se validan antes, igual que el flujo original.
    pub fn validate(&self, mode: FormMode) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if mode == FormMode::Create && self.image_url.trim().is_empty() {
            errors.push(FieldError {
                field: "ImageUrl",
                message_key: "image_requise",
            });
        }
        if self.title.trim().is_empty() {
            errors.push(FieldError {
                field: "title",
                message_key: "titre_requis",
            });
        }
        if self.days.trim().is_empty() {
            errors.push(FieldError {
                field: "days",
                message_key: "duree_requise",
            });
        }
        if self.content.trim().is_empty() {
            errors.push(FieldError {
                field: "content",
                message_key: "description_requise",
            });
        }
        if self.destinations.is_empty() {
            errors.push(FieldError {
                field: "destination",
                message_key: "destination_requise",
            });
        }

        errors
    }

    /// Payload de submit: campos del formulario con la lista de destinos
    /// actual pisando cualquier valor obsoleto del registro original
    pub fn payload(&self) -> TravelPackage {
        TravelPackage {
            id: self.id.clone(),
            title: self.title.trim().to_string(),
            content: self.content.trim().to_string(),
            days: self.days.trim().to_string(),
            destination: self.destinations.clone(),
            image_url: self.image_url.clone(),
        }
    }

    /// Intentar submit: si la validación pasa, invoca `submit` exactamente
    /// una vez con el payload; si no, devuelve la primera violación sin
    /// invocar nada. El modal queda abierto para corregir.
    pub fn try_submit<F>(&self, mode: FormMode, submit: F) -> Result<(), FieldError>
    where
        F: FnOnce(TravelPackage),
    {
        let errors = self.validate(mode);
        if let Some(first) = errors.first() {
            return Err(*first);
        }
        submit(self.payload());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn formulario_valido() -> PackageForm {
        PackageForm {
            id: None,
            title: "Circuit Maroc".to_string(),
            days: "10 jours".to_string(),
            content: "Désert et médinas".to_string(),
            image_url: "blob:http://localhost/abc".to_string(),
            destinations: vec!["Marrakech".to_string()],
            destination_input: String::new(),
        }
    }

    #[test]
    fn agregar_destino_recorta_y_limpia_buffer() {
        let mut form = PackageForm::new();
        form.destination_input = "  Paris  ".to_string();
        assert!(form.add_destination());
        assert_eq!(form.destinations, vec!["Paris"]);
        assert!(form.destination_input.is_empty());
    }

    #[test]
    fn agregar_destino_en_blanco_es_noop_y_conserva_buffer() {
        let mut form = PackageForm::new();
        form.destination_input = "   ".to_string();
        assert!(!form.add_destination());
        assert!(form.destinations.is_empty());
        // El buffer visible no se toca: la vista no debe limpiar el input
        assert_eq!(form.destination_input, "   ");

        form.destination_input = String::new();
        assert!(!form.add_destination());
        assert!(form.destinations.is_empty());
    }

    #[test]
    fn quitar_destino_preserva_el_orden_del_resto() {
        let mut form = PackageForm::new();
        for d in ["Paris", "Rome", "Lisboa"] {
            form.destination_input = d.to_string();
            form.add_destination();
        }
        form.remove_destination(1);
        assert_eq!(form.destinations, vec!["Paris", "Lisboa"]);
    }

    #[test]
    fn quitar_destino_indice_invalido_es_noop() {
        let mut form = PackageForm::new();
        form.destination_input = "Paris".to_string();
        form.add_destination();
        form.remove_destination(5);
        assert_eq!(form.destinations, vec!["Paris"]);
    }

    #[test]
    fn submit_sin_destinos_nunca_invoca_el_callback() {
        let mut form = formulario_valido();
        form.destinations.clear();

        let llamadas = RefCell::new(0u32);
        let result = form.try_submit(FormMode::Edit, |_| {
            *llamadas.borrow_mut() += 1;
        });

        assert_eq!(*llamadas.borrow(), 0);
        let err = result.unwrap_err();
        assert_eq!(err.field, "destination");
        assert_eq!(err.message_key, "destination_requise");
    }

    #[test]
    fn submit_valido_invoca_exactamente_una_vez_con_la_lista_actual() {
        let mut form = formulario_valido();
        form.destination_input = "Fès".to_string();
        form.add_destination();

        let llamadas = RefCell::new(0u32);
        let recibido = RefCell::new(None);
        let result = form.try_submit(FormMode::Edit, |payload| {
            *llamadas.borrow_mut() += 1;
            *recibido.borrow_mut() = Some(payload);
        });

        assert!(result.is_ok());
        assert_eq!(*llamadas.borrow(), 1);
        let payload = recibido.borrow().clone().unwrap();
        assert_eq!(payload.destination, vec!["Marrakech", "Fès"]);
    }

    #[test]
    fn creacion_con_campos_obligatorios_en_blanco_bloquea_submit() {
        let campos: [fn(&mut PackageForm); 4] = [
            |f| f.image_url.clear(),
            |f| f.title.clear(),
            |f| f.days.clear(),
            |f| f.content.clear(),
        ];

        for limpiar in campos {
            let mut form = formulario_valido();
            limpiar(&mut form);

            let llamadas = RefCell::new(0u32);
            let result = form.try_submit(FormMode::Create, |_| {
                *llamadas.borrow_mut() += 1;
            });
            assert!(result.is_err());
            assert_eq!(*llamadas.borrow(), 0);
        }
    }

    #[test]
    fn orden_de_violaciones_en_creacion() {
        let form = PackageForm::new();
        let errors = form.validate(FormMode::Create);
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec!["ImageUrl", "title", "days", "content", "destination"]
        );
    }

    #[test]
    fn edicion_no_exige_imagen() {
        let mut form = formulario_valido();
        form.image_url.clear();
        assert!(form.validate(FormMode::Edit).is_empty());
    }

    #[test]
    fn secuencia_completa_de_edicion_de_destinos() {
        // add("Paris") → ["Paris"]; add("  ") → sin cambios;
        // add("Rome") → ["Paris","Rome"]; remove(0) → ["Rome"]
        let mut form = formulario_valido();
        form.destinations.clear();

        form.destination_input = "Paris".to_string();
        form.add_destination();
        assert_eq!(form.destinations, vec!["Paris"]);

        form.destination_input = "  ".to_string();
        form.add_destination();
        assert_eq!(form.destinations, vec!["Paris"]);

        form.destination_input = "Rome".to_string();
        form.add_destination();
        assert_eq!(form.destinations, vec!["Paris", "Rome"]);

        form.remove_destination(0);
        assert_eq!(form.destinations, vec!["Rome"]);

        let recibido = RefCell::new(None);
        form.try_submit(FormMode::Edit, |payload| {
            *recibido.borrow_mut() = Some(payload);
        })
        .unwrap();
        assert_eq!(recibido.borrow().clone().unwrap().destination, vec!["Rome"]);
    }

    #[test]
    fn payload_recorta_campos_de_texto() {
        let mut form = formulario_valido();
        form.title = "  Circuit Maroc  ".to_string();
        let payload = form.payload();
        assert_eq!(payload.title, "Circuit Maroc");
    }

    #[test]
    fn from_package_prepobla_y_reset_vacia() {
        let mut pkg = TravelPackage::empty();
        pkg.title = "T".to_string();
        pkg.destination = vec!["Oslo".to_string()];

        let mut form = PackageForm::from_package(&pkg);
        assert_eq!(form.title, "T");
        assert_eq!(form.destinations, vec!["Oslo"]);

        form.reset();
        assert!(form.title.is_empty());
        assert!(form.destinations.is_empty());
    }
}
