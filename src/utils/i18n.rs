// ============================================================================
// MÓDULO DE INTERNACIONALIZACIÓN
// ============================================================================

use std::collections::HashMap;

/// Obtener diccionario de traducciones para un idioma
fn get_translations(lang: &str) -> HashMap<&'static str, &'static str> {
    let mut translations = HashMap::new();
    let lang_upper = lang.to_uppercase();

    match lang_upper.as_str() {
        "ES" => {
            // Panel de paquetes
            translations.insert("paquets_voyage", "Paquetes de viaje");
            translations.insert("nouveau_paquet", "Nuevo paquete");
            translations.insert("rafraichir", "Refrescar");
            translations.insert("chargement_paquets", "Cargando paquetes...");
            translations.insert("aucun_paquet", "Ningún paquete todavía");
            translations.insert("voir", "Ver");
            translations.insert("modifier", "Modificar");

            // Modal de detalles
            translations.insert("details_paquet", "Detalles del paquete");
            translations.insert("titre", "Título");
            translations.insert("description", "Descripción");
            translations.insert("duree", "Duración");
            translations.insert("destinations", "Destinos");
            translations.insert("fermer", "Cerrar");

            // Modales crear/editar
            translations.insert("modifier_paquet", "Modificar paquete");
            translations.insert("creer_paquet", "Crear paquete");
            translations.insert("titre_paquet", "Título del paquete");
            translations.insert("televerser_image", "Subir imagen");
            translations.insert("saisir_destination", "Introducir destino");
            translations.insert("ajouter", "Añadir");
            translations.insert("aucune_destination", "Ningún destino añadido todavía.");
            translations.insert("annuler", "Cancelar");
            translations.insert("mettre_a_jour", "Actualizar");
            translations.insert("creer", "Crear");

            // Mensajes de validación
            translations.insert("destination_requise", "El destino es obligatorio");
            translations.insert("image_requise", "La imagen es obligatoria");
            translations.insert("titre_requis", "El título del paquete es obligatorio");
            translations.insert("duree_requise", "La duración del paquete es obligatoria");
            translations.insert(
                "description_requise",
                "La descripción del paquete es obligatoria",
            );

            // Servicios
            translations.insert("paquet_cree", "Paquete creado");
            translations.insert("paquet_mis_a_jour", "Paquete actualizado");
            translations.insert("erreur", "Error");
        }
        _ => {
            // FR por defecto
            // Panel de paquetes
            translations.insert("paquets_voyage", "Paquets voyage");
            translations.insert("nouveau_paquet", "Nouveau paquet");
            translations.insert("rafraichir", "Rafraîchir");
            translations.insert("chargement_paquets", "Chargement des paquets...");
            translations.insert("aucun_paquet", "Aucun paquet pour l'instant");
            translations.insert("voir", "Voir");
            translations.insert("modifier", "Modifier");

            // Modal de detalles
            translations.insert("details_paquet", "Détails du paquet");
            translations.insert("titre", "Titre");
            translations.insert("description", "Description");
            translations.insert("duree", "Durée");
            translations.insert("destinations", "Destinations");
            translations.insert("fermer", "Fermer");

            // Modales crear/editar
            translations.insert("modifier_paquet", "Modifier le paquet");
            translations.insert("creer_paquet", "Créer un paquet");
            translations.insert("titre_paquet", "Titre du paquet");
            translations.insert("televerser_image", "Téléverser une image");
            translations.insert("saisir_destination", "Saisir une destination");
            translations.insert("ajouter", "Ajouter");
            translations.insert("aucune_destination", "Aucune destination ajoutée.");
            translations.insert("annuler", "Annuler");
            translations.insert("mettre_a_jour", "Mettre à jour");
            translations.insert("creer", "Créer");

            // Mensajes de validación
            translations.insert("destination_requise", "La destination est requise");
            translations.insert("image_requise", "L'image est requise");
            translations.insert("titre_requis", "Le titre du paquet est requis");
            translations.insert("duree_requise", "La durée du paquet est requise");
            translations.insert("description_requise", "La description du paquet est requise");

            // Servicios
            translations.insert("paquet_cree", "Paquet créé");
            translations.insert("paquet_mis_a_jour", "Paquet mis à jour");
            translations.insert("erreur", "Erreur");
        }
    }

    translations
}

/// Función de traducción
///
/// # Arguments
/// * `key` - Clave de traducción
/// * `lang` - Idioma ("ES" o "FR")
///
/// # Returns
/// String traducida o la clave si no se encuentra traducción
pub fn t(key: &str, lang: &str) -> String {
    let translations = get_translations(lang);

    if let Some(translation) = translations.get(key) {
        return translation.to_string();
    }

    // Fallback: devolver la clave si no hay traducción
    key.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traduce_en_ambos_idiomas() {
        assert_eq!(t("destination_requise", "FR"), "La destination est requise");
        assert_eq!(t("destination_requise", "ES"), "El destino es obligatorio");
        // case-insensitive en el código de idioma
        assert_eq!(t("fermer", "es"), "Cerrar");
    }

    #[test]
    fn clave_desconocida_devuelve_la_clave() {
        assert_eq!(t("clave_inexistente", "FR"), "clave_inexistente");
    }
}
