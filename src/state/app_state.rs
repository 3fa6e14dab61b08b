// ============================================================================
// APP STATE - Estado global del panel admin
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::dom::incremental::ModalType;
use crate::models::TravelPackage;
use crate::state::package_form::PackageForm;

/// Tipo de actualización del DOM
#[derive(Clone, Debug)]
pub enum UpdateType {
    /// Actualización incremental (solo elementos específicos)
    Incremental(IncrementalUpdate),
    /// Re-render completo (carga inicial, lista de paquetes cambiada)
    FullRender,
}

/// Tipo de actualización incremental específica
#[derive(Clone, Debug)]
pub enum IncrementalUpdate {
    /// Mostrar/ocultar un modal sin re-render completo
    Modal(ModalType),
    /// Re-renderizar solo la lista de destinos del formulario abierto
    DestinationList,
}

/// Estado global de la aplicación.
/// Clone comparte las mismas celdas Rc<RefCell> entre closures.
#[derive(Clone)]
pub struct AppState {
    // Datos
    pub packages: Rc<RefCell<Vec<TravelPackage>>>,
    pub loading: Rc<RefCell<bool>>,
    pub language: Rc<RefCell<String>>,

    // Visibilidad de modales
    pub show_view_modal: Rc<RefCell<bool>>,
    pub show_edit_modal: Rc<RefCell<bool>>,
    pub show_create_modal: Rc<RefCell<bool>>,

    // Paquete seleccionado (para ver/editar)
    pub selected_package: Rc<RefCell<Option<TravelPackage>>>,

    // Formulario del modal abierto (se resetea al cerrar)
    pub form: Rc<RefCell<PackageForm>>,
}

impl AppState {
    /// Crear nuevo estado de aplicación
    pub fn new() -> Self {
        let language = Self::load_string_pref("language", "FR".to_string());

        Self {
            packages: Rc::new(RefCell::new(Vec::new())),
            loading: Rc::new(RefCell::new(false)),
            language: Rc::new(RefCell::new(language)),

            show_view_modal: Rc::new(RefCell::new(false)),
            show_edit_modal: Rc::new(RefCell::new(false)),
            show_create_modal: Rc::new(RefCell::new(false)),

            selected_package: Rc::new(RefCell::new(None)),
            form: Rc::new(RefCell::new(PackageForm::new())),
        }
    }

    /// Cargar preferencia string desde localStorage
    fn load_string_pref(key: &str, default: String) -> String {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(value)) = storage.get_item(key) {
                    return value;
                }
            }
        }
        default
    }

    /// Guardar preferencia string en localStorage
    pub fn save_string_pref(&self, key: &str, value: &str) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
    }

    /// Establecer language y guardar en localStorage
    pub fn set_language(&self, lang: String) {
        *self.language.borrow_mut() = lang.clone();
        self.save_string_pref("language", &lang);
        crate::rerender_app();
    }

    /// Abrir el modal de detalles para un paquete
    pub fn open_view_modal(&self, pkg: TravelPackage) {
        *self.selected_package.borrow_mut() = Some(pkg);
        self.set_show_view_modal(true);
    }

    /// Abrir el modal de edición pre-poblando el formulario
    pub fn open_edit_modal(&self, pkg: TravelPackage) {
        *self.form.borrow_mut() = PackageForm::from_package(&pkg);
        *self.selected_package.borrow_mut() = Some(pkg);
        self.set_show_edit_modal(true);
    }

    /// Abrir el modal de creación con formulario vacío
    pub fn open_create_modal(&self) {
        self.form.borrow_mut().reset();
        self.set_show_create_modal(true);
    }

    /// Establecer show_view_modal y actualizar incrementalmente
    pub fn set_show_view_modal(&self, show: bool) {
        *self.show_view_modal.borrow_mut() = show;
        if !show {
            *self.selected_package.borrow_mut() = None;
        }
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::Modal(
            ModalType::View,
        )));
    }

    /// Establecer show_edit_modal; al cerrar se descarta el formulario
    pub fn set_show_edit_modal(&self, show: bool) {
        *self.show_edit_modal.borrow_mut() = show;
        if !show {
            self.form.borrow_mut().reset();
            *self.selected_package.borrow_mut() = None;
        }
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::Modal(
            ModalType::Edit,
        )));
    }

    /// Establecer show_create_modal; al cerrar se descarta el formulario
    pub fn set_show_create_modal(&self, show: bool) {
        *self.show_create_modal.borrow_mut() = show;
        if !show {
            self.form.borrow_mut().reset();
        }
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::Modal(
            ModalType::Create,
        )));
    }

    /// Reemplazar la lista de paquetes (tras fetch o guardado)
    pub fn set_packages(&self, packages: Vec<TravelPackage>) {
        *self.packages.borrow_mut() = packages;
        *self.loading.borrow_mut() = false;
        crate::rerender_app();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
