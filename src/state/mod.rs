pub mod app_state;
pub mod package_form;

pub use app_state::{AppState, IncrementalUpdate, UpdateType};
pub use package_form::{FieldError, FormMode, PackageForm};
