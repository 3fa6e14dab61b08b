pub mod app;
pub mod create_modal;
pub mod edit_modal;
pub mod form_fields;
pub mod packages_panel;
pub mod toast;
pub mod view_modal;

pub use app::render_app;
pub use create_modal::render_create_package_modal;
pub use edit_modal::render_edit_package_modal;
pub use packages_panel::render_packages_panel;
pub use view_modal::render_view_package_modal;
