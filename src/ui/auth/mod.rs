//! Auth modal UI: page-owned controller, overlay and placeholder form

mod controller;
mod form;
mod modal;

pub use controller::AuthModalController;
pub use form::AuthForm;
pub use modal::AuthModal;
