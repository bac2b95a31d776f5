//! Common reusable UI components

pub mod form;
pub mod modal;

pub use form::FormField;
pub use modal::BaseModal;
