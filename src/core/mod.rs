//! Core domain models: auth modal state machine, page content and the hero scene

pub mod auth_flow;
#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod notification;
pub mod scene;

pub use auth_flow::{
    AuthField, AuthFormValues, AuthModalState, AuthMode, ParseAuthModeError, acknowledgment,
};
pub use content::{PlanAction, Section};
pub use notification::{Notification, NotificationKind};
pub use scene::{OrbitState, Primitive, Scene, SceneError, Viewport};
