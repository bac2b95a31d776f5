pub mod auth;
pub mod common;
pub mod hero;
pub mod icon;
pub mod notifications;
pub mod pages;
pub mod scroll;

pub use auth::{AuthForm, AuthModal, AuthModalController};
pub use hero::{Hero, HeroScene};
pub use icon::{Icon, icons};
pub use notifications::{NotificationManager, NotificationsContainer};
pub use pages::{LandingPage, NotFoundPage};
