//! Reactive wrapper around the auth modal state machine
//!
//! The landing page owns one controller and hands read-only signals and
//! callbacks to the header, call-to-action buttons and the modal itself.
//! Typed form values live here too: they survive mode switches and are
//! cleared whenever the modal closes.

use leptos::prelude::*;

use crate::core::{AuthFormValues, AuthModalState, AuthMode, Notification};

/// Auth modal state owned by the page component
#[derive(Clone, Copy)]
pub struct AuthModalController {
    state: RwSignal<AuthModalState>,
    values: RwSignal<AuthFormValues>,
}

impl AuthModalController {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(AuthModalState::new()),
            values: RwSignal::new(AuthFormValues::default()),
        }
    }

    /// Values typed into the auth form
    pub fn values(&self) -> RwSignal<AuthFormValues> {
        self.values
    }

    /// Whether the modal is visible
    pub fn is_open(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_open()))
    }

    /// Currently selected form variant
    pub fn mode(&self) -> Signal<AuthMode> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.mode()))
    }

    pub fn open(&self, mode: AuthMode) {
        self.state.update(|s| s.open(mode));
    }

    pub fn close(&self) {
        if self.state.with_untracked(|s| s.is_open()) {
            self.state.update(|s| s.close());
            self.values.set(AuthFormValues::default());
        }
    }

    /// Acknowledge the typed values for the current mode and close the modal
    pub fn submit(&self) -> Notification {
        let mut state = self.state.get_untracked();
        let mode = state.mode();
        let message = self.values.with_untracked(|v| state.submit(v));
        self.state.set(state);
        self.values.set(AuthFormValues::default());

        leptos::logging::log!("auth form submitted ({mode}): {message}");
        Notification::acknowledgment(mode, message)
    }

    pub fn toggle(&self) {
        self.state.maybe_update(|s| s.toggle());
    }

    pub fn forgot_password(&self) {
        self.state.maybe_update(|s| s.forgot_password());
    }

    /// Callback opening the modal in a fixed mode, for buttons
    pub fn open_callback(&self, mode: AuthMode) -> Callback<()> {
        let this = *self;
        Callback::new(move |_| this.open(mode))
    }

    pub fn close_callback(&self) -> Callback<()> {
        let this = *self;
        Callback::new(move |_| this.close())
    }

    pub fn toggle_callback(&self) -> Callback<()> {
        let this = *self;
        Callback::new(move |_| this.toggle())
    }

    pub fn forgot_callback(&self) -> Callback<()> {
        let this = *self;
        Callback::new(move |_| this.forgot_password())
    }

    /// Callback for form submission, handing the acknowledgment to `on_acknowledge`
    pub fn submit_callback(&self, on_acknowledge: Callback<Notification>) -> Callback<()> {
        let this = *self;
        Callback::new(move |_| on_acknowledge.run(this.submit()))
    }
}

impl Default for AuthModalController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AuthField;

    fn with_owner<T>(f: impl FnOnce() -> T) -> T {
        let owner = Owner::new();
        owner.with(f)
    }

    #[test]
    fn test_starts_closed() {
        with_owner(|| {
            let ctrl = AuthModalController::new();
            assert!(!ctrl.is_open().get_untracked());
            assert_eq!(ctrl.mode().get_untracked(), AuthMode::Login);
        });
    }

    #[test]
    fn test_open_callbacks_select_mode() {
        with_owner(|| {
            let ctrl = AuthModalController::new();
            for mode in AuthMode::ALL {
                ctrl.open_callback(mode).run(());
                assert!(ctrl.is_open().get_untracked());
                assert_eq!(ctrl.mode().get_untracked(), mode);
                ctrl.close_callback().run(());
                assert!(!ctrl.is_open().get_untracked());
            }
        });
    }

    #[test]
    fn test_toggle_and_forgot() {
        with_owner(|| {
            let ctrl = AuthModalController::new();
            ctrl.open(AuthMode::Login);
            ctrl.toggle();
            assert_eq!(ctrl.mode().get_untracked(), AuthMode::Register);
            ctrl.toggle_callback().run(());
            assert_eq!(ctrl.mode().get_untracked(), AuthMode::Login);

            ctrl.forgot_callback().run(());
            assert_eq!(ctrl.mode().get_untracked(), AuthMode::Forgot);
            ctrl.toggle();
            assert_eq!(ctrl.mode().get_untracked(), AuthMode::Forgot);
        });
    }

    fn type_all(ctrl: &AuthModalController) {
        ctrl.values().update(|v| {
            v.set(AuthField::Name, "Jane Doe");
            v.set(AuthField::Email, "jane@x.com");
            v.set(AuthField::Password, "secret");
        });
    }

    #[test]
    fn test_submit_acknowledges_then_closes() {
        with_owner(|| {
            let ctrl = AuthModalController::new();
            let expected = [
                (AuthMode::Login, "Logging in as jane@x.com"),
                (AuthMode::Register, "Registering Jane Doe <jane@x.com>"),
                (AuthMode::Forgot, "Password reset link sent to jane@x.com"),
            ];
            for (mode, message) in expected {
                ctrl.open(mode);
                type_all(&ctrl);

                let toast = ctrl.submit();
                assert_eq!(toast.message, message);
                assert!(!ctrl.is_open().get_untracked());
                assert_eq!(ctrl.values().get_untracked(), AuthFormValues::default());
            }
        });
    }

    #[test]
    fn test_submit_callback_delivers_acknowledgment() {
        with_owner(|| {
            let ctrl = AuthModalController::new();
            let received = RwSignal::new(None::<Notification>);
            let submit = ctrl.submit_callback(Callback::new(move |n| received.set(Some(n))));

            ctrl.open(AuthMode::Register);
            type_all(&ctrl);
            submit.run(());

            let toast = received.get_untracked().map(|n| n.message);
            assert_eq!(toast.as_deref(), Some("Registering Jane Doe <jane@x.com>"));
            assert!(!ctrl.is_open().get_untracked());
        });
    }

    #[test]
    fn test_values_survive_mode_switches() {
        with_owner(|| {
            let ctrl = AuthModalController::new();
            ctrl.open(AuthMode::Register);
            type_all(&ctrl);

            ctrl.toggle();
            assert_eq!(ctrl.mode().get_untracked(), AuthMode::Login);
            ctrl.forgot_password();
            assert_eq!(ctrl.mode().get_untracked(), AuthMode::Forgot);

            let values = ctrl.values().get_untracked();
            assert_eq!(values.name, "Jane Doe");
            assert_eq!(values.email, "jane@x.com");
            assert_eq!(values.password, "secret");
        });
    }

    #[test]
    fn test_values_cleared_on_close() {
        with_owner(|| {
            let ctrl = AuthModalController::new();
            ctrl.open(AuthMode::Login);
            type_all(&ctrl);

            ctrl.close();
            ctrl.open(AuthMode::Login);
            assert_eq!(ctrl.values().get_untracked(), AuthFormValues::default());
        });
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        with_owner(|| {
            let ctrl = AuthModalController::new();
            ctrl.close();
            ctrl.close();
            assert!(!ctrl.is_open().get_untracked());
        });
    }
}
