//! Auth modal state machine
//!
//! Models the login/register/forgot-password overlay as plain data so the
//! transitions can be exercised without a browser:
//! - `AuthMode` selects the form variant and its field set
//! - `AuthModalState` tracks visibility together with the selected mode
//! - `acknowledgment` renders the placeholder message shown on submission

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Form variant shown inside the auth modal
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    #[default]
    Login,
    Register,
    Forgot,
}

/// Error returned when a string does not name an auth mode
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown auth mode: {0:?} (expected login, register or forgot)")]
pub struct ParseAuthModeError(pub String);

impl AuthMode {
    pub const ALL: [AuthMode; 3] = [AuthMode::Login, AuthMode::Register, AuthMode::Forgot];

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthMode::Login => "login",
            AuthMode::Register => "register",
            AuthMode::Forgot => "forgot",
        }
    }

    /// Heading of the modal for this mode
    pub fn title(&self) -> &'static str {
        match self {
            AuthMode::Login => "Sign in",
            AuthMode::Register => "Create your account",
            AuthMode::Forgot => "Reset password",
        }
    }

    /// Label of the submit button
    pub fn submit_label(&self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Register => "Create account",
            AuthMode::Forgot => "Send reset link",
        }
    }

    /// Label of the in-modal link that switches between login and register.
    ///
    /// `None` in forgot mode, where no toggle is offered.
    pub fn toggle_label(&self) -> Option<&'static str> {
        match self {
            AuthMode::Login => Some("Register"),
            AuthMode::Register => Some("Login"),
            AuthMode::Forgot => None,
        }
    }

    /// Counterpart of login/register; forgot has none
    pub fn toggled(&self) -> Option<AuthMode> {
        match self {
            AuthMode::Login => Some(AuthMode::Register),
            AuthMode::Register => Some(AuthMode::Login),
            AuthMode::Forgot => None,
        }
    }

    /// Whether the "Forgot password?" link is offered
    pub fn offers_forgot_link(&self) -> bool {
        matches!(self, AuthMode::Login)
    }

    /// Fields rendered for this mode, in display order
    pub fn fields(&self) -> &'static [AuthField] {
        match self {
            AuthMode::Login => &[AuthField::Email, AuthField::Password],
            AuthMode::Register => &[AuthField::Name, AuthField::Email, AuthField::Password],
            AuthMode::Forgot => &[AuthField::Email],
        }
    }

    pub fn shows(&self, field: AuthField) -> bool {
        self.fields().contains(&field)
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthMode {
    type Err = ParseAuthModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "login" => Ok(AuthMode::Login),
            "register" => Ok(AuthMode::Register),
            "forgot" => Ok(AuthMode::Forgot),
            _ => Err(ParseAuthModeError(s.to_string())),
        }
    }
}

/// A single input of the auth form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AuthField {
    Name,
    Email,
    Password,
}

impl AuthField {
    pub fn label(&self) -> &'static str {
        match self {
            AuthField::Name => "Full name",
            AuthField::Email => "Email",
            AuthField::Password => "Password",
        }
    }

    pub fn input_type(&self) -> &'static str {
        match self {
            AuthField::Name => "text",
            AuthField::Email => "email",
            AuthField::Password => "password",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            AuthField::Name => "Jane Doe",
            AuthField::Email => "you@company.com",
            AuthField::Password => "••••••••",
        }
    }

    pub fn autocomplete(&self, mode: AuthMode) -> &'static str {
        match (self, mode) {
            (AuthField::Name, _) => "name",
            (AuthField::Email, _) => "email",
            (AuthField::Password, AuthMode::Register) => "new-password",
            (AuthField::Password, _) => "current-password",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AuthField::Name => "name",
            AuthField::Email => "email",
            AuthField::Password => "password",
        }
    }
}

/// Values captured by the auth form
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthFormValues {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl AuthFormValues {
    pub fn get(&self, field: AuthField) -> &str {
        match field {
            AuthField::Name => &self.name,
            AuthField::Email => &self.email,
            AuthField::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: AuthField, value: impl Into<String>) {
        let value = value.into();
        match field {
            AuthField::Name => self.name = value,
            AuthField::Email => self.email = value,
            AuthField::Password => self.password = value,
        }
    }
}

/// Placeholder message produced in lieu of a backend response
pub fn acknowledgment(mode: AuthMode, values: &AuthFormValues) -> String {
    match mode {
        AuthMode::Login => format!("Logging in as {}", values.email),
        AuthMode::Register => format!("Registering {} <{}>", values.name, values.email),
        AuthMode::Forgot => format!("Password reset link sent to {}", values.email),
    }
}

/// Visibility of the auth modal together with the selected form variant
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct AuthModalState {
    open: bool,
    mode: AuthMode,
}

impl AuthModalState {
    /// Closed modal, login preselected
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Last selected mode, retained while closed
    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    /// Mode of the visible form, `None` while closed
    pub fn visible_mode(&self) -> Option<AuthMode> {
        self.open.then_some(self.mode)
    }

    /// Show the modal with the given form variant
    pub fn open(&mut self, mode: AuthMode) {
        self.mode = mode;
        self.open = true;
    }

    /// Hide the modal. No-op when already closed.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Switch login ⇄ register. Returns whether a transition happened.
    pub fn toggle(&mut self) -> bool {
        if !self.open {
            return false;
        }
        match self.mode.toggled() {
            Some(next) => {
                self.mode = next;
                true
            }
            None => false,
        }
    }

    /// Follow the "Forgot password?" link. Only offered from login.
    pub fn forgot_password(&mut self) -> bool {
        if self.open && self.mode.offers_forgot_link() {
            self.mode = AuthMode::Forgot;
            true
        } else {
            false
        }
    }

    /// Answer a form submission: render the acknowledgment for the current
    /// mode, then close. Submission always closes the modal.
    pub fn submit(&mut self, values: &AuthFormValues) -> String {
        let message = acknowledgment(self.mode, values);
        self.close();
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(name: &str, email: &str, password: &str) -> AuthFormValues {
        AuthFormValues {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_initial_state_is_closed() {
        let state = AuthModalState::new();
        assert!(!state.is_open());
        assert_eq!(state.visible_mode(), None);
        assert_eq!(state.mode(), AuthMode::Login);
    }

    #[test]
    fn test_open_sets_mode_and_visibility() {
        for mode in AuthMode::ALL {
            let mut state = AuthModalState::new();
            state.open(mode);
            assert!(state.is_open());
            assert_eq!(state.visible_mode(), Some(mode));
        }
    }

    #[test]
    fn test_field_sets_per_mode() {
        assert_eq!(AuthMode::Register.fields().len(), 3);
        assert_eq!(AuthMode::Login.fields().len(), 2);
        assert_eq!(AuthMode::Forgot.fields(), &[AuthField::Email]);
        assert!(!AuthMode::Login.shows(AuthField::Name));
        assert!(!AuthMode::Forgot.shows(AuthField::Password));
    }

    #[test]
    fn test_toggle_is_symmetric() {
        let mut state = AuthModalState::new();
        state.open(AuthMode::Login);
        let original = state.mode().fields();

        assert!(state.toggle());
        assert_eq!(state.mode(), AuthMode::Register);
        assert!(state.toggle());
        assert_eq!(state.mode(), AuthMode::Login);
        assert_eq!(state.mode().fields(), original);
    }

    #[test]
    fn test_toggle_unavailable_in_forgot_and_closed() {
        let mut state = AuthModalState::new();
        assert!(!state.toggle());
        assert_eq!(state.mode(), AuthMode::Login);

        state.open(AuthMode::Forgot);
        assert!(!state.toggle());
        assert_eq!(state.visible_mode(), Some(AuthMode::Forgot));
        assert_eq!(AuthMode::Forgot.toggle_label(), None);
    }

    #[test]
    fn test_forgot_only_from_login() {
        let mut state = AuthModalState::new();
        state.open(AuthMode::Register);
        assert!(!state.forgot_password());
        assert_eq!(state.mode(), AuthMode::Register);

        state.open(AuthMode::Login);
        assert!(state.forgot_password());
        assert_eq!(state.visible_mode(), Some(AuthMode::Forgot));
        assert!(!state.mode().shows(AuthField::Password));
    }

    #[test]
    fn test_forgot_from_closed_is_noop() {
        let mut state = AuthModalState::new();
        assert!(!state.forgot_password());
        assert!(!state.is_open());
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut state = AuthModalState::new();
        state.close();
        assert!(!state.is_open());

        state.open(AuthMode::Register);
        state.close();
        state.close();
        assert!(!state.is_open());
        assert_eq!(state.mode(), AuthMode::Register);
    }

    #[test]
    fn test_acknowledgment_templates() {
        let v = values("Jane Doe", "jane@x.com", "secret");
        assert_eq!(acknowledgment(AuthMode::Login, &v), "Logging in as jane@x.com");
        assert_eq!(
            acknowledgment(AuthMode::Register, &v),
            "Registering Jane Doe <jane@x.com>"
        );
        assert_eq!(
            acknowledgment(AuthMode::Forgot, &v),
            "Password reset link sent to jane@x.com"
        );
    }

    #[test]
    fn test_submit_acknowledges_and_closes_in_every_mode() {
        let input = values("Jane Doe", "jane@x.com", "secret");
        let expected = [
            (AuthMode::Login, "Logging in as jane@x.com"),
            (AuthMode::Register, "Registering Jane Doe <jane@x.com>"),
            (AuthMode::Forgot, "Password reset link sent to jane@x.com"),
        ];
        for (mode, message) in expected {
            let mut state = AuthModalState::new();
            state.open(mode);
            assert_eq!(state.submit(&input), message);
            assert!(!state.is_open());
            assert_eq!(state.visible_mode(), None);
        }
    }

    #[test]
    fn test_visible_mode_hidden_after_close() {
        for mode in AuthMode::ALL {
            let mut state = AuthModalState::new();
            state.open(mode);
            state.close();
            assert_eq!(state.visible_mode(), None);
            assert_eq!(state.mode(), mode);
        }
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!("login".parse::<AuthMode>(), Ok(AuthMode::Login));
        assert_eq!(" Register ".parse::<AuthMode>(), Ok(AuthMode::Register));
        assert_eq!("FORGOT".parse::<AuthMode>(), Ok(AuthMode::Forgot));

        let err = "signup".parse::<AuthMode>().unwrap_err();
        assert_eq!(err, ParseAuthModeError("signup".to_string()));
        assert!(err.to_string().contains("signup"));
    }

    #[test]
    fn test_mode_display_round_trips_serde_name() {
        for mode in AuthMode::ALL {
            let json = serde_json::to_string(&mode).unwrap();
            assert_eq!(json, format!("\"{}\"", mode));
        }
    }

    #[test]
    fn test_form_values_get_set() {
        let mut v = AuthFormValues::default();
        v.set(AuthField::Email, "x@y.z");
        v.set(AuthField::Name, String::from("X"));
        assert_eq!(v.get(AuthField::Email), "x@y.z");
        assert_eq!(v.get(AuthField::Name), "X");
        assert_eq!(v.get(AuthField::Password), "");
    }

    #[test]
    fn test_password_autocomplete_depends_on_mode() {
        assert_eq!(AuthField::Password.autocomplete(AuthMode::Register), "new-password");
        assert_eq!(AuthField::Password.autocomplete(AuthMode::Login), "current-password");
    }
}
