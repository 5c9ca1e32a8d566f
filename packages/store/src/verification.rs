//! # Two-step credential verification
//!
//! Login, signup and password reset share one flow: submit primary
//! credentials, wait, enter a one-time code, wait, and either succeed or retry.
//! [`VerificationFlow`] holds that flow as an explicit state machine;
//! the three pages only differ in their [`CredentialStep`].
//!
//! ```text
//!                    submit_credentials            resolve_credentials (ok)
//! EnteringCredentials ─────────────────► Submitting ───────────────────────► AwaitingCode
//!        ▲   ▲                                │                                 │  ▲
//!        │   └──── resolve_credentials (err) ─┘                     submit_code │  │ resolve_code (wrong code)
//!        │                                                                      ▼  │
//!        └──────────────────── back ───────────────────────────── AwaitingCode   VerifyingCode
//!                                                                                   │
//!                                                               resolve_code (ok)   ▼
//!                                                                                Verified
//! ```
//!
//! The latency between `submit_*` and `resolve_*` is owned by the caller (a
//! timer in the UI). While a step is pending, every other transition returns
//! [`FlowError::Busy`], so at most one request is in flight per flow.

use std::fmt;

use crate::error::FlowError;

/// Current position in the flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowState {
    EnteringCredentials,
    Submitting,
    AwaitingCode,
    VerifyingCode,
    Verified,
}

impl fmt::Display for FlowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FlowState::EnteringCredentials => "entering credentials",
            FlowState::Submitting => "submitting credentials",
            FlowState::AwaitingCode => "awaiting the code",
            FlowState::VerifyingCode => "verifying the code",
            FlowState::Verified => "verified",
        })
    }
}

/// The fixed values the mocked backend checks against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationPolicy {
    /// The only one-time code that is ever accepted.
    pub code: String,
    /// A password that deterministically fails login.
    pub sentinel_password: String,
}

impl Default for VerificationPolicy {
    fn default() -> Self {
        Self {
            code: "123456".to_string(),
            sentinel_password: "incorrect".to_string(),
        }
    }
}

/// What to do once the code is accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerifiedAction {
    /// Issue the session and continue into the app.
    Authenticate,
    /// Acknowledge with `notice` and send the user back to the login page.
    ReturnToLogin { notice: &'static str },
}

/// The page-specific part of a verification flow.
pub trait CredentialStep {
    /// Client-side checks run before anything is submitted.
    fn validate(&self) -> Result<(), FlowError>;

    /// The simulated backend's verdict on the submitted credentials.
    fn check(&self, _policy: &VerificationPolicy) -> Result<(), FlowError> {
        Ok(())
    }

    /// Extra fields required alongside the code.
    fn validate_code_step(&self) -> Result<(), FlowError> {
        Ok(())
    }

    fn on_verified(&self) -> VerifiedAction;
}

fn require(value: &str, field: &'static str) -> Result<(), FlowError> {
    if value.trim().is_empty() {
        Err(FlowError::MissingField(field))
    } else {
        Ok(())
    }
}

/// Email + password login.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl CredentialStep for LoginCredentials {
    fn validate(&self) -> Result<(), FlowError> {
        require(&self.email, "Email")?;
        require(&self.password, "Password")
    }

    fn check(&self, policy: &VerificationPolicy) -> Result<(), FlowError> {
        if self.password == policy.sentinel_password {
            return Err(FlowError::InvalidPassword);
        }
        Ok(())
    }

    fn on_verified(&self) -> VerifiedAction {
        VerifiedAction::Authenticate
    }
}

/// Account registration form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignupForm {
    pub full_name: String,
    pub company: String,
    pub project_domain: String,
    pub email: String,
    pub contact_number: String,
    pub password: String,
    pub confirm_password: String,
}

impl CredentialStep for SignupForm {
    fn validate(&self) -> Result<(), FlowError> {
        require(&self.full_name, "Full name")?;
        require(&self.company, "Company")?;
        require(&self.project_domain, "Project name/domain")?;
        require(&self.email, "Email")?;
        require(&self.contact_number, "Contact number")?;
        require(&self.password, "Password")?;
        require(&self.confirm_password, "Password confirmation")?;
        if self.password != self.confirm_password {
            return Err(FlowError::PasswordMismatch);
        }
        Ok(())
    }

    fn on_verified(&self) -> VerifiedAction {
        VerifiedAction::ReturnToLogin {
            notice: "Account created successfully!",
        }
    }
}

/// Password reset: the email first, then the new password next to the code.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PasswordReset {
    pub email: String,
    pub new_password: String,
}

impl CredentialStep for PasswordReset {
    fn validate(&self) -> Result<(), FlowError> {
        require(&self.email, "Email")
    }

    fn validate_code_step(&self) -> Result<(), FlowError> {
        require(&self.new_password, "New password")
    }

    fn on_verified(&self) -> VerifiedAction {
        VerifiedAction::ReturnToLogin {
            notice: "Password reset successfully!",
        }
    }
}

/// One verification attempt.
#[derive(Clone, Debug, PartialEq)]
pub struct VerificationFlow<C> {
    credentials: C,
    code: String,
    error: Option<FlowError>,
    state: FlowState,
    policy: VerificationPolicy,
}

impl<C: CredentialStep> VerificationFlow<C> {
    pub fn new(credentials: C, policy: VerificationPolicy) -> Self {
        Self {
            credentials,
            code: String::new(),
            error: None,
            state: FlowState::EnteringCredentials,
            policy,
        }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn credentials(&self) -> &C {
        &self.credentials
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn error(&self) -> Option<&FlowError> {
        self.error.as_ref()
    }

    /// A submission or verification is in flight; inputs are frozen.
    pub fn is_pending(&self) -> bool {
        matches!(self.state, FlowState::Submitting | FlowState::VerifyingCode)
    }

    /// Whether the code form is showing.
    pub fn shows_code_step(&self) -> bool {
        matches!(self.state, FlowState::AwaitingCode | FlowState::VerifyingCode)
    }

    fn guard(&self, action: &'static str, expected: FlowState) -> Result<(), FlowError> {
        if self.state == expected {
            Ok(())
        } else if self.is_pending() {
            Err(FlowError::Busy)
        } else {
            Err(FlowError::InvalidTransition {
                action,
                state: self.state,
            })
        }
    }

    /// Edit the credentials. Refused while a request is in flight or after success.
    pub fn edit_credentials(&mut self, edit: impl FnOnce(&mut C)) -> Result<(), FlowError> {
        match self.state {
            FlowState::EnteringCredentials | FlowState::AwaitingCode => {
                edit(&mut self.credentials);
                Ok(())
            }
            _ => self.guard("edit credentials", FlowState::EnteringCredentials),
        }
    }

    pub fn set_code(&mut self, code: impl Into<String>) -> Result<(), FlowError> {
        self.guard("enter a code", FlowState::AwaitingCode)?;
        self.code = code.into();
        Ok(())
    }

    /// Validate the credentials and move to `Submitting`.
    ///
    /// Validation errors are recorded and leave the flow in `EnteringCredentials`.
    pub fn submit_credentials(&mut self) -> Result<(), FlowError> {
        self.guard("submit credentials", FlowState::EnteringCredentials)?;
        self.error = None;
        if let Err(e) = self.credentials.validate() {
            self.error = Some(e.clone());
            return Err(e);
        }
        self.state = FlowState::Submitting;
        Ok(())
    }

    /// Finish the simulated submission: `AwaitingCode` on success, back to
    /// `EnteringCredentials` with an error otherwise.
    pub fn resolve_credentials(&mut self) -> Result<(), FlowError> {
        self.guard("resolve credentials", FlowState::Submitting)?;
        match self.credentials.check(&self.policy) {
            Ok(()) => {
                self.state = FlowState::AwaitingCode;
                Ok(())
            }
            Err(e) => {
                self.state = FlowState::EnteringCredentials;
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Move to `VerifyingCode`. The code and any step-two fields must be present.
    pub fn submit_code(&mut self) -> Result<(), FlowError> {
        self.guard("submit a code", FlowState::AwaitingCode)?;
        let checked = require(&self.code, "Verification code")
            .and_then(|()| self.credentials.validate_code_step());
        if let Err(e) = checked {
            self.error = Some(e.clone());
            return Err(e);
        }
        self.state = FlowState::VerifyingCode;
        Ok(())
    }

    /// Finish the simulated verification.
    ///
    /// An exact match moves to `Verified` and returns the follow-up action.
    /// Anything else returns to `AwaitingCode` with [`FlowError::InvalidCode`],
    /// keeping the entered values for another try.
    pub fn resolve_code(&mut self) -> Result<VerifiedAction, FlowError> {
        self.guard("resolve a code", FlowState::VerifyingCode)?;
        if self.code == self.policy.code {
            self.state = FlowState::Verified;
            self.error = None;
            Ok(self.credentials.on_verified())
        } else {
            self.state = FlowState::AwaitingCode;
            self.error = Some(FlowError::InvalidCode);
            Err(FlowError::InvalidCode)
        }
    }

    /// Leave the code step, discarding the entered code and error.
    pub fn back(&mut self) -> Result<(), FlowError> {
        self.guard("go back", FlowState::AwaitingCode)?;
        self.state = FlowState::EnteringCredentials;
        self.code.clear();
        self.error = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login(password: &str) -> VerificationFlow<LoginCredentials> {
        VerificationFlow::new(
            LoginCredentials {
                email: "agent@example.com".to_string(),
                password: password.to_string(),
            },
            VerificationPolicy::default(),
        )
    }

    fn to_code_step<C: CredentialStep>(flow: &mut VerificationFlow<C>) {
        flow.submit_credentials().unwrap();
        flow.resolve_credentials().unwrap();
        assert_eq!(flow.state(), FlowState::AwaitingCode);
    }

    fn signup(password: &str, confirm: &str) -> SignupForm {
        SignupForm {
            full_name: "Grace Hopper".to_string(),
            company: "Navy".to_string(),
            project_domain: "cobol".to_string(),
            email: "grace@example.com".to_string(),
            contact_number: "+1 555 0100".to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn test_login_happy_path() {
        let mut flow = login("hunter2");

        flow.submit_credentials().unwrap();
        assert_eq!(flow.state(), FlowState::Submitting);
        assert!(flow.is_pending());

        flow.resolve_credentials().unwrap();
        assert!(flow.shows_code_step());

        flow.set_code("123456").unwrap();
        flow.submit_code().unwrap();
        assert_eq!(flow.state(), FlowState::VerifyingCode);

        assert_eq!(flow.resolve_code(), Ok(VerifiedAction::Authenticate));
        assert_eq!(flow.state(), FlowState::Verified);
        assert!(flow.error().is_none());
    }

    #[test]
    fn test_sentinel_password_never_reaches_code_step() {
        let mut flow = login("incorrect");

        flow.submit_credentials().unwrap();
        assert_eq!(flow.resolve_credentials(), Err(FlowError::InvalidPassword));

        assert_eq!(flow.state(), FlowState::EnteringCredentials);
        assert!(flow.error().is_some_and(FlowError::suggests_reset));
        assert_eq!(flow.set_code("123456").unwrap_err(), FlowError::InvalidTransition {
            action: "enter a code",
            state: FlowState::EnteringCredentials,
        });
        assert_eq!(flow.credentials().email, "agent@example.com");
    }

    #[test]
    fn test_wrong_code_returns_to_awaiting_code() {
        let mut flow = login("hunter2");
        to_code_step(&mut flow);

        for attempt in ["000000", "12345", "1234567", " 123456"] {
            flow.set_code(attempt).unwrap();
            flow.submit_code().unwrap();
            assert_eq!(flow.resolve_code(), Err(FlowError::InvalidCode));
            assert_eq!(flow.state(), FlowState::AwaitingCode);
            assert_eq!(flow.error(), Some(&FlowError::InvalidCode));
            assert_eq!(flow.code(), attempt);
            assert_eq!(flow.credentials().password, "hunter2");
        }

        flow.set_code("123456").unwrap();
        flow.submit_code().unwrap();
        assert!(flow.resolve_code().is_ok());
    }

    #[test]
    fn test_second_submission_is_rejected_while_pending() {
        let mut flow = login("hunter2");
        flow.submit_credentials().unwrap();

        assert_eq!(flow.submit_credentials(), Err(FlowError::Busy));
        assert_eq!(flow.back(), Err(FlowError::Busy));
        assert_eq!(flow.edit_credentials(|c| c.password.clear()), Err(FlowError::Busy));
        assert_eq!(flow.credentials().password, "hunter2");

        flow.resolve_credentials().unwrap();
        flow.set_code("123456").unwrap();
        flow.submit_code().unwrap();
        assert_eq!(flow.submit_code(), Err(FlowError::Busy));
        assert_eq!(flow.set_code("999999"), Err(FlowError::Busy));
    }

    #[test]
    fn test_missing_fields_are_caught_before_submitting() {
        let mut flow = login("");
        assert_eq!(flow.submit_credentials(), Err(FlowError::MissingField("Password")));
        assert_eq!(flow.state(), FlowState::EnteringCredentials);

        flow.edit_credentials(|c| c.password = "hunter2".to_string()).unwrap();
        flow.submit_credentials().unwrap();
        assert!(flow.error().is_none());
    }

    #[test]
    fn test_empty_code_is_rejected() {
        let mut flow = login("hunter2");
        to_code_step(&mut flow);

        assert_eq!(flow.submit_code(), Err(FlowError::MissingField("Verification code")));
        assert_eq!(flow.state(), FlowState::AwaitingCode);
    }

    #[test]
    fn test_back_discards_code_and_error() {
        let mut flow = login("hunter2");
        to_code_step(&mut flow);
        flow.set_code("111111").unwrap();
        flow.submit_code().unwrap();
        let _ = flow.resolve_code();

        flow.back().unwrap();

        assert_eq!(flow.state(), FlowState::EnteringCredentials);
        assert_eq!(flow.code(), "");
        assert!(flow.error().is_none());
        assert_eq!(flow.credentials().email, "agent@example.com");
    }

    #[test]
    fn test_signup_password_mismatch() {
        let mut flow = VerificationFlow::new(signup("secret1", "secret2"), VerificationPolicy::default());

        assert_eq!(flow.submit_credentials(), Err(FlowError::PasswordMismatch));
        assert_eq!(flow.state(), FlowState::EnteringCredentials);
        assert_eq!(flow.error().map(ToString::to_string).as_deref(), Some("Passwords do not match"));
    }

    #[test]
    fn test_signup_returns_to_login() {
        let mut flow = VerificationFlow::new(signup("secret1", "secret1"), VerificationPolicy::default());
        to_code_step(&mut flow);
        flow.set_code("123456").unwrap();
        flow.submit_code().unwrap();

        assert_eq!(
            flow.resolve_code(),
            Ok(VerifiedAction::ReturnToLogin { notice: "Account created successfully!" })
        );
    }

    #[test]
    fn test_signup_accepts_sentinel_password() {
        // The sentinel only applies to login.
        let mut flow = VerificationFlow::new(signup("incorrect", "incorrect"), VerificationPolicy::default());
        to_code_step(&mut flow);
    }

    #[test]
    fn test_reset_requires_new_password_with_code() {
        let mut flow = VerificationFlow::new(
            PasswordReset {
                email: "agent@example.com".to_string(),
                new_password: String::new(),
            },
            VerificationPolicy::default(),
        );
        to_code_step(&mut flow);
        flow.set_code("123456").unwrap();

        assert_eq!(flow.submit_code(), Err(FlowError::MissingField("New password")));

        flow.edit_credentials(|c| c.new_password = "fresh-pass".to_string()).unwrap();
        flow.submit_code().unwrap();
        assert_eq!(
            flow.resolve_code(),
            Ok(VerifiedAction::ReturnToLogin { notice: "Password reset successfully!" })
        );
    }

    #[test]
    fn test_custom_policy() {
        let policy = VerificationPolicy {
            code: "42".to_string(),
            sentinel_password: "nope".to_string(),
        };
        let mut flow = VerificationFlow::new(
            LoginCredentials {
                email: "a@b.c".to_string(),
                password: "nope".to_string(),
            },
            policy,
        );
        flow.submit_credentials().unwrap();
        assert_eq!(flow.resolve_credentials(), Err(FlowError::InvalidPassword));

        flow.edit_credentials(|c| c.password = "incorrect".to_string()).unwrap();
        to_code_step(&mut flow);
        flow.set_code("42").unwrap();
        flow.submit_code().unwrap();
        assert!(flow.resolve_code().is_ok());
    }

    #[test]
    fn test_nothing_moves_after_verified() {
        let mut flow = login("hunter2");
        to_code_step(&mut flow);
        flow.set_code("123456").unwrap();
        flow.submit_code().unwrap();
        flow.resolve_code().unwrap();

        assert!(matches!(flow.back(), Err(FlowError::InvalidTransition { .. })));
        assert!(matches!(flow.submit_credentials(), Err(FlowError::InvalidTransition { .. })));
        assert!(flow.edit_credentials(|c| c.email.clear()).is_err());
    }
}
