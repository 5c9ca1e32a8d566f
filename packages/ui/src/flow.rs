//! Async drivers around [`store::VerificationFlow`].
//!
//! The flow itself is synchronous; these helpers add the simulated latency
//! between each `submit_*` and `resolve_*` and keep the signal unborrowed
//! while waiting.

use dioxus::prelude::*;
use store::{CredentialStep, StoreError, VerificationFlow, VerifiedAction};

use crate::auth::{sign_in, AuthState};
use crate::timing::simulate_latency;

/// Submit the credentials and wait for the mocked check.
///
/// Returns `true` once the code step is showing. Failures are recorded on the
/// flow and rendered from there.
pub async fn run_credential_step<C>(mut flow: Signal<VerificationFlow<C>>, latency_ms: u64) -> bool
where
    C: CredentialStep + 'static,
{
    let submitted = flow.write().submit_credentials();
    if let Err(e) = submitted {
        tracing::debug!("credentials not submitted: {e}");
        return false;
    }

    simulate_latency(latency_ms).await;

    let resolved = flow.write().resolve_credentials();
    match resolved {
        Ok(()) => true,
        Err(e) => {
            tracing::info!("credentials rejected: {e}");
            false
        }
    }
}

/// Submit the code and wait for the mocked verification.
pub async fn run_code_step<C>(
    mut flow: Signal<VerificationFlow<C>>,
    latency_ms: u64,
) -> Option<VerifiedAction>
where
    C: CredentialStep + 'static,
{
    let submitted = flow.write().submit_code();
    if let Err(e) = submitted {
        tracing::debug!("code not submitted: {e}");
        return None;
    }

    simulate_latency(latency_ms).await;

    let resolved = flow.write().resolve_code();
    match resolved {
        Ok(action) => Some(action),
        Err(e) => {
            tracing::info!("code rejected: {e}");
            None
        }
    }
}

/// Carry out a verified flow's follow-up. `Authenticate` issues the session;
/// `ReturnToLogin` hands back the notice for the caller to show before it
/// navigates.
pub async fn complete_verification(
    action: &VerifiedAction,
    auth: Signal<AuthState>,
) -> Result<Option<&'static str>, StoreError> {
    match action {
        VerifiedAction::Authenticate => sign_in(auth).await.map(|()| None),
        VerifiedAction::ReturnToLogin { notice } => Ok(Some(*notice)),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use super::*;
    use crate::test_support::{lock_session, settle};
    use crate::make_session_store;
    use store::{FlowState, LoginCredentials, PasswordReset, Session, VerificationPolicy};

    #[derive(Clone, Debug, PartialEq)]
    struct Report {
        reached_code: bool,
        follow_up: Option<Result<Option<&'static str>, String>>,
        state: FlowState,
        authenticated: bool,
    }

    /// Inputs and the recorded outcome of one scripted attempt.
    #[derive(Clone)]
    struct Attempt {
        password: String,
        code: String,
        report: Rc<RefCell<Option<Report>>>,
    }

    impl Attempt {
        fn new(password: &str, code: &str) -> Self {
            Self {
                password: password.to_string(),
                code: code.to_string(),
                report: Rc::default(),
            }
        }
    }

    #[component]
    fn ScriptedLogin() -> Element {
        let attempt = use_context::<Attempt>();
        let auth = use_signal(AuthState::default);
        let mut done = use_signal(|| false);
        let mut flow = use_signal(|| {
            VerificationFlow::new(
                LoginCredentials {
                    email: "agent@example.com".to_string(),
                    password: attempt.password.clone(),
                },
                VerificationPolicy::default(),
            )
        });

        use_hook(move || {
            spawn(async move {
                let reached_code = run_credential_step(flow, 0).await;
                let mut follow_up = None;
                if reached_code {
                    let _ = flow.write().set_code(attempt.code.clone());
                    if let Some(action) = run_code_step(flow, 0).await {
                        follow_up = Some(complete_verification(&action, auth).await.map_err(|e| e.to_string()));
                    }
                }
                *attempt.report.borrow_mut() = Some(Report {
                    reached_code,
                    follow_up,
                    state: flow.peek().state(),
                    authenticated: auth.peek().is_authenticated(),
                });
                done.set(true);
            })
        });

        rsx! { "{done}" }
    }

    async fn run_login(password: &str, code: &str) -> Report {
        let attempt = Attempt::new(password, code);
        let mut dom = VirtualDom::new(ScriptedLogin).with_root_context(attempt.clone());
        settle(&mut dom, Duration::from_secs(5), || attempt.report.borrow().is_some()).await;
        attempt.report.borrow_mut().take().unwrap()
    }

    #[tokio::test]
    async fn test_login_with_valid_code_issues_session() {
        let _guard = lock_session().await;
        make_session_store().revoke().await.unwrap();

        let report = run_login("hunter2", "123456").await;

        assert!(report.reached_code);
        assert_eq!(report.follow_up, Some(Ok(None)));
        assert_eq!(report.state, FlowState::Verified);
        assert!(report.authenticated);
        assert_eq!(make_session_store().current().await.unwrap(), Session::Authenticated);
    }

    #[tokio::test]
    async fn test_login_with_wrong_code_stays_anonymous() {
        let _guard = lock_session().await;
        make_session_store().revoke().await.unwrap();

        let report = run_login("hunter2", "654321").await;

        assert!(report.reached_code);
        assert_eq!(report.follow_up, None);
        assert_eq!(report.state, FlowState::AwaitingCode);
        assert!(!report.authenticated);
        assert_eq!(make_session_store().current().await.unwrap(), Session::Anonymous);
    }

    #[tokio::test]
    async fn test_sentinel_password_stops_before_code_step() {
        let _guard = lock_session().await;
        make_session_store().revoke().await.unwrap();

        let report = run_login("incorrect", "123456").await;

        assert!(!report.reached_code);
        assert_eq!(report.state, FlowState::EnteringCredentials);
        assert_eq!(make_session_store().current().await.unwrap(), Session::Anonymous);
    }

    #[component]
    fn ScriptedReset() -> Element {
        let attempt = use_context::<Attempt>();
        let auth = use_signal(AuthState::default);
        let mut done = use_signal(|| false);
        let mut flow = use_signal(|| {
            VerificationFlow::new(
                PasswordReset {
                    email: "agent@example.com".to_string(),
                    new_password: attempt.password.clone(),
                },
                VerificationPolicy::default(),
            )
        });

        use_hook(move || {
            spawn(async move {
                let reached_code = run_credential_step(flow, 0).await;
                let _ = flow.write().set_code(attempt.code.clone());
                let mut follow_up = None;
                if let Some(action) = run_code_step(flow, 0).await {
                    follow_up = Some(complete_verification(&action, auth).await.map_err(|e| e.to_string()));
                }
                *attempt.report.borrow_mut() = Some(Report {
                    reached_code,
                    follow_up,
                    state: flow.peek().state(),
                    authenticated: auth.peek().is_authenticated(),
                });
                done.set(true);
            })
        });

        rsx! { "{done}" }
    }

    #[tokio::test]
    async fn test_reset_returns_notice_without_session() {
        let _guard = lock_session().await;
        make_session_store().revoke().await.unwrap();

        let attempt = Attempt::new("fresh-pass", "123456");
        let mut dom = VirtualDom::new(ScriptedReset).with_root_context(attempt.clone());
        settle(&mut dom, Duration::from_secs(5), || attempt.report.borrow().is_some()).await;
        let report = attempt.report.borrow_mut().take().unwrap();

        assert_eq!(report.follow_up, Some(Ok(Some("Password reset successfully!"))));
        assert!(!report.authenticated);
        assert_eq!(make_session_store().current().await.unwrap(), Session::Anonymous);
    }
}
