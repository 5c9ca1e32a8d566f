use dioxus::prelude::*;
use store::{LoginCredentials, VerificationFlow};

use super::auth_card::{AuthCard, CodeStep, FlowErrorBanner};
use crate::components::{use_toast, Button, ButtonVariant, Input, Label, ToastOptions};
use crate::flow::{complete_verification, run_code_step, run_credential_step};
use crate::{use_auth, use_config};

/// Email + password login followed by a one-time code.
#[component]
pub fn LoginView(
    /// Called once the session is issued.
    on_authenticated: EventHandler<()>,
    on_forgot_password: EventHandler<()>,
    on_signup: EventHandler<()>,
) -> Element {
    let config = use_config();
    let latency = config.verification.latency_ms;
    let policy = config.policy();
    let mut flow = use_signal(move || VerificationFlow::new(LoginCredentials::default(), policy));
    let auth = use_auth();
    let toast_api = use_toast();

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            run_credential_step(flow, latency).await;
        });
    };

    let handle_code = move |_| {
        spawn(async move {
            let Some(action) = run_code_step(flow, latency).await else {
                return;
            };
            match complete_verification(&action, auth).await {
                Ok(notice) => {
                    if let Some(notice) = notice {
                        toast_api.success(notice.to_string(), ToastOptions::new());
                    }
                    on_authenticated.call(());
                }
                Err(e) => {
                    tracing::error!("Failed to store session: {e}");
                    toast_api.error(format!("Could not sign in: {e}"), ToastOptions::new());
                }
            }
        });
    };

    let current = flow();
    let pending = current.is_pending();
    let subtitle = if current.shows_code_step() {
        format!("Enter the code sent to {}", current.credentials().email)
    } else {
        "Welcome back to the helpdesk".to_string()
    };

    rsx! {
        AuthCard {
            title: "Sign in",
            subtitle,
            if let Some(error) = current.error() {
                FlowErrorBanner {
                    error: error.clone(),
                    on_reset: move |_| on_forgot_password.call(()),
                }
            }
            if current.shows_code_step() {
                CodeStep {
                    code: current.code().to_string(),
                    pending,
                    hint: "Check your inbox for the 6-digit code.",
                    on_code: move |code: String| {
                        let _ = flow.write().set_code(code);
                    },
                    on_submit: handle_code,
                    on_back: move |_| {
                        let _ = flow.write().back();
                    },
                }
            } else {
                form {
                    class: "form",
                    onsubmit: handle_login,
                    div {
                        class: "form__field",
                        Label { html_for: "email", required: true, "Email" }
                        Input {
                            id: "email",
                            r#type: "email",
                            placeholder: "you@company.com",
                            value: current.credentials().email.clone(),
                            disabled: pending,
                            oninput: move |evt: FormEvent| {
                                let _ = flow.write().edit_credentials(|c| c.email = evt.value());
                            },
                        }
                    }
                    div {
                        class: "form__field",
                        Label { html_for: "password", required: true, "Password" }
                        Input {
                            id: "password",
                            r#type: "password",
                            value: current.credentials().password.clone(),
                            disabled: pending,
                            oninput: move |evt: FormEvent| {
                                let _ = flow.write().edit_credentials(|c| c.password = evt.value());
                            },
                        }
                    }
                    Button {
                        r#type: "submit",
                        class: "btn--block",
                        disabled: pending,
                        if pending { "Signing in..." } else { "Sign in" }
                    }
                }
                div {
                    class: "auth-card__links",
                    Button {
                        variant: ButtonVariant::Link,
                        onclick: move |_| on_forgot_password.call(()),
                        "Forgot password?"
                    }
                    Button {
                        variant: ButtonVariant::Link,
                        onclick: move |_| on_signup.call(()),
                        "Create an account"
                    }
                }
            }
        }
    }
}
