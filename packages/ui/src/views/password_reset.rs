use dioxus::prelude::*;
use store::{PasswordReset, VerificationFlow};

use super::auth_card::{AuthCard, CodeStep, FlowErrorBanner};
use crate::components::{use_toast, Button, ButtonVariant, Input, Label, ToastOptions};
use crate::flow::{complete_verification, run_code_step, run_credential_step};
use crate::{use_auth, use_config};

/// Request a code for an email, then set a new password alongside the code.
#[component]
pub fn PasswordResetView(on_complete: EventHandler<()>, on_login: EventHandler<()>) -> Element {
    let config = use_config();
    let latency = config.verification.latency_ms;
    let policy = config.policy();
    let mut flow = use_signal(move || VerificationFlow::new(PasswordReset::default(), policy));
    let auth = use_auth();
    let toast_api = use_toast();

    let handle_request = move |evt: FormEvent| {
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
                    on_complete.call(());
                }
                Err(e) => toast_api.error(e.to_string(), ToastOptions::new()),
            }
        });
    };

    let current = flow();
    let pending = current.is_pending();
    let subtitle = if current.shows_code_step() {
        format!("Choose a new password for {}", current.credentials().email)
    } else {
        "We will email you a verification code".to_string()
    };

    rsx! {
        AuthCard {
            title: "Reset password",
            subtitle,
            if let Some(error) = current.error() {
                FlowErrorBanner { error: error.clone() }
            }
            if current.shows_code_step() {
                CodeStep {
                    code: current.code().to_string(),
                    pending,
                    hint: "Check your inbox for the 6-digit code.",
                    submit_label: "Reset password",
                    on_code: move |code: String| {
                        let _ = flow.write().set_code(code);
                    },
                    on_submit: handle_code,
                    on_back: move |_| {
                        let _ = flow.write().back();
                    },
                    div {
                        class: "form__field",
                        Label { html_for: "new-password", required: true, "New password" }
                        Input {
                            id: "new-password",
                            r#type: "password",
                            value: current.credentials().new_password.clone(),
                            disabled: pending,
                            oninput: move |evt: FormEvent| {
                                let _ = flow.write().edit_credentials(|c| c.new_password = evt.value());
                            },
                        }
                    }
                }
            } else {
                form {
                    class: "form",
                    onsubmit: handle_request,
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
                    Button {
                        r#type: "submit",
                        class: "btn--block",
                        disabled: pending,
                        if pending { "Sending code..." } else { "Send code" }
                    }
                }
                div {
                    class: "auth-card__links",
                    Button {
                        variant: ButtonVariant::Link,
                        onclick: move |_| on_login.call(()),
                        "Back to sign in"
                    }
                }
            }
        }
    }
}
