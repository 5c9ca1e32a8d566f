use dioxus::prelude::*;
use store::{SignupForm, VerificationFlow};

use super::auth_card::{AuthCard, CodeStep, FlowErrorBanner};
use crate::components::{use_toast, Button, ButtonVariant, Input, Label, ToastOptions};
use crate::flow::{complete_verification, run_code_step, run_credential_step};
use crate::{use_auth, use_config};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SignupField {
    FullName,
    Company,
    ProjectDomain,
    Email,
    ContactNumber,
    Password,
    ConfirmPassword,
}

impl SignupField {
    const ALL: [SignupField; 7] = [
        SignupField::FullName,
        SignupField::Company,
        SignupField::ProjectDomain,
        SignupField::Email,
        SignupField::ContactNumber,
        SignupField::Password,
        SignupField::ConfirmPassword,
    ];

    fn id(self) -> &'static str {
        match self {
            SignupField::FullName => "full-name",
            SignupField::Company => "company",
            SignupField::ProjectDomain => "project-domain",
            SignupField::Email => "email",
            SignupField::ContactNumber => "contact-number",
            SignupField::Password => "password",
            SignupField::ConfirmPassword => "confirm-password",
        }
    }

    fn label(self) -> &'static str {
        match self {
            SignupField::FullName => "Full name",
            SignupField::Company => "Company",
            SignupField::ProjectDomain => "Project name/domain",
            SignupField::Email => "Email",
            SignupField::ContactNumber => "Contact number",
            SignupField::Password => "Password",
            SignupField::ConfirmPassword => "Confirm password",
        }
    }

    fn input_type(self) -> &'static str {
        match self {
            SignupField::Email => "email",
            SignupField::ContactNumber => "tel",
            SignupField::Password | SignupField::ConfirmPassword => "password",
            _ => "text",
        }
    }

    fn value(self, form: &SignupForm) -> &str {
        match self {
            SignupField::FullName => &form.full_name,
            SignupField::Company => &form.company,
            SignupField::ProjectDomain => &form.project_domain,
            SignupField::Email => &form.email,
            SignupField::ContactNumber => &form.contact_number,
            SignupField::Password => &form.password,
            SignupField::ConfirmPassword => &form.confirm_password,
        }
    }

    fn value_mut(self, form: &mut SignupForm) -> &mut String {
        match self {
            SignupField::FullName => &mut form.full_name,
            SignupField::Company => &mut form.company,
            SignupField::ProjectDomain => &mut form.project_domain,
            SignupField::Email => &mut form.email,
            SignupField::ContactNumber => &mut form.contact_number,
            SignupField::Password => &mut form.password,
            SignupField::ConfirmPassword => &mut form.confirm_password,
        }
    }
}

/// Account registration followed by a one-time code.
#[component]
pub fn SignupView(
    /// Called after the account is confirmed. Navigate to the login page here.
    on_complete: EventHandler<()>,
    on_login: EventHandler<()>,
) -> Element {
    let config = use_config();
    let latency = config.verification.latency_ms;
    let policy = config.policy();
    let mut flow = use_signal(move || VerificationFlow::new(SignupForm::default(), policy));
    let auth = use_auth();
    let toast_api = use_toast();

    let handle_signup = move |evt: FormEvent| {
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
        format!("Confirm {} with the code we sent", current.credentials().email)
    } else {
        "Set up access to the helpdesk".to_string()
    };

    rsx! {
        AuthCard {
            title: "Create an account",
            subtitle,
            if let Some(error) = current.error() {
                FlowErrorBanner { error: error.clone() }
            }
            if current.shows_code_step() {
                CodeStep {
                    code: current.code().to_string(),
                    pending,
                    hint: "Check your inbox for the 6-digit code.",
                    submit_label: "Create account",
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
                    onsubmit: handle_signup,
                    for field in SignupField::ALL {
                        div {
                            key: "{field.id()}",
                            class: "form__field",
                            Label { html_for: "{field.id()}", required: true, "{field.label()}" }
                            Input {
                                id: "{field.id()}",
                                r#type: "{field.input_type()}",
                                value: field.value(current.credentials()).to_string(),
                                disabled: pending,
                                oninput: move |evt: FormEvent| {
                                    let _ = flow
                                        .write()
                                        .edit_credentials(|c| *field.value_mut(c) = evt.value());
                                },
                            }
                        }
                    }
                    Button {
                        r#type: "submit",
                        class: "btn--block",
                        disabled: pending,
                        if pending { "Submitting..." } else { "Sign up" }
                    }
                }
                div {
                    class: "auth-card__links",
                    "Already have an account? "
                    Button {
                        variant: ButtonVariant::Link,
                        onclick: move |_| on_login.call(()),
                        "Sign in"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_field_maps_to_its_own_slot() {
        let mut form = SignupForm::default();
        for field in SignupField::ALL {
            *field.value_mut(&mut form) = field.id().to_string();
        }
        for field in SignupField::ALL {
            assert_eq!(field.value(&form), field.id());
        }
        assert_eq!(form.confirm_password, "confirm-password");
    }
}
