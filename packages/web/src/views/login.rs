//! Login page view.

use dioxus::prelude::*;
use ui::use_auth;
use ui::views::LoginView;

use crate::Route;

#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    // If already logged in, go straight to the dashboard
    use_effect(move || {
        if auth().is_authenticated() {
            nav.replace(Route::Dashboard {});
        }
    });

    rsx! {
        LoginView {
            on_authenticated: move |_| {
                nav.replace(Route::Dashboard {});
            },
            on_forgot_password: move |_| {
                nav.push(Route::Password {});
            },
            on_signup: move |_| {
                nav.push(Route::Signup {});
            },
        }
    }
}
