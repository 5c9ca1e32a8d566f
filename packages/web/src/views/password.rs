use dioxus::prelude::*;
use ui::views::PasswordResetView;

use crate::Route;

#[component]
pub fn Password() -> Element {
    let nav = use_navigator();
    rsx! {
        PasswordResetView {
            on_complete: move |_| {
                nav.replace(Route::Login {});
            },
            on_login: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}
