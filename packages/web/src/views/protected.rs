use dioxus::prelude::*;
use ui::RouteGuard;

use crate::Route;

/// Layout for every page that needs a session.
#[component]
pub fn Protected() -> Element {
    rsx! {
        RouteGuard {
            login_path: (Route::Login {}).to_string(),
            Outlet::<Route> {}
        }
    }
}
