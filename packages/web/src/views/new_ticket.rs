use dioxus::prelude::*;
use ui::views::NewTicketView;

use crate::Route;

#[component]
pub fn NewTicket() -> Element {
    let nav = use_navigator();
    rsx! {
        NewTicketView {
            on_created: move |_| {
                nav.push(Route::Dashboard {});
            },
            on_cancel: move |_| {
                nav.push(Route::Dashboard {});
            },
        }
    }
}
