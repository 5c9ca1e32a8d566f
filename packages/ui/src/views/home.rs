use dioxus::prelude::*;

use crate::components::Button;
use crate::icons::FaHeadset;
use crate::Icon;

/// Landing page.
#[component]
pub fn HomeView(on_get_started: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "page-center",
            div {
                class: "hero",
                Icon { icon: FaHeadset, width: 48, height: 48 }
                h1 { class: "hero__title", "Helpdesk" }
                p {
                    class: "hero__lead",
                    "Track customer requests from first report to resolution."
                }
                Button {
                    onclick: move |_| on_get_started.call(()),
                    "Get started"
                }
            }
        }
    }
}
