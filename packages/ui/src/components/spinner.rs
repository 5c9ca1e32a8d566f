use dioxus::prelude::*;

#[component]
pub fn Spinner(#[props(default)] label: String) -> Element {
    rsx! {
        div {
            class: "spinner",
            role: "status",
            div { class: "spinner__wheel" }
            if !label.is_empty() {
                span { class: "spinner__label", "{label}" }
            }
        }
    }
}
