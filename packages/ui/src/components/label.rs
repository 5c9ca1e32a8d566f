use dioxus::prelude::*;
use dioxus_primitives::label;

#[component]
pub fn Label(
    #[props(default)] html_for: String,
    #[props(default)] class: String,
    /// Appends a red asterisk.
    #[props(default)]
    required: bool,
    children: Element,
) -> Element {
    rsx! {
        label::Label {
            class: "label {class}",
            html_for,
            {children}
            if required {
                span { class: "label__required", " *" }
            }
        }
    }
}
