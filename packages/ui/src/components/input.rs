use dioxus::prelude::*;

/// Single-line text input.
#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] name: String,
    #[props(default)] placeholder: String,
    #[props(default)] value: String,
    #[props(default)] class: String,
    #[props(default)] disabled: bool,
    #[props(default)] required: bool,
    maxlength: Option<usize>,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    let kind = r#type;
    rsx! {
        input {
            class: "input {class}",
            id,
            name,
            r#type: kind,
            placeholder,
            value,
            disabled,
            required,
            maxlength: maxlength.map(|n| n.to_string()),
            oninput: move |evt| {
                if let Some(handler) = &oninput {
                    handler.call(evt);
                }
            },
        }
    }
}

/// Multi-line text input.
#[component]
pub fn Textarea(
    #[props(default)] id: String,
    #[props(default)] placeholder: String,
    #[props(default)] value: String,
    #[props(default)] class: String,
    #[props(default = 5)] rows: u32,
    #[props(default)] disabled: bool,
    #[props(default)] required: bool,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    rsx! {
        textarea {
            class: "input input--multiline {class}",
            id,
            placeholder,
            value,
            rows: "{rows}",
            disabled,
            required,
            oninput: move |evt| {
                if let Some(handler) = &oninput {
                    handler.call(evt);
                }
            },
        }
    }
}
