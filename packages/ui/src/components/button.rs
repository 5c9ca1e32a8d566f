use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Destructive,
    Ghost,
    Link,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn--primary",
            ButtonVariant::Secondary => "btn btn--secondary",
            ButtonVariant::Outline => "btn btn--outline",
            ButtonVariant::Destructive => "btn btn--destructive",
            ButtonVariant::Ghost => "btn btn--ghost",
            ButtonVariant::Link => "btn btn--link",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    /// `button`, `submit` or `reset`.
    #[props(default = "button".to_string())]
    r#type: String,
    #[props(default)] class: String,
    #[props(default)] disabled: bool,
    #[props(default)] title: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let kind = r#type;
    rsx! {
        button {
            class: "{variant.class()} {class}",
            r#type: kind,
            disabled,
            title,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
