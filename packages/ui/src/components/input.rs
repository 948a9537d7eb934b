use dioxus::prelude::*;

/// Single-line text input styled for the dark theme.
#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default)] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] name: String,
    #[props(default)] placeholder: String,
    value: String,
    #[props(default)] required: bool,
    #[props(default)] disabled: bool,
    oninput: Option<EventHandler<FormEvent>>,
    onkeydown: Option<EventHandler<KeyboardEvent>>,
) -> Element {
    let input_type = r#type;

    rsx! {
        input {
            id: id,
            class: "input {class}",
            r#type: input_type,
            name: name,
            placeholder: placeholder,
            value: value,
            required: required,
            disabled: disabled,
            oninput: move |evt| {
                if let Some(handler) = oninput {
                    handler.call(evt);
                }
            },
            onkeydown: move |evt| {
                if let Some(handler) = onkeydown {
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
    #[props(default)] class: String,
    #[props(default)] placeholder: String,
    #[props(default = 3)] rows: u32,
    value: String,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    rsx! {
        textarea {
            id: id,
            class: "input textarea {class}",
            placeholder: placeholder,
            rows: "{rows}",
            value: value,
            oninput: move |evt| {
                if let Some(handler) = oninput {
                    handler.call(evt);
                }
            },
        }
    }
}
