use dioxus::prelude::*;

/// Centered spinner with a caption.
#[component]
pub fn LoadingScreen(#[props(default = "Loading...".to_string())] message: String) -> Element {
    rsx! {
        div {
            class: "screen-center",
            div {
                class: "loading",
                div { class: "spinner" }
                p { class: "muted", "{message}" }
            }
        }
    }
}
