use dioxus::prelude::*;

use crate::auth::{use_auth, LogoutButton};

#[component]
pub fn Navbar() -> Element {
    let auth = use_auth();
    let username = auth().session.username().unwrap_or_default().to_string();

    rsx! {
        nav {
            class: "navbar",
            h1 { class: "navbar-brand", "LinkVault" }
            div {
                class: "navbar-user",
                span {
                    class: "navbar-welcome",
                    "Welcome, "
                    span { class: "navbar-username", "{username}" }
                }
                LogoutButton { class: "btn btn-secondary" }
            }
        }
    }
}
