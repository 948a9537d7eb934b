//! Login / registration page.

use dioxus::prelude::*;
use ui::views::LoadingScreen;
use ui::{use_auth, AuthForm};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    if auth().loading {
        return rsx! {
            LoadingScreen {}
        };
    }

    // Already signed in (or just signed in): go to the collection
    if auth().is_authenticated() {
        nav.replace(Route::Collection {});
        return rsx! {};
    }

    rsx! {
        AuthForm {}
    }
}
