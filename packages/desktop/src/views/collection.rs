use dioxus::prelude::*;
use ui::views::{DashboardView, LoadingScreen};
use ui::{use_auth, SavedContentProvider};

use crate::Route;

/// The signed-in dashboard. Signed-out visitors are sent to `/login`.
#[component]
pub fn Collection() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    if auth().loading {
        return rsx! {
            LoadingScreen {}
        };
    }

    if !auth().is_authenticated() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! {
        SavedContentProvider {
            DashboardView {}
        }
    }
}
