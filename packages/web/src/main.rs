use dioxus::prelude::*;

use store::ClientConfig;
use ui::AuthProvider;
use views::{Collection, Login};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/collection")]
    Collection {},
}

fn main() {
    dioxus::launch(App);
}

/// API base URL: a build-time override, else the page's own origin.
fn api_base_url() -> String {
    if let Some(url) = option_env!("LINKVAULT_API_URL") {
        return url.to_string();
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
            return origin;
        }
    }

    ClientConfig::default().api.base_url
}

#[component]
fn App() -> Element {
    let config = use_hook(|| {
        let base_url = api_base_url();
        tracing::info!("Using API at {}", base_url);
        ClientConfig::new(base_url)
    });

    rsx! {
        document::Link { rel: "stylesheet", href: ui::LINKVAULT_CSS }

        AuthProvider {
            config: config,
            Router::<Route> {}
        }
    }
}

/// Send `/` to the collection or the login page once the session is known.
#[component]
fn Root() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();

    if auth().loading {
        return rsx! {
            ui::views::LoadingScreen {}
        };
    }

    if auth().is_authenticated() {
        nav.replace(Route::Collection {});
    } else {
        nav.replace(Route::Login {});
    }

    rsx! {}
}
