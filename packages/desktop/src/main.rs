use dioxus::prelude::*;
use views::{Collection, Login};

mod settings;
mod views;

use settings::Settings;

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
    let settings = Settings::new().unwrap_or_else(|e| {
        eprintln!("Ignoring invalid settings: {e}");
        Settings::default()
    });

    if let Err(e) = dioxus::logger::init(settings.log_level()) {
        eprintln!("Failed to initialise logging: {e}");
    }
    tracing::info!("Using API at {}", settings.api.base_url);

    let config = settings.client_config();
    dioxus::LaunchBuilder::new()
        .with_context(config)
        .launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context::<store::ClientConfig>();

    rsx! {
        document::Link { rel: "stylesheet", href: ui::LINKVAULT_CSS }
        ui::AuthProvider {
            config: config,
            Router::<Route> {}
        }
    }
}

#[component]
fn Root() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();

    // Redirect based on auth state
    if !auth().loading {
        if auth().is_authenticated() {
            nav.replace(Route::Collection {});
        } else {
            nav.replace(Route::Login {});
        }
    }

    rsx! {
        ui::views::LoadingScreen {}
    }
}
