use dioxus::prelude::*;

use store::HelpdeskConfig;
use ui::components::ToastProvider;
use ui::AuthProvider;
use views::{Dashboard, Home, Login, NewTicket, Password, Protected, Signup};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[route("/password")]
    Password {},
    #[layout(Protected)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/newticket")]
        NewTicket {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG_TOML: &str = include_str!("../helpdesk.toml");

fn main() {
    let (config, parse_error) = match HelpdeskConfig::from_toml(CONFIG_TOML) {
        Ok(config) => (config, None),
        Err(e) => (HelpdeskConfig::default(), Some(e)),
    };

    let level = config
        .logging
        .level
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::INFO);
    let logger = dioxus::logger::init(level);
    #[cfg(target_arch = "wasm32")]
    {
        if let Err(e) = &logger {
            web_sys::console::warn_1(&format!("logger already initialised: {e}").into());
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    drop(logger);
    if let Some(e) = parse_error {
        tracing::warn!("invalid {}: {e}; using defaults", HelpdeskConfig::filename());
    }
    tracing::info!(?level, "starting helpdesk");

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::HELPDESK_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            ToastProvider {
                Router::<Route> {}
            }
        }
    }
}
