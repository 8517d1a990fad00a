#![allow(non_snake_case)]

mod config;
mod fixtures;
mod hooks;
mod models;
mod session;
mod simulation;
mod state;
mod ui;

use config::AppConfig;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;
use session::Session;
use state::AppState;
use tracing::info;
use ui::analytics::Analytics;
use ui::campaigns::Campaigns;
use ui::dashboard::Dashboard;
use ui::home::Home;
use ui::layout::{AuthGate, Shell};
use ui::lead_detail::LeadDetail;
use ui::leads::Leads;
use ui::not_found::NotFound;
use ui::notifications::NotificationCenter;
use ui::simulation::Simulation;

pub(crate) static APP_CONFIG: OnceCell<AppConfig> = OnceCell::new();

fn main() {
    console_error_panic_hook::set_once();
    init_logging();
    bootstrap_config();
    LaunchBuilder::web()
        .with_cfg(dioxus_web::Config::new())
        .launch(App);
}

fn init_logging() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let _ = dioxus_logger::init(tracing::Level::INFO);
    });
}

fn bootstrap_config() {
    let config = AppConfig::from_env();
    info!(
        prod = config.is_prod(),
        pace_percent = config.pace_percent,
        follow_up_probability = config.pacing.follow_up_probability,
        "console configured"
    );
    let _ = APP_CONFIG.set(config);
}

fn session_key() -> String {
    APP_CONFIG
        .get()
        .map(|config| config.session_key.clone())
        .unwrap_or_else(|| session::SESSION_KEY.to_string())
}

#[component]
fn App() -> Element {
    let session = use_context_provider(|| Session::browser(session_key()));
    let app_state = use_signal(|| AppState::with_login(session.is_logged_in()));

    use_context_provider(|| app_state);

    rsx! {
        div { class: "relative",
            Router::<Route> {}
            NotificationCenter {}
        }
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub(crate) enum Route {
    #[layout(AuthGate)]
        #[layout(Shell)]
            #[route("/")]
            Home {},
            #[route("/leads")]
            Leads {},
            #[route("/leads/:id")]
            LeadDetail { id: String },
            #[route("/dashboard")]
            Dashboard {},
            #[route("/campaigns")]
            Campaigns {},
            #[route("/analytics")]
            Analytics {},
        #[end_layout]
        #[route("/simulation?:leads")]
        Simulation { leads: String },
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
