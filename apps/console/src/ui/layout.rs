use dioxus::prelude::*;

use crate::hooks::session::use_session;
use crate::state::use_app_state;
use crate::ui::login::LoginForm;
use crate::Route;

/// Renders the login form in place of any protected view until the session is set.
#[component]
pub fn AuthGate() -> Element {
    let logged_in = use_app_state().read().logged_in;

    if !logged_in {
        return rsx! { LoginForm {} };
    }

    rsx! { Outlet::<Route> {} }
}

fn nav_items() -> [(Route, &'static str); 5] {
    [
        (Route::Home {}, "Overview"),
        (Route::Leads {}, "Leads"),
        (Route::Dashboard {}, "Dashboard"),
        (Route::Campaigns {}, "Campaigns"),
        (Route::Analytics {}, "Analytics"),
    ]
}

#[component]
pub fn Shell() -> Element {
    let session = use_session();
    let current: Route = use_route();

    rsx! {
        div { class: "flex min-h-screen bg-slate-50",
            aside { class: "flex w-56 flex-col justify-between border-r border-slate-200 bg-white p-4",
                div { class: "space-y-6",
                    div { class: "space-y-1",
                        h1 { class: "text-lg font-semibold text-slate-900", "Rikol AI" }
                        p { class: "text-[11px] text-slate-500", "Fashion retention CRM" }
                    }
                    nav { class: "flex flex-col gap-1",
                        for (route, label) in nav_items() {
                            Link {
                                key: "{label}",
                                class: if route == current {
                                    "rounded px-3 py-2 text-sm font-medium bg-slate-900 text-white"
                                } else {
                                    "rounded px-3 py-2 text-sm text-slate-600 hover:bg-slate-100"
                                },
                                to: route,
                                "{label}"
                            }
                        }
                    }
                }
                button {
                    class: "rounded border border-slate-200 px-3 py-2 text-xs text-slate-600 hover:bg-slate-100",
                    onclick: move |_| session.logout(),
                    "Log out"
                }
            }
            main { class: "flex-1 space-y-6 p-6",
                Outlet::<Route> {}
            }
        }
    }
}
