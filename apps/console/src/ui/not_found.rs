use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div { class: "flex min-h-screen items-center justify-center bg-slate-50 p-6",
            div { class: "space-y-3 text-center",
                p { class: "text-5xl font-bold text-slate-300", "404" }
                h2 { class: "text-lg font-semibold text-slate-900", "Page not found" }
                p { class: "text-sm text-slate-500", "Nothing lives at {path}." }
                Link {
                    class: "inline-block rounded bg-slate-900 px-4 py-2 text-sm text-white hover:bg-slate-700",
                    to: Route::Home {},
                    "Return home"
                }
            }
        }
    }
}
