use dioxus::prelude::*;
use tracing::error;

use crate::hooks::session::use_session;
use crate::session::LoginError;
use crate::state::use_app_actions;

#[component]
pub fn LoginForm() -> Element {
    let session = use_session();
    let actions = use_app_actions();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut failure = use_signal(|| Option::<String>::None);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        match session.login(&username.read(), &password.read()) {
            Ok(()) => failure.set(None),
            Err(LoginError::Session(err)) => {
                error!(error = %err, "could not persist login");
                actions.notify_error("Session storage failed", err.to_string());
            }
            Err(err) => failure.set(Some(err.to_string())),
        }
    };

    rsx! {
        div { class: "flex min-h-screen items-center justify-center bg-slate-100 px-4",
            form {
                class: "w-full max-w-sm space-y-4 rounded-xl border border-slate-200 bg-white p-6 shadow-sm",
                onsubmit: submit,
                header { class: "space-y-1 text-center",
                    h1 { class: "text-xl font-semibold text-slate-900", "Rikol AI" }
                    p { class: "text-xs text-slate-500", "AI fashion retention console" }
                }
                label { class: "block space-y-1 text-xs text-slate-600",
                    span { "Username" }
                    input {
                        class: "w-full rounded border border-slate-300 px-3 py-2 text-sm",
                        r#type: "text",
                        autocomplete: "username",
                        value: "{username}",
                        oninput: move |evt| username.set(evt.value()),
                    }
                }
                label { class: "block space-y-1 text-xs text-slate-600",
                    span { "Password" }
                    input {
                        class: "w-full rounded border border-slate-300 px-3 py-2 text-sm",
                        r#type: "password",
                        autocomplete: "current-password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                }
                if let Some(message) = failure() {
                    p { class: "rounded bg-red-50 px-3 py-2 text-xs text-red-600", "{message}" }
                }
                button {
                    class: "w-full rounded bg-slate-900 px-3 py-2 text-sm font-medium text-white hover:bg-slate-700",
                    r#type: "submit",
                    "Sign in"
                }
                p { class: "text-center text-[11px] text-slate-400", "Demo account: admin / admin" }
            }
        }
    }
}
