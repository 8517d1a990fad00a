use dioxus::prelude::*;

use crate::hooks::lead_chat::{use_lead_chat, LeadChat};
use crate::models::{CallKind, ChatRole, Lead, LeadMessage};
use crate::state::use_app_state;
use crate::ui::stats::format_currency;

#[component]
pub fn LeadDetail(id: String) -> Element {
    let lead = use_app_state().read().find_lead(&id).cloned();
    let chat = use_lead_chat(lead.as_ref());
    let nav = navigator();

    let Some(lead) = lead else {
        return rsx! {
            div { class: "mx-auto max-w-md space-y-4 rounded-lg border border-slate-200 bg-white p-8 text-center shadow-sm",
                h2 { class: "text-lg font-semibold text-slate-900", "Lead not found" }
                p { class: "text-sm text-slate-500", "No lead with id {id} exists in this session." }
                button {
                    class: "rounded bg-slate-900 px-4 py-2 text-sm text-white hover:bg-slate-700",
                    onclick: move |_| nav.go_back(),
                    "Go Back"
                }
            }
        };
    };

    rsx! {
        div { class: "flex items-center justify-between",
            button {
                class: "text-xs text-slate-500 hover:text-slate-800",
                onclick: move |_| nav.go_back(),
                "← Back"
            }
        }
        div { class: "grid gap-6 lg:grid-cols-3",
            div { class: "space-y-6 lg:col-span-2",
                {profile_card(&lead)}
                {style_card(&lead)}
                {purchases_card(&lead)}
                {calls_card(&lead)}
            }
            ChatPanel { chat, name: lead.name.clone() }
        }
    }
}

fn profile_card(lead: &Lead) -> Element {
    let initials = lead.initials();
    let spent = format_currency(u64::from(lead.total_spent));
    let average = format_currency(u64::from(lead.average_order_value));

    rsx! {
        section { class: "space-y-4 rounded-lg border border-slate-200 bg-white p-4 shadow-sm",
            div { class: "flex items-center gap-4",
                span { class: "flex h-12 w-12 items-center justify-center rounded-full bg-slate-900 text-sm font-semibold text-white",
                    "{initials}"
                }
                div { class: "space-y-1",
                    h2 { class: "text-lg font-semibold text-slate-900", "{lead.name}" }
                    div { class: "flex flex-wrap gap-2 text-[11px]",
                        span { class: "rounded border px-2 py-0.5 {lead.status.badge_class()}", "{lead.status}" }
                        span { class: "rounded border border-slate-200 px-2 py-0.5 text-slate-600", "{lead.channel}" }
                        span { class: "text-slate-400", "{lead.id}" }
                    }
                }
            }
            dl { class: "grid gap-3 text-xs md:grid-cols-3",
                {detail("Email", &lead.email)}
                {detail("Phone", &lead.phone)}
                {detail("Location", &lead.location)}
                {detail("Last contact", &lead.last_contact)}
                {detail("Next recommendation", &lead.next_recommendation_date)}
                {detail("Engagement score", &lead.engagement_score.to_string())}
                {detail("Total spent", &spent)}
                {detail("Average order", &average)}
            }
            if !lead.notes.is_empty() {
                p { class: "rounded bg-slate-50 p-3 text-xs text-slate-600", "{lead.notes}" }
            }
        }
    }
}

fn detail(label: &str, value: &str) -> Element {
    rsx! {
        div {
            dt { class: "text-slate-400", "{label}" }
            dd { class: "text-slate-800", "{value}" }
        }
    }
}

fn chips(values: &[String]) -> Element {
    rsx! {
        div { class: "flex flex-wrap gap-1",
            for value in values.iter() {
                span { key: "{value}", class: "rounded-full bg-slate-100 px-2 py-0.5 text-[11px] text-slate-700", "{value}" }
            }
        }
    }
}

fn style_card(lead: &Lead) -> Element {
    let profile = &lead.style_profile;
    let range = format!(
        "{} – {}",
        format_currency(u64::from(profile.price_range.min)),
        format_currency(u64::from(profile.price_range.max))
    );

    rsx! {
        section { class: "space-y-3 rounded-lg border border-slate-200 bg-white p-4 shadow-sm text-xs",
            h3 { class: "text-sm font-semibold text-slate-800", "Style profile" }
            div { class: "grid gap-3 md:grid-cols-2",
                div { class: "space-y-1", p { class: "text-slate-400", "Colors" } {chips(&profile.preferred_colors)} }
                div { class: "space-y-1", p { class: "text-slate-400", "Styles" } {chips(&profile.preferred_styles)} }
                div { class: "space-y-1", p { class: "text-slate-400", "Brands" } {chips(&profile.favorite_brands)} }
                div { class: "space-y-1", p { class: "text-slate-400", "Occasions" } {chips(&profile.occasions)} }
            }
            p { class: "text-slate-600", "Size: {profile.size_profile} · Budget: {range}" }
        }
    }
}

fn purchases_card(lead: &Lead) -> Element {
    rsx! {
        section { class: "space-y-3 rounded-lg border border-slate-200 bg-white p-4 shadow-sm",
            h3 { class: "text-sm font-semibold text-slate-800", "Purchase history" }
            if lead.purchase_history.is_empty() {
                p { class: "text-xs italic text-slate-500", "No purchases yet" }
            } else {
                table { class: "w-full text-left text-xs",
                    thead { class: "text-slate-400",
                        tr {
                            th { class: "py-1", "Product" }
                            th { class: "py-1", "Size / Color" }
                            th { class: "py-1", "Date" }
                            th { class: "py-1", "Rating" }
                            th { class: "py-1 text-right", "Price" }
                        }
                    }
                    tbody {
                        for purchase in lead.purchase_history.iter() {
                            tr { key: "{purchase.id}", class: "border-t border-slate-100",
                                td { class: "py-1",
                                    p { class: "text-slate-800", "{purchase.product_name}" }
                                    p { class: "text-[11px] text-slate-400", "{purchase.category}" }
                                }
                                td { class: "py-1 text-slate-600", "{purchase.size} / {purchase.color}" }
                                td { class: "py-1 text-slate-600", "{purchase.purchase_date}" }
                                td { class: "py-1 text-amber-500",
                                    {purchase.rating.map(|stars| "★".repeat(usize::from(stars))).unwrap_or_else(|| "–".to_string())}
                                }
                                td { class: "py-1 text-right font-mono", {format_currency(u64::from(purchase.price))} }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn calls_card(lead: &Lead) -> Element {
    rsx! {
        section { class: "space-y-3 rounded-lg border border-slate-200 bg-white p-4 shadow-sm",
            h3 { class: "text-sm font-semibold text-slate-800", "Call records" }
            if lead.call_records.is_empty() {
                p { class: "text-xs italic text-slate-500", "No calls logged" }
            }
            ul { class: "space-y-2 text-xs",
                for record in lead.call_records.iter() {
                    li { key: "{record.id}", class: "rounded border border-slate-100 p-2",
                        div { class: "flex justify-between",
                            span { class: if record.kind == CallKind::Missed { "font-medium text-red-600" } else { "font-medium text-slate-800" },
                                {call_label(record.kind)}
                            }
                            span { class: "text-slate-400", "{record.duration} · {record.timestamp}" }
                        }
                        if let Some(notes) = record.notes.as_ref() {
                            p { class: "mt-1 text-slate-600", "{notes}" }
                        }
                    }
                }
            }
        }
    }
}

fn call_label(kind: CallKind) -> &'static str {
    match kind {
        CallKind::Incoming => "Incoming call",
        CallKind::Outgoing => "Outgoing call",
        CallKind::Missed => "Missed call",
    }
}

#[component]
fn ChatPanel(chat: LeadChat, name: String) -> Element {
    let mut draft = use_signal(String::new);
    let messages = chat.messages.read().clone();
    let typing = *chat.typing.read();

    let mut send = move || {
        if chat.send(&draft.read()) {
            draft.set(String::new());
        }
    };

    rsx! {
        section { class: "flex h-[560px] flex-col rounded-lg border border-slate-200 bg-white shadow-sm",
            header { class: "border-b border-slate-200 p-3",
                h3 { class: "text-sm font-semibold text-slate-800", "AI stylist chat" }
                p { class: "text-[11px] text-slate-500", "Demo conversation with {name}" }
            }
            div { class: "flex-1 space-y-2 overflow-y-auto p-3",
                for message in messages.iter() {
                    {chat_bubble(message)}
                }
                if typing {
                    p { class: "text-[11px] italic text-slate-400", "AI stylist is typing…" }
                }
            }
            form {
                class: "flex gap-2 border-t border-slate-200 p-3",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    send();
                },
                input {
                    class: "flex-1 rounded border border-slate-300 px-3 py-2 text-sm",
                    placeholder: "Type a message",
                    value: "{draft}",
                    oninput: move |evt| draft.set(evt.value()),
                }
                button {
                    class: "rounded bg-slate-900 px-3 py-2 text-xs text-white hover:bg-slate-700",
                    r#type: "submit",
                    "Send"
                }
            }
        }
    }
}

fn chat_bubble(message: &LeadMessage) -> Element {
    let (row, bubble) = match message.role {
        ChatRole::Assistant => ("flex justify-start", "bg-slate-100 text-slate-800"),
        ChatRole::Counterpart => ("flex justify-end", "bg-slate-900 text-white"),
    };

    rsx! {
        div { key: "{message.id}", class: "{row}",
            div { class: "max-w-[80%] space-y-1 rounded-lg px-3 py-2 text-xs {bubble}",
                p { "{message.text}" }
                if !message.product_suggestions.is_empty() {
                    div { class: "flex flex-wrap gap-1",
                        for product in message.product_suggestions.iter() {
                            span { key: "{product}", class: "rounded bg-white/20 px-1.5 py-0.5 text-[10px]", "🛍 {product}" }
                        }
                    }
                }
                p { class: "text-[10px] opacity-60", "{message.role.label()} · {message.timestamp}" }
            }
        }
    }
}
