use dioxus::prelude::*;

use crate::models::{Channel, Lead, LeadStatus};
use crate::state::{selection_query, use_app_actions, use_app_state, AppActions, SearchScope};
use crate::ui::stats::format_currency;
use crate::Route;

const ALL: &str = "all";

#[component]
pub fn LeadsTable(scope: SearchScope) -> Element {
    let actions = use_app_actions();
    let nav = navigator();
    let app_state = use_app_state();
    let snapshot = app_state.read();
    let visible: Vec<Lead> = snapshot.visible_leads(scope).into_iter().cloned().collect();
    let directory = snapshot.directory.clone();
    let query = selection_query(&snapshot.leads, &directory.selected);
    drop(snapshot);

    let visible_ids: Vec<String> = visible.iter().map(|lead| lead.id.clone()).collect();
    let all_selected =
        !visible_ids.is_empty() && visible_ids.iter().all(|id| directory.selected.contains(id));
    let selected_count = directory.selected.len();
    let can_start = query.is_some();
    let placeholder = match scope {
        SearchScope::Name => "Search by name",
        SearchScope::NameOrEmail => "Search by name or email",
    };
    let channel_value = directory
        .filters
        .channel
        .map(|channel| channel.label())
        .unwrap_or(ALL);
    let status_value = directory
        .filters
        .status
        .map(|status| status.label())
        .unwrap_or(ALL);

    rsx! {
        section { class: "space-y-4 rounded-lg border border-slate-200 bg-white p-4 shadow-sm",
            div { class: "flex flex-wrap items-center gap-3",
                input {
                    class: "min-w-[220px] flex-1 rounded border border-slate-300 px-3 py-2 text-sm",
                    r#type: "search",
                    placeholder,
                    value: "{directory.search}",
                    oninput: move |evt| actions.set_search(evt.value()),
                }
                select {
                    class: "rounded border border-slate-300 px-2 py-2 text-sm",
                    value: channel_value,
                    onchange: move |evt| actions.set_channel_filter(Channel::parse(&evt.value())),
                    option { value: ALL, "All channels" }
                    for channel in Channel::ALL {
                        option { key: "{channel.label()}", value: channel.label(), "{channel.label()}" }
                    }
                }
                select {
                    class: "rounded border border-slate-300 px-2 py-2 text-sm",
                    value: status_value,
                    onchange: move |evt| actions.set_status_filter(LeadStatus::parse(&evt.value())),
                    option { value: ALL, "All statuses" }
                    for status in LeadStatus::ALL {
                        option { key: "{status.label()}", value: status.label(), "{status.label()}" }
                    }
                }
                button {
                    class: "rounded border border-slate-300 px-3 py-2 text-xs text-slate-600 hover:bg-slate-100",
                    onclick: move |_| actions.reset_leads(),
                    "Reset data"
                }
                button {
                    class: "rounded bg-slate-900 px-3 py-2 text-xs font-medium text-white hover:bg-slate-700 disabled:opacity-40",
                    disabled: !can_start,
                    onclick: move |_| {
                        if let Some(leads) = query.clone() {
                            nav.push(Route::Simulation { leads });
                        }
                    },
                    "Start AI campaign ({selected_count})"
                }
            }

            if visible.is_empty() {
                p { class: "py-8 text-center text-xs italic text-slate-500", "No leads match the current filters" }
            } else {
                table { class: "w-full text-left text-sm",
                    thead { class: "border-b border-slate-200 text-xs uppercase text-slate-500",
                        tr {
                            th { class: "w-8 py-2",
                                input {
                                    r#type: "checkbox",
                                    checked: all_selected,
                                    onchange: move |_| actions.toggle_all(&visible_ids),
                                }
                            }
                            th { class: "py-2", "Lead" }
                            th { class: "py-2", "Channel" }
                            th { class: "py-2", "Status" }
                            th { class: "py-2", "Engagement" }
                            th { class: "py-2 text-right", "Spent" }
                        }
                    }
                    tbody {
                        for lead in visible.iter() {
                            {lead_row(lead, directory.selected.contains(&lead.id), actions)}
                        }
                    }
                }
            }
        }
    }
}

fn lead_row(lead: &Lead, selected: bool, actions: AppActions) -> Element {
    let lead_id = lead.id.clone();
    let initials = lead.initials();
    let score = lead.engagement_score.min(100);
    let spent = format_currency(u64::from(lead.total_spent));

    rsx! {
        tr { key: "{lead.id}", class: "border-b border-slate-100 hover:bg-slate-50",
            td { class: "py-2",
                input {
                    r#type: "checkbox",
                    checked: selected,
                    onchange: move |_| actions.toggle_lead(&lead_id),
                }
            }
            td { class: "py-2",
                div { class: "flex items-center gap-3",
                    span { class: "flex h-8 w-8 items-center justify-center rounded-full bg-slate-200 text-xs font-semibold text-slate-700",
                        "{initials}"
                    }
                    div {
                        Link {
                            class: "font-medium text-slate-900 hover:underline",
                            to: Route::LeadDetail { id: lead.id.clone() },
                            "{lead.name}"
                        }
                        p { class: "text-[11px] text-slate-500", "{lead.email}" }
                    }
                }
            }
            td { class: "py-2 text-slate-600", "{lead.channel}" }
            td { class: "py-2",
                span { class: "rounded border px-2 py-0.5 text-[11px] {lead.status.badge_class()}",
                    "{lead.status}"
                }
            }
            td { class: "py-2",
                div { class: "flex items-center gap-2",
                    div { class: "h-1.5 w-24 rounded bg-slate-200",
                        div { class: "h-1.5 rounded bg-emerald-500", width: "{score}%" }
                    }
                    span { class: "text-[11px] text-slate-500", "{score}" }
                }
            }
            td { class: "py-2 text-right font-mono text-slate-700", "{spent}" }
        }
    }
}
