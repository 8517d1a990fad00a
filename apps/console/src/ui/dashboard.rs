use dioxus::prelude::*;

use crate::fixtures::campaigns::{channel_performance, weekly_engagement};
use crate::models::LeadStatus;
use crate::state::{use_app_state, LeadStats};
use crate::ui::stats::{format_currency, StatCard};

/// Bar width in percent of the largest value, at least 2 so tiny values stay visible.
pub fn bar_width(value: u32, max: u32) -> u32 {
    if max == 0 {
        return 0;
    }
    ((u64::from(value) * 100 / u64::from(max)) as u32).max(2)
}

#[component]
pub fn Dashboard() -> Element {
    let app_state = use_app_state();
    let snapshot = app_state.read();
    let stats = LeadStats::from_leads(&snapshot.leads);
    let engaged = snapshot
        .leads
        .iter()
        .filter(|lead| lead.status == LeadStatus::Engaged)
        .count();
    drop(snapshot);

    let weekly = weekly_engagement();
    let peak = weekly.iter().map(|point| point.engaged).max().unwrap_or(0);
    let channels = channel_performance();

    rsx! {
        header { class: "space-y-1",
            h2 { class: "text-xl font-semibold text-slate-900", "Dashboard" }
            p { class: "text-sm text-slate-500", "Retention activity across every channel." }
        }
        div { class: "grid gap-4 md:grid-cols-4",
            StatCard { label: "Leads", value: stats.total.to_string() }
            StatCard { label: "Engaged", value: engaged.to_string() }
            StatCard { label: "VIP", value: stats.vip.to_string() }
            StatCard { label: "Revenue", value: format_currency(stats.revenue) }
        }
        div { class: "grid gap-6 lg:grid-cols-2",
            section { class: "space-y-3 rounded-lg border border-slate-200 bg-white p-4 shadow-sm",
                h3 { class: "text-sm font-semibold text-slate-800", "Weekly engagement" }
                ul { class: "space-y-2 text-xs",
                    for point in weekly.iter() {
                        li { key: "{point.day}", class: "flex items-center gap-3",
                            span { class: "w-10 text-slate-500", "{point.day}" }
                            div { class: "h-2 flex-1 rounded bg-slate-100",
                                div { class: "h-2 rounded bg-indigo-500", width: "{bar_width(point.engaged, peak)}%" }
                            }
                            span { class: "w-24 text-right text-slate-600", "{point.engaged} · {point.rate:.1}%" }
                        }
                    }
                }
            }
            section { class: "space-y-3 rounded-lg border border-slate-200 bg-white p-4 shadow-sm",
                h3 { class: "text-sm font-semibold text-slate-800", "Channel performance" }
                table { class: "w-full text-left text-xs",
                    thead { class: "text-slate-400",
                        tr {
                            th { class: "py-1", "Channel" }
                            th { class: "py-1 text-right", "Sent" }
                            th { class: "py-1 text-right", "Open" }
                            th { class: "py-1 text-right", "Click" }
                            th { class: "py-1 text-right", "Converted" }
                        }
                    }
                    tbody {
                        for row in channels.iter() {
                            tr { key: "{row.channel}", class: "border-t border-slate-100",
                                td { class: "py-1 text-slate-800", "{row.channel}" }
                                td { class: "py-1 text-right", "{row.stats.sent}" }
                                td { class: "py-1 text-right", "{row.stats.open_rate()}%" }
                                td { class: "py-1 text-right", "{row.stats.click_rate()}%" }
                                td { class: "py-1 text-right", "{row.stats.conversion_rate()}%" }
                            }
                        }
                    }
                }
            }
        }
    }
}
