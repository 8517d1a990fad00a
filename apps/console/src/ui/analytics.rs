use dioxus::prelude::*;

use crate::fixtures::campaigns::{analytics_kpis, recovered_revenue, revenue_by_channel};
use crate::models::RevenuePoint;
use crate::ui::dashboard::bar_width;
use crate::ui::stats::{format_currency, StatCard};

#[component]
pub fn Analytics() -> Element {
    let kpis = analytics_kpis();

    rsx! {
        header { class: "space-y-1",
            h2 { class: "text-xl font-semibold text-slate-900", "Analytics" }
            p { class: "text-sm text-slate-500", "Revenue the AI brought back, by week and by channel." }
        }
        div { class: "grid gap-4 md:grid-cols-4",
            for kpi in kpis {
                StatCard { key: "{kpi.label}", label: kpi.label.clone(), value: kpi.value.clone(), hint: kpi.trend.clone() }
            }
        }
        div { class: "grid gap-6 lg:grid-cols-2",
            {revenue_bars("Recovered revenue per week", &recovered_revenue())}
            {revenue_bars("Revenue per channel", &revenue_by_channel())}
        }
    }
}

fn revenue_bars(title: &str, points: &[RevenuePoint]) -> Element {
    let peak = points.iter().map(|point| point.amount).max().unwrap_or(0);
    let total: u64 = points.iter().map(|point| u64::from(point.amount)).sum();

    rsx! {
        section { class: "space-y-3 rounded-lg border border-slate-200 bg-white p-4 shadow-sm",
            div { class: "flex justify-between",
                h3 { class: "text-sm font-semibold text-slate-800", "{title}" }
                span { class: "text-xs text-slate-500", {format_currency(total)} }
            }
            ul { class: "space-y-2 text-xs",
                for point in points.iter() {
                    li { key: "{point.label}", class: "flex items-center gap-3",
                        span { class: "w-20 text-slate-500", "{point.label}" }
                        div { class: "h-2 flex-1 rounded bg-slate-100",
                            div { class: "h-2 rounded bg-emerald-500", width: "{bar_width(point.amount, peak)}%" }
                        }
                        span { class: "w-16 text-right font-mono text-slate-700", {format_currency(u64::from(point.amount))} }
                    }
                }
            }
        }
    }
}
