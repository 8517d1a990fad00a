use dioxus::prelude::*;

use crate::state::{use_app_state, LeadStats};

#[component]
pub fn StatCard(
    #[props(into)] label: String,
    #[props(into)] value: String,
    hint: Option<String>,
) -> Element {
    rsx! {
        div { class: "rounded-lg border border-slate-200 bg-white p-4 shadow-sm",
            p { class: "text-xs text-slate-500", "{label}" }
            p { class: "mt-1 text-2xl font-semibold text-slate-900", "{value}" }
            if let Some(hint) = hint {
                p { class: "mt-1 text-[11px] text-slate-400", "{hint}" }
            }
        }
    }
}

#[component]
pub fn LeadStatsCards() -> Element {
    let stats = LeadStats::from_leads(&use_app_state().read().leads);

    rsx! {
        div { class: "grid gap-4 md:grid-cols-4",
            StatCard { label: "Total leads", value: stats.total.to_string() }
            StatCard { label: "Active", value: stats.active.to_string() }
            StatCard { label: "VIP", value: stats.vip.to_string() }
            StatCard {
                label: "Total revenue",
                value: format_currency(stats.revenue),
                hint: "Lifetime spend across all leads".to_string(),
            }
        }
    }
}

/// `$12,345` style formatting for whole dollars.
pub fn format_currency(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${grouped}")
}

#[cfg(test)]
mod tests {
    use super::format_currency;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(0), "$0");
        assert_eq!(format_currency(999), "$999");
        assert_eq!(format_currency(1_000), "$1,000");
        assert_eq!(format_currency(1_234_567), "$1,234,567");
    }
}
