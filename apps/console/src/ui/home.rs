use dioxus::prelude::*;

use crate::state::SearchScope;
use crate::ui::leads_table::LeadsTable;
use crate::ui::stats::LeadStatsCards;

#[component]
pub fn Home() -> Element {
    rsx! {
        header { class: "space-y-1",
            h2 { class: "text-xl font-semibold text-slate-900", "Welcome back" }
            p { class: "text-sm text-slate-500", "Pick the leads the AI should re-engage, then start a campaign." }
        }
        LeadStatsCards {}
        LeadsTable { scope: SearchScope::Name }
    }
}
