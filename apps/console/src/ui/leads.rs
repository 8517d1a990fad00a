use dioxus::prelude::*;

use crate::state::SearchScope;
use crate::ui::leads_table::LeadsTable;

#[component]
pub fn Leads() -> Element {
    rsx! {
        header { class: "space-y-1",
            h2 { class: "text-xl font-semibold text-slate-900", "Leads" }
            p { class: "text-sm text-slate-500", "Search by name or email, filter by channel and status." }
        }
        LeadsTable { scope: SearchScope::NameOrEmail }
    }
}
