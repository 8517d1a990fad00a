use dioxus::prelude::*;

use crate::fixtures::campaigns::sample_campaigns;
use crate::models::{Campaign, CampaignStatus};

const ALL: &str = "all";

pub fn filter_campaigns(campaigns: &[Campaign], status: Option<CampaignStatus>) -> Vec<&Campaign> {
    campaigns
        .iter()
        .filter(|campaign| status.map_or(true, |status| campaign.status == status))
        .collect()
}

#[component]
pub fn Campaigns() -> Element {
    let campaigns = use_hook(sample_campaigns);
    let mut status = use_signal(|| Option::<CampaignStatus>::None);
    let current = status();
    let visible = filter_campaigns(&campaigns, current);

    rsx! {
        header { class: "flex items-end justify-between",
            div { class: "space-y-1",
                h2 { class: "text-xl font-semibold text-slate-900", "Campaigns" }
                p { class: "text-sm text-slate-500", "{visible.len()} of {campaigns.len()} campaigns" }
            }
            select {
                class: "rounded border border-slate-300 px-2 py-2 text-sm",
                value: current.map(|status| status.label()).unwrap_or(ALL),
                onchange: move |evt| status.set(CampaignStatus::parse(&evt.value())),
                option { value: ALL, "All" }
                for option_status in CampaignStatus::ALL {
                    option { key: "{option_status.label()}", value: option_status.label(), "{option_status.label()}" }
                }
            }
        }
        div { class: "grid gap-4 md:grid-cols-2",
            for campaign in visible {
                {campaign_card(campaign)}
            }
        }
    }
}

fn campaign_card(campaign: &Campaign) -> Element {
    let stats = campaign.stats;
    let channels = campaign.channels.join(", ");

    rsx! {
        article { key: "{campaign.id}", class: "space-y-3 rounded-lg border border-slate-200 bg-white p-4 shadow-sm",
            div { class: "flex items-start justify-between",
                div {
                    h3 { class: "text-sm font-semibold text-slate-900", "{campaign.name}" }
                    p { class: "text-[11px] text-slate-500", "{campaign.audience} · {channels}" }
                }
                span { class: "rounded border px-2 py-0.5 text-[11px] capitalize {campaign.status.badge_class()}",
                    "{campaign.status.label()}"
                }
            }
            div { class: "h-1.5 rounded bg-slate-100",
                div { class: "h-1.5 rounded bg-slate-900", width: "{campaign.progress}%" }
            }
            dl { class: "grid grid-cols-4 gap-2 text-center text-xs",
                div { dt { class: "text-slate-400", "Sent" } dd { class: "font-semibold", "{stats.sent}" } }
                div { dt { class: "text-slate-400", "Open rate" } dd { class: "font-semibold", "{stats.open_rate()}%" } }
                div { dt { class: "text-slate-400", "Click rate" } dd { class: "font-semibold", "{stats.click_rate()}%" } }
                div { dt { class: "text-slate-400", "Conversion" } dd { class: "font-semibold", "{stats.conversion_rate()}%" } }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_filter_narrows_the_list() {
        let campaigns = sample_campaigns();
        assert_eq!(filter_campaigns(&campaigns, None).len(), campaigns.len());
        let active = filter_campaigns(&campaigns, Some(CampaignStatus::Active));
        assert!(!active.is_empty());
        assert!(active
            .iter()
            .all(|campaign| campaign.status == CampaignStatus::Active));
    }
}
