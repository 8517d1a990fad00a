use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Channel {
    WhatsApp,
    Telegram,
    Instagram,
    Phone,
    Store,
    Website,
}

impl Channel {
    pub const ALL: [Channel; 6] = [
        Channel::WhatsApp,
        Channel::Telegram,
        Channel::Instagram,
        Channel::Phone,
        Channel::Store,
        Channel::Website,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::WhatsApp => "WhatsApp",
            Self::Telegram => "Telegram",
            Self::Instagram => "Instagram",
            Self::Phone => "Phone",
            Self::Store => "Store",
            Self::Website => "Website",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let needle = value.trim();
        Self::ALL
            .into_iter()
            .find(|channel| channel.label().eq_ignore_ascii_case(needle))
    }

    /// 电话渠道走通话脚本，其余渠道走消息脚本。
    pub fn is_voice(self) -> bool {
        matches!(self, Self::Phone)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LeadStatus {
    New,
    Active,
    Engaged,
    #[serde(rename = "VIP")]
    Vip,
    Dormant,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 5] = [
        LeadStatus::New,
        LeadStatus::Active,
        LeadStatus::Engaged,
        LeadStatus::Vip,
        LeadStatus::Dormant,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Active => "Active",
            Self::Engaged => "Engaged",
            Self::Vip => "VIP",
            Self::Dormant => "Dormant",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let needle = value.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(needle))
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::New => "bg-blue-100 text-blue-700 border-blue-200",
            Self::Active => "bg-green-100 text-green-700 border-green-200",
            Self::Engaged => "bg-purple-100 text-purple-700 border-purple-200",
            Self::Vip => "bg-pink-100 text-pink-700 border-pink-200",
            Self::Dormant => "bg-gray-100 text-gray-700 border-gray-200",
        }
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Who is talking: the AI agent or the lead on the other end.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ChatRole {
    #[serde(rename = "ai")]
    Assistant,
    #[serde(rename = "user")]
    Counterpart,
}

impl ChatRole {
    pub fn label(self) -> &'static str {
        match self {
            Self::Assistant => "AI Agent",
            Self::Counterpart => "User",
        }
    }

    pub fn transcript_prefix(self) -> &'static str {
        match self {
            Self::Assistant => "AI",
            Self::Counterpart => "User",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LeadMessage {
    pub id: String,
    pub role: ChatRole,
    pub text: String,
    pub timestamp: String,
    pub platform: Channel,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub product_suggestions: Vec<String>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CallKind {
    Incoming,
    Outgoing,
    Missed,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CallRecord {
    pub id: String,
    pub kind: CallKind,
    pub duration: String,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Purchase {
    pub id: String,
    pub product_name: String,
    pub category: String,
    pub size: String,
    pub color: String,
    pub price: u32,
    pub purchase_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct StyleProfile {
    pub preferred_colors: Vec<String>,
    pub preferred_styles: Vec<String>,
    pub size_profile: String,
    pub price_range: PriceRange,
    pub favorite_brands: Vec<String>,
    pub occasions: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub channel: Channel,
    pub status: LeadStatus,
    pub last_contact: String,
    pub engagement_score: u8,
    pub next_recommendation_date: String,
    pub total_spent: u32,
    pub average_order_value: u32,
    pub notes: String,
    #[serde(default)]
    pub messages: Vec<LeadMessage>,
    #[serde(default)]
    pub call_records: Vec<CallRecord>,
    #[serde(default)]
    pub purchase_history: Vec<Purchase>,
    #[serde(default)]
    pub style_profile: StyleProfile,
}

impl Lead {
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .collect()
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    Active,
    Paused,
    Completed,
}

impl CampaignStatus {
    pub const ALL: [CampaignStatus; 3] = [
        CampaignStatus::Active,
        CampaignStatus::Paused,
        CampaignStatus::Completed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Completed => "completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(value.trim()))
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Active => "bg-green-100 text-green-700 border-green-200",
            Self::Paused => "bg-yellow-100 text-yellow-700 border-yellow-200",
            Self::Completed => "bg-blue-100 text-blue-700 border-blue-200",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FunnelStats {
    pub sent: u32,
    pub opened: u32,
    pub clicked: u32,
    pub converted: u32,
}

impl FunnelStats {
    pub fn open_rate(&self) -> u32 {
        percent_of(self.opened, self.sent)
    }

    pub fn click_rate(&self) -> u32 {
        percent_of(self.clicked, self.sent)
    }

    pub fn conversion_rate(&self) -> u32 {
        percent_of(self.converted, self.sent)
    }
}

/// 四舍五入的百分比，分母为 0 时返回 0。
pub fn percent_of(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    let part = u64::from(part);
    let whole = u64::from(whole);
    ((part * 200 + whole) / (whole * 2)) as u32
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Campaign {
    pub id: u32,
    pub name: String,
    pub audience: String,
    pub channels: Vec<String>,
    pub stats: FunnelStats,
    pub status: CampaignStatus,
    pub progress: u8,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EngagementPoint {
    pub day: String,
    pub engaged: u32,
    pub rate: f32,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ChannelPerformance {
    pub channel: String,
    pub stats: FunnelStats,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RevenuePoint {
    pub label: String,
    pub amount: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Kpi {
    pub label: String,
    pub value: String,
    pub trend: String,
}
