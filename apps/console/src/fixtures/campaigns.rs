use crate::models::{
    Campaign, CampaignStatus, ChannelPerformance, EngagementPoint, FunnelStats, Kpi, RevenuePoint,
};

/// 返回演示用的营销活动列表。
pub fn sample_campaigns() -> Vec<Campaign> {
    vec![
        campaign(
            1,
            "Spring Collection Launch",
            "Dormant customers",
            &["WhatsApp", "Instagram"],
            funnel(1_200, 950, 420, 85),
            CampaignStatus::Active,
            75,
        ),
        campaign(
            2,
            "Summer Sale",
            "Cart abandoners",
            &["SMS", "Telegram"],
            funnel(800, 640, 320, 62),
            CampaignStatus::Active,
            60,
        ),
        campaign(
            3,
            "Flash Deal 48h",
            "Cold leads",
            &["WhatsApp", "Instagram", "SMS"],
            funnel(2_500, 1_875, 1_000, 250),
            CampaignStatus::Completed,
            100,
        ),
        campaign(
            4,
            "New Year Clearance",
            "All dormant",
            &["Email", "SMS"],
            funnel(5_000, 3_500, 1_750, 350),
            CampaignStatus::Paused,
            35,
        ),
    ]
}

pub fn weekly_engagement() -> Vec<EngagementPoint> {
    [
        ("Mon", 240, 24.5),
        ("Tue", 320, 28.2),
        ("Wed", 280, 25.8),
        ("Thu", 400, 35.2),
        ("Fri", 480, 42.1),
        ("Sat", 390, 38.9),
        ("Sun", 290, 30.2),
    ]
    .into_iter()
    .map(|(day, engaged, rate)| EngagementPoint {
        day: day.into(),
        engaged,
        rate,
    })
    .collect()
}

pub fn channel_performance() -> Vec<ChannelPerformance> {
    vec![
        performance("WhatsApp", funnel(1_200, 950, 420, 85)),
        performance("Instagram", funnel(900, 720, 310, 62)),
        performance("Telegram", funnel(600, 480, 200, 35)),
        performance("SMS", funnel(1_500, 1_050, 520, 110)),
    ]
}

pub fn recovered_revenue() -> Vec<RevenuePoint> {
    revenue(&[
        ("Jan 1", 4_000),
        ("Jan 8", 3_000),
        ("Jan 15", 4_200),
        ("Jan 22", 5_100),
        ("Jan 29", 6_200),
    ])
}

pub fn revenue_by_channel() -> Vec<RevenuePoint> {
    revenue(&[
        ("WhatsApp", 12_500),
        ("Instagram", 9_800),
        ("SMS", 15_200),
        ("Telegram", 7_600),
    ])
}

pub fn analytics_kpis() -> Vec<Kpi> {
    [
        ("Total Revenue Recovered", "$52,800", "23.5% increase"),
        ("Reactivation Rate", "28.4%", "5.2% increase"),
        ("Average Order Value", "$186", "8.1% increase"),
        ("Messages Delivered", "12,480", "14.7% increase"),
    ]
    .into_iter()
    .map(|(label, value, trend)| Kpi {
        label: label.into(),
        value: value.into(),
        trend: trend.into(),
    })
    .collect()
}

fn campaign(
    id: u32,
    name: &str,
    audience: &str,
    channels: &[&str],
    stats: FunnelStats,
    status: CampaignStatus,
    progress: u8,
) -> Campaign {
    Campaign {
        id,
        name: name.into(),
        audience: audience.into(),
        channels: channels.iter().map(|value| value.to_string()).collect(),
        stats,
        status,
        progress,
    }
}

fn funnel(sent: u32, opened: u32, clicked: u32, converted: u32) -> FunnelStats {
    FunnelStats {
        sent,
        opened,
        clicked,
        converted,
    }
}

fn performance(channel: &str, stats: FunnelStats) -> ChannelPerformance {
    ChannelPerformance {
        channel: channel.into(),
        stats,
    }
}

fn revenue(points: &[(&str, u32)]) -> Vec<RevenuePoint> {
    points
        .iter()
        .map(|(label, amount)| RevenuePoint {
            label: label.to_string(),
            amount: *amount,
        })
        .collect()
}
