use crate::models::{
    CallKind, CallRecord, Channel, ChatRole, Lead, LeadMessage, LeadStatus, PriceRange, Purchase,
    StyleProfile,
};

/// 返回演示用的客户线索，所有数据只存在于内存中。
pub fn sample_leads() -> Vec<Lead> {
    vec![
        emma_rodriguez(),
        jessica_park(),
        alex_chen(),
        sophie_williams(),
        marcus_johnson(),
        olivia_martin(),
    ]
}

fn emma_rodriguez() -> Lead {
    Lead {
        id: "CUST-0001".into(),
        name: "Emma Rodriguez".into(),
        email: "emma.rodriguez@email.com".into(),
        phone: "+1 (555) 234-5678".into(),
        location: "New York, NY".into(),
        channel: Channel::Instagram,
        status: LeadStatus::Active,
        last_contact: "2 hours ago".into(),
        engagement_score: 92,
        next_recommendation_date: "2024-01-25".into(),
        total_spent: 2_450,
        average_order_value: 245,
        notes: "High-value customer who loves trendy pieces. Responds well to personalized recommendations. Recently purchased winter collection items.".into(),
        messages: vec![
            message(
                "msg-001",
                ChatRole::Assistant,
                "Hi Emma! 👋 I noticed you loved our Winter Cashmere Sweater! We just got some amazing new arrivals that I think you'd love - including a gorgeous burgundy blazer that would look perfect with your style!",
                "2 hours ago",
                Channel::Instagram,
                &["Burgundy Blazer", "Cashmere Cardigan"],
            ),
            message(
                "msg-002",
                ChatRole::Counterpart,
                "Oh wow! That sounds amazing! I do love burgundy. Can you show me what it looks like?",
                "1 hour ago",
                Channel::Instagram,
                &[],
            ),
            message(
                "msg-003",
                ChatRole::Assistant,
                "Absolutely! Here's a preview of the burgundy blazer - it's perfect for work or date nights! 💼✨ Would you like me to create a virtual try-on for you?",
                "45 minutes ago",
                Channel::Instagram,
                &[],
            ),
            message(
                "msg-004",
                ChatRole::Counterpart,
                "Yes please! That would be so cool! 😍",
                "30 minutes ago",
                Channel::Instagram,
                &[],
            ),
        ],
        call_records: vec![call(
            "call-001",
            CallKind::Outgoing,
            "8:45",
            "1 day ago",
            Some("Follow-up on winter collection - very interested in new arrivals"),
        )],
        purchase_history: vec![
            purchase("purchase-001", "Winter Cashmere Sweater", "Sweaters", "M", "Navy Blue", 189, "2024-01-15", Some(5)),
            purchase("purchase-002", "High-Waisted Jeans", "Jeans", "M", "Dark Wash", 89, "2024-01-10", Some(4)),
        ],
        style_profile: style(
            &["Navy Blue", "Black", "Cream", "Burgundy"],
            &["Casual", "Business Casual", "Trendy"],
            "Medium",
            (50, 300),
            &["Our Brand", "Zara", "H&M"],
            &["Work", "Weekend", "Date Night"],
        ),
    }
}

fn jessica_park() -> Lead {
    Lead {
        id: "CUST-0002".into(),
        name: "Jessica Park".into(),
        email: "jessica.park@email.com".into(),
        phone: "+1 (555) 987-6543".into(),
        location: "Los Angeles, CA".into(),
        channel: Channel::Website,
        status: LeadStatus::Engaged,
        last_contact: "1 hour ago".into(),
        engagement_score: 78,
        next_recommendation_date: "2024-01-28".into(),
        total_spent: 1_200,
        average_order_value: 150,
        notes: "Fashion-forward customer who loves sustainable brands. Very active on social media and shares purchases frequently.".into(),
        messages: vec![
            message(
                "msg-005",
                ChatRole::Assistant,
                "Hi Jessica! 🌿 I saw you loved our eco-friendly dress! We just launched a new sustainable collection with some beautiful earth-tone pieces. Would you like to see what we have?",
                "1 hour ago",
                Channel::WhatsApp,
                &["Earth Tone Sweater", "Sustainable Jeans"],
            ),
            message(
                "msg-006",
                ChatRole::Counterpart,
                "Yes! I'm always looking for sustainable options. What's new?",
                "45 minutes ago",
                Channel::WhatsApp,
                &[],
            ),
            message(
                "msg-007",
                ChatRole::Assistant,
                "Perfect! We have a gorgeous terracotta-colored sweater made from recycled materials and some amazing organic cotton pieces. I can show you how they'd look with your style!",
                "30 minutes ago",
                Channel::WhatsApp,
                &[],
            ),
        ],
        call_records: Vec::new(),
        purchase_history: vec![
            purchase("purchase-003", "Eco-Friendly Cotton Dress", "Dresses", "S", "Forest Green", 129, "2024-01-12", Some(5)),
            purchase("purchase-004", "Sustainable Denim Jacket", "Jackets", "S", "Light Blue", 159, "2024-01-05", Some(4)),
        ],
        style_profile: style(
            &["Green", "Earth Tones", "Pastels"],
            &["Boho", "Sustainable", "Casual"],
            "Small",
            (80, 250),
            &["Our Brand", "Everlane", "Reformation"],
            &["Weekend", "Casual", "Travel"],
        ),
    }
}

fn alex_chen() -> Lead {
    Lead {
        id: "CUST-0003".into(),
        name: "Alex Chen".into(),
        email: "alex.chen@email.com".into(),
        phone: "+1 (555) 456-7890".into(),
        location: "Chicago, IL".into(),
        channel: Channel::Store,
        status: LeadStatus::Vip,
        last_contact: "30 minutes ago".into(),
        engagement_score: 95,
        next_recommendation_date: "2024-01-22".into(),
        total_spent: 3_800,
        average_order_value: 380,
        notes: "Premium customer who shops frequently. Loves luxury items and is always first to try new collections. High referral potential.".into(),
        messages: vec![
            message(
                "msg-008",
                ChatRole::Assistant,
                "Hi Alex! 👔 I know you love our premium pieces! We just received an exclusive limited-edition collection that I think you'd absolutely love. Want to be the first to see it?",
                "30 minutes ago",
                Channel::WhatsApp,
                &["Limited Edition Blazer", "Premium Cashmere Sweater"],
            ),
            message(
                "msg-009",
                ChatRole::Counterpart,
                "Absolutely! I'm always interested in exclusive pieces. What's special about this collection?",
                "25 minutes ago",
                Channel::WhatsApp,
                &[],
            ),
            message(
                "msg-010",
                ChatRole::Assistant,
                "It's our collaboration with a famous designer! Only 50 pieces available worldwide. I can reserve one for you and show you a virtual preview right now!",
                "20 minutes ago",
                Channel::WhatsApp,
                &[],
            ),
        ],
        call_records: vec![call(
            "call-002",
            CallKind::Outgoing,
            "12:30",
            "2 days ago",
            Some("VIP customer check-in - very satisfied with recent purchases"),
        )],
        purchase_history: vec![
            purchase("purchase-005", "Designer Leather Jacket", "Jackets", "L", "Black", 450, "2024-01-18", Some(5)),
            purchase("purchase-006", "Premium Wool Coat", "Coats", "L", "Charcoal", 320, "2024-01-10", Some(5)),
        ],
        style_profile: style(
            &["Black", "Charcoal", "Navy", "White"],
            &["Business", "Luxury", "Minimalist"],
            "Large",
            (200, 600),
            &["Our Brand", "Armani", "Hugo Boss"],
            &["Business", "Formal", "Special Events"],
        ),
    }
}

fn sophie_williams() -> Lead {
    Lead {
        id: "CUST-0004".into(),
        name: "Sophie Williams".into(),
        email: "sophie.w@email.com".into(),
        phone: "+1 (555) 321-0987".into(),
        location: "Miami, FL".into(),
        channel: Channel::Instagram,
        status: LeadStatus::New,
        last_contact: "15 minutes ago".into(),
        engagement_score: 65,
        next_recommendation_date: "2024-01-30".into(),
        total_spent: 450,
        average_order_value: 225,
        notes: "New customer who discovered us through influencer collaboration. Very engaged on social media. Interested in beachwear and summer collections.".into(),
        messages: vec![
            message(
                "msg-011",
                ChatRole::Assistant,
                "Hi Sophie! 🌺 I saw you loved our summer collection! We're launching our new tropical collection next week. Would you like an early preview?",
                "15 minutes ago",
                Channel::Instagram,
                &["Tropical Bikini", "Palm Print Dress"],
            ),
            message(
                "msg-012",
                ChatRole::Counterpart,
                "Yes! I'm planning a tropical vacation next month!",
                "10 minutes ago",
                Channel::Instagram,
                &[],
            ),
            message(
                "msg-013",
                ChatRole::Assistant,
                "Perfect timing! Let me show you our new tropical pieces and create some vacation looks for you! 🏝️",
                "5 minutes ago",
                Channel::Instagram,
                &[],
            ),
        ],
        call_records: Vec::new(),
        purchase_history: vec![
            purchase("purchase-007", "Beach Cover-Up", "Swimwear", "M", "Tropical Blue", 79, "2024-01-20", Some(4)),
            purchase("purchase-008", "Summer Maxi Dress", "Dresses", "M", "Floral Print", 129, "2024-01-18", Some(5)),
        ],
        style_profile: style(
            &["Blue", "Floral", "White", "Pink"],
            &["Beach", "Summer", "Feminine"],
            "Medium",
            (50, 200),
            &["Our Brand", "Free People", "Anthropologie"],
            &["Beach", "Vacation", "Summer Events"],
        ),
    }
}

fn marcus_johnson() -> Lead {
    Lead {
        id: "CUST-0005".into(),
        name: "Marcus Johnson".into(),
        email: "marcus.j@email.com".into(),
        phone: "+1 (555) 678-1234".into(),
        location: "Austin, TX".into(),
        channel: Channel::Phone,
        status: LeadStatus::Dormant,
        last_contact: "3 months ago".into(),
        engagement_score: 41,
        next_recommendation_date: "2024-02-02".into(),
        total_spent: 980,
        average_order_value: 196,
        notes: "Prefers phone contact over chat. Bought outerwear twice last winter, has not ordered since. Good candidate for a personal call.".into(),
        messages: Vec::new(),
        call_records: vec![
            call("call-003", CallKind::Incoming, "4:10", "3 months ago", Some("Asked about alterations on a wool overcoat")),
            call("call-004", CallKind::Missed, "0:00", "2 months ago", None),
        ],
        purchase_history: vec![purchase(
            "purchase-009",
            "Wool Overcoat",
            "Coats",
            "XL",
            "Camel",
            289,
            "2023-11-02",
            Some(4),
        )],
        style_profile: style(
            &["Camel", "Olive", "Navy"],
            &["Classic", "Smart Casual"],
            "Extra Large",
            (100, 350),
            &["Our Brand", "Barbour"],
            &["Work", "Travel"],
        ),
    }
}

fn olivia_martin() -> Lead {
    Lead {
        id: "CUST-0006".into(),
        name: "Olivia Martin".into(),
        email: "olivia.martin@email.com".into(),
        phone: "+1 (555) 890-4321".into(),
        location: "Seattle, WA".into(),
        channel: Channel::Telegram,
        status: LeadStatus::Dormant,
        last_contact: "2 months ago".into(),
        engagement_score: 52,
        next_recommendation_date: "2024-01-27".into(),
        total_spent: 640,
        average_order_value: 160,
        notes: "Abandoned a cart with two knit sweaters. Reads messages quickly but rarely replies first.".into(),
        messages: vec![message(
            "msg-014",
            ChatRole::Assistant,
            "Hi Olivia! ❄️ Your knit sweaters are still waiting in your cart. Want me to hold your size for another week?",
            "2 months ago",
            Channel::Telegram,
            &["Chunky Knit Sweater"],
        )],
        call_records: Vec::new(),
        purchase_history: vec![purchase(
            "purchase-010",
            "Ribbed Turtleneck",
            "Sweaters",
            "S",
            "Ivory",
            69,
            "2023-10-14",
            None,
        )],
        style_profile: style(
            &["Ivory", "Grey", "Forest Green"],
            &["Cozy", "Minimalist"],
            "Small",
            (40, 180),
            &["Our Brand", "COS"],
            &["Weekend", "Work"],
        ),
    }
}

fn message(
    id: &str,
    role: ChatRole,
    text: &str,
    timestamp: &str,
    platform: Channel,
    suggestions: &[&str],
) -> LeadMessage {
    LeadMessage {
        id: id.into(),
        role,
        text: text.into(),
        timestamp: timestamp.into(),
        platform,
        product_suggestions: to_strings(suggestions),
    }
}

fn call(id: &str, kind: CallKind, duration: &str, timestamp: &str, notes: Option<&str>) -> CallRecord {
    CallRecord {
        id: id.into(),
        kind,
        duration: duration.into(),
        timestamp: timestamp.into(),
        notes: notes.map(str::to_string),
    }
}

#[allow(clippy::too_many_arguments)]
fn purchase(
    id: &str,
    product_name: &str,
    category: &str,
    size: &str,
    color: &str,
    price: u32,
    purchase_date: &str,
    rating: Option<u8>,
) -> Purchase {
    Purchase {
        id: id.into(),
        product_name: product_name.into(),
        category: category.into(),
        size: size.into(),
        color: color.into(),
        price,
        purchase_date: purchase_date.into(),
        rating,
    }
}

fn style(
    colors: &[&str],
    styles: &[&str],
    size_profile: &str,
    (min, max): (u32, u32),
    brands: &[&str],
    occasions: &[&str],
) -> StyleProfile {
    StyleProfile {
        preferred_colors: to_strings(colors),
        preferred_styles: to_strings(styles),
        size_profile: size_profile.into(),
        price_range: PriceRange { min, max },
        favorite_brands: to_strings(brands),
        occasions: to_strings(occasions),
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn lead_ids_are_unique() {
        let leads = sample_leads();
        let ids: HashSet<_> = leads.iter().map(|lead| lead.id.as_str()).collect();
        assert_eq!(ids.len(), leads.len());
    }

    #[test]
    fn fixtures_cover_voice_and_messaging_channels() {
        let leads = sample_leads();
        assert!(leads.iter().any(|lead| lead.channel.is_voice()));
        assert!(leads.iter().any(|lead| !lead.channel.is_voice()));
    }
}
