use std::time::Duration;

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use time::macros::format_description;
use time::OffsetDateTime;
use tracing::debug;
use uuid::Uuid;

use crate::fixtures::scripts::STYLIST_REPLIES;
use crate::models::{Channel, ChatRole, Lead, LeadMessage};
use crate::simulation::random::{default_random, pick, RandomSource};
use crate::APP_CONFIG;

const SEED_MESSAGES: usize = 3;
const DEFAULT_TYPING_DELAY: Duration = Duration::from_millis(1_500);

/// The demo chat opens with the lead's first three messages.
pub fn seed_messages(lead: &Lead) -> Vec<LeadMessage> {
    lead.messages.iter().take(SEED_MESSAGES).cloned().collect()
}

pub fn compose_message(role: ChatRole, text: &str, platform: Channel) -> LeadMessage {
    let timestamp = OffsetDateTime::now_utc()
        .format(format_description!("[hour]:[minute]"))
        .unwrap_or_default();
    LeadMessage {
        id: Uuid::new_v4().to_string(),
        role,
        text: text.to_string(),
        timestamp,
        platform,
        product_suggestions: Vec::new(),
    }
}

pub fn stylist_reply(platform: Channel, rng: &mut dyn RandomSource) -> LeadMessage {
    compose_message(ChatRole::Assistant, *pick(STYLIST_REPLIES, rng), platform)
}

#[derive(Clone, Copy, PartialEq)]
pub struct LeadChat {
    pub messages: Signal<Vec<LeadMessage>>,
    pub typing: Signal<bool>,
    platform: Channel,
}

impl LeadChat {
    /// 追加用户消息并在延迟后回复；空白输入返回 false。
    pub fn send(&self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }

        let platform = self.platform;
        let mut messages = self.messages;
        let mut typing = self.typing;
        messages
            .write()
            .push(compose_message(ChatRole::Counterpart, text, platform));
        typing.set(true);

        let delay = APP_CONFIG
            .get()
            .map(|config| config.typing_delay)
            .unwrap_or(DEFAULT_TYPING_DELAY);
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);

        spawn(async move {
            TimeoutFuture::new(millis).await;
            let mut rng = default_random();
            messages.write().push(stylist_reply(platform, &mut rng));
            typing.set(false);
        });
        true
    }
}

/// What a chat opens with; changes only when the route points at another lead.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatSeed {
    pub lead_id: Option<String>,
    pub platform: Channel,
    pub messages: Vec<LeadMessage>,
}

impl ChatSeed {
    pub fn for_lead(lead: Option<&Lead>) -> Self {
        Self {
            lead_id: lead.map(|lead| lead.id.clone()),
            platform: lead.map(|lead| lead.channel).unwrap_or(Channel::Website),
            messages: lead.map(seed_messages).unwrap_or_default(),
        }
    }
}

pub fn use_lead_chat(lead: Option<&Lead>) -> LeadChat {
    let seed = ChatSeed::for_lead(lead);
    let platform = seed.platform;
    let initial = seed.messages.clone();
    let mut messages = use_signal(move || initial);
    let mut typing = use_signal(|| false);

    use_effect(use_reactive!(|seed| {
        debug!(lead = ?seed.lead_id, "chat seeded");
        messages.set(seed.messages);
        typing.set(false);
    }));

    LeadChat {
        messages,
        typing,
        platform,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::leads::sample_leads;
    use crate::models::LeadStatus;
    use crate::simulation::random::SequenceRandom;

    #[test]
    fn chat_is_seeded_with_three_messages() {
        let lead = sample_leads().remove(0);
        assert!(lead.messages.len() >= SEED_MESSAGES);
        let seed = seed_messages(&lead);
        assert_eq!(seed.len(), SEED_MESSAGES);
        assert_eq!(seed[..], lead.messages[..SEED_MESSAGES]);
    }

    #[test]
    fn seed_follows_the_lead_not_its_status() {
        let mut leads = sample_leads();
        let first = ChatSeed::for_lead(Some(&leads[0]));
        let second = ChatSeed::for_lead(Some(&leads[1]));
        assert_ne!(first, second);
        assert_eq!(second.lead_id.as_deref(), Some(leads[1].id.as_str()));
        assert_eq!(second.messages, seed_messages(&leads[1]));

        leads[0].status = LeadStatus::Engaged;
        assert_eq!(ChatSeed::for_lead(Some(&leads[0])), first);
    }

    #[test]
    fn missing_lead_seeds_an_empty_chat() {
        let seed = ChatSeed::for_lead(None);
        assert_eq!(seed.lead_id, None);
        assert!(seed.messages.is_empty());
        assert_eq!(seed.platform, Channel::Website);
    }

    #[test]
    fn stylist_reply_comes_from_the_pool() {
        let mut rng = SequenceRandom::new(vec![0.99]);
        let reply = stylist_reply(Channel::Instagram, &mut rng);
        assert_eq!(reply.role, ChatRole::Assistant);
        assert_eq!(reply.text, STYLIST_REPLIES[STYLIST_REPLIES.len() - 1]);
        assert_eq!(reply.platform, Channel::Instagram);
        assert_eq!(reply.timestamp.len(), 5);
    }
}
