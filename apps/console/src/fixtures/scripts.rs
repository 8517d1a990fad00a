//! Canned copy used by the campaign simulation and the lead chat demo.

pub const ASSISTANT_TEMPLATES: &[&str] = &[
    "Hi! 👋 I noticed you loved our recent collection! We just got some amazing new arrivals that I think you'd love!",
    "We've helped similar customers find their perfect style. Are you open to seeing some personalized recommendations?",
    "No pressure at all! Feel free to reach out whenever you're ready. We're here to help!",
    "I'd love to send you a personalized outfit preview. What works better for you?",
    "Perfect! I'll create some custom looks for you based on your style!",
    "Great question! Our new collection includes advanced virtual try-on technology!",
];

pub const COUNTERPART_REPLIES: &[&str] = &[
    "Hey! Thanks for reaching out. I'm definitely interested in new styles!",
    "That sounds great! When can you show me what's new?",
    "This looks promising. Let me check my calendar and get back to you.",
    "What about sizing? I usually wear medium.",
    "Can I see how these items would look on me first?",
    "Do you have any special offers or discounts?",
    "Perfect! My email is on file.",
    "That's exactly what I've been looking for!",
];

/// Both call scripts must stay the same length; line `i` of one answers line `i` of the other.
pub const CALL_SCRIPT_ASSISTANT: &[&str] = &[
    "Hello, this is Sarah from our styling team. I'm calling about the winter collection you showed interest in.",
    "I understand you're looking for a few new pieces for the season. Let me tell you about our new arrivals.",
    "The collection includes tailored coats, merino knits, and our virtual try-on so you can see each look first.",
    "Since you're a returning customer, we can offer you 20% off anything from the new line this week.",
    "I can put together a personal lookbook for you. Would tomorrow at 2 PM work for a quick video fitting?",
];

pub const CALL_SCRIPT_COUNTERPART: &[&str] = &[
    "Hi Sarah, yes I remember browsing your website. I'm definitely interested.",
    "That sounds nice. Do you still carry the overcoat in camel?",
    "The try-on sounds useful. Can you do alterations as well?",
    "20% off is great timing. I'd love a few suggestions that match my usual sizes.",
    "Tomorrow at 2 PM works perfectly. Can you send me a calendar invite?",
];

pub const STYLIST_REPLIES: &[&str] = &[
    "That looks great on you! 👗 Would you like to try other styles?",
    "Love it! This piece matches your style perfectly ✨",
    "You should definitely get this! It's perfect for your collection 💯",
    "This would look amazing! Ready to purchase?",
    "Great choice! Want to see similar items?",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_scripts_pair_up() {
        assert_eq!(CALL_SCRIPT_ASSISTANT.len(), CALL_SCRIPT_COUNTERPART.len());
    }

    #[test]
    fn pools_are_not_empty() {
        assert!(!ASSISTANT_TEMPLATES.is_empty());
        assert!(!COUNTERPART_REPLIES.is_empty());
        assert!(!STYLIST_REPLIES.is_empty());
    }
}
