use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DurationMilliSeconds};

use super::random::RandomSource;

pub const DEFAULT_FOLLOW_UP_PROBABILITY: f64 = 0.6;

/// Every delay the campaign script waits on, plus the odds of a follow-up round.
#[serde_as]
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SimulationPacing {
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub analyze: Duration,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub choose_channel: Duration,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub connect: Duration,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub mark_engaged: Duration,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub between_leads: Duration,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub finish: Duration,

    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub message_send: Duration,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub reply_min: Duration,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub reply_max: Duration,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub follow_up_send: Duration,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub follow_up_reply_min: Duration,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub follow_up_reply_max: Duration,
    pub follow_up_probability: f64,

    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub call_connect: Duration,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub assistant_lead_in: Duration,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub assistant_hold: Duration,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub counterpart_lead_in: Duration,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub counterpart_hold: Duration,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub call_wrap_up: Duration,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub per_character: Duration,
}

impl Default for SimulationPacing {
    fn default() -> Self {
        Self {
            analyze: Duration::from_millis(800),
            choose_channel: Duration::from_millis(1_200),
            connect: Duration::from_millis(1_000),
            mark_engaged: Duration::from_millis(800),
            between_leads: Duration::from_millis(1_000),
            finish: Duration::from_millis(1_000),
            message_send: Duration::from_millis(1_200),
            reply_min: Duration::from_millis(2_000),
            reply_max: Duration::from_millis(6_000),
            follow_up_send: Duration::from_millis(1_000),
            follow_up_reply_min: Duration::from_millis(1_500),
            follow_up_reply_max: Duration::from_millis(3_500),
            follow_up_probability: DEFAULT_FOLLOW_UP_PROBABILITY,
            call_connect: Duration::from_millis(2_000),
            assistant_lead_in: Duration::from_millis(1_000),
            assistant_hold: Duration::from_millis(1_500),
            counterpart_lead_in: Duration::from_millis(800),
            counterpart_hold: Duration::from_millis(2_000),
            call_wrap_up: Duration::from_millis(1_000),
            per_character: Duration::from_millis(50),
        }
    }
}

impl SimulationPacing {
    pub fn with_follow_up_probability(mut self, probability: f64) -> Self {
        self.follow_up_probability = if probability.is_finite() {
            probability.clamp(0.0, 1.0)
        } else {
            DEFAULT_FOLLOW_UP_PROBABILITY
        };
        self
    }

    /// Scales every delay by `percent` (100 keeps the defaults). The probability is untouched.
    pub fn scaled(&self, percent: u32) -> Self {
        let scale = |duration: Duration| duration * percent / 100;
        Self {
            analyze: scale(self.analyze),
            choose_channel: scale(self.choose_channel),
            connect: scale(self.connect),
            mark_engaged: scale(self.mark_engaged),
            between_leads: scale(self.between_leads),
            finish: scale(self.finish),
            message_send: scale(self.message_send),
            reply_min: scale(self.reply_min),
            reply_max: scale(self.reply_max),
            follow_up_send: scale(self.follow_up_send),
            follow_up_reply_min: scale(self.follow_up_reply_min),
            follow_up_reply_max: scale(self.follow_up_reply_max),
            follow_up_probability: self.follow_up_probability,
            call_connect: scale(self.call_connect),
            assistant_lead_in: scale(self.assistant_lead_in),
            assistant_hold: scale(self.assistant_hold),
            counterpart_lead_in: scale(self.counterpart_lead_in),
            counterpart_hold: scale(self.counterpart_hold),
            call_wrap_up: scale(self.call_wrap_up),
            per_character: scale(self.per_character),
        }
    }

    pub fn reply_delay(&self, rng: &mut dyn RandomSource) -> Duration {
        uniform_between(self.reply_min, self.reply_max, rng)
    }

    pub fn follow_up_reply_delay(&self, rng: &mut dyn RandomSource) -> Duration {
        uniform_between(self.follow_up_reply_min, self.follow_up_reply_max, rng)
    }

    /// Rolls for the optional second round; a probability of 0.6 matches `random() > 0.4`.
    pub fn roll_follow_up(&self, rng: &mut dyn RandomSource) -> bool {
        rng.next_f64() > 1.0 - self.follow_up_probability
    }
}

pub fn uniform_between(min: Duration, max: Duration, rng: &mut dyn RandomSource) -> Duration {
    if max <= min {
        return min;
    }
    let span = (max - min).as_secs_f64();
    let offset = span * rng.next_f64().clamp(0.0, 1.0);
    (min + Duration::from_secs_f64(offset)).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::random::SequenceRandom;

    #[test]
    fn reply_delay_stays_within_bounds() {
        let pacing = SimulationPacing::default();
        let mut rng = SequenceRandom::new(vec![0.0, 0.5, 0.999_999]);
        let low = pacing.reply_delay(&mut rng);
        let mid = pacing.reply_delay(&mut rng);
        let high = pacing.reply_delay(&mut rng);
        assert_eq!(low, Duration::from_millis(2_000));
        assert_eq!(mid, Duration::from_millis(4_000));
        assert!(high <= Duration::from_millis(6_000));
        assert!(high > Duration::from_millis(5_990));
    }

    #[test]
    fn follow_up_roll_matches_threshold() {
        let pacing = SimulationPacing::default();
        let mut rng = SequenceRandom::new(vec![0.41, 0.4, 0.1]);
        assert!(pacing.roll_follow_up(&mut rng));
        assert!(!pacing.roll_follow_up(&mut rng));
        assert!(!pacing.roll_follow_up(&mut rng));
    }

    #[test]
    fn probability_is_clamped() {
        let never = SimulationPacing::default().with_follow_up_probability(-3.0);
        let always = SimulationPacing::default().with_follow_up_probability(7.0);
        let mut rng = SequenceRandom::new(vec![0.999, 0.001]);
        assert!(!never.roll_follow_up(&mut rng));
        assert!(always.roll_follow_up(&mut rng));
    }

    #[test]
    fn scaling_halves_every_delay() {
        let half = SimulationPacing::default().scaled(50);
        assert_eq!(half.analyze, Duration::from_millis(400));
        assert_eq!(half.per_character, Duration::from_millis(25));
        assert_eq!(half.reply_max, Duration::from_millis(3_000));
        assert_eq!(half.follow_up_probability, DEFAULT_FOLLOW_UP_PROBABILITY);
    }

    #[test]
    fn pacing_serializes_durations_as_millis() {
        let encoded = serde_json::to_value(SimulationPacing::default()).unwrap();
        assert_eq!(encoded["analyze"], 800);
        assert_eq!(encoded["per_character"], 50);
    }
}
