use tracing::warn;
use uuid::Uuid;

use super::transcript::TranscriptLog;
use super::{ConversationMessage, SimulationEvent, SimulationPhase, SimulationStep};
use crate::models::{Channel, ChatRole};

/// What the simulation page renders, folded from driver events.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimulationState {
    pub run_id: Option<Uuid>,
    pub total: usize,
    pub current_index: Option<usize>,
    pub current_lead_id: Option<String>,
    pub current_lead_name: Option<String>,
    pub current_channel: Option<Channel>,
    pub phase: SimulationPhase,
    pub steps: Vec<SimulationStep>,
    pub conversation: Vec<ConversationMessage>,
    pub transcript: TranscriptLog,
    pub call_active: bool,
    pub speaker: Option<ChatRole>,
    pub progress: u8,
    pub engaged: Vec<String>,
}

impl SimulationState {
    pub fn apply(&mut self, event: &SimulationEvent) {
        match event {
            SimulationEvent::RunStarted { run_id, total } => {
                *self = Self {
                    run_id: Some(*run_id),
                    total: *total,
                    ..Self::default()
                };
            }
            SimulationEvent::LeadStarted {
                index,
                lead_id,
                lead_name,
                channel,
            } => {
                self.current_index = Some(*index);
                self.current_lead_id = Some(lead_id.clone());
                self.current_lead_name = Some(lead_name.clone());
                self.current_channel = Some(*channel);
                self.conversation.clear();
            }
            SimulationEvent::PhaseChanged { phase } => self.phase = *phase,
            SimulationEvent::Step { step } => self.steps.push(step.clone()),
            SimulationEvent::Message { message } => self.conversation.push(message.clone()),
            SimulationEvent::CallStarted => {
                self.call_active = true;
                self.transcript.clear();
            }
            SimulationEvent::SpeakerChanged { speaker } => self.speaker = *speaker,
            SimulationEvent::TranscriptTick { line, role, text } => {
                if let Err(err) = self.transcript.record(*line, *role, text.clone()) {
                    warn!(error = %err, "dropped transcript tick");
                }
            }
            SimulationEvent::CallEnded => {
                self.call_active = false;
                self.speaker = None;
            }
            SimulationEvent::LeadEngaged { lead_id } => self.engaged.push(lead_id.clone()),
            SimulationEvent::Progress { percent } => self.progress = *percent,
            SimulationEvent::RunCompleted => {
                self.phase = SimulationPhase::Complete;
                self.progress = 100;
            }
            SimulationEvent::RunCancelled => {
                self.phase = SimulationPhase::Cancelled;
                self.call_active = false;
                self.speaker = None;
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.run_id.is_some()
            && !matches!(
                self.phase,
                SimulationPhase::Complete | SimulationPhase::Cancelled
            )
    }

    pub fn is_complete(&self) -> bool {
        self.phase == SimulationPhase::Complete
    }

    /// 1-based position of the lead in progress, for "Lead 2 of 5".
    pub fn position(&self) -> Option<(usize, usize)> {
        self.current_index.map(|index| (index + 1, self.total))
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use futures::future::{self, FutureExt, LocalBoxFuture};
    use std::time::Duration;

    use super::*;
    use crate::fixtures::leads::sample_leads;
    use crate::simulation::driver::{CampaignDriver, Sleeper};
    use crate::simulation::pacing::SimulationPacing;
    use crate::simulation::random::SequenceRandom;
    use crate::simulation::{CancelToken, StepKind};

    struct Instant;

    impl Sleeper for Instant {
        fn sleep(&self, _duration: Duration) -> LocalBoxFuture<'static, ()> {
            future::ready(()).boxed_local()
        }
    }

    struct Folding(SimulationState);

    impl crate::simulation::SimulationSink for Folding {
        fn emit(&mut self, event: SimulationEvent) {
            self.0.apply(&event);
        }
    }

    #[test]
    fn fresh_state_is_idle() {
        let state = SimulationState::default();
        assert_eq!(state.phase, SimulationPhase::Idle);
        assert!(!state.is_running());
        assert!(!state.is_complete());
    }

    #[test]
    fn folding_a_full_run_reaches_complete() {
        let mut leads = sample_leads();
        let mut driver = CampaignDriver::new(
            SimulationPacing::default(),
            Instant,
            SequenceRandom::new(vec![0.9, 0.1, 0.5]),
            Folding(SimulationState::default()),
            CancelToken::new(),
        );
        block_on(driver.run(&mut leads));
        let state = driver.into_sink().0;

        assert!(state.is_complete());
        assert!(!state.is_running());
        assert_eq!(state.progress, 100);
        assert_eq!(state.total, leads.len());
        let expected: Vec<_> = leads.iter().map(|lead| lead.id.clone()).collect();
        assert_eq!(state.engaged, expected);
        let marked = state
            .steps
            .iter()
            .filter(|step| step.kind == StepKind::Marked)
            .count();
        assert_eq!(marked, leads.len());
        assert!(!state.call_active);
    }

    #[test]
    fn conversation_resets_per_lead() {
        let mut state = SimulationState::default();
        state.apply(&SimulationEvent::RunStarted {
            run_id: Uuid::nil(),
            total: 2,
        });
        state.apply(&SimulationEvent::Message {
            message: ConversationMessage {
                role: ChatRole::Assistant,
                text: "hello".into(),
                timestamp_ms: 0,
            },
        });
        assert_eq!(state.conversation.len(), 1);
        state.apply(&SimulationEvent::LeadStarted {
            index: 1,
            lead_id: "CUST-0002".into(),
            lead_name: "Jessica".into(),
            channel: Channel::Website,
        });
        assert!(state.conversation.is_empty());
        assert_eq!(state.position(), Some((2, 2)));
        assert!(state.is_running());
    }

    #[test]
    fn call_clears_previous_transcript() {
        let mut state = SimulationState::default();
        state.apply(&SimulationEvent::CallStarted);
        state.apply(&SimulationEvent::TranscriptTick {
            line: 0,
            role: ChatRole::Assistant,
            text: "H".into(),
        });
        state.apply(&SimulationEvent::CallEnded);
        assert_eq!(state.transcript.line_count(), 1);

        state.apply(&SimulationEvent::CallStarted);
        assert!(state.transcript.is_empty());
        assert!(state.call_active);
    }

    #[test]
    fn cancel_ends_an_active_call() {
        let mut state = SimulationState::default();
        state.apply(&SimulationEvent::RunStarted {
            run_id: Uuid::nil(),
            total: 1,
        });
        state.apply(&SimulationEvent::CallStarted);
        state.apply(&SimulationEvent::SpeakerChanged {
            speaker: Some(ChatRole::Counterpart),
        });
        state.apply(&SimulationEvent::RunCancelled);
        assert_eq!(state.phase, SimulationPhase::Cancelled);
        assert!(!state.call_active);
        assert_eq!(state.speaker, None);
        assert!(!state.is_running());
    }
}
