use std::time::Duration;

use futures::future::{FutureExt, LocalBoxFuture};
use gloo_timers::future::TimeoutFuture;
use tracing::{debug, info};
use uuid::Uuid;

use super::pacing::SimulationPacing;
use super::random::{pick, RandomSource};
use super::{
    now_ms, progress_percent, CancelToken, ConversationMessage, RunOutcome, SimulationEvent,
    SimulationPhase, SimulationSink, SimulationStep, StepKind,
};
use crate::fixtures::scripts::{
    ASSISTANT_TEMPLATES, CALL_SCRIPT_ASSISTANT, CALL_SCRIPT_COUNTERPART, COUNTERPART_REPLIES,
};
use crate::models::{ChatRole, Lead, LeadStatus};

/// Suspends the script between beats.
pub trait Sleeper {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

/// Browser timer backed by `setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimerSleeper;

impl Sleeper for TimerSleeper {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis).boxed_local()
    }
}

/// Raised at a suspension point once the run was cancelled.
struct Interrupted;

/// Plays the outbound campaign script over a batch of leads, strictly one lead at a time.
pub struct CampaignDriver<S, R, K> {
    pacing: SimulationPacing,
    sleeper: S,
    rng: R,
    sink: K,
    cancel: CancelToken,
    next_step_id: u64,
}

impl<S, R, K> CampaignDriver<S, R, K>
where
    S: Sleeper,
    R: RandomSource,
    K: SimulationSink,
{
    pub fn new(pacing: SimulationPacing, sleeper: S, rng: R, sink: K, cancel: CancelToken) -> Self {
        Self {
            pacing,
            sleeper,
            rng,
            sink,
            cancel,
            next_step_id: 0,
        }
    }

    #[cfg(test)]
    pub fn into_sink(self) -> K {
        self.sink
    }

    /// Runs the script and marks every processed lead as engaged.
    /// An empty batch is a no-op that emits nothing.
    pub async fn run(&mut self, leads: &mut [Lead]) -> RunOutcome {
        if leads.is_empty() {
            debug!("campaign simulation skipped: no leads selected");
            return RunOutcome::Skipped;
        }

        let run_id = Uuid::new_v4();
        let total = leads.len();
        info!(%run_id, total, "campaign simulation started");
        self.sink.emit(SimulationEvent::RunStarted { run_id, total });

        match self.play(leads).await {
            Ok(()) => {
                self.enter(SimulationPhase::Complete);
                self.sink.emit(SimulationEvent::RunCompleted);
                info!(%run_id, total, "campaign simulation completed");
                RunOutcome::Completed
            }
            Err(Interrupted) => {
                self.enter(SimulationPhase::Cancelled);
                self.sink.emit(SimulationEvent::RunCancelled);
                info!(%run_id, "campaign simulation cancelled");
                RunOutcome::Cancelled
            }
        }
    }

    async fn play(&mut self, leads: &mut [Lead]) -> Result<(), Interrupted> {
        let total = leads.len();
        for (index, lead) in leads.iter_mut().enumerate() {
            self.play_lead(index, lead).await?;
            self.sink.emit(SimulationEvent::Progress {
                percent: progress_percent(index + 1, total),
            });
            self.pause(self.pacing.between_leads).await?;
        }
        self.pause(self.pacing.finish).await
    }

    async fn play_lead(&mut self, index: usize, lead: &mut Lead) -> Result<(), Interrupted> {
        debug!(lead_id = %lead.id, channel = %lead.channel, index, "processing lead");
        self.sink.emit(SimulationEvent::LeadStarted {
            index,
            lead_id: lead.id.clone(),
            lead_name: lead.name.clone(),
            channel: lead.channel,
        });

        self.enter(SimulationPhase::Analyzing);
        self.pause(self.pacing.analyze).await?;
        self.step(
            lead,
            StepKind::Analyzing,
            format!("Analyzing lead profile for {}…", lead.name),
        );

        self.enter(SimulationPhase::ChoosingChannel);
        self.pause(self.pacing.choose_channel).await?;
        self.step(
            lead,
            StepKind::ChoosingChannel,
            format!("Choosing best channel ({})...", lead.channel),
        );

        self.enter(SimulationPhase::Connecting);
        self.pause(self.pacing.connect).await?;
        let connecting = if lead.channel.is_voice() {
            format!("Initiating call to {}...", lead.name)
        } else {
            "Connecting to lead…".to_string()
        };
        self.step(lead, StepKind::Connecting, connecting);

        if lead.channel.is_voice() {
            self.enter(SimulationPhase::Calling);
            self.play_call(lead).await?;
        } else {
            self.enter(SimulationPhase::Messaging);
            self.play_messaging(lead).await?;
        }

        self.enter(SimulationPhase::Marked);
        self.pause(self.pacing.mark_engaged).await?;
        self.step(lead, StepKind::Marked, "AI marked as Engaged.");
        lead.status = LeadStatus::Engaged;
        self.sink.emit(SimulationEvent::LeadEngaged {
            lead_id: lead.id.clone(),
        });
        Ok(())
    }

    async fn play_call(&mut self, lead: &Lead) -> Result<(), Interrupted> {
        self.sink.emit(SimulationEvent::CallStarted);
        self.pause(self.pacing.call_connect).await?;
        self.step(
            lead,
            StepKind::Sent,
            format!("Call connected with {} 📞", lead.name),
        );

        let turns = CALL_SCRIPT_ASSISTANT
            .len()
            .min(CALL_SCRIPT_COUNTERPART.len());
        for turn in 0..turns {
            self.speak(
                turn * 2,
                ChatRole::Assistant,
                CALL_SCRIPT_ASSISTANT[turn],
                self.pacing.assistant_lead_in,
                self.pacing.assistant_hold,
            )
            .await?;
            self.speak(
                turn * 2 + 1,
                ChatRole::Counterpart,
                CALL_SCRIPT_COUNTERPART[turn],
                self.pacing.counterpart_lead_in,
                self.pacing.counterpart_hold,
            )
            .await?;
            self.sink
                .emit(SimulationEvent::SpeakerChanged { speaker: None });
        }

        self.pause(self.pacing.call_wrap_up).await?;
        self.step(lead, StepKind::Response, "Call completed successfully ✅");
        self.sink.emit(SimulationEvent::CallEnded);
        Ok(())
    }

    /// Reveals `text` one character per tick as transcript line `line`.
    async fn speak(
        &mut self,
        line: usize,
        role: ChatRole,
        text: &str,
        lead_in: Duration,
        hold: Duration,
    ) -> Result<(), Interrupted> {
        self.sink.emit(SimulationEvent::SpeakerChanged {
            speaker: Some(role),
        });
        self.pause(lead_in).await?;

        let mut revealed = String::with_capacity(text.len());
        for ch in text.chars() {
            revealed.push(ch);
            self.sink.emit(SimulationEvent::TranscriptTick {
                line,
                role,
                text: revealed.clone(),
            });
            self.pause(self.pacing.per_character).await?;
        }

        self.pause(hold).await
    }

    async fn play_messaging(&mut self, lead: &Lead) -> Result<(), Interrupted> {
        self.pause(self.pacing.message_send).await?;
        self.send_assistant_message();
        self.step(lead, StepKind::Sent, "Message sent ✅");

        let delay = self.pacing.reply_delay(&mut self.rng);
        self.pause(delay).await?;
        let reply = self.receive_reply();
        self.step(
            lead,
            StepKind::Response,
            format!("Lead responded: 👍 {reply}"),
        );

        if self.pacing.roll_follow_up(&mut self.rng) {
            self.pause(self.pacing.follow_up_send).await?;
            self.send_assistant_message();
            self.step(lead, StepKind::Sent, "Follow-up message sent ✅");

            let delay = self.pacing.follow_up_reply_delay(&mut self.rng);
            self.pause(delay).await?;
            let reply = self.receive_reply();
            self.step(
                lead,
                StepKind::Response,
                format!("Lead responded: 👍 {reply}"),
            );
        }

        Ok(())
    }

    fn send_assistant_message(&mut self) {
        let text = pick(ASSISTANT_TEMPLATES, &mut self.rng).to_string();
        self.push_message(ChatRole::Assistant, text);
    }

    fn receive_reply(&mut self) -> String {
        let text = pick(COUNTERPART_REPLIES, &mut self.rng).to_string();
        self.push_message(ChatRole::Counterpart, text.clone());
        text
    }

    fn push_message(&mut self, role: ChatRole, text: String) {
        self.sink.emit(SimulationEvent::Message {
            message: ConversationMessage {
                role,
                text,
                timestamp_ms: now_ms(),
            },
        });
    }

    fn step(&mut self, lead: &Lead, kind: StepKind, message: impl Into<String>) {
        let step = SimulationStep {
            id: self.next_step_id,
            lead_id: lead.id.clone(),
            kind,
            message: message.into(),
            timestamp_ms: now_ms(),
        };
        self.next_step_id += 1;
        self.sink.emit(SimulationEvent::Step { step });
    }

    fn enter(&mut self, phase: SimulationPhase) {
        self.sink.emit(SimulationEvent::PhaseChanged { phase });
    }

    async fn pause(&self, duration: Duration) -> Result<(), Interrupted> {
        if self.cancel.is_cancelled() {
            return Err(Interrupted);
        }
        self.sleeper.sleep(duration).await;
        if self.cancel.is_cancelled() {
            return Err(Interrupted);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use futures::executor::block_on;
    use futures::future;

    use super::*;
    use crate::fixtures::leads::sample_leads;
    use crate::models::Channel;
    use crate::simulation::random::SequenceRandom;

    /// Resolves immediately and remembers every requested delay.
    #[derive(Clone, Default)]
    struct RecordingSleeper {
        delays: Rc<RefCell<Vec<Duration>>>,
        cancel_after: Option<(usize, CancelToken)>,
    }

    impl Sleeper for RecordingSleeper {
        fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
            let mut delays = self.delays.borrow_mut();
            delays.push(duration);
            if let Some((limit, token)) = self.cancel_after.as_ref() {
                if delays.len() >= *limit {
                    token.cancel();
                }
            }
            future::ready(()).boxed_local()
        }
    }

    fn lead_on(channel: Channel, id: &str) -> Lead {
        let mut lead = sample_leads().remove(0);
        lead.id = id.to_string();
        lead.name = format!("Lead {id}");
        lead.channel = channel;
        lead.status = LeadStatus::Dormant;
        lead
    }

    fn run_with(
        leads: &mut [Lead],
        samples: Vec<f64>,
    ) -> (RunOutcome, Vec<SimulationEvent>, Vec<Duration>) {
        let sleeper = RecordingSleeper::default();
        let delays = sleeper.delays.clone();
        let mut driver = CampaignDriver::new(
            SimulationPacing::default(),
            sleeper,
            SequenceRandom::new(samples),
            Vec::new(),
            CancelToken::new(),
        );
        let outcome = block_on(driver.run(leads));
        let recorded = delays.borrow().clone();
        (outcome, driver.into_sink(), recorded)
    }

    fn steps(events: &[SimulationEvent]) -> Vec<&SimulationStep> {
        events
            .iter()
            .filter_map(|event| match event {
                SimulationEvent::Step { step } => Some(step),
                _ => None,
            })
            .collect()
    }

    fn messages(events: &[SimulationEvent]) -> Vec<&ConversationMessage> {
        events
            .iter()
            .filter_map(|event| match event {
                SimulationEvent::Message { message } => Some(message),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn empty_batch_emits_nothing() {
        let (outcome, events, delays) = run_with(&mut [], vec![0.5]);
        assert_eq!(outcome, RunOutcome::Skipped);
        assert!(events.is_empty());
        assert!(delays.is_empty());
    }

    #[test]
    fn messaging_lead_without_follow_up() {
        let mut leads = vec![lead_on(Channel::WhatsApp, "L1")];
        // assistant pick, reply delay, reply pick, follow-up roll (0.1 -> no)
        let (outcome, events, delays) = run_with(&mut leads, vec![0.0, 0.5, 0.0, 0.1]);

        assert_eq!(outcome, RunOutcome::Completed);
        let kinds: Vec<_> = steps(&events).iter().map(|step| step.kind).collect();
        assert_eq!(
            kinds,
            vec![
                StepKind::Analyzing,
                StepKind::ChoosingChannel,
                StepKind::Connecting,
                StepKind::Sent,
                StepKind::Response,
                StepKind::Marked,
            ]
        );

        let conversation = messages(&events);
        assert_eq!(conversation.len(), 2);
        assert_eq!(conversation[0].role, ChatRole::Assistant);
        assert_eq!(conversation[0].text, ASSISTANT_TEMPLATES[0]);
        assert_eq!(conversation[1].role, ChatRole::Counterpart);
        assert_eq!(conversation[1].text, COUNTERPART_REPLIES[0]);

        let texts: Vec<_> = steps(&events).iter().map(|s| s.message.clone()).collect();
        assert_eq!(texts[0], "Analyzing lead profile for Lead L1…");
        assert_eq!(texts[1], "Choosing best channel (WhatsApp)...");
        assert_eq!(texts[2], "Connecting to lead…");
        assert_eq!(
            texts[4],
            format!("Lead responded: 👍 {}", COUNTERPART_REPLIES[0])
        );

        assert_eq!(
            &delays[..5],
            &[
                Duration::from_millis(800),
                Duration::from_millis(1_200),
                Duration::from_millis(1_000),
                Duration::from_millis(1_200),
                Duration::from_millis(4_000),
            ]
        );
        assert_eq!(leads[0].status, LeadStatus::Engaged);
    }

    #[test]
    fn follow_up_round_alternates_roles() {
        let mut leads = vec![lead_on(Channel::Instagram, "L1")];
        let (_, events, delays) =
            run_with(&mut leads, vec![0.2, 0.0, 0.3, 0.9, 0.5, 1.0, 0.99]);

        let conversation = messages(&events);
        let roles: Vec<_> = conversation.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![
                ChatRole::Assistant,
                ChatRole::Counterpart,
                ChatRole::Assistant,
                ChatRole::Counterpart,
            ]
        );

        let sent: Vec<_> = steps(&events)
            .into_iter()
            .filter(|step| step.kind == StepKind::Sent)
            .map(|step| step.message.as_str())
            .collect();
        assert_eq!(sent, vec!["Message sent ✅", "Follow-up message sent ✅"]);

        // message send, reply (min), follow-up send, follow-up reply (max)
        assert_eq!(delays[3], Duration::from_millis(1_200));
        assert_eq!(delays[4], Duration::from_millis(2_000));
        assert_eq!(delays[5], Duration::from_millis(1_000));
        assert_eq!(delays[6], Duration::from_millis(3_500));
    }

    #[test]
    fn leads_are_processed_in_order_with_progress() {
        let mut leads: Vec<_> = ["A", "B", "C", "D"]
            .iter()
            .map(|id| lead_on(Channel::Telegram, id))
            .collect();
        let (outcome, events, _) = run_with(&mut leads, vec![0.3, 0.6, 0.2]);
        assert_eq!(outcome, RunOutcome::Completed);

        let all_steps = steps(&events);
        let marked: Vec<_> = all_steps
            .iter()
            .filter(|step| step.kind == StepKind::Marked)
            .map(|step| step.lead_id.as_str())
            .collect();
        assert_eq!(marked, vec!["A", "B", "C", "D"]);

        let mut finished = 0;
        for step in &all_steps {
            let position = ["A", "B", "C", "D"]
                .iter()
                .position(|id| *id == step.lead_id)
                .unwrap();
            assert_eq!(position, finished, "step for a later lead leaked early");
            if step.kind == StepKind::Marked {
                finished += 1;
            }
        }

        let ids: Vec<_> = all_steps.iter().map(|step| step.id).collect();
        let expected: Vec<u64> = (0..ids.len() as u64).collect();
        assert_eq!(ids, expected);

        let progress: Vec<_> = events
            .iter()
            .filter_map(|event| match event {
                SimulationEvent::Progress { percent } => Some(*percent),
                _ => None,
            })
            .collect();
        assert_eq!(progress, vec![25, 50, 75, 100]);
        assert!(leads.iter().all(|lead| lead.status == LeadStatus::Engaged));
        assert_eq!(events.last(), Some(&SimulationEvent::RunCompleted));
    }

    #[test]
    fn phone_lead_reveals_call_scripts() {
        let mut leads = vec![lead_on(Channel::Phone, "P1")];
        let (outcome, events, _) = run_with(&mut leads, vec![0.5]);
        assert_eq!(outcome, RunOutcome::Completed);
        assert!(messages(&events).is_empty());

        let mut last: Option<(usize, String)> = None;
        let mut finished_lines: Vec<(ChatRole, String)> = Vec::new();
        for event in &events {
            if let SimulationEvent::TranscriptTick { line, role, text } = event {
                let expected_role = if line % 2 == 0 {
                    ChatRole::Assistant
                } else {
                    ChatRole::Counterpart
                };
                assert_eq!(*role, expected_role);
                match last.as_ref() {
                    Some((prev_line, prev_text)) if prev_line == line => {
                        assert_eq!(text.chars().count(), prev_text.chars().count() + 1);
                        assert!(text.starts_with(prev_text.as_str()));
                    }
                    Some((prev_line, prev_text)) => {
                        assert_eq!(*line, prev_line + 1);
                        finished_lines.push((
                            if prev_line % 2 == 0 {
                                ChatRole::Assistant
                            } else {
                                ChatRole::Counterpart
                            },
                            prev_text.clone(),
                        ));
                        assert_eq!(text.chars().count(), 1);
                    }
                    None => {
                        assert_eq!(*line, 0);
                        assert_eq!(text.chars().count(), 1);
                    }
                }
                last = Some((*line, text.clone()));
            }
        }
        let (line, text) = last.unwrap();
        finished_lines.push((ChatRole::Counterpart, text));
        assert_eq!(line, CALL_SCRIPT_ASSISTANT.len() * 2 - 1);

        for (turn, pair) in finished_lines.chunks(2).enumerate() {
            assert_eq!(pair[0], (ChatRole::Assistant, CALL_SCRIPT_ASSISTANT[turn].to_string()));
            assert_eq!(
                pair[1],
                (ChatRole::Counterpart, CALL_SCRIPT_COUNTERPART[turn].to_string())
            );
        }

        let texts: Vec<_> = steps(&events).iter().map(|s| s.message.clone()).collect();
        assert_eq!(texts[2], "Initiating call to Lead P1...");
        assert_eq!(texts[3], "Call connected with Lead P1 📞");
        assert_eq!(texts[4], "Call completed successfully ✅");
        assert_eq!(texts[5], "AI marked as Engaged.");
        assert!(events.contains(&SimulationEvent::CallStarted));
        assert!(events.contains(&SimulationEvent::CallEnded));
    }

    #[test]
    fn phases_follow_the_state_machine() {
        let mut leads = vec![
            lead_on(Channel::Phone, "P1"),
            lead_on(Channel::Store, "S1"),
        ];
        let (_, events, _) = run_with(&mut leads, vec![0.0]);
        let phases: Vec<_> = events
            .iter()
            .filter_map(|event| match event {
                SimulationEvent::PhaseChanged { phase } => Some(*phase),
                _ => None,
            })
            .collect();
        assert_eq!(
            phases,
            vec![
                SimulationPhase::Analyzing,
                SimulationPhase::ChoosingChannel,
                SimulationPhase::Connecting,
                SimulationPhase::Calling,
                SimulationPhase::Marked,
                SimulationPhase::Analyzing,
                SimulationPhase::ChoosingChannel,
                SimulationPhase::Connecting,
                SimulationPhase::Messaging,
                SimulationPhase::Marked,
                SimulationPhase::Complete,
            ]
        );
    }

    #[test]
    fn cancellation_stops_before_next_step() {
        let token = CancelToken::new();
        let sleeper = RecordingSleeper {
            delays: Rc::default(),
            cancel_after: Some((2, token.clone())),
        };
        let mut leads = vec![lead_on(Channel::WhatsApp, "L1"), lead_on(Channel::Phone, "L2")];
        let mut driver = CampaignDriver::new(
            SimulationPacing::default(),
            sleeper,
            SequenceRandom::new(vec![0.5]),
            Vec::new(),
            token,
        );
        let outcome = block_on(driver.run(&mut leads));
        let events = driver.into_sink();

        assert_eq!(outcome, RunOutcome::Cancelled);
        let kinds: Vec<_> = steps(&events).iter().map(|step| step.kind).collect();
        assert_eq!(kinds, vec![StepKind::Analyzing]);
        assert_eq!(events.last(), Some(&SimulationEvent::RunCancelled));
        assert!(!events.contains(&SimulationEvent::RunCompleted));
        assert!(leads.iter().all(|lead| lead.status == LeadStatus::Dormant));
    }
}
