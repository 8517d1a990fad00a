//! Scripted outbound-campaign simulation.
//!
//! [`driver::CampaignDriver`] plays the script for a batch of leads and emits
//! [`SimulationEvent`]s; [`state::SimulationState`] folds those events into what
//! the simulation page renders.

pub mod driver;
pub mod pacing;
pub mod random;
pub mod state;
pub mod transcript;

use std::cell::Cell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::models::{Channel, ChatRole};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum StepKind {
    Analyzing,
    ChoosingChannel,
    Connecting,
    Sent,
    Response,
    Marked,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SimulationStep {
    pub id: u64,
    pub lead_id: String,
    pub kind: StepKind,
    pub message: String,
    pub timestamp_ms: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ConversationMessage {
    pub role: ChatRole,
    pub text: String,
    pub timestamp_ms: i64,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SimulationPhase {
    #[default]
    Idle,
    Analyzing,
    ChoosingChannel,
    Connecting,
    Calling,
    Messaging,
    Marked,
    Complete,
    Cancelled,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SimulationEvent {
    RunStarted {
        run_id: Uuid,
        total: usize,
    },
    LeadStarted {
        index: usize,
        lead_id: String,
        lead_name: String,
        channel: Channel,
    },
    PhaseChanged {
        phase: SimulationPhase,
    },
    Step {
        step: SimulationStep,
    },
    Message {
        message: ConversationMessage,
    },
    CallStarted,
    SpeakerChanged {
        speaker: Option<ChatRole>,
    },
    /// `text` is the full revealed prefix of transcript line `line`.
    TranscriptTick {
        line: usize,
        role: ChatRole,
        text: String,
    },
    CallEnded,
    LeadEngaged {
        lead_id: String,
    },
    Progress {
        percent: u8,
    },
    RunCompleted,
    RunCancelled,
}

/// Receives driver events; the driver is its only writer.
pub trait SimulationSink {
    fn emit(&mut self, event: SimulationEvent);
}

impl SimulationSink for Vec<SimulationEvent> {
    fn emit(&mut self, event: SimulationEvent) {
        self.push(event);
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RunOutcome {
    /// No leads were selected; nothing was emitted.
    Skipped,
    Completed,
    Cancelled,
}

/// Cooperative stop flag, checked around every delay of a run.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// round(100·completed/total), half rounding up.
pub fn progress_percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let completed = completed.min(total) as u64;
    let total = total as u64;
    ((completed * 200 + total) / (total * 2)) as u8
}

pub fn now_ms() -> i64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}
