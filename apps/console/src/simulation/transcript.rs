use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::ChatRole;

/// One immutable reveal state of a transcript line.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TranscriptSnapshot {
    pub line: usize,
    pub role: ChatRole,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TranscriptError {
    #[error("line {line} is out of order, expected {expected}")]
    OutOfOrder { line: usize, expected: usize },
    #[error("line {line} changed speaker")]
    RoleChanged { line: usize },
}

/// Append-only call transcript: every reveal tick lands in `snapshots`,
/// `latest` maps each line to its newest snapshot.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TranscriptLog {
    snapshots: Vec<TranscriptSnapshot>,
    latest: Vec<usize>,
}

impl TranscriptLog {
    /// Records a reveal of `line`. Only the current last line may be extended,
    /// or the next line started.
    pub fn record(&mut self, line: usize, role: ChatRole, text: String) -> Result<(), TranscriptError> {
        let open = self.latest.len();
        if line == open {
            self.snapshots.push(TranscriptSnapshot { line, role, text });
            self.latest.push(self.snapshots.len() - 1);
            return Ok(());
        }

        if open > 0 && line == open - 1 {
            let current = &self.snapshots[self.latest[line]];
            if current.role != role {
                return Err(TranscriptError::RoleChanged { line });
            }
            self.snapshots.push(TranscriptSnapshot { line, role, text });
            self.latest[line] = self.snapshots.len() - 1;
            return Ok(());
        }

        Err(TranscriptError::OutOfOrder {
            line,
            expected: open,
        })
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.latest.clear();
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.latest.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.latest.len()
    }

    /// Current state of every line, in order.
    pub fn lines(&self) -> impl Iterator<Item = &TranscriptSnapshot> + '_ {
        self.latest.iter().map(|index| &self.snapshots[*index])
    }

    /// Every reveal step of one line, oldest first.
    #[cfg(test)]
    pub fn history(&self, line: usize) -> impl Iterator<Item = &TranscriptSnapshot> + '_ {
        self.snapshots
            .iter()
            .filter(move |snapshot| snapshot.line == line)
    }
}
