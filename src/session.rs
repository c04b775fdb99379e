//! A visualizer session: the current array plus its playback
//!
//! [`Visualizer`] is what a front end drives. Each executed operation
//! replaces the playback timeline; operations that change the array commit
//! the final snapshot's elements as the new current array. `slice` never
//! commits, since it only reads.

use crate::command::Command;
use crate::generator::{generate, OperationRequest};
use crate::playback::{PlaybackController, SpeedLimits};
use crate::snapshot::OperationKind;
use std::time::Duration;

/// Outcome of running one operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    pub kind: OperationKind,
    pub steps: usize,
    /// Whether the current array was replaced
    pub committed: bool,
}

/// Current array, and the playback of the last operation run against it
#[derive(Debug)]
pub struct Visualizer {
    array: Vec<i64>,
    playback: PlaybackController,
}

impl Visualizer {
    /// Start a session showing `array` with a single "loaded" snapshot
    pub fn new(array: Vec<i64>, interval: Duration, limits: SpeedLimits) -> Self {
        let mut visualizer = Visualizer {
            array,
            playback: PlaybackController::with_limits(interval, limits),
        };
        let request = OperationRequest::new(&visualizer.array, OperationKind::Init);
        let loaded = generate(&request);
        visualizer.playback.load_timeline(loaded);
        visualizer
    }

    /// Run a parsed command against the current array
    pub fn execute(&mut self, command: &Command) -> Execution {
        let steps = generate(&command.request(&self.array));
        let count = steps.len();

        let commits = !matches!(command.kind, OperationKind::Slice);
        let committed = match steps.last() {
            Some(last) if commits && last.elements != self.array => {
                self.array = last.elements.clone();
                true
            }
            _ => false,
        };

        self.playback.load_timeline(steps);
        tracing::info!(
            operation = %command,
            steps = count,
            committed,
            len = self.array.len(),
            "executed operation"
        );

        Execution {
            kind: command.kind.clone(),
            steps: count,
            committed,
        }
    }

    pub fn array(&self) -> &[i64] {
        &self.array
    }

    pub fn playback(&self) -> &PlaybackController {
        &self.playback
    }

    pub fn playback_mut(&mut self) -> &mut PlaybackController {
        &mut self.playback
    }
}
