use std::time::Instant;

use crate::metrics::PassRecord;
use crate::types::Distance;

/// Tracks the progress of a local search over its passes.
#[derive(Debug)]
pub struct SearchProgress {
    /// Number of passes started so far
    pub pass: usize,
    /// Moves adopted so far
    pub moves: usize,
    /// Candidate moves evaluated so far, over all passes
    pub evaluations: usize,
    /// Length of the current tour
    pub incumbent_length: Distance,
    /// Evaluations in the running pass
    pass_evaluations: usize,
    pass_started: Instant,
}

impl SearchProgress {
    pub fn new(initial_length: Distance) -> Self {
        SearchProgress {
            pass: 0,
            moves: 0,
            evaluations: 0,
            incumbent_length: initial_length,
            pass_evaluations: 0,
            pass_started: Instant::now(),
        }
    }

    pub fn start_pass(&mut self) {
        self.pass += 1;
        self.pass_evaluations = 0;
        self.pass_started = Instant::now();
    }

    #[inline(always)]
    pub fn record_evaluation(&mut self) {
        self.pass_evaluations += 1;
        self.evaluations += 1;
    }

    pub fn record_move(&mut self, new_length: Distance) {
        debug_assert!(new_length < self.incumbent_length, "moves must strictly improve");
        self.moves += 1;
        self.incumbent_length = new_length;
    }

    /// Summarises the running pass.
    pub fn finish_pass(&self, improved: bool) -> PassRecord {
        PassRecord {
            pass: self.pass,
            evaluations: self.pass_evaluations,
            improved,
            length: self.incumbent_length,
            time: self.pass_started.elapsed().as_secs_f64(),
        }
    }
}
