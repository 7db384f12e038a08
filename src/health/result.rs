// src/health/result.rs
use super::Classification;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Outcome of exactly one liveness check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    Success {
        status_code: u16,
        headers: HashMap<String, String>,
        body_length: usize,
        classification: Classification,
    },
    Failure {
        reason: String,
    },
}

impl CheckResult {
    pub fn is_success(&self) -> bool {
        matches!(self, CheckResult::Success { .. })
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            CheckResult::Success { status_code, .. } => Some(*status_code),
            CheckResult::Failure { .. } => None,
        }
    }

    pub fn classification(&self) -> Option<Classification> {
        match self {
            CheckResult::Success { classification, .. } => Some(*classification),
            CheckResult::Failure { .. } => None,
        }
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            CheckResult::Success { .. } => None,
            CheckResult::Failure { reason } => Some(reason),
        }
    }
}

/// Progress of a single check.
///
/// `Idle -> Connecting -> Receiving -> Complete`, or `Errored` from
/// `Connecting`/`Receiving`. `Complete` and `Errored` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Idle,
    Connecting,
    Receiving,
    Complete,
    Errored,
}

impl CheckState {
    pub fn is_terminal(self) -> bool {
        matches!(self, CheckState::Complete | CheckState::Errored)
    }

    fn can_advance_to(self, next: CheckState) -> bool {
        use CheckState::*;
        matches!(
            (self, next),
            (Idle, Connecting)
                | (Connecting, Receiving)
                | (Connecting, Errored)
                | (Receiving, Complete)
                | (Receiving, Errored)
        )
    }

    /// Move to `next`; returns false and stays put on an illegal transition.
    pub fn advance(&mut self, next: CheckState) -> bool {
        if !self.can_advance_to(next) {
            debug!("Ignoring check state transition {} -> {}", self, next);
            return false;
        }
        debug!("Check state {} -> {}", self, next);
        *self = next;
        true
    }
}

impl fmt::Display for CheckState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CheckState::Idle => "idle",
            CheckState::Connecting => "connecting",
            CheckState::Receiving => "receiving",
            CheckState::Complete => "complete",
            CheckState::Errored => "errored",
        };
        f.write_str(name)
    }
}
