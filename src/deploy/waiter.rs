//! Bounded wait-for-stability state machine

use std::time::Duration;

/// Waiter settings
#[derive(Debug, Clone)]
pub struct WaitSettings {
    /// Delay between stability checks
    pub interval: Duration,

    /// Maximum wall-clock time to wait before giving up
    pub wait_budget: Duration,
}

impl Default for WaitSettings {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(15),
            wait_budget: Duration::from_secs(30 * 60),
        }
    }
}

impl WaitSettings {
    /// Attempt budget derived from the wall-clock budget. Rounds up so a
    /// budget that is not an exact multiple of the interval still gets its
    /// full wait; always at least one attempt, saturating for budgets too
    /// large to count.
    pub fn max_attempts(&self) -> u32 {
        let interval = self.interval.as_secs().max(1);
        let attempts = self.wait_budget.as_secs().div_ceil(interval).max(1);
        u32::try_from(attempts).unwrap_or(u32::MAX)
    }
}

/// Wait cycle state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitState {
    /// Still waiting for the service to settle
    Polling,

    /// Steady state observed
    Stable,

    /// Attempt budget exhausted without observing a steady state
    TimedOut,
}

impl WaitState {
    /// Terminal states absorb further observations
    pub fn is_terminal(&self) -> bool {
        *self != WaitState::Polling
    }
}

/// One wait cycle over a service's deployment. Owns the attempt counter for
/// the duration of the cycle and is discarded when the cycle ends.
#[derive(Debug, Clone)]
pub struct StabilityWaiter {
    settings: WaitSettings,
    max_attempts: u32,
    attempts_made: u32,
    state: WaitState,
}

impl StabilityWaiter {
    /// Create a new waiter in the polling state
    pub fn new(settings: WaitSettings) -> Self {
        let max_attempts = settings.max_attempts();
        Self {
            settings,
            max_attempts,
            attempts_made: 0,
            state: WaitState::Polling,
        }
    }

    /// Get current state
    pub fn state(&self) -> &WaitState {
        &self.state
    }

    /// Number of stability checks recorded so far
    pub fn attempts_made(&self) -> u32 {
        self.attempts_made
    }

    /// Attempt budget for this cycle
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Delay to apply between checks
    pub fn interval(&self) -> Duration {
        self.settings.interval
    }

    /// Record the result of one stability check and transition.
    ///
    /// `stable = false` covers both a not-yet-settled service and a transient
    /// check failure; the two are not distinguished at this level.
    pub fn observe(&mut self, stable: bool) -> &WaitState {
        if self.state.is_terminal() {
            return &self.state;
        }

        self.attempts_made += 1;

        if stable {
            self.state = WaitState::Stable;
        } else if self.attempts_made >= self.max_attempts {
            self.state = WaitState::TimedOut;
        }

        &self.state
    }
}
