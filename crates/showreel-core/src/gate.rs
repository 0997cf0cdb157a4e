//! Admin gate - hidden gesture that unlocks the editor
//!
//! A run of quick activations on the logo (five within three seconds by
//! default) flips the page between locked and unlocked. Once unlocked, an
//! explicit control switches between read-only and editing.
//!
//! This only hides the editing controls from casual visitors. Anyone can
//! click five times; it is not access control and must not guard anything
//! that needs real authentication.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::PortfolioError;

/// Gesture tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Activations needed to toggle the lock
    pub taps: u32,
    /// Window, measured from the first activation of a run
    pub window_ms: u64,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            taps: 5,
            window_ms: 3_000,
        }
    }
}

impl GateConfig {
    pub fn window(&self) -> Duration {
        Duration::from_millis(self.window_ms)
    }
}

/// Editing availability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateState {
    /// Editing controls hidden
    #[default]
    Locked,
    /// Unlocked, content shown as static text
    ReadOnly,
    /// Unlocked, content shown as inputs
    Editing,
}

/// Result of feeding one activation to the gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Still collecting; `count` activations so far in this run
    Counting { count: u32 },
    /// The run completed and the gate flipped to `state`
    Toggled { state: GateState },
}

/// Edit-mode state machine
#[derive(Debug, Clone)]
pub struct AdminGate {
    config: GateConfig,
    state: GateState,
    count: u32,
    run_started: Option<Instant>,
}

impl Default for AdminGate {
    fn default() -> Self {
        Self::new(GateConfig::default())
    }
}

impl AdminGate {
    pub fn new(config: GateConfig) -> Self {
        Self {
            config,
            state: GateState::Locked,
            count: 0,
            run_started: None,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_locked(&self) -> bool {
        self.state == GateState::Locked
    }

    pub fn is_editing(&self) -> bool {
        self.state == GateState::Editing
    }

    /// Activations counted in the current run as of `now`
    pub fn pending_count(&self, now: Instant) -> u32 {
        if self.run_expired(now) {
            0
        } else {
            self.count
        }
    }

    fn run_expired(&self, now: Instant) -> bool {
        match self.run_started {
            Some(start) => now.saturating_duration_since(start) >= self.config.window(),
            None => true,
        }
    }

    fn reset_run(&mut self) {
        self.count = 0;
        self.run_started = None;
    }

    /// Drop an expired run. Call from a timer to keep the counter honest
    /// while no activations arrive.
    pub fn tick(&mut self, now: Instant) {
        if self.run_started.is_some() && self.run_expired(now) {
            debug!(count = self.count, "Gesture window expired");
            self.reset_run();
        }
    }

    /// Register one activation of the trigger region at `now`
    pub fn activate(&mut self, now: Instant) -> GestureOutcome {
        self.tick(now);

        if self.run_started.is_none() {
            self.run_started = Some(now);
        }
        self.count += 1;

        if self.count < self.config.taps {
            return GestureOutcome::Counting { count: self.count };
        }

        self.reset_run();
        self.state = match self.state {
            GateState::Locked => GateState::ReadOnly,
            GateState::ReadOnly | GateState::Editing => GateState::Locked,
        };
        info!(state = ?self.state, "Admin gate toggled");
        GestureOutcome::Toggled { state: self.state }
    }

    /// Switch between read-only and editing. Fails while locked.
    pub fn toggle_editing(&mut self) -> Result<GateState, PortfolioError> {
        self.state = match self.state {
            GateState::Locked => return Err(PortfolioError::GateLocked),
            GateState::ReadOnly => GateState::Editing,
            GateState::Editing => GateState::ReadOnly,
        };
        debug!(state = ?self.state, "Edit mode toggled");
        Ok(self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(start: Instant, secs: f64) -> Instant {
        start + Duration::from_secs_f64(secs)
    }

    fn tap_times(gate: &mut AdminGate, start: Instant, times: &[f64]) -> Vec<GestureOutcome> {
        times.iter().map(|t| gate.activate(at(start, *t))).collect()
    }

    #[test]
    fn test_initial_state_locked() {
        let gate = AdminGate::default();
        assert_eq!(gate.state(), GateState::Locked);
        assert!(!gate.is_editing());
    }

    #[test]
    fn test_five_taps_within_window_unlock() {
        let mut gate = AdminGate::default();
        let start = Instant::now();

        let outcomes = tap_times(&mut gate, start, &[0.0, 0.4, 0.8, 1.2, 1.6]);

        assert_eq!(outcomes[3], GestureOutcome::Counting { count: 4 });
        assert_eq!(
            outcomes[4],
            GestureOutcome::Toggled {
                state: GateState::ReadOnly
            }
        );
        assert_eq!(gate.pending_count(at(start, 1.6)), 0);
    }

    #[test]
    fn test_four_taps_then_pause_resets() {
        let mut gate = AdminGate::default();
        let start = Instant::now();

        tap_times(&mut gate, start, &[0.0, 0.5, 1.0, 1.5]);
        assert_eq!(gate.pending_count(at(start, 1.5)), 4);

        gate.tick(at(start, 5.0));
        assert_eq!(gate.pending_count(at(start, 5.0)), 0);
        assert_eq!(gate.state(), GateState::Locked);
    }

    #[test]
    fn test_tap_after_expiry_starts_new_run() {
        let mut gate = AdminGate::default();
        let start = Instant::now();

        tap_times(&mut gate, start, &[0.0, 0.5, 1.0, 1.5]);
        let outcome = gate.activate(at(start, 5.0));

        assert_eq!(outcome, GestureOutcome::Counting { count: 1 });
        assert_eq!(gate.state(), GateState::Locked);
    }

    #[test]
    fn test_slow_taps_never_unlock() {
        let mut gate = AdminGate::default();
        let start = Instant::now();

        // Five taps spread over more than three seconds
        tap_times(&mut gate, start, &[0.0, 1.0, 2.0, 2.9, 3.1]);
        assert_eq!(gate.state(), GateState::Locked);
        assert_eq!(gate.pending_count(at(start, 3.1)), 1);
    }

    #[test]
    fn test_second_gesture_locks_again() {
        let mut gate = AdminGate::default();
        let start = Instant::now();

        tap_times(&mut gate, start, &[0.0, 0.1, 0.2, 0.3, 0.4]);
        gate.toggle_editing().unwrap();
        assert!(gate.is_editing());

        let outcomes = tap_times(&mut gate, start, &[0.5, 0.6, 0.7, 0.8, 0.9]);
        assert_eq!(
            outcomes[4],
            GestureOutcome::Toggled {
                state: GateState::Locked
            }
        );
        assert!(!gate.is_editing());
    }

    #[test]
    fn test_toggle_editing_requires_unlock() {
        let mut gate = AdminGate::default();
        assert!(matches!(
            gate.toggle_editing(),
            Err(PortfolioError::GateLocked)
        ));
        assert_eq!(gate.state(), GateState::Locked);
    }

    #[test]
    fn test_toggle_editing_flips() {
        let mut gate = AdminGate::default();
        let start = Instant::now();
        tap_times(&mut gate, start, &[0.0, 0.1, 0.2, 0.3, 0.4]);

        assert_eq!(gate.toggle_editing().unwrap(), GateState::Editing);
        assert_eq!(gate.toggle_editing().unwrap(), GateState::ReadOnly);
    }

    #[test]
    fn test_custom_config() {
        let mut gate = AdminGate::new(GateConfig {
            taps: 3,
            window_ms: 1_000,
        });
        let start = Instant::now();

        let outcomes = tap_times(&mut gate, start, &[0.0, 0.2, 0.4]);
        assert!(matches!(outcomes[2], GestureOutcome::Toggled { .. }));
    }
}
