//! Simulation time model.
//!
//! # Design
//!
//! The surrounding loop advances a monotonically increasing `Tick` counter
//! and hands every controller the elapsed milliseconds for that tick.
//! Controllers never read wall-clock time; all waits are explicit countdown
//! state ([`ResumeTimer`]) advanced by those per-tick deltas.

use std::fmt;

use crate::{PfError, PfResult};

// ── ResumeTimer ───────────────────────────────────────────────────────────────

/// A resumable countdown in milliseconds.
///
/// `reset(n)` arms the timer, `update(diff)` consumes time, and `passed()` is
/// true once the remaining time reaches zero.  A timer reset to `0` is
/// immediately passed.  The remaining time is signed so an overshooting
/// `update` never wraps.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ResumeTimer {
    remaining_ms: i64,
}

impl ResumeTimer {
    #[inline]
    pub fn new(ms: u32) -> Self {
        Self { remaining_ms: ms as i64 }
    }

    #[inline]
    pub fn reset(&mut self, ms: u32) {
        self.remaining_ms = ms as i64;
    }

    #[inline]
    pub fn update(&mut self, diff_ms: u32) {
        self.remaining_ms -= diff_ms as i64;
    }

    #[inline]
    pub fn passed(&self) -> bool {
        self.remaining_ms <= 0
    }

    /// Milliseconds left before the timer passes (0 once passed).
    #[inline]
    pub fn remaining_ms(&self) -> u32 {
        self.remaining_ms.clamp(0, u32::MAX as i64) as u32
    }
}

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current tick and the fixed length of one tick.
#[derive(Clone, Debug)]
pub struct SimClock {
    /// Milliseconds of simulated time per tick.
    pub tick_ms: u32,
    /// The current tick: advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(tick_ms: u32) -> Self {
        Self { tick_ms, current_tick: Tick::ZERO }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Elapsed simulated milliseconds since tick 0.
    #[inline]
    pub fn elapsed_ms(&self) -> u64 {
        self.current_tick.0 * self.tick_ms as u64
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} ms)", self.current_tick, self.elapsed_ms())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level tick-loop configuration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Milliseconds per tick.  Default: 100.
    pub tick_ms: u32,

    /// Total ticks to simulate in `Sim::run`.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical trigger rolls.
    pub seed: u64,
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.tick_ms)
    }

    pub fn validate(&self) -> PfResult<()> {
        if self.tick_ms == 0 {
            return Err(PfError::Config("tick_ms must be positive".into()));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { tick_ms: 100, total_ticks: 600, seed: 0 }
    }
}
