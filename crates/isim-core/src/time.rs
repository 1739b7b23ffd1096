//! Simulated time model.
//!
//! # Design
//!
//! Time is continuous: a `SimTime` is a non-negative `f64` number of
//! simulated time units (the reference configuration reads them as seconds).
//! Nothing advances on a fixed tick.  "Now" is the timestamp of the event
//! most recently removed from the future event list, and `SimClock` is the
//! only place that value is stored.

use std::fmt;
use std::ops::{Add, Sub};

use crate::{CoreError, CoreResult};

// ── SimTime ───────────────────────────────────────────────────────────────────

/// An absolute point on the simulated time line.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    #[inline]
    pub fn as_f64(self) -> f64 {
        self.0
    }

    /// Time units elapsed from `earlier` to `self`.  Negative if `earlier`
    /// is actually later.
    #[inline]
    pub fn since(self, earlier: SimTime) -> f64 {
        self.0 - earlier.0
    }
}

impl Add<f64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: f64) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

impl Sub for SimTime {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: SimTime) -> f64 {
        self.0 - rhs.0
    }
}

impl From<f64> for SimTime {
    #[inline]
    fn from(t: f64) -> SimTime {
        SimTime(t)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={:.4}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks "now" for a discrete-event run.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    now:      SimTime,
    /// Number of times the clock has been moved to an event timestamp.
    advances: u64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn now(&self) -> SimTime {
        self.now
    }

    #[inline]
    pub fn advances(&self) -> u64 {
        self.advances
    }

    /// Jump the clock to the timestamp of the event being dispatched.
    ///
    /// Timestamps are not required to be strictly increasing (ties are
    /// common), but they must never go backwards.
    #[inline]
    pub fn advance_to(&mut self, t: SimTime) {
        debug_assert!(t >= self.now, "clock moved backwards: {} -> {}", self.now, t);
        self.now = t;
        self.advances += 1;
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (event #{})", self.now, self.advances)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Run-level configuration shared by every model.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Simulated duration after which no new arrivals are generated.
    /// In-flight events still drain after this point.
    pub horizon: f64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Emit one trace line per dispatched event.
    pub trace: bool,
}

impl SimConfig {
    pub const DEFAULT_HORIZON: f64 = 500.0;

    #[inline]
    pub fn horizon_time(&self) -> SimTime {
        SimTime(self.horizon)
    }

    /// Reject horizons that would make the run meaningless.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.horizon.is_finite() || self.horizon < 0.0 {
            return Err(CoreError::Config(format!(
                "simulation horizon must be a finite, non-negative number (got {})",
                self.horizon
            )));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            horizon: Self::DEFAULT_HORIZON,
            seed:    42,
            trace:   false,
        }
    }
}
