//! Random draws used by the simulation.
//!
//! # Contract
//!
//! Models only ever ask for two things:
//!
//! - a uniform draw in `[0, 1)`;
//! - an exponential draw with a given mean, obtained from a uniform draw by
//!   the inverse-CDF transform `-mean * ln(1 - U)`.
//!
//! Both live on the [`RandomSource`] trait so tests can substitute a
//! scripted sequence of uniforms and replay an exact scenario.  Every other
//! derived draw (coin flips, weighted choices) is expressed in terms of
//! `uniform()` so a run consumes exactly one uniform per decision.
//!
//! # Determinism
//!
//! [`SimRng`] wraps a `SmallRng` seeded from the run's seed.  Replications
//! derive their seeds from a root `SimRng` with [`SimRng::child`], so a batch
//! of runs is reproducible from one number.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── RandomSource ──────────────────────────────────────────────────────────────

/// A source of uniform draws, plus the derived draws the models need.
pub trait RandomSource {
    /// A uniformly distributed value in `[0, 1)`.
    fn uniform(&mut self) -> f64;

    /// An exponentially distributed value with the given mean.
    #[inline]
    fn exponential(&mut self, mean: f64) -> f64 {
        -mean * (1.0 - self.uniform()).ln()
    }

    /// `true` with probability one half.
    #[inline]
    fn coin_flip(&mut self) -> bool {
        self.uniform() < 0.5
    }

    /// Pick an index into `weights` with probability proportional to its
    /// weight.  Returns `None` for an empty or all-zero slice.
    fn weighted_index(&mut self, weights: &[u32]) -> Option<usize> {
        let total: u32 = weights.iter().sum();
        if total == 0 {
            return None;
        }
        let target = self.uniform() * total as f64;
        let mut acc = 0.0;
        for (i, &w) in weights.iter().enumerate() {
            acc += w as f64;
            if target < acc {
                return Some(i);
            }
        }
        // `uniform()` is strictly below 1, so this is only reachable through
        // rounding at the very top of the range.
        weights.iter().rposition(|&w| w > 0)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG.
///
/// The driver loop is single-threaded, so one `SimRng` per run is all that is
/// needed.  Parallel replications each get their own child.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset, e.g. one per
    /// replication of an experiment.
    pub fn child(&mut self, offset: u64) -> SimRng {
        SimRng(SmallRng::seed_from_u64(self.child_seed(offset)))
    }

    /// Draw a seed for a child run; `child(offset)` is
    /// `SimRng::new(child_seed(offset))`.  Replications record this seed so a
    /// single run can be replayed on its own.
    pub fn child_seed(&mut self, offset: u64) -> u64 {
        self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT)
    }
}

impl RandomSource for SimRng {
    #[inline]
    fn uniform(&mut self) -> f64 {
        // `Standard` for f64 samples [0, 1).
        self.0.r#gen::<f64>()
    }
}
