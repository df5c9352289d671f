//! Simulation time model.
//!
//! # Design
//!
//! The host simulation reports a monotonically increasing total-time value in
//! seconds; the scheduler never reads a wall clock.  `SimTime` wraps that
//! value so interval arithmetic reads as time arithmetic rather than bare
//! float juggling:
//!
//!   next_spawn = now.offset(interval_secs)
//!   remaining  = next_spawn - now          // f64 seconds
//!
//! Seconds stay fractional end-to-end because the spawn interval is
//! configured in deciseconds (0.5 s granularity).

use std::fmt;

/// An absolute point on the host simulation's clock, in seconds.
///
/// Ordering and subtraction are the only operations the scheduler needs;
/// there is deliberately no `Add<SimTime>` — summing two absolute times is
/// never meaningful.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    /// The time `secs` seconds after `self`.
    #[inline]
    pub fn offset(self, secs: f64) -> SimTime {
        SimTime(self.0 + secs)
    }

    /// Raw seconds value.
    #[inline]
    pub fn secs(self) -> f64 {
        self.0
    }
}

impl std::ops::Sub for SimTime {
    type Output = f64;

    /// Seconds elapsed from `rhs` to `self` (negative if `rhs` is later).
    #[inline]
    fn sub(self, rhs: SimTime) -> f64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}s", self.0)
    }
}
