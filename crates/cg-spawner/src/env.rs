//! Host environment inputs sampled once per tick.

use cg_core::SimTime;

/// One tick's environment sample.
///
/// The "pause" here is data, not a scheduling primitive: a paused tick still
/// reaches the scheduler, it just doesn't count toward the spawn interval.
#[derive(Copy, Clone, Debug)]
pub struct TickInputs {
    pub is_daytime:       bool,
    pub is_practice_mode: bool,
    pub is_paused:        bool,
    /// Monotonic simulation time.
    pub now:              SimTime,
    /// Customer groups currently waiting in the host's queue.
    pub queue_occupancy:  u32,
}

impl TickInputs {
    /// An unpaused daytime tick with an empty queue.
    pub fn daytime(now: SimTime) -> Self {
        Self {
            is_daytime:       true,
            is_practice_mode: false,
            is_paused:        false,
            now,
            queue_occupancy:  0,
        }
    }

    /// A nighttime tick (ends any active session).
    pub fn night(now: SimTime) -> Self {
        Self { is_daytime: false, ..Self::daytime(now) }
    }

    pub fn paused(mut self) -> Self {
        self.is_paused = true;
        self
    }

    pub fn practice(mut self) -> Self {
        self.is_practice_mode = true;
        self
    }

    pub fn queue(mut self, occupancy: u32) -> Self {
        self.queue_occupancy = occupancy;
        self
    }
}

/// The host simulation's side of the boundary.
///
/// Implement the five accessors; [`sample`][Self::sample] assembles a
/// [`TickInputs`] from them.  All accessors are polled every tick — there is
/// no event-driven path, including for the daytime transition.
pub trait SimEnvironment {
    fn is_daytime(&self) -> bool;
    fn is_practice_mode(&self) -> bool;
    fn is_paused(&self) -> bool;
    /// Monotonic simulation time, in seconds.
    fn now(&self) -> SimTime;
    /// Customer groups currently waiting in the queue.
    fn queue_occupancy(&self) -> u32;

    fn sample(&self) -> TickInputs {
        TickInputs {
            is_daytime:       self.is_daytime(),
            is_practice_mode: self.is_practice_mode(),
            is_paused:        self.is_paused(),
            now:              self.now(),
            queue_occupancy:  self.queue_occupancy(),
        }
    }
}
