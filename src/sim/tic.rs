use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::time::{Duration, Instant};

use super::{InputState, MoveTuning, systems};
use crate::world::{OccupancySurface, Pose};

pub const SIM_FPS: u32 = 60;
const TIC: Duration = Duration::from_micros(1_000_000 / SIM_FPS as u64);

/// Upper bound on tics run by one `pump`; after a long stall the clock is
/// resynchronised instead of replaying every missed tic.
const MAX_TICS_PER_PUMP: u32 = 8;

/// Owns the viewer pose and advances it at a fixed rate.
pub struct TicRunner {
    pose: Pose,
    tuning: MoveTuning,
    last: Instant,
}

impl TicRunner {
    pub fn new(pose: Pose, tuning: MoveTuning) -> Self {
        Self {
            pose,
            tuning,
            last: Instant::now(),
        }
    }

    #[inline]
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Advance enough tics to synchronise simulation with real time.
    /// Returns the number of tics run.
    pub fn pump(&mut self, input: InputState, surface: &OccupancySurface) -> u32 {
        let mut ran = 0;
        while self.last.elapsed() >= TIC {
            if ran == MAX_TICS_PER_PUMP {
                log::debug!("sim fell behind; dropping missed tics");
                self.last = Instant::now();
                break;
            }
            self.tick(input, surface);
            self.last += TIC;
            ran += 1;
        }
        ran
    }

    /// Run exactly one tic.
    pub fn tick(&mut self, input: InputState, surface: &OccupancySurface) {
        systems::apply_input(&mut self.pose, input, surface, &self.tuning);
    }
}

/// Cooperative shutdown request shared between the front-end and anything
/// that loops on its behalf.
#[derive(Clone, Debug, Default)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.0.store(true, Ordering::Release);
    }

    #[inline]
    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
