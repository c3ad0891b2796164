//! Frame-stable map snapshots.
//!
//! A render pass holds an `Arc<OccupancySurface>` for its whole duration.
//! Reloading a map builds a fresh surface and swaps the pointer; passes
//! already in flight keep reading the old one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use super::OccupancySurface;

pub struct MapSlot {
    current: RwLock<Arc<OccupancySurface>>,
    generation: AtomicU64,
}

impl MapSlot {
    pub fn new(surface: OccupancySurface) -> Self {
        Self {
            current: RwLock::new(Arc::new(surface)),
            generation: AtomicU64::new(0),
        }
    }

    /// The map to use for the next frame.
    pub fn snapshot(&self) -> Arc<OccupancySurface> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Swap in a new map; returns the new generation number.
    pub fn replace(&self, surface: OccupancySurface) -> u64 {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(surface);
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        log::info!(
            "map snapshot #{generation} installed ({}x{})",
            guard.width(),
            guard.height()
        );
        generation
    }

    /// Number of replacements since construction.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn held_snapshot_survives_replace() {
        let slot = MapSlot::new(OccupancySurface::from_fn(2, 2, |_, _| false));
        let old = slot.snapshot();

        let generation = slot.replace(OccupancySurface::from_fn(3, 3, |_, _| true));
        assert_eq!(generation, 1);
        assert_eq!(slot.generation(), 1);

        // in-flight reader still sees the original map
        assert_eq!(old.width(), 2);
        assert!(!old.is_wall(0, 0));

        let new = slot.snapshot();
        assert_eq!(new.width(), 3);
        assert!(new.is_wall(0, 0));
    }
}
