//! Top-left minimap drawn over a finished frame.

use super::{Rgba, Software};
use crate::world::{OccupancySurface, Pose};

const MINIMAP_SIZE: usize = 100;
const MARKER: usize = 5;

const MAP_WALL: Rgba = 0xFF_30_30_30;
const MAP_OPEN: Rgba = 0xFF_E0_E0_E0;
const MAP_VIEWER: Rgba = 0xFF_00_C0_00;

impl Software {
    /// Nearest-neighbour downscale of the map into a `MINIMAP_SIZE` square
    /// plus a small viewer marker. Call between `begin_frame` and
    /// `end_frame`; clipped to the frame-buffer.
    pub fn overlay_minimap(&mut self, surface: &OccupancySurface, pose: &Pose) {
        let (mw, mh) = (surface.width(), surface.height());
        if mw == 0 || mh == 0 {
            return;
        }
        let size_x = MINIMAP_SIZE.min(self.width);
        let size_y = MINIMAP_SIZE.min(self.height);

        for sy in 0..size_y {
            let my = sy * mh / MINIMAP_SIZE;
            for sx in 0..size_x {
                let mx = sx * mw / MINIMAP_SIZE;
                self.scratch[sy * self.width + sx] = if surface.is_wall(mx as i32, my as i32) {
                    MAP_WALL
                } else {
                    MAP_OPEN
                };
            }
        }

        /* viewer marker, centred on the scaled position */
        let cx = pose.pos.x / mw as f32 * MINIMAP_SIZE as f32;
        let cy = pose.pos.y / mh as f32 * MINIMAP_SIZE as f32;
        if !(cx.is_finite() && cy.is_finite()) {
            return;
        }
        let half = (MARKER / 2) as i64;
        let (cx, cy) = (cx as i64, cy as i64);
        for y in cy - half..=cy + half {
            for x in cx - half..=cx + half {
                if (0..size_x as i64).contains(&x) && (0..size_y as i64).contains(&y) {
                    self.scratch[y as usize * self.width + x as usize] = MAP_VIEWER;
                }
            }
        }
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
