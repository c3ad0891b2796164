//! Point-in-wall movement gate.
//!
//! No swept test: a move is allowed iff the destination pixel is open.
//! Off-map destinations are walls and therefore always rejected.

use glam::Vec2;

use crate::world::OccupancySurface;

/// True if the viewer may stand at `pos`.
#[inline]
pub fn can_move_to(surface: &OccupancySurface, pos: Vec2) -> bool {
    if !pos.is_finite() {
        return false;
    }
    !surface.is_wall(pos.x.floor() as i32, pos.y.floor() as i32)
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
