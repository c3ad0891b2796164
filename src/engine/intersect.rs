//! Ray / grid intersection by grid-boundary stepping.
//!
//! A ray is tested against the two families of grid lines separately:
//!
//! ```text
//!   vertical lines   x = k·bs   probed when cos(angle) ≠ 0
//!   horizontal lines y = k·bs   probed when sin(angle) ≠ 0
//! ```
//!
//! Each search jumps from one line to the next (exactly one block per step)
//! and probes the cell on the far side of the line. The nearer of the two
//! hits wins.

use glam::Vec2;

use crate::engine::types::HitFamily;
use crate::world::OccupancySurface;

/// `|cos|` / `|sin|` below this: the ray runs parallel to that line family.
const AXIS_EPSILON: f32 = 1e-6;

/// Slack on the valid-range test so hits exactly on a border line survive
/// rounding.
const RANGE_EPSILON: f32 = 1e-3;

/// Where a ray struck a wall.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    pub point: Vec2,
    /// Raw Euclidean distance from the ray origin.
    pub distance: f32,
    pub family: HitFamily,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RayHit {
    Wall(Intersection),
    /// Neither family produced an in-range hit.
    Void,
}

/// Casts rays against one occupancy surface at a fixed block size.
///
/// Holds only shared borrows, so one intersector can serve every worker of
/// a frame.
#[derive(Clone, Copy)]
pub struct RayIntersector<'a> {
    surface: &'a OccupancySurface,
    block: f32,
    max_steps: usize,
}

impl<'a> RayIntersector<'a> {
    pub fn new(surface: &'a OccupancySurface, block_size: usize) -> Self {
        let bs = block_size.max(1);
        Self {
            surface,
            block: bs as f32,
            // every line inside the map plus the two edges
            max_steps: surface.width().max(surface.height()) / bs + 2,
        }
    }

    /// Nearest wall crossing along `angle` from `origin`.
    pub fn cast_ray(&self, origin: Vec2, angle: f32) -> RayHit {
        let (sin, cos) = angle.sin_cos();

        let vertical = self
            .vertical_crossing(origin, sin, cos)
            .map(|p| Self::candidate(origin, p, HitFamily::Vertical))
            .filter(|c| self.in_range(c.point));
        let horizontal = self
            .horizontal_crossing(origin, sin, cos)
            .map(|p| Self::candidate(origin, p, HitFamily::Horizontal))
            .filter(|c| self.in_range(c.point));

        match (horizontal, vertical) {
            (Some(h), Some(v)) if h.distance <= v.distance => RayHit::Wall(h),
            (Some(_), Some(v)) => RayHit::Wall(v),
            (Some(h), None) => RayHit::Wall(h),
            (None, Some(v)) => RayHit::Wall(v),
            (None, None) => RayHit::Void,
        }
    }

    /*──────────────────────── line searches ─────────────────────────*/

    /// First wall behind a line of constant x.
    fn vertical_crossing(&self, origin: Vec2, sin: f32, cos: f32) -> Option<Vec2> {
        if cos.abs() < AXIS_EPSILON {
            return None;
        }
        let bs = self.block;
        let tan = sin / cos;
        let cell = (origin.x / bs).floor();

        // first line ahead, signed step, column offset of the probed cell
        let (first, step, probe) = if cos > 0.0 {
            ((cell + 1.0) * bs, bs, 0)
        } else {
            (cell * bs, -bs, -1)
        };

        for i in 0..self.max_steps {
            let x = first + i as f32 * step;
            let y = origin.y + (x - origin.x) * tan;
            if !y.is_finite() {
                return None;
            }
            if self
                .surface
                .is_wall(x.round() as i32 + probe, y.floor() as i32)
            {
                return Some(Vec2::new(x, y));
            }
        }
        None
    }

    /// First wall behind a line of constant y.
    fn horizontal_crossing(&self, origin: Vec2, sin: f32, cos: f32) -> Option<Vec2> {
        if sin.abs() < AXIS_EPSILON {
            return None;
        }
        let bs = self.block;
        let cot = cos / sin;
        let cell = (origin.y / bs).floor();

        let (first, step, probe) = if sin > 0.0 {
            ((cell + 1.0) * bs, bs, 0)
        } else {
            (cell * bs, -bs, -1)
        };

        for i in 0..self.max_steps {
            let y = first + i as f32 * step;
            let x = origin.x + (y - origin.y) * cot;
            if !x.is_finite() {
                return None;
            }
            if self
                .surface
                .is_wall(x.floor() as i32, y.round() as i32 + probe)
            {
                return Some(Vec2::new(x, y));
            }
        }
        None
    }

    /*──────────────────────── helpers ───────────────────────────────*/

    #[inline]
    fn candidate(origin: Vec2, point: Vec2, family: HitFamily) -> Intersection {
        Intersection {
            point,
            distance: origin.distance(point),
            family,
        }
    }

    /// Hits must lie in `[1, dim - 1]` on both axes; anything on the outer
    /// edge came from leaving the map rather than from a wall.
    fn in_range(&self, p: Vec2) -> bool {
        let max_x = self.surface.width() as f32 - 1.0 + RANGE_EPSILON;
        let max_y = self.surface.height() as f32 - 1.0 + RANGE_EPSILON;
        let min = 1.0 - RANGE_EPSILON;
        p.is_finite() && p.x >= min && p.x <= max_x && p.y >= min && p.y <= max_y
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

    /// `n`×`n` pixels, one-pixel wall ring.
    fn room(n: usize) -> OccupancySurface {
        OccupancySurface::from_fn(n, n, |x, y| x == 0 || y == 0 || x == n - 1 || y == n - 1)
    }

    fn wall(hit: RayHit) -> Intersection {
        match hit {
            RayHit::Wall(i) => i,
            RayHit::Void => panic!("expected a wall hit"),
        }
    }

    #[test]
    fn straight_east_hits_far_wall() {
        let map = room(10);
        let caster = RayIntersector::new(&map, 1);
        let hit = wall(caster.cast_ray(Vec2::new(5.0, 5.0), 0.0));
        assert_eq!(hit.family, HitFamily::Vertical);
        assert_eq!(hit.point, Vec2::new(9.0, 5.0));
        assert!((hit.distance - 4.0).abs() < 1e-5);
    }

    #[test]
    fn axis_aligned_rays_use_the_other_family() {
        let map = room(10);
        let caster = RayIntersector::new(&map, 1);
        let origin = Vec2::new(5.0, 5.0);

        for (angle, family, expect) in [
            (FRAC_PI_2, HitFamily::Horizontal, Vec2::new(5.0, 9.0)),
            (PI, HitFamily::Vertical, Vec2::new(1.0, 5.0)),
            (3.0 * FRAC_PI_2, HitFamily::Horizontal, Vec2::new(5.0, 1.0)),
            (TAU, HitFamily::Vertical, Vec2::new(9.0, 5.0)),
        ] {
            let hit = wall(caster.cast_ray(origin, angle));
            assert_eq!(hit.family, family, "angle {angle}");
            assert!((hit.point - expect).length() < 1e-4, "angle {angle}: {:?}", hit.point);
            assert!((hit.distance - 4.0).abs() < 1e-4);
        }
    }

    #[test]
    fn steep_ray_discards_out_of_range_vertical_candidate() {
        let map = room(10);
        let caster = RayIntersector::new(&map, 1);
        let hit = wall(caster.cast_ray(Vec2::new(5.0, 5.0), 80f32.to_radians()));
        assert_eq!(hit.family, HitFamily::Horizontal);
        assert!((hit.point.y - 9.0).abs() < 1e-5);
        assert!(hit.point.x > 5.0 && hit.point.x < 6.0);
    }

    #[test]
    fn diagonal_picks_nearest() {
        let map = room(10);
        let caster = RayIntersector::new(&map, 1);
        // off-centre origin so the diagonal reaches the right wall first
        let hit = wall(caster.cast_ray(Vec2::new(6.5, 5.0), FRAC_PI_4));
        assert_eq!(hit.family, HitFamily::Vertical);
        assert!((hit.point - Vec2::new(9.0, 7.5)).length() < 1e-4);
    }

    #[test]
    fn tie_prefers_horizontal() {
        let map = room(10);
        let caster = RayIntersector::new(&map, 1);
        // both families reach the (9, 9) corner at the same distance
        let hit = wall(caster.cast_ray(Vec2::new(5.0, 5.0), FRAC_PI_4));
        assert_eq!(hit.family, HitFamily::Horizontal);
        assert!((hit.point - Vec2::new(9.0, 9.0)).length() < 1e-4);
        assert!((hit.distance - 32f32.sqrt()).abs() < 1e-4);
    }

    #[test]
    fn open_map_terminates_with_void() {
        let map = OccupancySurface::from_fn(10, 10, |_, _| false);
        let caster = RayIntersector::new(&map, 1);
        for i in 0..720 {
            let angle = i as f32 * TAU / 720.0;
            assert_eq!(caster.cast_ray(Vec2::new(5.0, 5.0), angle), RayHit::Void);
        }
    }

    #[test]
    fn walled_border_always_hits() {
        let map = room(10);
        let caster = RayIntersector::new(&map, 1);
        for i in 0..720 {
            let angle = i as f32 * TAU / 720.0;
            let hit = wall(caster.cast_ray(Vec2::new(4.3, 6.1), angle));
            assert!(hit.distance > 0.0 && hit.distance < 12.0);
        }
    }

    #[test]
    fn block_stepping_lands_on_block_lines() {
        // 10×10 blocks of 4 px, one-block wall ring, pillar block at (7, 5)
        let bs = 4;
        let map = OccupancySurface::from_fn(40, 40, |x, y| {
            let (bx, by) = (x / bs, y / bs);
            bx == 0 || by == 0 || bx == 9 || by == 9 || (bx, by) == (7, 5)
        });
        let caster = RayIntersector::new(&map, bs);

        let hit = wall(caster.cast_ray(Vec2::new(18.0, 22.0), 0.0));
        assert_eq!(hit.point, Vec2::new(28.0, 22.0));
        assert!((hit.distance - 10.0).abs() < 1e-5);

        let hit = wall(caster.cast_ray(Vec2::new(18.0, 10.0), 0.0));
        assert_eq!(hit.point, Vec2::new(36.0, 10.0));
    }

    #[test]
    fn empty_surface_is_void() {
        let map = OccupancySurface::empty();
        let caster = RayIntersector::new(&map, 8);
        assert_eq!(caster.cast_ray(Vec2::new(3.0, 3.0), 0.3), RayHit::Void);
    }
}
