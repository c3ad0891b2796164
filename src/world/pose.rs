use glam::Vec2;
use std::f32::consts::TAU;

/// Viewer position and heading in map space.
///
/// * Map space is image space: +X right, +Y **down**, one unit per pixel.
/// * `angle` is radians from +X towards +Y and is never wrapped; use
///   [`Pose::display_angle`] when showing it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub pos: Vec2,
    pub angle: f32,
}

impl Pose {
    pub fn new(pos: Vec2, angle: f32) -> Self {
        Self { pos, angle }
    }

    /*──────────────────────── derived vectors ───────────────────────*/

    /// Unit vector along the current heading.
    #[inline(always)]
    pub fn forward(&self) -> Vec2 {
        let (s, c) = self.angle.sin_cos();
        Vec2::new(c, s)
    }

    /// Heading folded into `[0, TAU)`.
    #[inline]
    pub fn display_angle(&self) -> f32 {
        self.angle.rem_euclid(TAU)
    }

    /*──────────────────────── movement helpers ──────────────────────*/

    /// Position reached by walking `distance` along the heading
    /// (negative = backwards). Does not move the pose.
    #[inline]
    pub fn stepped(&self, distance: f32) -> Vec2 {
        self.pos + self.forward() * distance
    }

    /// Rotate; positive turns clockwise on screen (towards +Y).
    pub fn turn(&mut self, delta: f32) {
        self.angle += delta;
    }

    /*──────────────────────── per-column rays ───────────────────────*/

    /// Angle of the ray through screen column `x` of `width`.
    ///
    /// ```text
    /// angle = facing - fov/2 + x * (fov / width)
    /// ```
    #[inline]
    pub fn ray_angle(&self, x: usize, width: usize, fov: f32) -> f32 {
        self.angle - fov * 0.5 + x as f32 * (fov / width as f32)
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
