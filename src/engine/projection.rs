use crate::engine::types::Screen;

/// Smallest corrected distance fed into the height formula.
pub const MIN_DISTANCE: f32 = 1e-3;

/// Darkest shade a wall can reach at or beyond the falloff distance.
pub const MIN_SHADE: u8 = 48;

/// On-screen placement of one wall slab.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    /// Distance to the projection plane (fisheye-free), clamped.
    pub corrected: f32,
    /// Slab height in pixels; may exceed the screen.
    pub height: f32,
    /// Row of the slab's top edge; negative when the slab overflows.
    pub top: f32,
}

/// Pixel-per-map-unit scale for viewport width `w`.
///
/// ```text
/// focal = w / (2 * tan(fov/2))
/// ```
#[inline]
pub fn focal_length(screen_w: usize, fov: f32) -> f32 {
    screen_w as f32 * 0.5 / (fov * 0.5).tan()
}

/// Distance to the projection plane instead of to the eye point.
#[inline]
pub fn corrected_distance(ray_angle: f32, facing: f32, raw: f32) -> f32 {
    raw * (ray_angle - facing).cos()
}

/// Fisheye-correct `raw` and turn it into a centred slab.
pub fn project(
    ray_angle: f32,
    facing: f32,
    raw: f32,
    screen: &Screen,
    fov: f32,
    wall_size: f32,
) -> Projection {
    let corrected = corrected_distance(ray_angle, facing, raw);
    // NaN also lands on the floor value
    let corrected = if corrected > MIN_DISTANCE {
        corrected
    } else {
        MIN_DISTANCE
    };
    let height = wall_size / corrected * focal_length(screen.w, fov);
    Projection {
        corrected,
        height,
        top: screen.half_h - height * 0.5,
    }
}

/// Linear darkening: 255 at distance 0, [`MIN_SHADE`] from `falloff` on.
pub fn shade(corrected: f32, falloff: f32) -> u8 {
    if falloff <= 0.0 {
        return u8::MAX;
    }
    let light = (1.0 - corrected / falloff).clamp(0.0, 1.0);
    let span = (u8::MAX - MIN_SHADE) as f32;
    MIN_SHADE + (light * span).round() as u8
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
