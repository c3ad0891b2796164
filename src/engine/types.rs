use std::f32::consts::FRAC_PI_3;

/// Constants that depend on the *frame-buffer*, not on the map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Screen {
    pub w: usize,
    pub h: usize,
    pub half_h: f32, // pre-derived for speed
    pub half_w: f32, // pre-derived for speed
}

impl Screen {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            half_w: w as f32 * 0.5,
            half_h: h as f32 * 0.5,
        }
    }
}

/// Per-frame knobs for the ray caster.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderConfig {
    /// Horizontal field of view, radians.
    pub fov: f32,
    /// Edge of one map cell in map units (pixels).
    pub block_size: usize,
    /// World height of a wall slab in map units.
    pub wall_size: f32,
    /// Worker threads for one frame.
    pub workers: usize,
    /// Corrected distance at which shading bottoms out.
    pub shade_distance: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            fov: FRAC_PI_3,
            block_size: 32,
            wall_size: 32.0,
            workers: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4),
            shade_distance: 512.0,
        }
    }
}

/// Which family of grid lines a ray crossed when it hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitFamily {
    /// Line of constant y (ray travelled mostly up/down).
    Horizontal,
    /// Line of constant x (ray travelled mostly left/right).
    Vertical,
}
