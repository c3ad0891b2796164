use glam::Vec2;

/// Map pixel that marks traversable space: opaque white (0xAARRGGBB).
pub const OPEN_COLOR: u32 = 0xFF_FF_FF_FF;

/// Read-only "is this pixel a wall?" grid.
///
/// * Addressed by integer pixel coordinate; one grid cell is `block_size`
///   pixels square, but the surface itself does not know the block size.
/// * Everything outside `0..width × 0..height` is wall.
/// * Immutable once built – a map reload builds a new surface.
#[derive(Clone, Debug, PartialEq)]
pub struct OccupancySurface {
    w: usize,
    h: usize,
    walls: Vec<bool>,
}

impl OccupancySurface {
    /// Build from an ARGB image; a pixel is open iff it equals `open` on all
    /// four channels.
    ///
    /// A buffer shorter than `w * h` produces an empty (all-wall) surface
    /// instead of an error.
    pub fn from_argb(w: usize, h: usize, pixels: &[u32], open: u32) -> Self {
        let Some(len) = w.checked_mul(h) else {
            log::warn!("occupancy {w}x{h} overflows; using all-wall surface");
            return Self::empty();
        };
        if pixels.len() < len {
            log::warn!(
                "occupancy {w}x{h} needs {len} pixels, got {}; using all-wall surface",
                pixels.len()
            );
            return Self::empty();
        }
        Self {
            w,
            h,
            walls: pixels[..len].iter().map(|&px| px != open).collect(),
        }
    }

    /// Build from a predicate evaluated once per pixel.
    pub fn from_fn(w: usize, h: usize, mut is_wall: impl FnMut(usize, usize) -> bool) -> Self {
        let mut walls = Vec::with_capacity(w * h);
        for y in 0..h {
            for x in 0..w {
                walls.push(is_wall(x, y));
            }
        }
        Self { w, h, walls }
    }

    /// Zero-sized surface: every query reports a wall.
    pub fn empty() -> Self {
        Self {
            w: 0,
            h: 0,
            walls: Vec::new(),
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.w
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.h
    }

    /// True for walls and for any coordinate off the grid.
    #[inline]
    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x as usize >= self.w || y as usize >= self.h {
            return true;
        }
        self.walls[y as usize * self.w + x as usize]
    }

    /// Centre of the first block (row-major) whose centre pixel is open.
    pub fn spawn_point(&self, block_size: usize) -> Option<Vec2> {
        let bs = block_size.max(1);
        for by in 0..self.h / bs {
            for bx in 0..self.w / bs {
                let cx = bx * bs + bs / 2;
                let cy = by * bs + bs / 2;
                if !self.is_wall(cx as i32, cy as i32) {
                    return Some(Vec2::new(cx as f32, cy as f32));
                }
            }
        }
        None
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
