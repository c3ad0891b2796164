//! ---------------------------------------------------------------------------
//! Software (CPU) column compositor
//!
//! * Fills an internal frame-buffer in **0xAARRGGBB** format.
//! * Background is flat: sky over the upper half, floor over the lower half.
//! * Each [`DrawCommand`] stretches one texture column over its screen
//!   column; rows outside the screen are clipped.
//! ---------------------------------------------------------------------------

use crate::{
    renderer::{DrawCommand, Renderer, Rgba, Source},
    world::Texture,
};

pub const SKY_COLOR: Rgba = 0xFF_00_FF_FF;
pub const FLOOR_COLOR: Rgba = 0xFF_F5_F5_DC;
pub const VOID_COLOR: Rgba = 0xFF_10_10_10;

/*───────────────────────────────────────────────────────────────────────*/
/*                              Backend                                 */
/*───────────────────────────────────────────────────────────────────────*/

#[derive(Default)]
pub struct Software {
    pub(super) scratch: Vec<Rgba>,
    pub(super) width: usize,
    pub(super) height: usize,
}

/*──────────────────────── Renderer trait impl ────────────────────────*/
impl Renderer for Software {
    fn begin_frame(&mut self, w: usize, h: usize) {
        if w != self.width || h != self.height {
            self.width = w;
            self.height = h;
            self.scratch.resize(w * h, 0);
        }

        let split = (h / 2) * w;
        self.scratch[..split].fill(SKY_COLOR);
        self.scratch[split..].fill(FLOOR_COLOR);
    }

    fn draw_column(&mut self, cmd: &DrawCommand, texture: &Texture) {
        let x = cmd.dest.x;
        if x >= self.width || self.height == 0 {
            return;
        }

        match cmd.source {
            Source::Void => {
                for y in 0..self.height {
                    self.scratch[y * self.width + x] = VOID_COLOR;
                }
            }
            Source::Texture(src) => {
                let Some((y0, y1)) = self.clip_rows(cmd.dest.top, cmd.dest.height) else {
                    return;
                };
                let rows = src.rows.min(texture.h) as f32;
                let step = rows / cmd.dest.height; // texels / px
                for y in y0..y1 {
                    let v = ((y as f32 + 0.5 - cmd.dest.top) * step) as usize;
                    let texel = texture.texel(src.column, v);
                    self.scratch[y * self.width + x] = shade_texel(texel, cmd.shade);
                }
            }
        }
    }

    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        submit(&self.scratch, self.width, self.height);
    }
}

/*──────────────────────── column helpers ─────────────────────────────*/

impl Software {
    /// Integer row span `[y0, y1)` of a slab after clipping to the screen.
    fn clip_rows(&self, top: f32, height: f32) -> Option<(usize, usize)> {
        if !(height > 0.0) || !top.is_finite() {
            return None;
        }
        let h = self.height as f32;
        let y0 = top.max(0.0).min(h);
        let y1 = (top + height).max(0.0).min(h);
        let (y0, y1) = (y0.floor() as usize, y1.ceil() as usize);
        (y0 < y1).then_some((y0, y1))
    }
}

/// Scale the RGB channels by `shade / 255`; alpha is kept.
#[inline]
pub fn shade_texel(texel: Rgba, shade: u8) -> Rgba {
    if shade == u8::MAX {
        return texel;
    }
    let s = shade as u32;
    let ch = |shift: u32| (((texel >> shift) & 0xFF) * s / 255) << shift;
    (texel & 0xFF_00_00_00) | ch(16) | ch(8) | ch(0)
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
