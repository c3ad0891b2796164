//! Rendering abstraction layer.
//!
//! *The ray caster never touches a pixel buffer directly.*
//! It produces one [`DrawCommand`] per screen column and hands the list to
//! a type that implements [`Renderer`].
//!
//! * A helper blanket-impl [`RendererExt`] adds `draw_frame` so call-sites
//!   stay short.
//! * [`Software`] is the CPU back-end used by the viewer.

mod overlay;
pub mod software;

pub use software::Software;

use crate::world::Texture;

/// Pixel format of the software frame-buffer (0xAARRGGBB).
pub type Rgba = u32;

/// Destination of one wall slice: a single screen column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenRect {
    pub x: usize,
    /// May be negative when the slab is taller than the screen.
    pub top: f32,
    pub height: f32,
}

/// Source of one wall slice: one full-height texture column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TexRect {
    pub column: usize,
    pub rows: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    Texture(TexRect),
    /// The ray left the map without a hit.
    Void,
}

/// Everything the compositor needs for one screen column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCommand {
    pub dest: ScreenRect,
    pub source: Source,
    /// 255 = full brightness.
    pub shade: u8,
}

impl DrawCommand {
    /// Full-height void column at `x`.
    pub fn void(x: usize, screen_h: usize) -> Self {
        Self {
            dest: ScreenRect {
                x,
                top: 0.0,
                height: screen_h as f32,
            },
            source: Source::Void,
            shade: u8::MAX,
        }
    }
}

/// A compositor that owns an internal scratch buffer for the whole frame.
///
/// `end_frame` hands the finished buffer to a user-supplied closure.
pub trait Renderer {
    /// (Re)allocate internal scratch for the requested resolution and clear it.
    fn begin_frame(&mut self, width: usize, height: usize);

    /// Rasterise one wall column into the internal buffer.
    fn draw_column(&mut self, cmd: &DrawCommand, texture: &Texture);

    /// Finish the frame and **loan** the finished buffer to `submit`.
    ///
    /// * `submit(&[Rgba], w, h)` is run exactly once per frame.
    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize);
}

/// Convenience blanket-impl with a one-liner `draw_frame` adaptor.
pub trait RendererExt: Renderer {
    fn draw_frame<F>(
        &mut self,
        width: usize,
        height: usize,
        commands: &[DrawCommand],
        texture: &Texture,
        submit: F,
    ) where
        F: FnOnce(&[Rgba], usize, usize),
    {
        self.begin_frame(width, height);
        for c in commands {
            self.draw_column(c, texture);
        }
        self.end_frame(submit);
    }
}
impl<T: Renderer + ?Sized> RendererExt for T {}
