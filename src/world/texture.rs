// Wall texture strip produced by the asset loader.
// The engine only needs its width; the compositor samples its pixels.

/// Magenta, drawn where a texture has no pixel to offer.
pub const MISSING_TEXEL: u32 = 0xFF_FF_00_FF;

/// CPU-side storage: 32-bit **ARGB** (0xAARRGGBB) in row-major order.
///
/// Walls are textured one vertical column at a time, so the strip is
/// indexed by column first: `texel(column, row)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    pub name: String,
    pub w: usize,
    pub h: usize,
    pub pixels: Vec<u32>,
}

/// Convenience 64×64 brick pattern (mortar lines every 16 rows / 32 columns).
impl Default for Texture {
    fn default() -> Self {
        const BRICK: u32 = 0xFF_A0_40_30;
        const MORTAR: u32 = 0xFF_C8_C0_B0;
        const SIZE: usize = 64;
        let mut pix = vec![BRICK; SIZE * SIZE];
        for y in 0..SIZE {
            let row = y / 16;
            let shift = if row % 2 == 0 { 0 } else { 16 };
            for x in 0..SIZE {
                if y % 16 == 0 || (x + shift) % 32 == 0 {
                    pix[y * SIZE + x] = MORTAR;
                }
            }
        }
        Texture {
            name: "BRICK".to_string(),
            w: SIZE,
            h: SIZE,
            pixels: pix,
        }
    }
}

/// Things that can go wrong when building a texture.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TextureError {
    /// Width or height is zero.
    #[error("texture `{0}` has no pixels")]
    Empty(String),

    /// Pixel vector does not hold `w * h` entries.
    #[error("texture `{name}` expects {expected} pixels, got {got}")]
    SizeMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
}

impl Texture {
    pub fn new<S: Into<String>>(
        name: S,
        w: usize,
        h: usize,
        pixels: Vec<u32>,
    ) -> Result<Self, TextureError> {
        let name = name.into();
        if w == 0 || h == 0 {
            return Err(TextureError::Empty(name));
        }
        if pixels.len() != w * h {
            return Err(TextureError::SizeMismatch {
                expected: w * h,
                got: pixels.len(),
                name,
            });
        }
        Ok(Self { name, w, h, pixels })
    }

    /// Texel at (`column`, `row`); both are clamped to the strip.
    /// A strip with no pixels (fields set by hand) yields `MISSING_TEXEL`.
    #[inline]
    pub fn texel(&self, column: usize, row: usize) -> u32 {
        if self.w == 0 || self.h == 0 {
            return MISSING_TEXEL;
        }
        let u = column.min(self.w - 1);
        let v = row.min(self.h - 1);
        self.pixels
            .get(v * self.w + u)
            .copied()
            .unwrap_or(MISSING_TEXEL)
    }
}

/*======================================================================*/
/*                               Tests                                  */
/*======================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_validates_size() {
        let err = Texture::new("RED", 2, 2, vec![0; 3]).unwrap_err();
        assert_eq!(
            err,
            TextureError::SizeMismatch {
                name: "RED".into(),
                expected: 4,
                got: 3
            }
        );
        assert_eq!(
            Texture::new("NONE", 0, 4, vec![]).unwrap_err(),
            TextureError::Empty("NONE".into())
        );
    }

    #[test]
    fn texel_is_column_row_and_clamped() {
        let tex = Texture::new("T", 2, 2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(tex.texel(1, 0), 2);
        assert_eq!(tex.texel(0, 1), 3);
        assert_eq!(tex.texel(9, 9), 4);
    }

    #[test]
    fn hand_built_empty_strip_does_not_panic() {
        let empty = Texture {
            name: "EMPTY".into(),
            w: 0,
            h: 0,
            pixels: Vec::new(),
        };
        assert_eq!(empty.texel(0, 0), MISSING_TEXEL);
        assert_eq!(empty.texel(7, 3), MISSING_TEXEL);

        let short = Texture {
            name: "SHORT".into(),
            w: 2,
            h: 2,
            pixels: vec![1],
        };
        assert_eq!(short.texel(0, 0), 1);
        assert_eq!(short.texel(1, 1), MISSING_TEXEL);
    }

    #[test]
    fn default_is_square_and_opaque() {
        let tex = Texture::default();
        assert_eq!(tex.pixels.len(), tex.w * tex.h);
        assert!(tex.pixels.iter().all(|&p| p >> 24 == 0xFF));
    }
}
