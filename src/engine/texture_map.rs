use glam::Vec2;

use crate::engine::types::HitFamily;

/// Texture column for a wall hit.
///
/// The offset along the wall is taken from the coordinate that runs *along*
/// the struck line: `y` for vertical lines, `x` for horizontal ones. It wraps
/// every `block_size` units, so each block shows the whole strip once.
pub fn texture_column(point: Vec2, family: HitFamily, block_size: usize, texture_w: usize) -> usize {
    if texture_w == 0 {
        return 0;
    }
    let bs = block_size.max(1) as f32;
    let along = match family {
        HitFamily::Vertical => point.y,
        HitFamily::Horizontal => point.x,
    };
    let offset = along.rem_euclid(bs);
    let column = (offset / bs * texture_w as f32) as usize;
    // rem_euclid can round up to exactly `bs` for tiny negative inputs
    column.min(texture_w - 1)
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
