//! Built-in map used when no map image is given.

use super::OccupancySurface;

/// 16×16 cells, `#` = wall. The outer ring is solid.
const LAYOUT: [&str; 16] = [
    "################",
    "#..............#",
    "#..##......##..#",
    "#..##......##..#",
    "#..............#",
    "#......#.......#",
    "#......#.......#",
    "#...####.......#",
    "#..............#",
    "#..........#...#",
    "#.##.......#...#",
    "#.##.......###.#",
    "#..............#",
    "#....#....#....#",
    "#..............#",
    "################",
];

/// Rasterise the demo layout with `block_size` pixels per cell.
pub fn demo_surface(block_size: usize) -> OccupancySurface {
    let bs = block_size.max(1);
    let cells_w = LAYOUT[0].len();
    let cells_h = LAYOUT.len();
    OccupancySurface::from_fn(cells_w * bs, cells_h * bs, |x, y| {
        LAYOUT[y / bs].as_bytes()[x / bs] == b'#'
    })
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_is_solid_and_spawn_is_open() {
        let s = demo_surface(8);
        assert_eq!((s.width(), s.height()), (128, 128));
        for i in 0..128 {
            assert!(s.is_wall(i, 0));
            assert!(s.is_wall(0, i));
            assert!(s.is_wall(i, 127));
            assert!(s.is_wall(127, i));
        }
        let spawn = s.spawn_point(8).unwrap();
        assert!(!s.is_wall(spawn.x as i32, spawn.y as i32));
    }
}
