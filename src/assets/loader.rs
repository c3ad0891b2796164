// ──────────────────────────────────────────────────────────────────────────
// assets/loader.rs
//
//  *   map image      ──>  world::OccupancySurface   (opaque white = open)
//  *   texture image  ──>  world::Texture            (named after the file)
//
//  Any format the `image` crate decodes (PNG, BMP) is accepted; pixels are
//  normalised to RGBA8 and packed as 0xAARRGGBB.
// ──────────────────────────────────────────────────────────────────────────

use std::path::Path;

use image::{ImageError, RgbaImage};
use thiserror::Error;

use crate::world::{OPEN_COLOR, OccupancySurface, Texture, TextureError};

/*──────────────────────────── Error type ───────────────────────────*/

#[derive(Error, Debug)]
pub enum LoadError {
    #[error(transparent)]
    Image(#[from] ImageError),

    #[error(transparent)]
    Texture(#[from] TextureError),
}

/*====================================================================*/
/*                       Public API                                   */
/*====================================================================*/

/// Decode a map image; every pixel that is not exactly `OPEN_COLOR` is wall.
pub fn load_occupancy<P: AsRef<Path>>(path: P) -> Result<OccupancySurface, LoadError> {
    let path = path.as_ref();
    let rgba = image::open(path)?.to_rgba8();
    let surface = occupancy_from_image(&rgba);
    log::info!(
        "loaded map {} ({}×{})",
        path.display(),
        surface.width(),
        surface.height()
    );
    Ok(surface)
}

/// Decode a wall texture.
pub fn load_texture<P: AsRef<Path>>(path: P) -> Result<Texture, LoadError> {
    let path = path.as_ref();
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "TEXTURE".to_string());
    let tex = texture_from_image(name, &image::open(path)?.to_rgba8())?;
    log::info!("loaded texture {} ({}×{})", tex.name, tex.w, tex.h);
    Ok(tex)
}

/*──────────────────────── conversions ────────────────────────────────*/

/// Row-major 0xAARRGGBB, top row first.
pub fn argb_pixels(rgba: &RgbaImage) -> Vec<u32> {
    rgba.pixels()
        .map(|p| {
            let [r, g, b, a] = p.0;
            u32::from_be_bytes([a, r, g, b])
        })
        .collect()
}

pub fn occupancy_from_image(rgba: &RgbaImage) -> OccupancySurface {
    let (w, h) = rgba.dimensions();
    OccupancySurface::from_argb(w as usize, h as usize, &argb_pixels(rgba), OPEN_COLOR)
}

pub fn texture_from_image<S: Into<String>>(
    name: S,
    rgba: &RgbaImage,
) -> Result<Texture, TextureError> {
    let (w, h) = rgba.dimensions();
    Texture::new(name, w as usize, h as usize, argb_pixels(rgba))
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use std::{env, fs, path::PathBuf, process};

    const WHITE: Rgba<u8> = Rgba([0xFF, 0xFF, 0xFF, 0xFF]);
    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 0xFF]);

    fn scratch_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("raycast_rs-{}-{name}", process::id()))
    }

    /// 3×2: black frame with one open pixel at (1, 1).
    fn cell() -> RgbaImage {
        RgbaImage::from_fn(3, 2, |x, y| if (x, y) == (1, 1) { WHITE } else { BLACK })
    }

    #[test]
    fn packs_rgba_as_argb() {
        let img = RgbaImage::from_fn(2, 1, |x, _| {
            if x == 0 {
                Rgba([0x11, 0x22, 0x33, 0x44])
            } else {
                Rgba([0xAA, 0xBB, 0xCC, 0xFF])
            }
        });
        assert_eq!(argb_pixels(&img), vec![0x44_11_22_33, 0xFF_AA_BB_CC]);
    }

    #[test]
    fn only_opaque_white_is_open() {
        let img = RgbaImage::from_fn(4, 1, |x, _| match x {
            0 => WHITE,
            1 => Rgba([0xFF, 0xFF, 0xFF, 0x00]), // transparent white
            2 => Rgba([0xFF, 0xFF, 0xFE, 0xFF]), // near white
            _ => BLACK,
        });
        let s = occupancy_from_image(&img);
        assert!(!s.is_wall(0, 0));
        assert!(s.is_wall(1, 0));
        assert!(s.is_wall(2, 0));
        assert!(s.is_wall(3, 0));
    }

    #[test]
    fn loads_png_map_and_texture() {
        let path = scratch_path("wall.png");
        cell().save(&path).unwrap();

        let map = load_occupancy(&path).unwrap();
        assert_eq!((map.width(), map.height()), (3, 2));
        assert!(!map.is_wall(1, 1));
        assert!(map.is_wall(0, 0));

        let tex = load_texture(&path).unwrap();
        assert!(tex.name.ends_with("wall"));
        assert_eq!((tex.w, tex.h), (3, 2));
        assert_eq!(tex.texel(1, 1), OPEN_COLOR);
        assert_eq!(tex.texel(2, 0), 0xFF_00_00_00);

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn loads_bmp_map() {
        let path = scratch_path("map.bmp");
        cell().save(&path).unwrap();

        let map = load_occupancy(&path).unwrap();
        assert_eq!((map.width(), map.height()), (3, 2));
        assert!(!map.is_wall(1, 1));
        assert!(map.is_wall(2, 1));

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_and_garbage_files_are_image_errors() {
        let err = load_texture("/definitely/not/here.png").unwrap_err();
        assert!(matches!(err, LoadError::Image(ImageError::IoError(_))));

        let path = scratch_path("garbage.png");
        fs::write(&path, b"\x89PNG\r\n\x1a\nnot really").unwrap();
        assert!(matches!(load_occupancy(&path), Err(LoadError::Image(_))));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn empty_image_is_a_texture_error() {
        let err = texture_from_image("NONE", &RgbaImage::new(0, 0)).unwrap_err();
        assert_eq!(err, TextureError::Empty("NONE".into()));
    }
}
