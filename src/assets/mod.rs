//! Image assets: decoding plus conversion into world types.

mod loader;

pub use loader::{
    LoadError, argb_pixels, load_occupancy, load_texture, occupancy_from_image, texture_from_image,
};
