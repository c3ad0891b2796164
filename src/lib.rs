//! Grid ray-casting renderer.
//!
//! * [`world`]    – occupancy map, viewer pose, texture strip.
//! * [`engine`]   – ray/grid intersection, projection, parallel frame build.
//! * [`renderer`] – draw commands and the CPU compositor.
//! * [`sim`]      – per-tick input and movement.
//! * [`assets`]   – map and texture image loading.

pub mod assets;
pub mod engine;
pub mod renderer;
pub mod sim;
pub mod world;
