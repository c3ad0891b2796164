//! raycast_rs - interactive software viewer.
//!
//! ```bash
//! cargo run --release -- --map map.png --texture wall.png --workers 8
//! ```
//!
//! Without `--map` / `--texture` the built-in demo map and brick texture are
//! used.

use std::{
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

use anyhow::Context;
use clap::Parser;
use glam::Vec2;
use minifb::{Key, KeyRepeat, Window, WindowOptions};

use raycast_rs::{
    assets::{load_occupancy, load_texture},
    engine::{FrameScheduler, RenderConfig, Screen},
    renderer::{Renderer, Software},
    sim::{InputState, MoveTuning, SIM_FPS, StopFlag, TicRunner},
    world::{MapSlot, OccupancySurface, Pose, Texture, demo::demo_surface},
};

/// CLI options handled via `clap` derive.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Opts {
    /// Map image (PNG or BMP); opaque white pixels are open floor
    #[arg(long, value_name = "FILE")]
    map: Option<PathBuf>,

    /// Wall texture (PNG or BMP)
    #[arg(long, value_name = "FILE")]
    texture: Option<PathBuf>,

    #[arg(long, default_value_t = 800)]
    width: usize,

    #[arg(long, default_value_t = 600)]
    height: usize,

    /// Horizontal field of view in degrees
    #[arg(long, default_value_t = 60.0)]
    fov: f32,

    /// Grid cell size in map pixels
    #[arg(long, default_value_t = 32)]
    block_size: usize,

    /// World height of a wall
    #[arg(long, default_value_t = 32.0)]
    wall_size: f32,

    /// Render threads (default: one per core)
    #[arg(long)]
    workers: Option<usize>,

    #[arg(long, requires = "start_y")]
    start_x: Option<f32>,

    #[arg(long, requires = "start_x")]
    start_y: Option<f32>,

    /// Initial heading in degrees, clockwise from +X
    #[arg(long, default_value_t = 0.0)]
    angle: f32,
}

impl Opts {
    fn render_config(&self) -> RenderConfig {
        let defaults = RenderConfig::default();
        RenderConfig {
            fov: self.fov.to_radians(),
            block_size: self.block_size.max(1),
            wall_size: self.wall_size,
            workers: self.workers.unwrap_or(defaults.workers),
            ..defaults
        }
    }
}

fn load_map(path: Option<&Path>, block_size: usize) -> anyhow::Result<OccupancySurface> {
    match path {
        Some(p) => load_occupancy(p).with_context(|| format!("loading map {}", p.display())),
        None => Ok(demo_surface(block_size)),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opts = Opts::parse();
    let config = opts.render_config();

    let texture = match &opts.texture {
        Some(p) => load_texture(p).with_context(|| format!("loading texture {}", p.display()))?,
        None => Texture::default(),
    };
    let maps = MapSlot::new(load_map(opts.map.as_deref(), config.block_size)?);

    let start = match (opts.start_x, opts.start_y) {
        (Some(x), Some(y)) => Vec2::new(x, y),
        _ => maps
            .snapshot()
            .spawn_point(config.block_size)
            .context("map has no open cell to start in")?,
    };
    let mut sim = TicRunner::new(
        Pose::new(start, opts.angle.to_radians()),
        MoveTuning::default(),
    );

    let scheduler = FrameScheduler::new(config.workers)?;
    let screen = Screen::new(opts.width, opts.height);
    let mut renderer = Software::default();

    let mut win = Window::new(
        "raycast_rs",
        screen.w,
        screen.h,
        WindowOptions::default(),
    )?;
    win.set_target_fps(SIM_FPS as usize);

    let stop = StopFlag::new();

    // ────────────────── benchmarking state ──────────────────────────────
    let mut acc_time = Duration::ZERO; // cumulated render time
    let mut acc_frames = 0usize; // frames in the current window
    let mut last_print = Instant::now(); // when we printed last

    loop {
        if stop.is_raised() {
            break;
        }
        if !win.is_open() || win.is_key_down(Key::Escape) {
            stop.raise();
            continue;
        }

        /* --------------- build one InputState per tic --------------------- */
        let mut input = InputState::empty();
        if win.is_key_down(Key::Up) || win.is_key_down(Key::W) {
            input |= InputState::FORWARD;
        }
        if win.is_key_down(Key::Down) || win.is_key_down(Key::S) {
            input |= InputState::BACKWARD;
        }
        if win.is_key_down(Key::Left) {
            input |= InputState::TURN_LEFT;
        }
        if win.is_key_down(Key::Right) {
            input |= InputState::TURN_RIGHT;
        }
        if win.is_key_pressed(Key::R, KeyRepeat::No) {
            input |= InputState::RELOAD;
        }

        /* --------------- reload between frames ---------------------------- */
        if input.contains(InputState::RELOAD) {
            match load_map(opts.map.as_deref(), config.block_size) {
                Ok(surface) => {
                    maps.replace(surface);
                }
                Err(e) => log::warn!("map reload failed, keeping current map: {e:#}"),
            }
        }

        let map = maps.snapshot();
        sim.pump(input, &map);

        let t0 = Instant::now(); // ┌─ frame timer start
        let pose = sim.pose();
        let commands = scheduler.render_frame(pose, &map, &texture, screen, &config);

        renderer.begin_frame(screen.w, screen.h);
        for cmd in &commands {
            renderer.draw_column(cmd, &texture);
        }
        renderer.overlay_minimap(&map, &pose);

        let mut present = Ok(());
        renderer.end_frame(|fb, w, h| {
            acc_time += t0.elapsed();
            acc_frames += 1;
            present = win.update_with_buffer(fb, w, h);
        });
        present?;

        if last_print.elapsed() >= Duration::from_secs(3) {
            let avg_ms = acc_time.as_secs_f64() * 1000.0 / acc_frames.max(1) as f64;
            log::info!(
                "avg render: {:.2} ms  ({:.1} FPS)  pos=({:.1}, {:.1}) angle={:.2}",
                avg_ms,
                1000.0 / avg_ms,
                pose.pos.x,
                pose.pos.y,
                pose.display_angle()
            );
            acc_time = Duration::ZERO;
            acc_frames = 0;
            last_print = Instant::now();
        }
    }

    log::info!("viewer stopped");
    Ok(())
}
