//! Fork-join frame builder.
//!
//! The screen is cut into one contiguous column range per worker. Workers
//! share the map and texture read-only and each returns its own command
//! vector, so nothing in the hot path is locked. `render_frame` returns only
//! after every worker is done.

use std::ops::Range;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    engine::{
        intersect::{RayHit, RayIntersector},
        projection::{project, shade},
        texture_map::texture_column,
        types::{RenderConfig, Screen},
    },
    renderer::{DrawCommand, ScreenRect, Source, TexRect},
    world::{OccupancySurface, Pose, Texture},
};

/// Column ranges, one per worker.
pub type Partitions = SmallVec<[Range<usize>; 8]>;

#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("worker count must be at least 1")]
    NoWorkers,

    #[error("cannot start worker pool: {0}")]
    Pool(#[from] ThreadPoolBuildError),
}

/// Split `0..width` into `min(workers, width)` equal ranges; the last one
/// absorbs the remainder.
pub fn partition_columns(width: usize, workers: usize) -> Partitions {
    let mut parts = Partitions::new();
    if width == 0 {
        return parts;
    }
    let n = workers.clamp(1, width);
    let chunk = width / n;
    for i in 0..n {
        let start = i * chunk;
        let end = if i + 1 == n { width } else { start + chunk };
        parts.push(start..end);
    }
    parts
}

/*───────────────────────────────────────────────────────────────────────*/
/*                        per-column pipeline                           */
/*───────────────────────────────────────────────────────────────────────*/

/// Read-only state for casting every column of one frame.
pub struct ColumnCaster<'a> {
    caster: RayIntersector<'a>,
    pose: Pose,
    texture: &'a Texture,
    screen: Screen,
    config: &'a RenderConfig,
}

impl<'a> ColumnCaster<'a> {
    pub fn new(
        pose: Pose,
        surface: &'a OccupancySurface,
        texture: &'a Texture,
        screen: Screen,
        config: &'a RenderConfig,
    ) -> Self {
        Self {
            caster: RayIntersector::new(surface, config.block_size),
            pose,
            texture,
            screen,
            config,
        }
    }

    /// Ray → projection → texture column for screen column `x`.
    pub fn column(&self, x: usize) -> DrawCommand {
        let cfg = self.config;
        let angle = self.pose.ray_angle(x, self.screen.w, cfg.fov);

        match self.caster.cast_ray(self.pose.pos, angle) {
            RayHit::Wall(hit) => {
                let slab = project(
                    angle,
                    self.pose.angle,
                    hit.distance,
                    &self.screen,
                    cfg.fov,
                    cfg.wall_size,
                );
                DrawCommand {
                    dest: ScreenRect {
                        x,
                        top: slab.top,
                        height: slab.height,
                    },
                    source: Source::Texture(TexRect {
                        column: texture_column(
                            hit.point,
                            hit.family,
                            cfg.block_size,
                            self.texture.w,
                        ),
                        rows: self.texture.h,
                    }),
                    shade: shade(slab.corrected, cfg.shade_distance),
                }
            }
            RayHit::Void => DrawCommand::void(x, self.screen.h),
        }
    }

    fn columns(&self, range: Range<usize>) -> Vec<DrawCommand> {
        range.map(|x| self.column(x)).collect()
    }
}

/*───────────────────────────────────────────────────────────────────────*/
/*                             scheduler                                */
/*───────────────────────────────────────────────────────────────────────*/

/// Fixed pool of render workers.
pub struct FrameScheduler {
    pool: ThreadPool,
    workers: usize,
}

impl FrameScheduler {
    pub fn new(workers: usize) -> Result<Self, SchedulerError> {
        if workers == 0 {
            return Err(SchedulerError::NoWorkers);
        }
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("raycast-{i}"))
            .build()?;
        log::info!("frame scheduler started with {workers} workers");
        Ok(Self { pool, workers })
    }

    #[inline]
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// One draw command per column of `screen`, in column order.
    ///
    /// Blocks until all partitions are done. Each worker returns its own
    /// vector and the vectors are concatenated in partition order, so the
    /// result never depends on which worker finished first.
    pub fn render_frame(
        &self,
        pose: Pose,
        surface: &OccupancySurface,
        texture: &Texture,
        screen: Screen,
        config: &RenderConfig,
    ) -> Vec<DrawCommand> {
        let caster = ColumnCaster::new(pose, surface, texture, screen, config);
        let parts = partition_columns(screen.w, self.workers);

        let chunks: Vec<Vec<DrawCommand>> = self.pool.install(|| {
            parts
                .as_slice()
                .par_iter()
                .map(|range| caster.columns(range.clone()))
                .collect()
        });

        let commands: Vec<DrawCommand> = chunks.into_iter().flatten().collect();
        debug_assert!(commands.iter().enumerate().all(|(i, c)| c.dest.x == i));
        log::debug!(
            "frame: {} columns over {} partitions",
            commands.len(),
            parts.len()
        );
        commands
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
