use serde::{Deserialize, Serialize};

use crate::sim::PointSet;
use crate::world::WorldBounds;

/// Appearance and interaction knobs exposed in the side panel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    /// Draw the faint complete graph behind the tree.
    pub show_all_edges: bool,
    /// Pick-up distance around a point, in screen pixels.
    pub grab_radius: f32,
    /// Dot radius, in screen pixels.
    pub point_radius: f32,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            show_all_edges: true,
            grab_radius: 20.0,
            point_radius: 5.0,
        }
    }
}

/// What the canvas computed this frame, for the status line.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameStats {
    pub points: usize,
    pub total_edges: usize,
    pub mst_edges: usize,
    pub cost: f32,
}

/// The playground canvas, built fresh each frame over the app's state. Its
/// `Widget` impl runs the whole per-frame sequence: sample pointer, apply
/// drags, recompute the MST, paint.
pub struct Canvas<'a> {
    pub(super) points: &'a mut PointSet,
    pub(super) world: WorldBounds,
    pub(super) settings: ViewSettings,
    pub(super) stats: &'a mut FrameStats,
}

impl<'a> Canvas<'a> {
    pub fn new(
        points: &'a mut PointSet,
        world: WorldBounds,
        settings: ViewSettings,
        stats: &'a mut FrameStats,
    ) -> Self {
        Self {
            points,
            world,
            settings,
            stats,
        }
    }
}
