//! The draggable point set the MST is computed over.

use egui::Pos2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::world::{WorldBounds, WorldTransform};

/// One simulated point: a world-space position plus its drag flag. The MST
/// engine never reads the flag; it gets a plain position slice.
#[derive(Debug, Clone, Copy)]
pub struct SimPoint {
    pub pos: Pos2,
    pub dragging: bool,
}

/// What the canvas sampled from the mouse this frame, in screen pixels.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerState {
    pub pos: Option<Pos2>,
    pub primary_down: bool,
}

/// The current positions of all points. Positions are the only state that
/// survives from frame to frame; everything derived from them (edges, the
/// tree) is rebuilt per frame.
#[derive(Debug, Clone, Default)]
pub struct PointSet {
    points: Vec<SimPoint>,
}

impl PointSet {
    /// Scatters `count` points uniformly over `bounds`. The same seed always
    /// produces the same layout.
    pub fn scatter(seed: u64, count: usize, bounds: &WorldBounds) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let min = bounds.min();
        let max = bounds.max();
        let points = (0..count)
            .map(|_| SimPoint {
                pos: Pos2::new(
                    rng.random_range(min.x..max.x),
                    rng.random_range(min.y..max.y),
                ),
                dragging: false,
            })
            .collect();
        log::debug!("scattered {count} points with seed {seed}");
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SimPoint> {
        self.points.iter()
    }

    /// Snapshot of the current positions, in index order, for the MST engine.
    pub fn positions(&self) -> Vec<Pos2> {
        self.points.iter().map(|p| p.pos).collect()
    }

    /// Advances the drag state machine one frame.
    ///
    /// While the primary button is down, every point whose screen position is
    /// within `grab_radius` pixels of the pointer starts dragging (grabbing
    /// several overlapping points at once is intended). Dragging points
    /// follow the pointer until the button is released.
    pub fn update_drag(
        &mut self,
        pointer: &PointerState,
        transform: &WorldTransform,
        grab_radius: f32,
    ) {
        let Some(pointer_pos) = pointer.pos else {
            if !pointer.primary_down {
                for point in &mut self.points {
                    point.dragging = false;
                }
            }
            return;
        };

        for point in &mut self.points {
            if pointer.primary_down {
                let screen_pos = transform.to_screen(point.pos);
                if screen_pos.distance_sq(pointer_pos) < grab_radius * grab_radius {
                    point.dragging = true;
                }
            }

            if point.dragging && !pointer.primary_down {
                point.dragging = false;
            }

            if point.dragging {
                point.pos = transform.to_world(pointer_pos);
            }
        }
    }
}
