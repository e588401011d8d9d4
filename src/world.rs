use egui::{emath::remap, Pos2, Rect, Vec2};

/// The simulation's coordinate space: a y-up rectangle of `width` × `height`
/// world units around `center`. Points live in these coordinates; only the
/// canvas widget ever converts them to pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
    pub center: Pos2,
}

impl Default for WorldBounds {
    fn default() -> Self {
        // 16:9 by one world unit tall, like the canvas it is shown on.
        Self {
            width: 16.0 / 9.0,
            height: 1.0,
            center: Pos2::ZERO,
        }
    }
}

impl WorldBounds {
    /// Bottom-left corner (minimum x and y).
    pub fn min(&self) -> Pos2 {
        self.center - Vec2::new(self.width, self.height) / 2.0
    }

    /// Top-right corner (maximum x and y).
    pub fn max(&self) -> Pos2 {
        self.center + Vec2::new(self.width, self.height) / 2.0
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Largest rect with this world's aspect ratio centered inside
    /// `available`, i.e. the letterboxed viewport the canvas paints into.
    pub fn fit_rect(&self, available: Rect) -> Rect {
        let target_width = available.width().min(available.height() * self.aspect());
        let target_height = target_width / self.aspect();
        Rect::from_center_size(available.center(), Vec2::new(target_width, target_height))
    }

    /// The affine mapping between this world and `screen`.
    pub fn transform_to(&self, screen: Rect) -> WorldTransform {
        WorldTransform {
            world_min: self.min(),
            world_max: self.max(),
            screen,
        }
    }
}

/// Maps positions between world space (y up) and screen space (y down).
///
/// `to_world` and `to_screen` are inverses of each other up to float
/// rounding; the y axis flips because screen coordinates grow downward.
#[derive(Debug, Clone, Copy)]
pub struct WorldTransform {
    world_min: Pos2,
    world_max: Pos2,
    screen: Rect,
}

impl WorldTransform {
    pub fn to_screen(&self, pos: Pos2) -> Pos2 {
        Pos2::new(
            remap(
                pos.x,
                self.world_min.x..=self.world_max.x,
                self.screen.left()..=self.screen.right(),
            ),
            remap(
                pos.y,
                self.world_min.y..=self.world_max.y,
                self.screen.bottom()..=self.screen.top(),
            ),
        )
    }

    pub fn to_world(&self, pos: Pos2) -> Pos2 {
        Pos2::new(
            remap(
                pos.x,
                self.screen.left()..=self.screen.right(),
                self.world_min.x..=self.world_max.x,
            ),
            remap(
                pos.y,
                self.screen.bottom()..=self.screen.top(),
                self.world_min.y..=self.world_max.y,
            ),
        )
    }
}
