use egui::{Color32, Stroke, Widget};

use crate::graph::{complete_edges, compute_mst};
use crate::sim::PointerState;

use super::canvas::{Canvas, FrameStats};

const BACKGROUND: Color32 = Color32::BLACK;
const TREE_COLOR: Color32 = Color32::from_rgb(0, 128, 128);
const POINT_COLOR: Color32 = Color32::RED;

impl Widget for Canvas<'_> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let desired_size = ui.available_size();
        let (screen_rect, response) = ui.allocate_exact_size(desired_size, egui::Sense::drag());

        let view_rect = self.world.fit_rect(screen_rect);
        let transform = self.world.transform_to(view_rect);

        // Strictly sequenced within the frame: drag, then recompute, then
        // paint from the result.
        let pointer = ui.input(|i| PointerState {
            pos: i.pointer.latest_pos(),
            primary_down: i.pointer.primary_down(),
        });
        self.points
            .update_drag(&pointer, &transform, self.settings.grab_radius);

        let positions = self.points.positions();
        let mst = compute_mst(&positions);

        let painter = ui.painter().with_clip_rect(screen_rect);
        painter.rect_filled(view_rect, egui::CornerRadius::ZERO, BACKGROUND);

        // 1. The complete graph, barely visible, underneath everything.
        let total_edges = positions.len() * positions.len().saturating_sub(1) / 2;
        if self.settings.show_all_edges {
            let faint = Stroke::new(1.0, Color32::BLUE.gamma_multiply(0.05));
            for edge in &complete_edges(&positions) {
                painter.line_segment(
                    [
                        transform.to_screen(positions[edge.u]),
                        transform.to_screen(positions[edge.v]),
                    ],
                    faint,
                );
            }
        }

        // 2. The tree itself.
        let tree_stroke = Stroke::new(2.0, TREE_COLOR);
        for edge in &mst.edges {
            painter.line_segment(
                [
                    transform.to_screen(positions[edge.u]),
                    transform.to_screen(positions[edge.v]),
                ],
                tree_stroke,
            );
        }

        // 3. Points on top: grab halo first, then the dot.
        let halo = Color32::WHITE.gamma_multiply(0.1);
        for point in self.points.iter() {
            let screen_pos = transform.to_screen(point.pos);
            painter.circle_filled(screen_pos, self.settings.grab_radius, halo);
            painter.circle_filled(screen_pos, self.settings.point_radius, POINT_COLOR);
        }

        *self.stats = FrameStats {
            points: positions.len(),
            total_edges,
            mst_edges: mst.edges.len(),
            cost: mst.cost,
        };

        response
    }
}
