use crate::sim::PointSet;
use crate::ui::canvas::{Canvas, FrameStats, ViewSettings};
use crate::world::WorldBounds;

#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct SpantreeApp {
    seed: u64,
    point_count: usize,
    settings: ViewSettings,

    #[serde(skip)]
    world: WorldBounds,
    #[serde(skip)]
    points: PointSet,
    #[serde(skip)]
    stats: FrameStats,
}

impl Default for SpantreeApp {
    fn default() -> Self {
        let seed = 1;
        let point_count = 100;
        let world = WorldBounds::default();
        let points = PointSet::scatter(seed, point_count, &world);
        Self {
            seed,
            point_count,
            settings: ViewSettings::default(),
            world,
            points,
            stats: FrameStats::default(),
        }
    }
}

impl SpantreeApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        if let Some(storage) = cc.storage {
            if let Some(mut app) = eframe::get_value::<SpantreeApp>(storage, eframe::APP_KEY) {
                // positions are not persisted; rebuild them from the seed
                app.points = PointSet::scatter(app.seed, app.point_count, &app.world);
                return app;
            }
        }
        Default::default()
    }

    fn rescatter(&mut self) {
        self.points = PointSet::scatter(self.seed, self.point_count, &self.world);
        log::info!(
            "rescattered {} points with seed {}",
            self.point_count,
            self.seed
        );
    }
}

impl eframe::App for SpantreeApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.heading("Spantree playground");
            ui.label("Drag points around; the minimum spanning tree follows every frame.");
        });

        egui::SidePanel::left("controls").show(ctx, |ui| {
            ui.heading("Scatter");
            let mut scatter_changed = false;
            ui.horizontal(|ui| {
                ui.label("Seed");
                scatter_changed |= ui
                    .add(egui::DragValue::new(&mut self.seed).speed(1))
                    .changed();
                if ui.button("Randomize").clicked() {
                    self.seed = rand::random();
                    scatter_changed = true;
                }
            });
            scatter_changed |= ui
                .add(egui::Slider::new(&mut self.point_count, 3..=300).text("Points"))
                .changed();

            if ui.button("Rescatter").clicked() {
                self.rescatter();
            } else if scatter_changed {
                self.rescatter();
            }

            ui.separator();
            ui.heading("View");
            ui.checkbox(&mut self.settings.show_all_edges, "Show all edges");
            ui.add(
                egui::Slider::new(&mut self.settings.grab_radius, 5.0..=60.0).text("Grab radius"),
            );
            ui.add(
                egui::Slider::new(&mut self.settings.point_radius, 2.0..=10.0).text("Point radius"),
            );
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(format!(
                "Points: {} | Edges: {} | Tree edges: {} | Tree cost: {:.5}",
                self.stats.points, self.stats.total_edges, self.stats.mst_edges, self.stats.cost
            ));
            ui.separator();
            ui.add(Canvas::new(
                &mut self.points,
                self.world,
                self.settings,
                &mut self.stats,
            ));
        });

        if ctx.input(|i| {
            i.key_pressed(egui::Key::R) && i.modifiers.matches_logically(egui::Modifiers::CTRL)
        }) {
            self.rescatter();
        }
    }
}
