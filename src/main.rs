//! Simulation Map Viewer.
//!
//! 2D-Ansicht für Straßennetz-Karten und Live-Akteure einer
//! Verkehrssimulation, mit Zoom, Pan und Koordinaten-Anzeige.

use eframe::egui;
use sim_map_viewer::demo::{self, DemoSimulation};
use sim_map_viewer::{ui, ActorStore, AppController, AppIntent, AppState, ViewerOptions};
use std::sync::Arc;
use std::time::Duration;

/// Takt der Demo-Simulation
const SIMULATION_TICK: Duration = Duration::from_millis(50);

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Simulation Map Viewer v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Simulation Map Viewer"),
            renderer: eframe::Renderer::Glow,
            ..Default::default()
        };

        eframe::run_native(
            "Simulation Map Viewer",
            options,
            Box::new(|_cc| Ok(Box::new(ViewerApp::new()?))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct ViewerApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
    /// Läuft bis zum Drop der App
    _simulation: Option<DemoSimulation>,
}

impl ViewerApp {
    fn new() -> anyhow::Result<Self> {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = ViewerOptions::config_path();
        let viewer_options = ViewerOptions::load_from_file(&config_path);

        let actor_store = ActorStore::new();
        let mut state = AppState::new().with_actor_source(Arc::new(actor_store.clone()));
        state.options = viewer_options;
        state.options_path = config_path;

        let mut controller = AppController::new();
        let simulation = match demo::demo_maps() {
            Ok(maps) => {
                let simulation = DemoSimulation::start(&maps, actor_store, SIMULATION_TICK)?;
                controller.handle_intent(
                    &mut state,
                    AppIntent::MapsLoaded {
                        maps: Arc::new(maps),
                    },
                )?;
                Some(simulation)
            }
            Err(e) => {
                log::error!("Demo-Karten ungültig: {}", e);
                None
            }
        };

        Ok(Self {
            state,
            controller,
            input: ui::InputState::new(),
            _simulation: simulation,
        })
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::SurfaceResized { .. }));

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl ViewerApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_side_panel(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());

                let viewport_events = self.input.collect_viewport_events(ui, &response);

                // Größe vor dem Zeichnen übernehmen, Rest nach dem Frame
                for event in viewport_events {
                    if matches!(event, AppIntent::SurfaceResized { .. }) {
                        self.process_events(vec![event]);
                    } else {
                        events.push(event);
                    }
                }

                if !self.state.has_maps() {
                    painter.text(
                        response.rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "Keine Karten geladen",
                        egui::FontId::proportional(20.0),
                        egui::Color32::WHITE,
                    );
                }

                let mut canvas = ui::PainterCanvas::new(&painter, response.rect.min);
                if let Err(e) = self.controller.render_frame(&mut self.state, &mut canvas) {
                    log::error!("Frame konnte nicht gezeichnet werden: {}", e);
                }
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events || ctx.input(|i| i.pointer.is_moving()) {
            ctx.request_repaint();
        }
        if self.state.options.auto_refresh {
            ctx.request_repaint_after(Duration::from_millis(self.state.options.refresh_interval_ms));
        }
    }
}
