//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use crate::core::ActorKind;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if let Some(maps) = &state.maps {
                ui.label(format!(
                    "Karten: {} | Punkte: {}",
                    maps.len(),
                    maps.total_points()
                ));
            } else {
                ui.label("Keine Karten geladen");
            }

            ui.separator();

            let counts = state.actor_counts();
            for kind in ActorKind::ALL {
                ui.label(format!("{}: {}", kind.label(), counts.get(kind)));
            }
            ui.label(format!("Gesamt: {}", counts.total()));

            ui.separator();

            let viewport = state.viewport();
            ui.label(format!(
                "Zoom: {:.2}x | Pan: ({:.0}, {:.0})",
                viewport.zoom_factor, viewport.pan_offset.x, viewport.pan_offset.y
            ));

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
