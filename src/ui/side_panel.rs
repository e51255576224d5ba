//! Seitenleiste mit Sichtbarkeits-Schaltern, Farben und Aktualisierung.

use crate::app::{AppIntent, AppState};
use crate::core::{ActorKind, Rgba};
use crate::shared::ViewerOptions;

/// Rendert die Seitenleiste und gibt erzeugte Events zurück.
pub fn render_side_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::SidePanel::left("view_panel")
        .resizable(false)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Ansicht");

            // ── Anzeige ─────────────────────────────────────────
            ui.collapsing("Anzeige", |ui| {
                let visibility = &mut opts.visibility;
                changed |= ui
                    .checkbox(&mut visibility.show_points, "Punkte")
                    .changed();
                changed |= ui
                    .checkbox(&mut visibility.show_coordinates, "Koordinaten")
                    .changed();
                changed |= ui
                    .checkbox(&mut visibility.show_actor_labels, "Akteur-IDs")
                    .changed();
            });

            // ── Akteure ─────────────────────────────────────────
            ui.collapsing("Akteure", |ui| {
                for kind in ActorKind::ALL {
                    changed |= ui
                        .checkbox(opts.visibility.kind_visible_mut(kind), kind.label())
                        .changed();
                }
            });

            // ── Farben ──────────────────────────────────────────
            ui.collapsing("Farben", |ui| {
                for kind in ActorKind::ALL {
                    changed |= color_edit(ui, kind.label(), actor_color_mut(&mut opts, kind));
                }
                changed |= color_edit(ui, "Punkte", &mut opts.point_color);
                changed |= color_edit(ui, "Linien (Standard)", &mut opts.default_line_color);
                changed |= color_edit(ui, "Bedienelemente", &mut opts.control_color);
            });

            // ── Aktualisierung ──────────────────────────────────
            ui.collapsing("Aktualisierung", |ui| {
                changed |= ui
                    .checkbox(&mut opts.auto_refresh, "Automatisch neu zeichnen")
                    .changed();
                ui.horizontal(|ui| {
                    ui.label("Intervall (ms):");
                    changed |= ui
                        .add_enabled(
                            opts.auto_refresh,
                            egui::DragValue::new(&mut opts.refresh_interval_ms)
                                .range(16..=5000)
                                .speed(5.0),
                        )
                        .changed();
                });
            });

            ui.separator();

            if ui.button("Ansicht zurücksetzen").clicked() {
                events.push(AppIntent::ResetViewRequested);
            }
            if ui.button("Optionen speichern").clicked() {
                events.push(AppIntent::SaveOptionsRequested);
            }
        });

    // Änderungen vor dem Speichern übernehmen
    if changed {
        events.insert(
            0,
            AppIntent::OptionsChanged {
                options: Box::new(opts),
            },
        );
    }

    events
}

fn actor_color_mut(opts: &mut ViewerOptions, kind: ActorKind) -> &mut Rgba {
    match kind {
        ActorKind::Car => &mut opts.car_color,
        ActorKind::Pedestrian => &mut opts.pedestrian_color,
        ActorKind::Tram => &mut opts.tram_color,
        ActorKind::Other => &mut opts.other_color,
    }
}

/// Hilfsfunktion: Farbwähler für [f32; 4]-Arrays.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut Rgba) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = super::painter_canvas::to_color32(*color);
        if ui.color_edit_button_srgba(&mut c).changed() {
            color[0] = c.r() as f32 / 255.0;
            color[1] = c.g() as f32 / 255.0;
            color[2] = c.b() as f32 / 255.0;
            color[3] = c.a() as f32 / 255.0;
            changed = true;
        }
    });
    changed
}
