//! Viewport-Input-Handling: Maus-Events und Tasten → AppIntent.
//!
//! Alle Positionen werden relativ zur linken oberen Ecke der
//! Zeichenfläche weitergegeben.

mod keyboard;

use crate::app::AppIntent;
use glam::DVec2;

/// Verwaltet den Input-Zustand für die Zeichenfläche
#[derive(Default)]
pub struct InputState {
    /// Zuletzt gemeldete Hover-Position (verhindert doppelte Move-Intents)
    last_hover: Option<DVec2>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Zentraler UI→Intent-Einstieg für Maus und Tastatur. Reihenfolge pro
    /// Frame: Größe, Tasten, Drücken, Ziehen oder Bewegen, Klick.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
    ) -> Vec<AppIntent> {
        let origin = response.rect.min;
        let to_local = |pos: egui::Pos2| {
            DVec2::new((pos.x - origin.x) as f64, (pos.y - origin.y) as f64)
        };

        let mut events = Vec::new();

        let size = response.rect.size();
        events.push(AppIntent::SurfaceResized {
            size: DVec2::new(size.x as f64, size.y as f64),
        });

        if response.hovered() {
            events.extend(keyboard::collect_keyboard_intents(ui));
        }

        // Drag-Anker am Ort des Drückens, nicht dort wo egui den Drag erkennt
        if response.drag_started_by(egui::PointerButton::Primary) {
            if let Some(press) = ui.input(|i| i.pointer.press_origin()) {
                events.push(AppIntent::PointerPressed {
                    pos: to_local(press),
                });
            }
        }

        if response.dragged_by(egui::PointerButton::Primary) {
            if let Some(pos) = response.interact_pointer_pos() {
                events.push(AppIntent::PointerDragged { pos: to_local(pos) });
            }
        } else if let Some(pos) = response.hover_pos() {
            let pos = to_local(pos);
            if self.last_hover != Some(pos) {
                self.last_hover = Some(pos);
                events.push(AppIntent::PointerMoved { pos });
            }
        }

        if response.clicked_by(egui::PointerButton::Primary) {
            if let Some(pos) = response.interact_pointer_pos() {
                events.push(AppIntent::PointerClicked { pos: to_local(pos) });
            }
        }

        events
    }
}
