//! Tastatur-Shortcuts für die Zeichenfläche.

use crate::app::AppIntent;

/// Verarbeitet `+`, `-` und `0` und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (zoom_in, zoom_out, reset) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals),
            i.key_pressed(egui::Key::Minus),
            i.key_pressed(egui::Key::Num0),
        )
    });

    if zoom_in {
        events.push(AppIntent::ZoomInRequested);
    }
    if zoom_out {
        events.push(AppIntent::ZoomOutRequested);
    }
    if reset {
        events.push(AppIntent::ResetViewRequested);
    }

    events
}
