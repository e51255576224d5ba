//! Handler für Zeichenfläche, Zeiger, Zoom und Pan.

use crate::app::interaction::PointerListener;
use crate::app::AppState;
use glam::DVec2;

/// Aktualisiert die Größe der Zeichenfläche im State.
pub fn set_surface_size(state: &mut AppState, size: DVec2) {
    if state.surface_size != size {
        log::debug!("Zeichenfläche: {}x{}", size.x, size.y);
        state.surface_size = size;
    }
}

/// Merkt den Drag-Anker beim Drücken der Maustaste.
pub fn begin_pan(state: &mut AppState, pos: DVec2) {
    state.interaction.pointer_down(pos);
}

/// Verschiebt die Ansicht während des Ziehens.
pub fn pan_to(state: &mut AppState, pos: DVec2) {
    state.interaction.pointer_drag(pos);
}

/// Merkt die Mausposition für die Koordinaten-Anzeige.
pub fn track_cursor(state: &mut AppState, pos: DVec2) {
    state.interaction.pointer_move(pos);
}

/// Klick auf die Zeichenfläche: nur die Zoom-Buttons reagieren.
pub fn click(state: &mut AppState, pos: DVec2) {
    if let Some(button) = state
        .interaction
        .click(pos, state.surface_size, &state.options)
    {
        log::debug!("Zoom-Button {:?}", button);
    }
}

/// Setzt Zoom und Verschiebung zurück.
pub fn reset_view(state: &mut AppState) {
    state.interaction.reset_view();
}

/// Zoomt stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    state.interaction.zoom_in(state.surface_size, &state.options);
}

/// Zoomt stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    state.interaction.zoom_out(state.surface_size, &state.options);
}
