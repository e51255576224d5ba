//! Handler für den geladenen Kartensatz und dessen Bounds.

use crate::app::AppState;
use crate::core::{compute_bounds, MapStore};
use std::sync::Arc;

/// Übernimmt einen neuen Kartensatz. Bounds werden separat neu berechnet.
pub fn set_maps(state: &mut AppState, maps: Arc<MapStore>) {
    log::info!(
        "{} Karten mit {} Punkten geladen",
        maps.len(),
        maps.total_points()
    );
    state.maps = Some(maps);
}

/// Berechnet die Bounds aus allen Karten mit Punkten.
///
/// Leere Karten werden mit Warnung übergangen. Ohne verwertbare Karten
/// gibt es keine Bounds, dann zeichnet der Render-Pass nichts.
pub fn recompute_bounds(state: &mut AppState) {
    let Some(maps) = state.maps.as_deref() else {
        state.interaction.set_bounds(None);
        return;
    };

    let usable = maps.maps().filter(|map| {
        if map.points.is_empty() {
            log::warn!("Karte '{}' hat keine Punkte, ignoriert für Bounds", map.id);
            false
        } else {
            true
        }
    });

    let bounds = match compute_bounds(usable) {
        Ok(bounds) => {
            log::info!(
                "Bounds: ({}, {}) bis ({}, {})",
                bounds.min_x,
                bounds.min_y,
                bounds.max_x,
                bounds.max_y
            );
            Some(bounds)
        }
        Err(e) => {
            log::warn!("Keine Bounds berechenbar: {}", e);
            None
        }
    };
    state.interaction.set_bounds(bounds);
}
