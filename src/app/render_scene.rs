//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Holt genau einen Snapshot der Akteure pro Frame.
pub fn build(state: &AppState) -> RenderScene {
    let actors = state
        .actors
        .as_ref()
        .map(|source| source.snapshot())
        .unwrap_or_default();

    RenderScene {
        maps: state.maps.clone(),
        actors,
        viewport: *state.viewport(),
        surface_size: state.surface_size,
        cursor: state.interaction.cursor(),
        options: state.options.clone(),
    }
}
