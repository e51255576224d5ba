//! Handler für Laufzeit-Optionen.

use crate::app::AppState;
use crate::shared::ViewerOptions;

/// Übernimmt geänderte Optionen.
pub fn apply_options(state: &mut AppState, options: ViewerOptions) {
    state.options = options;
}

/// Schreibt die aktuellen Optionen in die TOML-Datei.
pub fn save_options(state: &AppState) -> anyhow::Result<()> {
    state.options.save_to_file(&state.options_path)
}
