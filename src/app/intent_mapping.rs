//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(_state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::SurfaceResized { size } => vec![AppCommand::SetSurfaceSize { size }],
        AppIntent::PointerPressed { pos } => vec![AppCommand::BeginPan { pos }],
        AppIntent::PointerDragged { pos } => vec![AppCommand::PanTo { pos }],
        AppIntent::PointerMoved { pos } => vec![AppCommand::TrackCursor { pos }],
        AppIntent::PointerClicked { pos } => vec![AppCommand::Click { pos }],
        AppIntent::ResetViewRequested => vec![AppCommand::ResetView],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::MapsLoaded { maps } => vec![
            AppCommand::SetMaps { maps },
            AppCommand::RecomputeBounds,
            AppCommand::ResetView,
        ],
        AppIntent::RecomputeBoundsRequested => vec![AppCommand::RecomputeBounds],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::SaveOptionsRequested => vec![AppCommand::SaveOptions],
    }
}

#[cfg(test)]
mod tests;
