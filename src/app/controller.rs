//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::core::{ActorCounts, ViewerError};
use crate::render::{self, Canvas, FrameReport};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Render-Frames auf dem AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Zeichenfläche & Zeiger ===
            AppCommand::SetSurfaceSize { size } => handlers::view::set_surface_size(state, size),
            AppCommand::BeginPan { pos } => handlers::view::begin_pan(state, pos),
            AppCommand::PanTo { pos } => handlers::view::pan_to(state, pos),
            AppCommand::TrackCursor { pos } => handlers::view::track_cursor(state, pos),

            // === Zoom ===
            AppCommand::Click { pos } => handlers::view::click(state, pos),
            AppCommand::ResetView => handlers::view::reset_view(state),
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),

            // === Karten ===
            AppCommand::SetMaps { maps } => handlers::maps::set_maps(state, maps),
            AppCommand::RecomputeBounds => handlers::maps::recompute_bounds(state),

            // === Optionen ===
            AppCommand::ApplyOptions { options } => {
                handlers::options::apply_options(state, *options)
            }
            AppCommand::SaveOptions => handlers::options::save_options(state)?,
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }

    /// Rendert einen Frame und übernimmt die Akteur-Zähler in den State.
    ///
    /// Die Zähler werden auch dann übernommen, wenn der Frame fehlschlägt.
    pub fn render_frame(
        &self,
        state: &mut AppState,
        canvas: &mut dyn Canvas,
    ) -> Result<FrameReport, ViewerError> {
        let scene = self.build_render_scene(state);
        state.actor_counts = ActorCounts::tally(&scene.actors);
        render::render_scene(canvas, &scene)
    }
}
