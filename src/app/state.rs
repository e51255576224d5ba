//! Application State: geladene Karten, Akteur-Quelle, Viewport und Optionen.

use super::interaction::InteractionController;
use super::CommandLog;
use crate::core::{ActorCounts, ActorSource, MapStore, ViewportState};
use crate::shared::ViewerOptions;
use glam::DVec2;
use std::path::PathBuf;
use std::sync::Arc;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuell geladene Karten (None = nichts geladen)
    pub maps: Option<Arc<MapStore>>,
    /// Live-Akteure der Simulation (None = keine Simulation angebunden)
    pub actors: Option<Arc<dyn ActorSource>>,
    /// Zoom/Pan-Zustand und Zeiger-Verarbeitung
    pub interaction: InteractionController,
    /// Größe der Zeichenfläche in Pixeln
    pub surface_size: DVec2,
    /// Akteur-Zähler des zuletzt gerenderten Frames
    pub actor_counts: ActorCounts,
    /// Laufzeit-Optionen (Farben, Größen, Sichtbarkeit)
    pub options: ViewerOptions,
    /// Zielpfad für "Optionen speichern"
    pub options_path: PathBuf,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self {
            maps: None,
            actors: None,
            interaction: InteractionController::new(),
            surface_size: DVec2::ZERO,
            actor_counts: ActorCounts::default(),
            options: ViewerOptions::default(),
            options_path: ViewerOptions::config_path(),
            command_log: CommandLog::new(),
        }
    }

    /// Bindet eine Akteur-Quelle an (Builder-Stil für den Start).
    pub fn with_actor_source(mut self, source: Arc<dyn ActorSource>) -> Self {
        self.actors = Some(source);
        self
    }

    /// Zähler pro Akteur-Typ aus dem letzten Frame
    pub fn actor_counts(&self) -> ActorCounts {
        self.actor_counts
    }

    /// Read-only Sicht auf den Viewport-Zustand
    pub fn viewport(&self) -> &ViewportState {
        self.interaction.viewport()
    }

    /// Gibt `true` zurück, wenn Karten mit gültigen Bounds vorhanden sind.
    pub fn has_maps(&self) -> bool {
        self.maps.is_some() && self.viewport().bounds.is_some()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
