//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::ViewerOptions;
use crate::core::{ActorSnapshot, MapStore, ViewportState};
use glam::DVec2;
use std::sync::Arc;

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Alle geladenen Karten (None = noch keine Karten)
    pub maps: Option<Arc<MapStore>>,
    /// Snapshot der Akteure für diesen Frame
    pub actors: Vec<ActorSnapshot>,
    /// Zoom/Pan-Zustand inkl. Bounds
    pub viewport: ViewportState,
    /// Größe der Zeichenfläche in Pixeln [Breite, Höhe]
    pub surface_size: DVec2,
    /// Letzte Mausposition in Bildschirm-Koordinaten
    pub cursor: Option<DVec2>,
    /// Laufzeit-Optionen für Farben, Größen, Sichtbarkeit
    pub options: ViewerOptions,
}

impl RenderScene {
    /// Gibt zurück, ob Karten zum Zeichnen vorhanden sind.
    pub fn has_maps(&self) -> bool {
        self.maps.as_ref().is_some_and(|maps| !maps.is_empty())
    }
}
