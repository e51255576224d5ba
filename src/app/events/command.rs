use crate::core::MapStore;
use crate::shared::ViewerOptions;
use glam::DVec2;
use std::sync::Arc;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Größe der Zeichenfläche setzen
    SetSurfaceSize { size: DVec2 },
    /// Drag-Anker für einen Pan setzen
    BeginPan { pos: DVec2 },
    /// Pan auf Zeigerposition relativ zum Anker setzen
    PanTo { pos: DVec2 },
    /// Mausposition für die Koordinaten-Anzeige merken
    TrackCursor { pos: DVec2 },
    /// Klick auf die Zoom-Buttons prüfen (Fehlklick = keine Änderung)
    Click { pos: DVec2 },
    /// Zoom 1, keine Verschiebung
    ResetView,
    /// Einen Zoom-Schritt hinein
    ZoomIn,
    /// Einen Zoom-Schritt heraus
    ZoomOut,
    /// Kartensatz übernehmen
    SetMaps { maps: Arc<MapStore> },
    /// Bounds aus dem aktuellen Kartensatz neu berechnen
    RecomputeBounds,
    /// Optionen übernehmen
    ApplyOptions { options: Box<ViewerOptions> },
    /// Optionen speichern
    SaveOptions,
}
