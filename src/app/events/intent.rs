use crate::core::MapStore;
use crate::shared::ViewerOptions;
use glam::DVec2;
use std::sync::Arc;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
/// Positionen sind Bildschirm-Koordinaten relativ zur Zeichenfläche.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Größe der Zeichenfläche hat sich geändert
    SurfaceResized { size: DVec2 },
    /// Maustaste über der Zeichenfläche gedrückt
    PointerPressed { pos: DVec2 },
    /// Maus bei gedrückter Taste bewegt
    PointerDragged { pos: DVec2 },
    /// Maus ohne gedrückte Taste bewegt
    PointerMoved { pos: DVec2 },
    /// Klick (Drücken und Loslassen ohne Ziehen)
    PointerClicked { pos: DVec2 },
    /// Ansicht auf Zoom 1 ohne Verschiebung zurücksetzen
    ResetViewRequested,
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Neuer Kartensatz geladen
    MapsLoaded { maps: Arc<MapStore> },
    /// Bounds der geladenen Karten neu berechnen
    RecomputeBoundsRequested,
    /// Optionen wurden im Panel geändert
    OptionsChanged { options: Box<ViewerOptions> },
    /// Aktuelle Optionen in die TOML-Datei schreiben
    SaveOptionsRequested,
}
