//! Fehler-Taxonomie der Karten-Ansicht.
//!
//! Leere Geometrie und unbekannte Farben werden im Render-Pfad geloggt und
//! übersprungen. Degenerierte Bounds und ungültige Linien-Indizes sind
//! Vertragsverletzungen und gehen an den Aufrufer zurück.

use thiserror::Error;

/// Fehler beim Berechnen oder Zeichnen der Kartenansicht.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewerError {
    /// Es wurde keine einzige Karte übergeben
    #[error("keine Karten geladen")]
    NoMaps,
    /// Eine Karte ohne Punkte bei der Bounds-Berechnung
    #[error("Karte '{map_id}' enthält keine Punkte")]
    EmptyMap { map_id: String },
    /// Bounding Box ohne Ausdehnung oder mit nicht-endlichen Werten
    #[error("Bounding Box ohne Ausdehnung: {width} x {height}")]
    DegenerateBounds { width: f64, height: f64 },
    /// Zeichenfläche abzüglich Rand hat keine positive Fläche
    #[error("Zeichenfläche zu klein: {width} x {height} (Rand {border})")]
    SurfaceTooSmall { width: f64, height: f64, border: f64 },
    /// Farbname nicht in der Farbtabelle
    #[error("unbekannter Farbname '{name}'")]
    UnknownColor { name: String },
    /// Linie verweist auf einen Punkt außerhalb der Punktliste
    #[error("Karte '{map_id}': Linien-Index {index} außerhalb von {point_count} Punkten")]
    LineIndexOutOfRange {
        map_id: String,
        index: usize,
        point_count: usize,
    },
    /// Linie mit weniger als zwei Punkten
    #[error("Karte '{map_id}': Linie {line} hat weniger als zwei Punkte")]
    LineTooShort { map_id: String, line: usize },
}
