//! Statische Farbtabelle für konfigurierbare Farbnamen.
//!
//! Karten geben ihre Linienfarbe als Namen an ("red", "lightGray",
//! "DARK_GRAY", ...). Groß-/Kleinschreibung und Unterstriche werden beim
//! Nachschlagen ignoriert.

use super::ViewerError;

/// RGBA-Farbe mit Komponenten in [0.0, 1.0]
pub type Rgba = [f32; 4];

pub const WHITE: Rgba = [1.0, 1.0, 1.0, 1.0];
pub const LIGHT_GRAY: Rgba = [0.752_941_2, 0.752_941_2, 0.752_941_2, 1.0];
pub const GRAY: Rgba = [0.501_960_8, 0.501_960_8, 0.501_960_8, 1.0];
pub const DARK_GRAY: Rgba = [0.250_980_4, 0.250_980_4, 0.250_980_4, 1.0];
pub const BLACK: Rgba = [0.0, 0.0, 0.0, 1.0];
pub const RED: Rgba = [1.0, 0.0, 0.0, 1.0];
pub const PINK: Rgba = [1.0, 0.686_274_5, 0.686_274_5, 1.0];
pub const ORANGE: Rgba = [1.0, 0.784_313_7, 0.0, 1.0];
pub const YELLOW: Rgba = [1.0, 1.0, 0.0, 1.0];
pub const GREEN: Rgba = [0.0, 1.0, 0.0, 1.0];
pub const MAGENTA: Rgba = [1.0, 0.0, 1.0, 1.0];
pub const CYAN: Rgba = [0.0, 1.0, 1.0, 1.0];
pub const BLUE: Rgba = [0.0, 0.0, 1.0, 1.0];

/// Farbe für Linien mit unbekanntem Farbnamen.
pub const DEFAULT_LINE_COLOR: Rgba = LIGHT_GRAY;

/// Normalisierter Name → Farbe
const NAMED_COLORS: &[(&str, Rgba)] = &[
    ("white", WHITE),
    ("lightgray", LIGHT_GRAY),
    ("gray", GRAY),
    ("darkgray", DARK_GRAY),
    ("black", BLACK),
    ("red", RED),
    ("pink", PINK),
    ("orange", ORANGE),
    ("yellow", YELLOW),
    ("green", GREEN),
    ("magenta", MAGENTA),
    ("cyan", CYAN),
    ("blue", BLUE),
];

/// Löst einen Farbnamen über die Farbtabelle auf.
pub fn resolve_color(name: &str) -> Result<Rgba, ViewerError> {
    let normalized: String = name
        .trim()
        .chars()
        .filter(|c| *c != '_')
        .map(|c| c.to_ascii_lowercase())
        .collect();

    NAMED_COLORS
        .iter()
        .find(|(key, _)| *key == normalized)
        .map(|&(_, color)| color)
        .ok_or_else(|| ViewerError::UnknownColor {
            name: name.to_owned(),
        })
}

/// Löst einen Farbnamen auf und fällt bei unbekannten Namen auf `default` zurück.
pub fn color_or_default(name: &str, default: Rgba) -> Rgba {
    resolve_color(name).unwrap_or_else(|e| {
        log::warn!("{}, verwende Standardfarbe", e);
        default
    })
}
