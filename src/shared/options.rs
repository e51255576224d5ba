//! Zentrale Konfiguration für den Sim Map Viewer.
//!
//! `ViewerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::color::{self, Rgba};
use crate::core::ActorKind;
use serde::{Deserialize, Serialize};

// ── Viewport ────────────────────────────────────────────────────────

/// Freier Rand um die Karte in Pixeln.
pub const VIEW_BORDER_PX: f64 = 5.0;
/// Zoom-Schritt pro Klick auf Zoom-In/Zoom-Out.
pub const ZOOM_STEP: f64 = 1.25;
/// Minimaler Zoom-Faktor (hält den Faktor strikt positiv).
pub const ZOOM_MIN: f64 = 0.001;
/// Maximaler Zoom-Faktor.
pub const ZOOM_MAX: f64 = 10_000.0;

// ── Marker ──────────────────────────────────────────────────────────

/// Kantenlänge der Punkt-Marker in Pixeln.
pub const POINT_MARKER_SIZE_PX: f32 = 3.0;
/// Kantenlänge der Akteur-Marker in Pixeln.
pub const ACTOR_MARKER_SIZE_PX: f32 = 8.0;

// ── Aktualisierung ──────────────────────────────────────────────────

/// Intervall für automatisches Neuzeichnen in Millisekunden.
pub const REFRESH_INTERVAL_MS: u64 = 100;

// ── Sichtbarkeit ────────────────────────────────────────────────────

/// Was beim Zeichnen angezeigt wird.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct VisibilityFlags {
    /// Karten-Punkte als kleine Marker zeichnen
    pub show_points: bool,
    /// Weltkoordinaten des Mauszeigers anzeigen
    pub show_coordinates: bool,
    /// Akteur-IDs neben den Markern anzeigen
    pub show_actor_labels: bool,
    /// Autos zeichnen
    pub cars: bool,
    /// Fußgänger zeichnen
    pub pedestrians: bool,
    /// Trams zeichnen
    pub trams: bool,
    /// Sonstige Akteure zeichnen
    pub others: bool,
}

impl VisibilityFlags {
    /// Gibt zurück, ob Akteure dieses Typs gezeichnet werden.
    pub fn is_kind_visible(&self, kind: ActorKind) -> bool {
        match kind {
            ActorKind::Car => self.cars,
            ActorKind::Pedestrian => self.pedestrians,
            ActorKind::Tram => self.trams,
            ActorKind::Other => self.others,
        }
    }

    /// Veränderlicher Zugriff auf das Flag eines Typs (für Checkboxen)
    pub fn kind_visible_mut(&mut self, kind: ActorKind) -> &mut bool {
        match kind {
            ActorKind::Car => &mut self.cars,
            ActorKind::Pedestrian => &mut self.pedestrians,
            ActorKind::Tram => &mut self.trams,
            ActorKind::Other => &mut self.others,
        }
    }
}

impl Default for VisibilityFlags {
    fn default() -> Self {
        Self {
            show_points: false,
            show_coordinates: false,
            show_actor_labels: false,
            cars: true,
            pedestrians: true,
            trams: true,
            others: true,
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Viewer-Optionen.
/// Wird als `sim_map_viewer.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerOptions {
    // ── Viewport ────────────────────────────────────────────────
    /// Rand um die Karte in Pixeln
    pub border_px: f64,
    /// Zoom-Schritt der Zoom-Buttons
    pub zoom_step: f64,
    /// Minimaler Zoom-Faktor
    pub zoom_min: f64,
    /// Maximaler Zoom-Faktor
    pub zoom_max: f64,

    // ── Marker ──────────────────────────────────────────────────
    /// Kantenlänge der Punkt-Marker
    pub point_marker_size_px: f32,
    /// Kantenlänge der Akteur-Marker
    pub actor_marker_size_px: f32,

    // ── Farben ──────────────────────────────────────────────────
    /// Farbe der Karten-Punkte
    pub point_color: Rgba,
    /// Linienfarbe bei unbekanntem Farbnamen
    pub default_line_color: Rgba,
    /// Farbe der Autos
    pub car_color: Rgba,
    /// Farbe der Fußgänger
    pub pedestrian_color: Rgba,
    /// Farbe der Trams
    pub tram_color: Rgba,
    /// Farbe sonstiger Akteure
    pub other_color: Rgba,
    /// Farbe der Zoom-Buttons und der Koordinaten-Anzeige
    pub control_color: Rgba,

    // ── Anzeige ─────────────────────────────────────────────────
    /// Sichtbarkeits-Schalter
    #[serde(default)]
    pub visibility: VisibilityFlags,

    // ── Aktualisierung ──────────────────────────────────────────
    /// Periodisch neu zeichnen, auch ohne Eingabe
    #[serde(default = "default_auto_refresh")]
    pub auto_refresh: bool,
    /// Intervall für periodisches Neuzeichnen
    #[serde(default = "default_refresh_interval_ms")]
    pub refresh_interval_ms: u64,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            border_px: VIEW_BORDER_PX,
            zoom_step: ZOOM_STEP,
            zoom_min: ZOOM_MIN,
            zoom_max: ZOOM_MAX,

            point_marker_size_px: POINT_MARKER_SIZE_PX,
            actor_marker_size_px: ACTOR_MARKER_SIZE_PX,

            point_color: color::RED,
            default_line_color: color::DEFAULT_LINE_COLOR,
            car_color: color::RED,
            pedestrian_color: color::GREEN,
            tram_color: color::BLUE,
            other_color: color::GRAY,
            control_color: color::LIGHT_GRAY,

            visibility: VisibilityFlags::default(),

            auto_refresh: true,
            refresh_interval_ms: REFRESH_INTERVAL_MS,
        }
    }
}

/// Serde-Default für `auto_refresh` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_auto_refresh() -> bool {
    true
}

/// Serde-Default für `refresh_interval_ms`.
fn default_refresh_interval_ms() -> u64 {
    REFRESH_INTERVAL_MS
}

impl ViewerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("sim_map_viewer"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("sim_map_viewer.toml")
    }

    /// Marker-Farbe eines Akteur-Typs
    pub fn actor_color(&self, kind: ActorKind) -> Rgba {
        match kind {
            ActorKind::Car => self.car_color,
            ActorKind::Pedestrian => self.pedestrian_color,
            ActorKind::Tram => self.tram_color,
            ActorKind::Other => self.other_color,
        }
    }

    /// Begrenzt einen Zoom-Faktor auf den konfigurierten Bereich.
    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        let min = self.zoom_min.max(f64::MIN_POSITIVE);
        let max = self.zoom_max.max(min);
        zoom.clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_roundtrip_keeps_values() {
        let mut options = ViewerOptions::default();
        options.visibility.show_points = true;
        options.visibility.trams = false;
        options.zoom_step = 1.5;

        let text = toml::to_string_pretty(&options).unwrap();
        let parsed: ViewerOptions = toml::from_str(&text).unwrap();

        assert_eq!(parsed, options);
    }

    #[test]
    fn missing_optional_sections_use_defaults() {
        let mut table = toml::Table::try_from(ViewerOptions::default()).unwrap();
        table.remove("visibility");
        table.remove("auto_refresh");
        table.remove("refresh_interval_ms");

        let parsed: ViewerOptions = toml::from_str(&table.to_string()).unwrap();

        assert_eq!(parsed.visibility, VisibilityFlags::default());
        assert!(parsed.auto_refresh);
        assert_eq!(parsed.refresh_interval_ms, REFRESH_INTERVAL_MS);
    }

    #[test]
    fn load_from_missing_file_returns_defaults() {
        let path = std::env::temp_dir().join("sim_map_viewer_gibt_es_nicht.toml");
        assert_eq!(ViewerOptions::load_from_file(&path), ViewerOptions::default());
    }

    #[test]
    fn save_and_load_roundtrip_through_file() {
        let path = std::env::temp_dir().join(format!(
            "sim_map_viewer_options_{}.toml",
            std::process::id()
        ));
        let mut options = ViewerOptions::default();
        options.visibility.show_coordinates = true;

        options.save_to_file(&path).unwrap();
        let loaded = ViewerOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, options);
    }

    #[test]
    fn clamp_zoom_never_reaches_zero() {
        let options = ViewerOptions {
            zoom_min: 0.0,
            ..ViewerOptions::default()
        };
        assert!(options.clamp_zoom(0.0) > 0.0);
        assert_eq!(options.clamp_zoom(1.0e9), options.zoom_max);
    }

    #[test]
    fn kind_visibility_follows_flags() {
        let mut flags = VisibilityFlags::default();
        *flags.kind_visible_mut(ActorKind::Pedestrian) = false;

        assert!(flags.is_kind_visible(ActorKind::Car));
        assert!(!flags.is_kind_visible(ActorKind::Pedestrian));
    }
}
