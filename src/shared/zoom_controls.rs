//! Feste Zoom-Buttons unten links: Geometrie und Klick-Zuordnung.
//!
//! Wird von `app` (Hit-Test) und `render` (Zeichnen) gemeinsam genutzt,
//! damit Trefferbereich und Darstellung nicht auseinanderlaufen.

use glam::DVec2;

/// Abstand der Buttons vom linken Rand.
pub const CONTROL_LEFT_PX: f64 = 10.0;
/// Kantenlänge eines Buttons.
pub const CONTROL_SIZE_PX: f64 = 15.0;

/// Einer der drei Zoom-Buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomButton {
    /// Kreis: Zoom und Pan zurücksetzen
    Reset,
    /// Box mit "+"
    ZoomIn,
    /// Box mit "−"
    ZoomOut,
}

impl ZoomButton {
    /// Alle Buttons von oben nach unten.
    pub const ALL: [ZoomButton; 3] = [ZoomButton::Reset, ZoomButton::ZoomIn, ZoomButton::ZoomOut];

    /// Abstand der Button-Oberkante vom unteren Flächenrand
    fn offset_from_bottom(self) -> f64 {
        match self {
            Self::Reset => 75.0,
            Self::ZoomIn => 50.0,
            Self::ZoomOut => 25.0,
        }
    }

    /// Linke obere Ecke des Buttons in Bildschirm-Koordinaten
    pub fn top_left(self, surface_height: f64) -> DVec2 {
        DVec2::new(CONTROL_LEFT_PX, surface_height - self.offset_from_bottom())
    }

    /// Prüft, ob ein Klick im Inneren des Buttons liegt (Rand exklusive).
    pub fn contains(self, pos: DVec2, surface_height: f64) -> bool {
        let min = self.top_left(surface_height);
        let max = min + DVec2::splat(CONTROL_SIZE_PX);
        pos.x > min.x && pos.x < max.x && pos.y > min.y && pos.y < max.y
    }

    /// Ordnet einen Klick einem Button zu. Klicks daneben ergeben `None`.
    pub fn hit_test(pos: DVec2, surface_height: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|button| button.contains(pos, surface_height))
    }
}
