//! Viewport-Transformation Welt ↔ Bildschirm mit Zoom und Pan.

use super::{BoundingBox, ViewerError};
use glam::DVec2;

/// Zoom/Pan-Zustand der Ansicht
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    /// Zoom-Faktor (1.0 = Karte passt genau in die Fläche)
    pub zoom_factor: f64,
    /// Versatz, der den Zoom auf die Flächenmitte verankert (Pixel)
    pub zoom_offset: DVec2,
    /// Verschiebung durch Drag (Pixel)
    pub pan_offset: DVec2,
    /// Bounding Box aller Karten (None = keine Karten geladen)
    pub bounds: Option<BoundingBox>,
}

impl ViewportState {
    /// Erstellt einen ungezoomten Zustand ohne Bounds
    pub fn new() -> Self {
        Self {
            zoom_factor: 1.0,
            zoom_offset: DVec2::ZERO,
            pan_offset: DVec2::ZERO,
            bounds: None,
        }
    }

    /// Setzt Zoom und Verschiebungen zurück; Bounds bleiben erhalten.
    pub fn reset(&mut self) {
        self.zoom_factor = 1.0;
        self.zoom_offset = DVec2::ZERO;
        self.pan_offset = DVec2::ZERO;
    }

    /// Gesamter Bildschirm-Versatz (Zoom-Anker + Pan)
    fn offset(&self) -> DVec2 {
        self.zoom_offset + self.pan_offset
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new()
    }
}

/// Skalierung und Zentrierung der Karte für eine konkrete Flächengröße.
///
/// Wird pro Frame aus Bounds und Flächengröße neu berechnet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    /// Pixel pro Welteinheit bei Zoom 1.0
    pub scale: f64,
    /// Zentrier-Versatz (nur eine Komponente ist ungleich 0)
    pub center: DVec2,
    /// Rand in Pixeln
    pub border: f64,
    /// Bounds, auf die sich `scale` bezieht
    pub bounds: BoundingBox,
}

impl ViewTransform {
    /// Berechnet Skalierung und Zentrierung.
    ///
    /// Ist die Karte relativ breiter als die nutzbare Fläche, wird auf die
    /// Breite eingepasst und vertikal zentriert, sonst auf die Höhe und
    /// horizontal zentriert. Das Seitenverhältnis wird per Kreuzprodukt
    /// verglichen, damit eine Ausdehnung von 0 nicht dividiert wird.
    ///
    /// Zentriert wird bewusst innerhalb der nutzbaren Fläche (ohne Rand),
    /// nicht innerhalb der ganzen Fläche.
    pub fn compute(
        bounds: BoundingBox,
        surface_width: f64,
        surface_height: f64,
        border: f64,
    ) -> Result<Self, ViewerError> {
        let map_width = bounds.width();
        let map_height = bounds.height();
        let degenerate = !map_width.is_finite()
            || !map_height.is_finite()
            || map_width < 0.0
            || map_height < 0.0
            || (map_width == 0.0 && map_height == 0.0);
        if degenerate {
            return Err(ViewerError::DegenerateBounds {
                width: map_width,
                height: map_height,
            });
        }

        let usable_width = surface_width - 2.0 * border;
        let usable_height = surface_height - 2.0 * border;
        if !(usable_width > 0.0 && usable_height > 0.0) {
            return Err(ViewerError::SurfaceTooSmall {
                width: surface_width,
                height: surface_height,
                border,
            });
        }

        let (scale, center) = if map_width * usable_height <= map_height * usable_width {
            // Auf Höhe einpassen, horizontal zentrieren
            let scale = usable_height / map_height;
            (scale, DVec2::new((usable_width - map_width * scale) / 2.0, 0.0))
        } else {
            // Auf Breite einpassen, vertikal zentrieren
            let scale = usable_width / map_width;
            (scale, DVec2::new(0.0, (usable_height - map_height * scale) / 2.0))
        };

        Ok(Self {
            scale,
            center,
            border,
            bounds,
        })
    }

    /// Konvertiert Welt-Koordinaten zu Bildschirm-Koordinaten.
    ///
    /// Y wird gespiegelt: Welt-Y wächst nach oben, Bildschirm-Y nach unten.
    pub fn world_to_screen(&self, world: DVec2, viewport: &ViewportState) -> DVec2 {
        let unzoomed = DVec2::new(
            (world.x - self.bounds.min_x) * self.scale,
            (self.bounds.max_y - world.y) * self.scale,
        ) + DVec2::splat(self.border)
            + self.center;
        unzoomed * viewport.zoom_factor + viewport.offset()
    }

    /// Konvertiert Bildschirm-Koordinaten zurück in Welt-Koordinaten.
    pub fn screen_to_world(&self, screen: DVec2, viewport: &ViewportState) -> DVec2 {
        let unzoomed = (screen - viewport.offset()) / viewport.zoom_factor;
        let scaled = unzoomed - DVec2::splat(self.border) - self.center;
        DVec2::new(
            scaled.x / self.scale + self.bounds.min_x,
            self.bounds.max_y - scaled.y / self.scale,
        )
    }
}
