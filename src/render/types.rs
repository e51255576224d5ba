//! Gemeinsamer Kontext der Sub-Renderer.

use crate::core::{ViewTransform, ViewportState};
use crate::shared::ViewerOptions;
use glam::{DVec2, Vec2};

/// Bündelt Transformation, Viewport und Optionen eines Frames.
///
/// `to_screen` ist der einzige Weg von Welt- zu Bildschirm-Koordinaten,
/// den Punkte, Linien und Akteure benutzen.
pub(crate) struct RenderContext<'a> {
    /// Skalierung/Zentrierung für die aktuelle Flächengröße
    pub transform: ViewTransform,
    /// Zoom/Pan-Zustand
    pub viewport: &'a ViewportState,
    /// Farben, Größen, Sichtbarkeit
    pub options: &'a ViewerOptions,
}

impl RenderContext<'_> {
    /// Welt → Bildschirm, als f32 für das Canvas
    pub fn to_screen(&self, world: DVec2) -> Vec2 {
        self.transform
            .world_to_screen(world, self.viewport)
            .as_vec2()
    }

    /// Bildschirm → Welt (Koordinaten-Anzeige)
    pub fn to_world(&self, screen: DVec2) -> DVec2 {
        self.transform.screen_to_world(screen, self.viewport)
    }
}
