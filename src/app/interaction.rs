//! Zoom/Pan-Zustandsmaschine, gesteuert durch Zeiger-Events.

use crate::core::{BoundingBox, ViewportState};
use crate::shared::{ViewerOptions, ZoomButton};
use glam::DVec2;

/// Empfänger für Zeiger-Events im Viewport (Bildschirm-Koordinaten).
pub trait PointerListener {
    /// Maustaste gedrückt
    fn pointer_down(&mut self, pos: DVec2);
    /// Maus bei gedrückter Taste bewegt
    fn pointer_drag(&mut self, pos: DVec2);
    /// Maus ohne gedrückte Taste bewegt
    fn pointer_move(&mut self, pos: DVec2);
}

/// Besitzt den Viewport-Zustand und setzt Zeiger-Events und Button-Klicks um.
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    viewport: ViewportState,
    /// Klickposition abzüglich Pan beim letzten `pointer_down`
    drag_anchor: DVec2,
    /// Letzte bekannte Mausposition
    cursor: Option<DVec2>,
}

impl InteractionController {
    /// Erstellt einen Controller im Grundzustand
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only Sicht auf den Viewport-Zustand
    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    /// Letzte Mausposition (None = Maus war noch nie über der Fläche)
    pub fn cursor(&self) -> Option<DVec2> {
        self.cursor
    }

    /// Setzt neue Bounds (nach dem Laden von Karten).
    pub fn set_bounds(&mut self, bounds: Option<BoundingBox>) {
        self.viewport.bounds = bounds;
    }

    /// Zoom 1.0, keine Verschiebung.
    pub fn reset_view(&mut self) {
        self.viewport.reset();
    }

    /// Zoomt um einen Schritt hinein, verankert an der Flächenmitte.
    pub fn zoom_in(&mut self, surface_size: DVec2, options: &ViewerOptions) {
        let zoom = self.viewport.zoom_factor * options.zoom_step;
        self.apply_zoom(zoom, surface_size, options);
    }

    /// Zoomt um einen Schritt heraus, verankert an der Flächenmitte.
    pub fn zoom_out(&mut self, surface_size: DVec2, options: &ViewerOptions) {
        let zoom = self.viewport.zoom_factor / options.zoom_step;
        self.apply_zoom(zoom, surface_size, options);
    }

    /// Setzt den Zoom und berechnet den Zoom-Versatz neu.
    ///
    /// Die um den aktuellen Pan verschobene Flächenmitte bleibt dabei fest.
    fn apply_zoom(&mut self, zoom: f64, surface_size: DVec2, options: &ViewerOptions) {
        let zoom = options.clamp_zoom(zoom);
        let pan = self.viewport.pan_offset;
        self.viewport.zoom_factor = zoom;
        self.viewport.zoom_offset = (1.0 - zoom) * surface_size / 2.0 + pan * zoom - pan;
        log::debug!(
            "Zoom {:.4}, Zoom-Versatz ({:.1}, {:.1})",
            zoom,
            self.viewport.zoom_offset.x,
            self.viewport.zoom_offset.y
        );
    }

    /// Führt die Aktion eines Zoom-Buttons aus.
    fn press_button(
        &mut self,
        button: ZoomButton,
        surface_size: DVec2,
        options: &ViewerOptions,
    ) {
        match button {
            ZoomButton::Reset => self.reset_view(),
            ZoomButton::ZoomIn => self.zoom_in(surface_size, options),
            ZoomButton::ZoomOut => self.zoom_out(surface_size, options),
        }
    }

    /// Klick-Dispatcher: Klick auf einen Zoom-Button ausführen, sonst nichts.
    ///
    /// Gibt den getroffenen Button zurück.
    pub fn click(
        &mut self,
        pos: DVec2,
        surface_size: DVec2,
        options: &ViewerOptions,
    ) -> Option<ZoomButton> {
        let button = ZoomButton::hit_test(pos, surface_size.y)?;
        self.press_button(button, surface_size, options);
        Some(button)
    }
}

impl PointerListener for InteractionController {
    fn pointer_down(&mut self, pos: DVec2) {
        self.drag_anchor = pos - self.viewport.pan_offset;
    }

    fn pointer_drag(&mut self, pos: DVec2) {
        self.viewport.pan_offset = pos - self.drag_anchor;
    }

    fn pointer_move(&mut self, pos: DVec2) {
        self.cursor = Some(pos);
    }
}
