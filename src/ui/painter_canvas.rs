//! `Canvas`-Implementierung auf einem egui-Painter.

use crate::core::Rgba;
use crate::render::Canvas;
use glam::Vec2;

/// Strichbreite aller Umrisse und Linien in Pixeln
const STROKE_WIDTH_PX: f32 = 1.0;
/// Schriftgröße für Labels und Koordinaten
const FONT_SIZE_PX: f32 = 12.0;

/// Zeichnet Render-Befehle in den Bereich eines egui-Painters.
///
/// Canvas-Koordinaten sind relativ zu `origin` (linke obere Ecke der
/// Zeichenfläche).
pub struct PainterCanvas<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
}

impl<'a> PainterCanvas<'a> {
    /// Erstellt ein Canvas für den Painter mit Ursprung `origin`.
    pub fn new(painter: &'a egui::Painter, origin: egui::Pos2) -> Self {
        Self { painter, origin }
    }

    fn pos(&self, p: Vec2) -> egui::Pos2 {
        egui::pos2(self.origin.x + p.x, self.origin.y + p.y)
    }
}

/// Wandelt eine RGBA-Farbe (0.0..=1.0) in egui's `Color32`.
pub fn to_color32(color: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (color[0] * 255.0) as u8,
        (color[1] * 255.0) as u8,
        (color[2] * 255.0) as u8,
        (color[3] * 255.0) as u8,
    )
}

impl Canvas for PainterCanvas<'_> {
    fn stroke_rect(&mut self, min: Vec2, size: Vec2, color: Rgba) {
        let rect = egui::Rect::from_min_size(self.pos(min), egui::vec2(size.x, size.y));
        self.painter.rect_stroke(
            rect,
            0.0,
            egui::Stroke::new(STROKE_WIDTH_PX, to_color32(color)),
            egui::StrokeKind::Inside,
        );
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.painter.circle_stroke(
            self.pos(center),
            radius,
            egui::Stroke::new(STROKE_WIDTH_PX, to_color32(color)),
        );
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Rgba) {
        self.painter.line_segment(
            [self.pos(from), self.pos(to)],
            egui::Stroke::new(STROKE_WIDTH_PX, to_color32(color)),
        );
    }

    fn text(&mut self, anchor: Vec2, text: &str, color: Rgba) {
        // Anker ist die linke Grundlinie
        self.painter.text(
            self.pos(anchor),
            egui::Align2::LEFT_BOTTOM,
            text,
            egui::FontId::proportional(FONT_SIZE_PX),
            to_color32(color),
        );
    }
}
