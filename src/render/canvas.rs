//! Zeichenflächen-Abstraktion für den Render-Pass.
//!
//! Der Render-Pass kennt nur `Canvas`. Die UI liefert eine Implementierung
//! auf `egui::Painter`, Tests und Benchmarks zeichnen in `RecordingCanvas`.

use crate::core::Rgba;
use glam::Vec2;

/// Zeichenziel in Bildschirm-Koordinaten (Ursprung oben links, Pixel).
pub trait Canvas {
    /// Rechteck-Umriss mit linker oberer Ecke `min`
    fn stroke_rect(&mut self, min: Vec2, size: Vec2, color: Rgba);
    /// Kreis-Umriss
    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    /// Einzelnes Liniensegment
    fn line(&mut self, from: Vec2, to: Vec2, color: Rgba);
    /// Text, `anchor` ist der linke Punkt der Grundlinie
    fn text(&mut self, anchor: Vec2, text: &str, color: Rgba);
}

/// Ein aufgezeichneter Zeichenaufruf
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect { min: Vec2, size: Vec2, color: Rgba },
    Circle { center: Vec2, radius: f32, color: Rgba },
    Line { from: Vec2, to: Vec2, color: Rgba },
    Text { anchor: Vec2, text: String, color: Rgba },
}

impl DrawCommand {
    /// Farbe des Zeichenaufrufs
    pub fn color(&self) -> Rgba {
        match self {
            Self::Rect { color, .. }
            | Self::Circle { color, .. }
            | Self::Line { color, .. }
            | Self::Text { color, .. } => *color,
        }
    }
}

/// Canvas, das alle Zeichenaufrufe in Reihenfolge mitschreibt.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Erstellt ein leeres Canvas
    pub fn new() -> Self {
        Self::default()
    }

    /// Verwirft alle Aufzeichnungen
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Alle Linien-Aufrufe
    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }

    /// Alle Rechteck-Aufrufe
    pub fn rects(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { .. }))
    }

    /// Alle gezeichneten Texte
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn stroke_rect(&mut self, min: Vec2, size: Vec2, color: Rgba) {
        self.commands.push(DrawCommand::Rect { min, size, color });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Rgba) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }

    fn text(&mut self, anchor: Vec2, text: &str, color: Rgba) {
        self.commands.push(DrawCommand::Text {
            anchor,
            text: text.to_owned(),
            color,
        });
    }
}
