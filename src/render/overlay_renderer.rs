//! Bildschirmfeste Overlays: Zoom-Buttons und Koordinaten-Anzeige.

use super::types::RenderContext;
use super::Canvas;
use crate::core::Rgba;
use crate::shared::zoom_controls::CONTROL_SIZE_PX;
use crate::shared::ZoomButton;
use glam::{DVec2, Vec2};

/// Position der Koordinaten-Anzeige (Grundlinie links).
const COORDINATES_ANCHOR: Vec2 = Vec2::new(10.0, 20.0);

/// Zeichnet Reset-Kreis, Zoom-In-Box mit "+" und Zoom-Out-Box mit "−".
///
/// Unabhängig von Zoom und Pan, immer unten links.
pub(crate) fn render_zoom_controls(canvas: &mut dyn Canvas, surface_height: f64, color: Rgba) {
    let size = CONTROL_SIZE_PX as f32;
    let half = size / 2.0;

    for button in ZoomButton::ALL {
        let min = button.top_left(surface_height).as_vec2();
        // Glyphen-Striche 4..11 px innerhalb der Box, Mitte bei 8 px
        let horizontal = (min + Vec2::new(4.0, 8.0), min + Vec2::new(11.0, 8.0));
        let vertical = (min + Vec2::new(8.0, 4.0), min + Vec2::new(8.0, 11.0));

        match button {
            ZoomButton::Reset => {
                canvas.stroke_circle(min + Vec2::splat(half), half, color);
            }
            ZoomButton::ZoomIn => {
                canvas.stroke_rect(min, Vec2::splat(size), color);
                canvas.line(horizontal.0, horizontal.1, color);
                canvas.line(vertical.0, vertical.1, color);
            }
            ZoomButton::ZoomOut => {
                canvas.stroke_rect(min, Vec2::splat(size), color);
                canvas.line(horizontal.0, horizontal.1, color);
            }
        }
    }
}

/// Zeichnet die Weltkoordinaten unter dem Mauszeiger als "x,y".
pub(crate) fn render_cursor_coordinates(ctx: &RenderContext, canvas: &mut dyn Canvas, cursor: DVec2) {
    let world = ctx.to_world(cursor);
    canvas.text(
        COORDINATES_ANCHOR,
        &format_coordinates(world),
        ctx.options.control_color,
    );
}

/// Formatiert Weltkoordinaten für die Anzeige.
pub(crate) fn format_coordinates(world: DVec2) -> String {
    format!("{},{}", world.x, world.y)
}
