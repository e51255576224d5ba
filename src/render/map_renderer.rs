//! Zeichnet Karten: optionale Punkt-Marker, dann die Linienzüge.

use super::types::RenderContext;
use super::Canvas;
use crate::core::{color_or_default, GeoMap, ViewerError};
use glam::Vec2;

/// Zeichnet eine Karte. Punkte nur, wenn in den Optionen aktiviert.
pub(crate) fn render_map(
    ctx: &RenderContext,
    canvas: &mut dyn Canvas,
    map: &GeoMap,
) -> Result<(), ViewerError> {
    if ctx.options.visibility.show_points {
        render_points(ctx, canvas, map);
    }
    render_lines(ctx, canvas, map)
}

/// Zeichnet jeden Punkt als kleines Quadrat. Leere Punktliste wird geloggt.
fn render_points(ctx: &RenderContext, canvas: &mut dyn Canvas, map: &GeoMap) {
    if map.points.is_empty() {
        log::warn!("Karte '{}': Punktliste leer, Punkte übersprungen", map.id);
        return;
    }

    let size = Vec2::splat(ctx.options.point_marker_size_px);
    let color = ctx.options.point_color;
    for point in &map.points {
        let screen = ctx.to_screen(*point);
        canvas.stroke_rect(screen - size / 2.0, size, color);
    }
}

/// Zeichnet alle Linien als verbundene Segmente in der Kartenfarbe.
fn render_lines(
    ctx: &RenderContext,
    canvas: &mut dyn Canvas,
    map: &GeoMap,
) -> Result<(), ViewerError> {
    if map.lines.is_empty() {
        log::warn!("Karte '{}': Linienliste leer, Linien übersprungen", map.id);
        return Ok(());
    }

    let color = color_or_default(&map.line_color, ctx.options.default_line_color);

    for line in &map.lines {
        let screen_points = line
            .point_indices
            .iter()
            .map(|&index| {
                map.points
                    .get(index)
                    .map(|point| ctx.to_screen(*point))
                    .ok_or_else(|| ViewerError::LineIndexOutOfRange {
                        map_id: map.id.clone(),
                        index,
                        point_count: map.points.len(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        for segment in screen_points.windows(2) {
            canvas.line(segment[0], segment[1], color);
        }
    }

    log::debug!("Karte '{}': {} Linien gezeichnet", map.id, map.lines.len());
    Ok(())
}
