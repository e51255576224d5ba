//! Render-Pass: Karten, Akteure und Overlays in ein `Canvas` zeichnen.

mod actor_renderer;
mod canvas;
mod map_renderer;
mod overlay_renderer;
mod types;

pub use crate::shared::RenderScene;
pub use canvas::{Canvas, DrawCommand, RecordingCanvas};
use types::RenderContext;

use crate::core::{ActorCounts, ViewTransform, ViewerError};

/// Ergebnis eines Render-Passes
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameReport {
    /// Akteur-Zähler dieses Frames
    pub counts: ActorCounts,
    /// Verwendete Transformation (None = nichts gezeichnet)
    pub transform: Option<ViewTransform>,
}

/// Zeichnet die komplette Szene.
///
/// Reihenfolge (später Gezeichnetes liegt oben): Karten, Akteure,
/// Zoom-Buttons, Koordinaten-Anzeige. Die Akteure werden immer gezählt,
/// auch wenn ohne Karten, ohne Bounds oder auf einer zu kleinen Fläche
/// nichts gezeichnet wird.
pub fn render_scene(
    canvas: &mut dyn Canvas,
    scene: &RenderScene,
) -> Result<FrameReport, ViewerError> {
    let counts = ActorCounts::tally(&scene.actors);
    let skipped = FrameReport {
        counts,
        transform: None,
    };

    let (Some(maps), Some(bounds)) = (scene.maps.as_deref(), scene.viewport.bounds) else {
        log::debug!("Keine Karten geladen, Frame übersprungen");
        return Ok(skipped);
    };

    // 1. Skalierung für die aktuelle Flächengröße
    let transform = match ViewTransform::compute(
        bounds,
        scene.surface_size.x,
        scene.surface_size.y,
        scene.options.border_px,
    ) {
        Ok(transform) => transform,
        Err(ViewerError::SurfaceTooSmall { width, height, .. }) => {
            log::debug!("Zeichenfläche {}x{} zu klein, Frame übersprungen", width, height);
            return Ok(skipped);
        }
        Err(e) => return Err(e),
    };

    let ctx = RenderContext {
        transform,
        viewport: &scene.viewport,
        options: &scene.options,
    };

    // 2. Karten
    for map in maps.maps() {
        map_renderer::render_map(&ctx, canvas, map)?;
    }

    // 3. Akteure
    actor_renderer::render_actors(&ctx, canvas, &scene.actors);
    log::debug!("{} Akteure gezählt", counts.total());

    // 4. Zoom-Buttons
    overlay_renderer::render_zoom_controls(
        canvas,
        scene.surface_size.y,
        scene.options.control_color,
    );

    // 5. Koordinaten-Anzeige
    if scene.options.visibility.show_coordinates {
        if let Some(cursor) = scene.cursor {
            overlay_renderer::render_cursor_coordinates(&ctx, canvas, cursor);
        }
    }

    Ok(FrameReport {
        counts,
        transform: Some(transform),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{color, ActorSnapshot, BoundingBox, GeoMap, MapLine, MapStore, ViewportState};
    use crate::shared::ViewerOptions;
    use approx::assert_relative_eq;
    use glam::{DVec2, Vec2};
    use std::sync::Arc;

    fn road(id: &str, color: &str) -> GeoMap {
        GeoMap::new(
            id,
            vec![
                DVec2::new(0.0, 0.0),
                DVec2::new(50.0, 25.0),
                DVec2::new(100.0, 50.0),
            ],
            vec![MapLine::new(vec![0, 1, 2])],
            color,
        )
    }

    fn scene(maps: Vec<GeoMap>, actors: Vec<ActorSnapshot>) -> RenderScene {
        let store = MapStore::from_maps(maps).unwrap();
        RenderScene {
            maps: Some(Arc::new(store)),
            actors,
            viewport: ViewportState {
                bounds: Some(BoundingBox::new(0.0, 0.0, 100.0, 50.0)),
                ..ViewportState::new()
            },
            surface_size: DVec2::new(400.0, 300.0),
            cursor: None,
            options: ViewerOptions::default(),
        }
    }

    #[test]
    fn lines_use_configured_map_color() {
        let scene = scene(vec![road("a", "blue")], Vec::new());
        let mut canvas = RecordingCanvas::new();

        render_scene(&mut canvas, &scene).unwrap();

        let lines: Vec<_> = canvas.lines().collect();
        // 2 Segmente der Karte + 3 Glyphen-Striche der Zoom-Buttons
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0].color(), color::BLUE);
        assert_eq!(
            *lines[0],
            DrawCommand::Line {
                from: Vec2::new(5.0, 247.5),
                to: Vec2::new(200.0, 150.0),
                color: color::BLUE,
            }
        );
    }

    #[test]
    fn unknown_color_falls_back_to_default() {
        let scene = scene(vec![road("a", "mauve")], Vec::new());
        let mut canvas = RecordingCanvas::new();

        render_scene(&mut canvas, &scene).unwrap();

        assert_eq!(canvas.commands[0].color(), color::DEFAULT_LINE_COLOR);
    }

    #[test]
    fn hidden_kind_is_counted_but_not_drawn() {
        let mut scene = scene(
            vec![road("a", "blue")],
            vec![
                ActorSnapshot::new("Car_12", DVec2::new(10.0, 10.0)),
                ActorSnapshot::new("Ped_1", DVec2::new(20.0, 10.0)),
            ],
        );
        scene.options.visibility.cars = false;
        let mut canvas = RecordingCanvas::new();

        let report = render_scene(&mut canvas, &scene).unwrap();

        assert_eq!(report.counts.cars, 1);
        assert_eq!(report.counts.pedestrians, 1);
        let actor_rects: Vec<_> = canvas
            .rects()
            .filter(|c| matches!(c, DrawCommand::Rect { size, .. } if *size == Vec2::splat(8.0)))
            .collect();
        assert_eq!(actor_rects.len(), 1);
        assert_eq!(actor_rects[0].color(), color::GREEN);
    }

    #[test]
    fn labels_are_drawn_only_when_enabled() {
        let actors = vec![ActorSnapshot::new("Tram_4", DVec2::new(50.0, 25.0))];
        let mut canvas = RecordingCanvas::new();

        let mut plain = scene(vec![road("a", "blue")], actors.clone());
        render_scene(&mut canvas, &plain).unwrap();
        assert!(canvas.texts().is_empty());

        canvas.clear();
        plain.options.visibility.show_actor_labels = true;
        render_scene(&mut canvas, &plain).unwrap();
        assert_eq!(canvas.texts(), vec!["Tram_4"]);
    }

    #[test]
    fn points_are_drawn_when_enabled() {
        let mut scene = scene(vec![road("a", "blue")], Vec::new());
        scene.options.visibility.show_points = true;
        let mut canvas = RecordingCanvas::new();

        render_scene(&mut canvas, &scene).unwrap();

        // Punkte vor den Linien, zentriert um den Weltpunkt
        assert_eq!(
            canvas.commands[0],
            DrawCommand::Rect {
                min: Vec2::new(3.5, 246.0),
                size: Vec2::splat(3.0),
                color: color::RED,
            }
        );
        assert_eq!(canvas.rects().filter(|c| c.color() == color::RED).count(), 3);
    }

    #[test]
    fn empty_map_is_skipped_and_next_map_still_renders() {
        let empty = GeoMap::new("leer", Vec::new(), Vec::new(), "red");
        let mut scene = scene(vec![empty, road("b", "green")], Vec::new());
        scene.options.visibility.show_points = true;
        let mut canvas = RecordingCanvas::new();

        let report = render_scene(&mut canvas, &scene);

        assert!(report.is_ok());
        assert_eq!(canvas.lines().filter(|c| c.color() == color::GREEN).count(), 2);
        assert_eq!(canvas.rects().filter(|c| c.color() == color::RED).count(), 3);
    }

    #[test]
    fn bad_line_index_is_reported() {
        // Am MapStore vorbei, der solche Karten schon beim Laden ablehnt
        let mut broken = road("kaputt", "blue");
        broken.lines[0].point_indices.push(42);
        let scene = scene(Vec::new(), Vec::new());

        let transform =
            ViewTransform::compute(BoundingBox::new(0.0, 0.0, 100.0, 50.0), 400.0, 300.0, 5.0)
                .unwrap();
        let ctx = RenderContext {
            transform,
            viewport: &scene.viewport,
            options: &scene.options,
        };
        let mut canvas = RecordingCanvas::new();

        let err = map_renderer::render_map(&ctx, &mut canvas, &broken).unwrap_err();

        assert_eq!(
            err,
            ViewerError::LineIndexOutOfRange {
                map_id: "kaputt".into(),
                index: 42,
                point_count: 3,
            }
        );
        assert!(canvas.commands.is_empty());
    }

    #[test]
    fn coordinates_show_world_position_of_cursor() {
        let mut scene = scene(vec![road("a", "blue")], Vec::new());
        scene.options.visibility.show_coordinates = true;
        // Bildschirmpunkt von Welt (0, 50)
        scene.cursor = Some(DVec2::new(5.0, 52.5));
        let mut canvas = RecordingCanvas::new();

        render_scene(&mut canvas, &scene).unwrap();

        let texts = canvas.texts();
        assert_eq!(texts.len(), 1);
        let (x, y) = texts[0].split_once(',').unwrap();
        assert_relative_eq!(x.parse::<f64>().unwrap(), 0.0, epsilon = 1e-9);
        assert_relative_eq!(y.parse::<f64>().unwrap(), 50.0, epsilon = 1e-9);
        assert!(matches!(
            canvas.commands.last(),
            Some(DrawCommand::Text { anchor, .. }) if *anchor == Vec2::new(10.0, 20.0)
        ));
    }

    #[test]
    fn no_maps_draws_nothing_but_counts_actors() {
        let scene = RenderScene {
            maps: None,
            actors: vec![ActorSnapshot::new("Car_1", DVec2::ZERO)],
            viewport: ViewportState::new(),
            surface_size: DVec2::new(400.0, 300.0),
            cursor: None,
            options: ViewerOptions::default(),
        };
        let mut canvas = RecordingCanvas::new();

        let report = render_scene(&mut canvas, &scene).unwrap();

        assert!(canvas.commands.is_empty());
        assert_eq!(report.counts.cars, 1);
        assert!(report.transform.is_none());
    }

    #[test]
    fn degenerate_bounds_are_reported() {
        let mut scene = scene(vec![road("a", "blue")], Vec::new());
        scene.viewport.bounds = Some(BoundingBox::new(3.0, 3.0, 3.0, 3.0));
        let mut canvas = RecordingCanvas::new();

        let err = render_scene(&mut canvas, &scene).unwrap_err();

        assert!(matches!(err, ViewerError::DegenerateBounds { .. }));
        assert!(canvas.commands.is_empty());
    }

    #[test]
    fn too_small_surface_skips_frame_but_counts_actors() {
        let mut scene = scene(
            vec![road("a", "blue")],
            vec![
                ActorSnapshot::new("Car_1", DVec2::new(10.0, 10.0)),
                ActorSnapshot::new("Ped_1", DVec2::new(20.0, 10.0)),
            ],
        );
        // Breite 8 bei Rand 5: keine nutzbare Fläche
        scene.surface_size = DVec2::new(8.0, 300.0);
        let mut canvas = RecordingCanvas::new();

        let report = render_scene(&mut canvas, &scene).unwrap();

        assert!(canvas.commands.is_empty());
        assert!(report.transform.is_none());
        assert_eq!(report.counts.cars, 1);
        assert_eq!(report.counts.pedestrians, 1);
    }
}
