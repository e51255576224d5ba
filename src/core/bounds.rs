//! Bounding Box über alle Karten-Punkte.

use super::{GeoMap, ViewerError};
use glam::DVec2;

/// Achsenparallele Bounding Box in Weltkoordinaten
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimale X-Koordinate (links)
    pub min_x: f64,
    /// Minimale Y-Koordinate (unten)
    pub min_y: f64,
    /// Maximale X-Koordinate (rechts)
    pub max_x: f64,
    /// Maximale Y-Koordinate (oben)
    pub max_y: f64,
}

impl BoundingBox {
    /// Erstellt eine Box aus zwei Ecken
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Box, die genau einen Punkt umschließt
    fn at(point: DVec2) -> Self {
        Self::new(point.x, point.y, point.x, point.y)
    }

    /// Erweitert die Box um einen Punkt
    fn include(&mut self, point: DVec2) {
        self.min_x = self.min_x.min(point.x);
        self.max_x = self.max_x.max(point.x);
        self.min_y = self.min_y.min(point.y);
        self.max_y = self.max_y.max(point.y);
    }

    /// Ausdehnung in X
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Ausdehnung in Y
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Berechnet die Bounding Box über alle Punkte aller Karten.
///
/// Leere Karten-Menge → `NoMaps`, Karte ohne Punkte → `EmptyMap`.
pub fn compute_bounds<'a>(
    maps: impl IntoIterator<Item = &'a GeoMap>,
) -> Result<BoundingBox, ViewerError> {
    let mut bounds: Option<BoundingBox> = None;

    for map in maps {
        let Some((first, rest)) = map.points.split_first() else {
            return Err(ViewerError::EmptyMap {
                map_id: map.id.clone(),
            });
        };

        let map_bounds = bounds.get_or_insert_with(|| BoundingBox::at(*first));
        map_bounds.include(*first);
        for point in rest {
            map_bounds.include(*point);
        }
    }

    bounds.ok_or(ViewerError::NoMaps)
}
