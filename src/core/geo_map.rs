//! Karten-Geometrie: Punkte, Linien und der unveränderliche MapStore.

use super::ViewerError;
use glam::DVec2;
use indexmap::IndexMap;

/// Punkt in Weltkoordinaten (Y wächst nach oben).
pub type WorldPoint = DVec2;

/// Linienzug über Punkt-Indizes der Elternkarte
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapLine {
    /// Indizes in `GeoMap::points`, in Zeichen-Reihenfolge
    pub point_indices: Vec<usize>,
}

impl MapLine {
    /// Erstellt eine neue Linie aus Punkt-Indizes
    pub fn new(point_indices: Vec<usize>) -> Self {
        Self { point_indices }
    }
}

/// Eine geladene Karte mit Punkten, Linien und Linienfarbe
#[derive(Debug, Clone)]
pub struct GeoMap {
    /// Eindeutige Karten-ID
    pub id: String,
    /// Alle Punkte der Karte
    pub points: Vec<WorldPoint>,
    /// Alle Linien der Karte
    pub lines: Vec<MapLine>,
    /// Farbname für die Linien (siehe `core::color`)
    pub line_color: String,
}

impl GeoMap {
    /// Erstellt eine neue Karte
    pub fn new(
        id: impl Into<String>,
        points: Vec<WorldPoint>,
        lines: Vec<MapLine>,
        line_color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            points,
            lines,
            line_color: line_color.into(),
        }
    }

    /// Prüft, dass jede Linie mindestens zwei gültige Punkt-Indizes hat.
    ///
    /// Leere Punkt- oder Linienlisten sind erlaubt; sie werden beim Zeichnen
    /// übersprungen.
    pub fn validate(&self) -> Result<(), ViewerError> {
        for (line_no, line) in self.lines.iter().enumerate() {
            if line.point_indices.len() < 2 {
                return Err(ViewerError::LineTooShort {
                    map_id: self.id.clone(),
                    line: line_no,
                });
            }
            if let Some(&index) = line
                .point_indices
                .iter()
                .find(|&&index| index >= self.points.len())
            {
                return Err(ViewerError::LineIndexOutOfRange {
                    map_id: self.id.clone(),
                    index,
                    point_count: self.points.len(),
                });
            }
        }
        Ok(())
    }

    /// Anzahl der Punkte
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Anzahl der Linien
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// Unveränderlicher Satz aller geladenen Karten, indexiert nach Karten-ID.
///
/// Nach dem Aufbau gibt es nur noch lesenden Zugriff. Die Einfüge-Reihenfolge
/// bleibt erhalten und bestimmt die Zeichen-Reihenfolge.
#[derive(Debug, Clone, Default)]
pub struct MapStore {
    maps: IndexMap<String, GeoMap>,
}

impl MapStore {
    /// Baut einen Store aus Karten und validiert jede Karte.
    ///
    /// Bei doppelten IDs gewinnt die zuletzt übergebene Karte.
    pub fn from_maps(maps: impl IntoIterator<Item = GeoMap>) -> Result<Self, ViewerError> {
        let mut by_id = IndexMap::new();
        for map in maps {
            map.validate()?;
            if by_id.contains_key(&map.id) {
                log::warn!("Karte '{}' doppelt geladen, ersetze vorherige", map.id);
            }
            by_id.insert(map.id.clone(), map);
        }
        Ok(Self { maps: by_id })
    }

    /// Liefert eine Karte nach ID
    pub fn get(&self, map_id: &str) -> Option<&GeoMap> {
        self.maps.get(map_id)
    }

    /// Iteriert über alle Karten in Lade-Reihenfolge
    pub fn maps(&self) -> impl Iterator<Item = &GeoMap> {
        self.maps.values()
    }

    /// Anzahl der Karten
    pub fn len(&self) -> usize {
        self.maps.len()
    }

    /// Gibt `true` zurück, wenn keine Karte geladen ist.
    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    /// Gesamtzahl der Punkte über alle Karten
    pub fn total_points(&self) -> usize {
        self.maps.values().map(GeoMap::point_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(id: &str) -> GeoMap {
        GeoMap::new(
            id,
            vec![
                DVec2::new(0.0, 0.0),
                DVec2::new(10.0, 0.0),
                DVec2::new(10.0, 10.0),
                DVec2::new(0.0, 10.0),
            ],
            vec![MapLine::new(vec![0, 1, 2, 3, 0])],
            "blue",
        )
    }

    #[test]
    fn validate_accepts_well_formed_map() {
        assert_eq!(square("a").validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_index_outside_points() {
        let mut map = square("a");
        map.lines.push(MapLine::new(vec![1, 7]));

        let err = map.validate().unwrap_err();

        assert_eq!(
            err,
            ViewerError::LineIndexOutOfRange {
                map_id: "a".into(),
                index: 7,
                point_count: 4,
            }
        );
    }

    #[test]
    fn validate_rejects_single_point_line() {
        let mut map = square("a");
        map.lines.push(MapLine::new(vec![2]));

        assert!(matches!(
            map.validate(),
            Err(ViewerError::LineTooShort { line: 1, .. })
        ));
    }

    #[test]
    fn validate_allows_empty_geometry() {
        let map = GeoMap::new("leer", Vec::new(), Vec::new(), "red");
        assert!(map.validate().is_ok());
    }

    #[test]
    fn store_keeps_load_order_and_replaces_duplicates() {
        let mut replaced = square("a");
        replaced.line_color = "green".into();

        let store = MapStore::from_maps(vec![square("b"), square("a"), replaced]).unwrap();

        let ids: Vec<&str> = store.maps().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(store.get("a").map(|m| m.line_color.as_str()), Some("green"));
        assert_eq!(store.total_points(), 8);
    }

    #[test]
    fn store_rejects_invalid_map() {
        let mut broken = square("x");
        broken.lines.push(MapLine::new(vec![0, 99]));

        assert!(MapStore::from_maps(vec![square("a"), broken]).is_err());
    }
}
