//! Demo-Daten: synthetisches Straßennetz und ein Simulations-Thread,
//! der Akteure entlang der Linien bewegt.

use crate::core::{ActorStore, GeoMap, MapLine, MapStore, ViewerError};
use glam::DVec2;
use std::sync::mpsc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Anzahl Knoten pro Rasterrichtung
const GRID_NODES: usize = 6;
/// Abstand der Rasterknoten in Welteinheiten
const GRID_SPACING: f64 = 100.0;
/// Ursprung des Rasters (realistische Weltkoordinaten)
const GRID_ORIGIN: DVec2 = DVec2::new(4_000.0, 7_000.0);

/// Id der Straßenkarte
pub const ROADS_MAP_ID: &str = "strassen";
/// Id der Tram-Karte
pub const TRAM_MAP_ID: &str = "tram";
/// Id der Fußwege-Karte
pub const FOOTPATH_MAP_ID: &str = "fusswege";

/// Baut den Demo-Kartensatz: Straßenraster, Tram-Diagonale, Fußweg-Ring.
pub fn demo_maps() -> Result<MapStore, ViewerError> {
    MapStore::from_maps([road_grid(), tram_line(), footpath_ring()])
}

fn grid_point(col: usize, row: usize) -> DVec2 {
    GRID_ORIGIN + DVec2::new(col as f64, row as f64) * GRID_SPACING
}

fn road_grid() -> GeoMap {
    let mut points = Vec::with_capacity(GRID_NODES * GRID_NODES);
    for row in 0..GRID_NODES {
        for col in 0..GRID_NODES {
            points.push(grid_point(col, row));
        }
    }

    let index = |col: usize, row: usize| row * GRID_NODES + col;
    let mut lines = Vec::with_capacity(GRID_NODES * 2);
    for row in 0..GRID_NODES {
        lines.push(MapLine::new((0..GRID_NODES).map(|col| index(col, row)).collect()));
    }
    for col in 0..GRID_NODES {
        lines.push(MapLine::new((0..GRID_NODES).map(|row| index(col, row)).collect()));
    }

    GeoMap::new(ROADS_MAP_ID, points, lines, "lightGray")
}

fn tram_line() -> GeoMap {
    let last = GRID_NODES - 1;
    let points: Vec<DVec2> = (0..=last).map(|i| grid_point(i, last - i)).collect();
    let lines = vec![MapLine::new((0..points.len()).collect())];
    GeoMap::new(TRAM_MAP_ID, points, lines, "blue")
}

fn footpath_ring() -> GeoMap {
    let inset = GRID_SPACING / 4.0;
    let min = grid_point(0, 0) - DVec2::splat(inset);
    let max = grid_point(GRID_NODES - 1, GRID_NODES - 1) + DVec2::splat(inset);
    let points = vec![
        min,
        DVec2::new(max.x, min.y),
        max,
        DVec2::new(min.x, max.y),
    ];
    let lines = vec![MapLine::new(vec![0, 1, 2, 3, 0])];
    GeoMap::new(FOOTPATH_MAP_ID, points, lines, "darkGray")
}

/// Ein Demo-Akteur, der auf einem Linienzug hin und her fährt.
#[derive(Debug, Clone)]
struct DemoActor {
    id: String,
    route: Vec<DVec2>,
    /// Geschwindigkeit in Welteinheiten pro Sekunde
    speed: f64,
    /// Startversatz entlang der Route
    offset: f64,
}

/// Leitet die Demo-Akteure aus den Linien des Kartensatzes ab.
fn demo_actors(maps: &MapStore) -> Vec<DemoActor> {
    let mut actors = Vec::new();
    let mut push = |prefix: &str, map_id: &str, speed: f64| {
        let Some(map) = maps.get(map_id) else {
            log::warn!("Demo: Karte '{}' fehlt, keine {}-Akteure", map_id, prefix);
            return;
        };
        for (i, line) in map.lines.iter().enumerate() {
            let route: Vec<DVec2> = line
                .point_indices
                .iter()
                .filter_map(|&index| map.points.get(index).copied())
                .collect();
            actors.push(DemoActor {
                id: format!("{}_{}", prefix, i + 1),
                route,
                speed,
                offset: i as f64 * GRID_SPACING * 0.7,
            });
        }
    };

    push("Car", ROADS_MAP_ID, 60.0);
    push("Tram", TRAM_MAP_ID, 25.0);
    push("Ped", FOOTPATH_MAP_ID, 8.0);
    push("Bus", TRAM_MAP_ID, 40.0);
    actors
}

/// Position nach `distance` Einheiten auf dem Linienzug, mit Umkehr an den Enden.
fn point_along(route: &[DVec2], distance: f64) -> Option<DVec2> {
    let first = *route.first()?;
    let length: f64 = route.windows(2).map(|w| w[0].distance(w[1])).sum();
    if length <= 0.0 {
        return Some(first);
    }

    // Hin und zurück: Periode 2 * Länge
    let phase = distance.rem_euclid(2.0 * length);
    let mut remaining = if phase > length {
        2.0 * length - phase
    } else {
        phase
    };

    for segment in route.windows(2) {
        let segment_length = segment[0].distance(segment[1]);
        if remaining <= segment_length {
            if segment_length <= 0.0 {
                return Some(segment[0]);
            }
            return Some(segment[0].lerp(segment[1], remaining / segment_length));
        }
        remaining -= segment_length;
    }

    route.last().copied()
}

/// Schreibt die Positionen aller Akteure zum Zeitpunkt `elapsed` in den Store.
fn advance(actors: &[DemoActor], store: &ActorStore, elapsed: Duration) {
    let seconds = elapsed.as_secs_f64();
    for actor in actors {
        if let Some(position) = point_along(&actor.route, actor.offset + actor.speed * seconds) {
            store.upsert(&actor.id, position);
        }
    }
}

/// Hintergrund-Thread, der den `ActorStore` periodisch aktualisiert.
///
/// Stoppt bei `stop()` oder beim Drop.
pub struct DemoSimulation {
    stop_tx: Option<mpsc::Sender<()>>,
    worker: Option<JoinHandle<()>>,
}

impl DemoSimulation {
    /// Startet die Simulation mit den aus `maps` abgeleiteten Akteuren.
    pub fn start(maps: &MapStore, store: ActorStore, tick: Duration) -> anyhow::Result<Self> {
        let actors = demo_actors(maps);
        log::info!("Demo-Simulation startet mit {} Akteuren", actors.len());

        // Erste Positionen sofort, damit der erste Frame nicht leer ist
        advance(&actors, &store, Duration::ZERO);

        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let started = Instant::now();
        let worker = thread::Builder::new()
            .name("demo-simulation".into())
            .spawn(move || loop {
                match stop_rx.recv_timeout(tick) {
                    Ok(()) | Err(mpsc::RecvTimeoutError::Disconnected) => break,
                    Err(mpsc::RecvTimeoutError::Timeout) => {
                        advance(&actors, &store, started.elapsed());
                    }
                }
            })?;

        Ok(Self {
            stop_tx: Some(stop_tx),
            worker: Some(worker),
        })
    }

    /// Beendet den Thread und wartet auf ihn.
    pub fn stop(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(());
        }
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::error!("Demo-Simulation: Thread mit Panic beendet");
            } else {
                log::info!("Demo-Simulation gestoppt");
            }
        }
    }

    /// Gibt `true` zurück, solange der Thread läuft.
    pub fn is_running(&self) -> bool {
        self.worker
            .as_ref()
            .is_some_and(|worker| !worker.is_finished())
    }
}

impl Drop for DemoSimulation {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{compute_bounds, ActorKind, ActorSource};
    use approx::assert_relative_eq;

    #[test]
    fn demo_maps_are_valid_and_bounded() {
        let maps = demo_maps().unwrap();

        assert_eq!(maps.len(), 3);
        let bounds = compute_bounds(maps.maps()).unwrap();
        assert!(bounds.width() > 0.0);
        assert!(bounds.height() > 0.0);
        assert_eq!(maps.get(ROADS_MAP_ID).unwrap().line_count(), GRID_NODES * 2);
    }

    #[test]
    fn point_along_walks_and_turns_back() {
        let route = vec![DVec2::ZERO, DVec2::new(10.0, 0.0), DVec2::new(10.0, 10.0)];

        let p = point_along(&route, 15.0).unwrap();
        assert_relative_eq!(p.x, 10.0);
        assert_relative_eq!(p.y, 5.0);

        // 25 = 20 bis zum Ende, dann 5 zurück
        let back = point_along(&route, 25.0).unwrap();
        assert_relative_eq!(back.x, 10.0);
        assert_relative_eq!(back.y, 5.0);

        let start = point_along(&route, 40.0).unwrap();
        assert_relative_eq!(start.x, 0.0);
        assert_relative_eq!(start.y, 0.0);
    }

    #[test]
    fn point_along_handles_degenerate_routes() {
        assert!(point_along(&[], 3.0).is_none());
        assert_eq!(point_along(&[DVec2::ONE], 3.0), Some(DVec2::ONE));
    }

    #[test]
    fn actors_cover_every_kind() {
        let maps = demo_maps().unwrap();
        let store = ActorStore::new();

        advance(&demo_actors(&maps), &store, Duration::from_secs(1));

        let snapshot = store.snapshot();
        for kind in ActorKind::ALL {
            assert!(
                snapshot.iter().any(|actor| actor.kind == kind),
                "kein Akteur vom Typ {:?}",
                kind
            );
        }
    }

    #[test]
    fn simulation_fills_store_and_stops() {
        let maps = demo_maps().unwrap();
        let store = ActorStore::new();

        let mut simulation =
            DemoSimulation::start(&maps, store.clone(), Duration::from_millis(5)).unwrap();
        assert!(!store.is_empty());
        assert!(simulation.is_running());

        simulation.stop();
        assert!(!simulation.is_running());
    }
}
