//! Akteure der Simulation und der geteilte Actor-Store.
//!
//! Die Simulation schreibt Positionen über einen `ActorStore`-Handle aus
//! einem eigenen Thread. Die Ansicht sieht nur das Lese-Interface
//! `ActorSource` und zieht pro Frame einen Snapshot.

use glam::DVec2;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};

/// Akteur-Typ, abgeleitet aus dem ID-Präfix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActorKind {
    /// ID beginnt mit "Car"
    Car,
    /// ID beginnt mit "Ped"
    Pedestrian,
    /// ID beginnt mit "Tra"
    Tram,
    /// Alles andere
    Other,
}

impl ActorKind {
    /// Alle Typen in Anzeige-Reihenfolge.
    pub const ALL: [ActorKind; 4] = [
        ActorKind::Car,
        ActorKind::Pedestrian,
        ActorKind::Tram,
        ActorKind::Other,
    ];

    /// Klassifiziert einen Akteur anhand seines ID-Präfixes.
    pub fn from_id(id: &str) -> Self {
        if id.starts_with("Car") {
            Self::Car
        } else if id.starts_with("Ped") {
            Self::Pedestrian
        } else if id.starts_with("Tra") {
            Self::Tram
        } else {
            Self::Other
        }
    }

    /// Anzeigename für UI-Beschriftungen
    pub fn label(self) -> &'static str {
        match self {
            Self::Car => "Cars",
            Self::Pedestrian => "Pedestrians",
            Self::Tram => "Trams",
            Self::Other => "Others",
        }
    }
}

/// Position eines Akteurs zu einem Zeitpunkt
#[derive(Debug, Clone, PartialEq)]
pub struct ActorSnapshot {
    /// Akteur-ID (z.B. "Car_12")
    pub id: String,
    /// Aus der ID abgeleiteter Typ
    pub kind: ActorKind,
    /// Position in Weltkoordinaten
    pub position: DVec2,
}

impl ActorSnapshot {
    /// Erstellt einen Snapshot; der Typ wird aus der ID abgeleitet.
    pub fn new(id: impl Into<String>, position: DVec2) -> Self {
        let id = id.into();
        let kind = ActorKind::from_id(&id);
        Self { id, kind, position }
    }
}

/// Zähler pro Akteur-Typ für den aktuellen Frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActorCounts {
    pub cars: usize,
    pub pedestrians: usize,
    pub trams: usize,
    pub others: usize,
}

impl ActorCounts {
    /// Erhöht den Zähler des übergebenen Typs
    pub fn increment(&mut self, kind: ActorKind) {
        match kind {
            ActorKind::Car => self.cars += 1,
            ActorKind::Pedestrian => self.pedestrians += 1,
            ActorKind::Tram => self.trams += 1,
            ActorKind::Other => self.others += 1,
        }
    }

    /// Zählerstand eines Typs
    pub fn get(&self, kind: ActorKind) -> usize {
        match kind {
            ActorKind::Car => self.cars,
            ActorKind::Pedestrian => self.pedestrians,
            ActorKind::Tram => self.trams,
            ActorKind::Other => self.others,
        }
    }

    /// Zählt eine Akteur-Liste pro Typ aus
    pub fn tally(actors: &[ActorSnapshot]) -> Self {
        let mut counts = Self::default();
        for actor in actors {
            counts.increment(actor.kind);
        }
        counts
    }

    /// Summe über alle Typen
    pub fn total(&self) -> usize {
        self.cars + self.pedestrians + self.trams + self.others
    }
}

/// Lese-Interface auf die Live-Akteure.
pub trait ActorSource: Send + Sync {
    /// Liefert eine Kopie aller Akteure in stabiler Reihenfolge.
    ///
    /// Keine Transaktionsgarantie: Positionen dürfen aus unterschiedlichen
    /// Simulationsschritten stammen.
    fn snapshot(&self) -> Vec<ActorSnapshot>;
}

/// Geteilter, thread-sicherer Store der Live-Akteure.
///
/// `Clone` liefert einen weiteren Handle auf denselben Store.
#[derive(Debug, Clone, Default)]
pub struct ActorStore {
    actors: Arc<RwLock<IndexMap<String, ActorSnapshot>>>,
}

impl ActorStore {
    /// Erstellt einen leeren Store
    pub fn new() -> Self {
        Self::default()
    }

    /// Setzt die Position eines Akteurs (legt ihn bei Bedarf an).
    pub fn upsert(&self, id: &str, position: DVec2) {
        let Ok(mut actors) = self.actors.write() else {
            log::error!("Actor-Store-Lock fehlgeschlagen (vergiftet), Update verworfen");
            return;
        };
        match actors.get_mut(id) {
            Some(actor) => actor.position = position,
            None => {
                actors.insert(id.to_owned(), ActorSnapshot::new(id, position));
            }
        }
    }

    /// Anzahl der Akteure
    pub fn len(&self) -> usize {
        self.actors.read().map_or(0, |actors| actors.len())
    }

    /// Gibt `true` zurück, wenn keine Akteure vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ActorSource for ActorStore {
    fn snapshot(&self) -> Vec<ActorSnapshot> {
        match self.actors.read() {
            Ok(actors) => actors.values().cloned().collect(),
            Err(_) => {
                log::error!("Actor-Store-Lock fehlgeschlagen (vergiftet), leerer Snapshot");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_is_derived_from_id_prefix() {
        assert_eq!(ActorKind::from_id("Car_12"), ActorKind::Car);
        assert_eq!(ActorKind::from_id("Ped_3"), ActorKind::Pedestrian);
        assert_eq!(ActorKind::from_id("Tram_7"), ActorKind::Tram);
        assert_eq!(ActorKind::from_id("Bus_1"), ActorKind::Other);
        // Präfix ist case-sensitiv
        assert_eq!(ActorKind::from_id("car_1"), ActorKind::Other);
    }

    #[test]
    fn counts_sum_over_all_kinds() {
        let mut counts = ActorCounts::default();
        counts.increment(ActorKind::Car);
        counts.increment(ActorKind::Car);
        counts.increment(ActorKind::Tram);
        counts.increment(ActorKind::Other);

        assert_eq!(counts.get(ActorKind::Car), 2);
        assert_eq!(counts.get(ActorKind::Pedestrian), 0);
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn tally_counts_by_id_prefix() {
        let actors = vec![
            ActorSnapshot::new("Car_1", DVec2::ZERO),
            ActorSnapshot::new("Ped_1", DVec2::ZERO),
            ActorSnapshot::new("Car_2", DVec2::ZERO),
        ];

        let counts = ActorCounts::tally(&actors);

        assert_eq!(counts.cars, 2);
        assert_eq!(counts.pedestrians, 1);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn store_upsert_updates_in_place() {
        let store = ActorStore::new();
        store.upsert("Car_1", DVec2::new(1.0, 2.0));
        store.upsert("Ped_1", DVec2::new(3.0, 4.0));
        store.upsert("Car_1", DVec2::new(5.0, 6.0));

        let snapshot = store.snapshot();

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].id, "Car_1");
        assert_eq!(snapshot[0].position, DVec2::new(5.0, 6.0));
        assert_eq!(snapshot[1].kind, ActorKind::Pedestrian);
    }

    #[test]
    fn cloned_handle_shares_state_across_threads() {
        let store = ActorStore::new();
        let writer = store.clone();

        std::thread::spawn(move || {
            for i in 0..10 {
                writer.upsert(&format!("Tram_{i}"), DVec2::new(i as f64, 0.0));
            }
        })
        .join()
        .unwrap();

        assert_eq!(store.len(), 10);
        assert_eq!(store.snapshot().len(), 10);
    }
}
