//! Core-Domänentypen: Karten, Akteure, Bounding Box, Viewport-Transformation.

pub mod actor;
pub mod bounds;
pub mod color;
pub mod error;
/// Karten-Geometrie
///
/// - GeoMap: Punkte, Linien und Linienfarbe einer Karte
/// - MapLine: Linienzug über Punkt-Indizes
/// - MapStore: unveränderlicher Satz aller Karten
pub mod geo_map;
pub mod viewport;

pub use actor::{ActorCounts, ActorKind, ActorSnapshot, ActorSource, ActorStore};
pub use bounds::{compute_bounds, BoundingBox};
pub use color::{color_or_default, resolve_color, Rgba};
pub use error::ViewerError;
pub use geo_map::{GeoMap, MapLine, MapStore, WorldPoint};
pub use viewport::{ViewTransform, ViewportState};
