//! Simulation Map Viewer Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod demo;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, InteractionController, PointerListener};
pub use core::{
    compute_bounds, ActorCounts, ActorKind, ActorSnapshot, ActorSource, ActorStore, BoundingBox,
    GeoMap, MapLine, MapStore, ViewTransform, ViewerError, ViewportState,
};
pub use render::{render_scene, Canvas, FrameReport, RecordingCanvas};
pub use shared::{RenderScene, ViewerOptions, VisibilityFlags, ZoomButton};
