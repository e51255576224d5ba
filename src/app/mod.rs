//! Application-Layer: Controller, State, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod interaction;
mod intent_mapping;
pub mod render_scene;
/// Application State
///
/// Hält Karten, Akteur-Quelle, Viewport-Interaktion und Optionen.
pub mod state;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use interaction::{InteractionController, PointerListener};
pub use render_scene::build as build_render_scene;
pub use state::AppState;
