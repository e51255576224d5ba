//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `render` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;
pub mod zoom_controls;

pub use options::{ViewerOptions, VisibilityFlags};
pub use render_scene::RenderScene;
pub use zoom_controls::ZoomButton;
