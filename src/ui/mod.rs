//! UI-Komponenten: Zeichenfläche, Seitenleiste, Status-Bar, Input-Handling.

pub mod input;
/// Canvas auf egui-Painter
///
/// Verbindet den toolkit-unabhängigen Render-Pass mit egui.
pub mod painter_canvas;
pub mod side_panel;
pub mod status;

pub use input::InputState;
pub use painter_canvas::PainterCanvas;
pub use side_panel::render_side_panel;
pub use status::render_status_bar;
