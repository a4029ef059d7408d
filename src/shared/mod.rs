//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Optionen und die Render-Szene, die zwischen `app` und dem Host
//! geteilt werden.

pub mod options;
mod render_scene;

pub use options::RigOptions;
pub use options::{HANDLE_COLLIDER_RADIUS, TANGENT_STRENGTH};
pub use render_scene::{HandleVisual, RenderScene};
