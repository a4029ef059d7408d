//! Application-Layer: Controller, State, Events, Handles und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod handles;
mod intent_mapping;
pub mod keyboard;
pub mod render_scene;
/// Zustand eines interaktiven Rigs
pub mod state;

pub use command_log::CommandLog;
pub use controller::RigController;
pub use events::{RigCommand, RigIntent};
pub use handles::{HandleSet, HandleState};
pub use render_scene::build as build_render_scene;
pub use state::RigState;
