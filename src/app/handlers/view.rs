//! Handler für Handle-Darstellung, Auto-Update und Statuszeile.

use super::editing::refresh_handles;
use crate::app::RigState;

/// Schaltet die ziehbaren Handles ein oder aus.
pub fn set_runtime_manipulation(state: &mut RigState, enabled: bool) {
    state.manipulation_enabled = enabled;
    state.status_message = None;
    if enabled {
        refresh_handles(state);
        log::info!("Manipulation aktiviert ({} Handles)", state.handles.len());
    } else {
        state.handles.clear();
        log::info!("Manipulation deaktiviert");
    }
}

/// Setzt das Auto-Update der Bones.
pub fn set_auto_update(state: &mut RigState, enabled: bool) {
    state.auto_update = enabled;
}

/// Setzt die Handle-Größe (und damit den Pick-Radius).
pub fn set_handle_size(state: &mut RigState, size: f32) {
    if size.is_finite() && size > 0.0 {
        state.options.handle_size = size;
    } else {
        log::warn!("Ungültige Handle-Größe ignoriert: {}", size);
    }
}

/// Überschreibt die Statuszeile.
pub fn show_status(state: &mut RigState, message: String) {
    state.status_message = Some(message);
}
