//! Handler für Handle-Auswahl und Drag per Zeiger.

use crate::app::RigState;
use crate::core::BoneHost;
use glam::Vec3;

/// Greift das nächstgelegene Handle im Pick-Radius.
///
/// Gibt `true` zurück, wenn ein Handle gegriffen wurde.
pub fn select_handle_at(state: &mut RigState, world_pos: Vec3, max_distance: f32) -> bool {
    let Some(index) = state.handles.pick(world_pos, max_distance) else {
        return false;
    };
    state.handles.select(index);
    if state.options.debug_mode {
        log::debug!("Handle {} gegriffen", index);
    }
    true
}

/// Verschiebt den Knot des gegriffenen Handles auf die Zeigerposition.
///
/// Der Zeiger wird auf die Ebene z = 0 gezwungen. Ohne Auswahl: No-op.
pub fn drag_selected(
    state: &mut RigState,
    host: &mut impl BoneHost,
    world_pos: Vec3,
) -> anyhow::Result<()> {
    let Some(index) = state.handles.selected() else {
        return Ok(());
    };
    let target = Vec3::new(world_pos.x, world_pos.y, 0.0);
    state.rig.set_knot_position(index, target, host)?;
    if let Some(curve) = state.rig.curve() {
        state.handles.update_one(curve, state.rig.frame(), index);
    }
    Ok(())
}

/// Lässt das gegriffene Handle los.
pub fn release(state: &mut RigState) {
    state.handles.deselect();
}
