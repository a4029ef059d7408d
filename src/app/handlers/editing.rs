//! Handler für Kurven-Operationen (Initialisieren, Sync, Tangenten, Baseline).

use crate::app::RigState;
use crate::core::{BoneHost, BoneId};
use glam::Vec3;

/// Baut die Kurve aus den Bones und die Handles neu auf.
pub fn initialize(state: &mut RigState, host: &impl BoneHost) -> anyhow::Result<()> {
    state.rig.initialize(host)?;
    refresh_handles(state);
    Ok(())
}

/// Verschiebt einen Knot direkt auf eine Weltposition.
pub fn set_knot_position(
    state: &mut RigState,
    host: &mut impl BoneHost,
    index: usize,
    world_pos: Vec3,
) -> anyhow::Result<()> {
    state.rig.set_knot_position(index, world_pos, host)?;
    Ok(())
}

/// Glättet alle Tangenten neu.
pub fn recalculate_tangents(state: &mut RigState) -> anyhow::Result<()> {
    state.rig.recalculate_tangents()?;
    Ok(())
}

/// Übernimmt die Bone-Positionen in die Knots.
pub fn sync_curve_from_bones(state: &mut RigState, host: &impl BoneHost) -> anyhow::Result<()> {
    let report = state.rig.sync_curve_from_bones(host)?;
    if report.skipped > 0 {
        log::warn!("{} Bindungen ohne Bone übersprungen", report.skipped);
    }
    Ok(())
}

/// Schreibt die Knot-Positionen auf die Bones.
pub fn sync_bones_from_curve(state: &mut RigState, host: &mut impl BoneHost) -> anyhow::Result<()> {
    state.rig.sync_bones_from_curve(host)?;
    Ok(())
}

/// Speichert den aktuellen Zustand als Baseline.
pub fn save_baseline(state: &mut RigState, host: &impl BoneHost) -> anyhow::Result<()> {
    let count = state.rig.save_baseline(host)?.len();
    state.status_message = Some(format!("Baseline für {} Knots gespeichert", count));
    Ok(())
}

/// Setzt Kurve und Bones auf die Baseline zurück.
pub fn restore_baseline(state: &mut RigState, host: &mut impl BoneHost) -> anyhow::Result<()> {
    state.rig.restore_baseline(host)?;
    state.status_message = Some("Auf Baseline zurückgesetzt".to_string());
    Ok(())
}

/// Setzt einen Knot auf die Baseline zurück.
pub fn restore_knot(
    state: &mut RigState,
    host: &mut impl BoneHost,
    index: usize,
) -> anyhow::Result<()> {
    state.rig.restore_knot(index, host)?;
    Ok(())
}

/// Hängt einen Bone als neuen Knot an.
pub fn append_bone(state: &mut RigState, host: &impl BoneHost, bone: BoneId) -> anyhow::Result<()> {
    state.rig.append_bone(bone, host)?;
    refresh_handles(state);
    Ok(())
}

/// Setzt den Glättungsfaktor (wirkt ab dem nächsten Re-Tangenting).
pub fn set_tangent_strength(state: &mut RigState, strength: f32) {
    state.rig.set_tangent_strength(strength);
    state.options.tangent_strength = state.rig.settings().tangent_strength;
}

/// Gleicht die Handles mit der Kurve ab, sofern Manipulation aktiv ist.
pub(crate) fn refresh_handles(state: &mut RigState) {
    if !state.manipulation_enabled {
        return;
    }
    if let Some(curve) = state.rig.curve() {
        state.handles.sync_from_curve(curve, state.rig.frame());
    }
}
