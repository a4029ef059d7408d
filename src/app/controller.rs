//! Rig-Controller für zentrale Event-Verarbeitung pro Frame.

use super::render_scene;
use super::{RigCommand, RigIntent, RigState};
use crate::core::{BoneHost, SyncReport};
use crate::shared::RenderScene;

/// Orchestriert Host-Events und Kurven-Operationen auf den RigState.
#[derive(Default)]
pub struct RigController;

impl RigController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut RigState,
        host: &mut impl BoneHost,
        intent: RigIntent,
    ) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, host, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem RigState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut RigState,
        host: &mut impl BoneHost,
        command: RigCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Zeiger ===
            RigCommand::SelectHandleAt {
                world_pos,
                max_distance,
            } => {
                handlers::pointer::select_handle_at(state, world_pos, max_distance);
            }
            RigCommand::DragSelectedHandle { world_pos } => {
                handlers::pointer::drag_selected(state, host, world_pos)?
            }
            RigCommand::ReleaseHandle => handlers::pointer::release(state),

            // === Kurve ===
            RigCommand::SetKnotPosition { index, world_pos } => {
                handlers::editing::set_knot_position(state, host, index, world_pos)?
            }
            RigCommand::RecalculateTangents => handlers::editing::recalculate_tangents(state)?,
            RigCommand::SyncCurveFromBones => handlers::editing::sync_curve_from_bones(state, &*host)?,
            RigCommand::SyncBonesFromCurve => handlers::editing::sync_bones_from_curve(state, host)?,
            RigCommand::InitializeRig => handlers::editing::initialize(state, &*host)?,
            RigCommand::AppendBone { bone } => handlers::editing::append_bone(state, &*host, bone)?,
            RigCommand::SetTangentStrength { strength } => {
                handlers::editing::set_tangent_strength(state, strength)
            }

            // === Baseline ===
            RigCommand::SaveBaseline => handlers::editing::save_baseline(state, &*host)?,
            RigCommand::RestoreBaseline => handlers::editing::restore_baseline(state, host)?,
            RigCommand::RestoreKnot { index } => {
                handlers::editing::restore_knot(state, host, index)?
            }

            // === Darstellung ===
            RigCommand::SetRuntimeManipulation { enabled } => {
                handlers::view::set_runtime_manipulation(state, enabled)
            }
            RigCommand::SetAutoUpdate { enabled } => handlers::view::set_auto_update(state, enabled),
            RigCommand::SetHandleSize { size } => handlers::view::set_handle_size(state, size),
            RigCommand::ShowStatus { message } => handlers::view::show_status(state, message),
        }

        Ok(())
    }

    /// Ein Frame: erst alle Eingaben, dann der Bone-Sync.
    ///
    /// Fehlgeschlagene Intents werden geloggt und übersprungen, der Frame
    /// läuft weiter. Gibt den Sync-Bericht zurück, falls synchronisiert wurde.
    pub fn update_frame(
        &mut self,
        state: &mut RigState,
        host: &mut impl BoneHost,
        intents: Vec<RigIntent>,
    ) -> Option<SyncReport> {
        for intent in intents {
            if let Err(e) = self.handle_intent(state, host, intent) {
                log::warn!("Intent verworfen: {:#}", e);
            }
        }

        if state.rig.take_changed() {
            super::handlers::editing::refresh_handles(state);
        }

        if !state.rig.is_initialized() || !state.wants_bone_sync() {
            return None;
        }
        match state.rig.sync_bones_from_curve(host) {
            Ok(report) => Some(report),
            Err(e) => {
                log::warn!("Bone-Sync fehlgeschlagen: {}", e);
                None
            }
        }
    }

    /// Baut die Render-Szene für den aktuellen Frame.
    pub fn build_render_scene(&self, state: &RigState) -> RenderScene {
        render_scene::build(state)
    }
}
