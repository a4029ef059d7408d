//! Mapping von Host-Intents auf mutierende Rig-Commands.

use super::{RigCommand, RigIntent, RigState};

/// Übersetzt einen `RigIntent` in eine Sequenz ausführbarer `RigCommand`s.
pub fn map_intent_to_commands(state: &RigState, intent: RigIntent) -> Vec<RigCommand> {
    match intent {
        RigIntent::PointerPressed { world_pos } => {
            if !state.manipulation_enabled {
                return vec![];
            }
            vec![RigCommand::SelectHandleAt {
                world_pos,
                max_distance: state.options.handle_pick_radius(),
            }]
        }
        RigIntent::PointerDragged { world_pos } => {
            if !state.manipulation_enabled || state.selected_knot().is_none() {
                return vec![];
            }
            vec![RigCommand::DragSelectedHandle { world_pos }]
        }
        RigIntent::PointerReleased => vec![RigCommand::ReleaseHandle],
        RigIntent::ToggleManipulationRequested => vec![RigCommand::SetRuntimeManipulation {
            enabled: !state.manipulation_enabled,
        }],
        RigIntent::RecalculateTangentsRequested => vec![
            RigCommand::RecalculateTangents,
            RigCommand::ShowStatus {
                message: "Tangenten neu berechnet".to_string(),
            },
        ],
        RigIntent::ResetSplineFromBonesRequested => vec![
            RigCommand::SyncCurveFromBones,
            RigCommand::ShowStatus {
                message: "Kurve auf Bone-Positionen zurückgesetzt".to_string(),
            },
        ],
        RigIntent::UpdateBonesFromSplineRequested => vec![RigCommand::SyncBonesFromCurve],
        RigIntent::InitializeRequested => vec![RigCommand::InitializeRig],
        RigIntent::SaveBaselineRequested => vec![RigCommand::SaveBaseline],
        RigIntent::RestoreBaselineRequested => vec![
            RigCommand::ReleaseHandle,
            RigCommand::RestoreBaseline,
        ],
        RigIntent::RestoreKnotRequested { index } => vec![RigCommand::RestoreKnot { index }],
        RigIntent::KnotMoveRequested { index, world_pos } => {
            vec![RigCommand::SetKnotPosition { index, world_pos }]
        }
        RigIntent::AppendBoneRequested { bone } => vec![RigCommand::AppendBone { bone }],
        RigIntent::AutoUpdateToggled { enabled } => vec![
            RigCommand::SetAutoUpdate { enabled },
            RigCommand::ShowStatus {
                message: format!("Auto-Update: {}", if enabled { "AN" } else { "AUS" }),
            },
        ],
        RigIntent::HandleSizeChanged { size } => vec![
            RigCommand::SetHandleSize { size },
            RigCommand::ShowStatus {
                message: format!("Handle-Größe: {:.2}", size),
            },
        ],
        RigIntent::TangentStrengthChanged { strength } => {
            vec![RigCommand::SetTangentStrength { strength }]
        }
    }
}
