//! Gespeicherter Rig-Zustand zum späteren Zurücksetzen.

use super::binding::Binding;
use super::curve::Curve;
use super::host::{BoneHost, BoneId};
use super::knot::Knot;
use glam::Vec3;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Tiefe Kopie aller Knots plus Bone-Weltpositionen zum Aufnahmezeitpunkt.
///
/// Bone-Positionen sind nach `BoneId` abgelegt, nicht nach Knot-Index:
/// nach einem erneuten Initialisieren kann ein Index auf einen anderen
/// Bone zeigen. Bones, die beim Speichern fehlten, haben keinen Eintrag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    pub knots: Vec<Knot>,
    pub bone_positions: IndexMap<BoneId, Vec3>,
}

impl Baseline {
    /// Nimmt den aktuellen Zustand von Kurve und gebundenen Bones auf.
    pub fn capture(curve: &Curve, binding: &Binding, host: &impl BoneHost) -> Self {
        let knots = curve.knots().to_vec();
        let bone_positions = binding
            .iter()
            .filter_map(|(_, bone)| host.bone_position(bone).map(|p| (bone, p)))
            .collect();
        Self {
            knots,
            bone_positions,
        }
    }

    pub fn len(&self) -> usize {
        self.knots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.knots.is_empty()
    }

    pub fn knot(&self, index: usize) -> Option<&Knot> {
        self.knots.get(index)
    }

    pub fn bone_position(&self, bone: BoneId) -> Option<Vec3> {
        self.bone_positions.get(&bone).copied()
    }
}
