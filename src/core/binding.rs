//! Zuordnung Knot-Index → Bone-Handle.

use super::host::BoneId;
use indexmap::IndexMap;

/// Knot-Index → Bone. Höchstens ein Bone pro Knot; die 1:1-Beziehung
/// wird vorausgesetzt, aber nicht erzwungen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Binding {
    bones: IndexMap<usize, BoneId>,
}

impl Binding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bindet `bone` an `knot_index`; ein vorheriger Bone wird ersetzt.
    pub fn bind(&mut self, knot_index: usize, bone: BoneId) -> Option<BoneId> {
        self.bones.insert(knot_index, bone)
    }

    pub fn bone(&self, knot_index: usize) -> Option<BoneId> {
        self.bones.get(&knot_index).copied()
    }

    pub fn len(&self) -> usize {
        self.bones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bones.is_empty()
    }

    /// Alle Bindungen in Bind-Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = (usize, BoneId)> + '_ {
        self.bones.iter().map(|(k, b)| (*k, *b))
    }
}
