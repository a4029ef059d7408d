//! Schnittstelle zum Host, der die Bones besitzt.
//!
//! Das Rig hält nie Referenzen auf Host-Objekte, sondern nur opake
//! `BoneId`-Handles und tauscht Positionen über `BoneHost` aus.

use glam::Vec3;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opakes Handle auf einen Bone des Hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BoneId(pub u32);

impl fmt::Display for BoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Zugriff auf Bone-Weltpositionen.
pub trait BoneHost {
    /// Aktuelle Weltposition; `None` wenn der Bone nicht (mehr) existiert.
    fn bone_position(&self, bone: BoneId) -> Option<Vec3>;

    /// Setzt die Weltposition; `false` wenn der Bone nicht (mehr) existiert.
    fn set_bone_position(&mut self, bone: BoneId, position: Vec3) -> bool;
}

/// Ein Bone in der In-Memory-Szene.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneBone {
    pub name: String,
    pub position: Vec3,
}

/// Einfache In-Memory-Szene als `BoneHost` (Demo-Binary und Tests).
#[derive(Debug, Clone, Default)]
pub struct BoneScene {
    bones: IndexMap<BoneId, SceneBone>,
    next_id: u32,
}

impl BoneScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Legt einen Bone an und gibt sein Handle zurück.
    pub fn spawn(&mut self, name: impl Into<String>, position: Vec3) -> BoneId {
        let id = BoneId(self.next_id);
        self.next_id += 1;
        self.bones.insert(
            id,
            SceneBone {
                name: name.into(),
                position,
            },
        );
        id
    }

    /// Entfernt einen Bone; bestehende Handles darauf werden ungültig.
    pub fn despawn(&mut self, bone: BoneId) -> Option<SceneBone> {
        self.bones.shift_remove(&bone)
    }

    pub fn get(&self, bone: BoneId) -> Option<&SceneBone> {
        self.bones.get(&bone)
    }

    pub fn len(&self) -> usize {
        self.bones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bones.is_empty()
    }

    /// Alle Bones in Anlege-Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = (BoneId, &SceneBone)> {
        self.bones.iter().map(|(id, bone)| (*id, bone))
    }
}

impl BoneHost for BoneScene {
    fn bone_position(&self, bone: BoneId) -> Option<Vec3> {
        self.bones.get(&bone).map(|b| b.position)
    }

    fn set_bone_position(&mut self, bone: BoneId, position: Vec3) -> bool {
        match self.bones.get_mut(&bone) {
            Some(b) => {
                b.position = position;
                true
            }
            None => false,
        }
    }
}
