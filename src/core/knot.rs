//! Kontrollpunkt (Knot) der Rig-Kurve.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Herkunft der Tangenten eines Knots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TangentMode {
    /// Tangenten werden aus den Nachbarn abgeleitet (Glättungsregel)
    #[default]
    AutoSmooth,
    /// Tangenten wurden von Hand gesetzt und bleiben beim Re-Tangenting erhalten
    Manual,
}

/// Ein Kontrollpunkt der Kurve.
///
/// Position im lokalen Rig-Frame (z immer 0). Tangenten sind relative
/// Offsets zur Position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Knot {
    pub position: Vec3,
    pub tangent_in: Vec3,
    pub tangent_out: Vec3,
    pub mode: TangentMode,
}

impl Knot {
    /// Erstellt einen Knot ohne Tangenten.
    pub fn new(position: Vec3, mode: TangentMode) -> Self {
        Self {
            position,
            tangent_in: Vec3::ZERO,
            tangent_out: Vec3::ZERO,
            mode,
        }
    }

    /// Absoluter Steuerpunkt der eingehenden Tangente.
    pub fn in_handle(&self) -> Vec3 {
        self.position + self.tangent_in
    }

    /// Absoluter Steuerpunkt der ausgehenden Tangente.
    pub fn out_handle(&self) -> Vec3 {
        self.position + self.tangent_out
    }

    /// `true` wenn der Knot von der Glättungsregel verwaltet wird.
    pub fn is_auto(&self) -> bool {
        self.mode == TangentMode::AutoSmooth
    }
}
