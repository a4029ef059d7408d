//! Fehlertypen des Kurven-Rigs.
//!
//! Jeder Fehler bedeutet: die Operation wurde als No-op verworfen, der
//! Rig-Zustand ist unverändert.

use super::BoneId;
use thiserror::Error;

/// Ergebnis-Alias für Rig-Operationen.
pub type RigResult<T> = Result<T, RigError>;

/// Vorbedingungs-Fehler von Rig-Operationen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RigError {
    /// Weniger als 2 auflösbare Bones beim Initialisieren
    #[error("mindestens 2 Bones nötig, gefunden: {found}")]
    NotEnoughBones { found: usize },
    /// Es existiert (noch) keine Kurve
    #[error("Kurve ist nicht initialisiert")]
    NotInitialized,
    /// Knot-Index außerhalb der Kurve
    #[error("Knot-Index {index} außerhalb der Kurve (Anzahl: {count})")]
    KnotOutOfRange { index: usize, count: usize },
    /// Bone ist beim Host nicht (mehr) vorhanden
    #[error("Bone {bone} nicht verfügbar")]
    DanglingBone { bone: BoneId },
    /// Es wurde noch keine Baseline gespeichert
    #[error("keine Baseline gespeichert")]
    NoBaseline,
    /// Baseline enthält keinen Eintrag für diesen Knot
    #[error("keine Baseline-Daten für Knot {index}")]
    NoBaselineForKnot { index: usize },
    /// Host-Transform ist nicht invertierbar
    #[error("Rig-Frame ist nicht invertierbar")]
    SingularFrame,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let err = RigError::KnotOutOfRange { index: 7, count: 3 };
        assert_eq!(err.to_string(), "Knot-Index 7 außerhalb der Kurve (Anzahl: 3)");
        assert_eq!(
            RigError::DanglingBone { bone: BoneId(4) }.to_string(),
            "Bone #4 nicht verfügbar"
        );
    }
}
