//! Standard-Tastenbelegung des Rig-Overlays.

use super::RigIntent;

/// Übersetzt einen Host-Tastennamen in einen Intent.
///
/// Belegung: `M` Manipulation umschalten, `R` Tangenten glätten,
/// `Backspace` Kurve aus Bones zurücksetzen, `B` Baseline wiederherstellen,
/// `S` Baseline speichern.
pub fn map_key(key: &str) -> Option<RigIntent> {
    match key {
        "M" | "m" => Some(RigIntent::ToggleManipulationRequested),
        "R" | "r" => Some(RigIntent::RecalculateTangentsRequested),
        "Backspace" => Some(RigIntent::ResetSplineFromBonesRequested),
        "B" | "b" => Some(RigIntent::RestoreBaselineRequested),
        "S" | "s" => Some(RigIntent::SaveBaselineRequested),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings() {
        assert_eq!(map_key("m"), Some(RigIntent::ToggleManipulationRequested));
        assert_eq!(
            map_key("Backspace"),
            Some(RigIntent::ResetSplineFromBonesRequested)
        );
        assert_eq!(map_key("X"), None);
    }
}
