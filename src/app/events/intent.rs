use crate::core::BoneId;
use glam::Vec3;

/// Rig-Intents sind Eingaben aus Host/UI ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum RigIntent {
    /// Primäre Maustaste gedrückt (Weltposition des Zeigers)
    PointerPressed { world_pos: Vec3 },
    /// Zeiger bei gedrückter Taste bewegt
    PointerDragged { world_pos: Vec3 },
    /// Primäre Maustaste losgelassen
    PointerReleased,
    /// Ziehbare Handles ein-/ausschalten
    ToggleManipulationRequested,
    /// Alle Tangenten neu glätten
    RecalculateTangentsRequested,
    /// Kurve auf die aktuellen Bone-Positionen zurücksetzen
    ResetSplineFromBonesRequested,
    /// Bones aus der Kurve aktualisieren (einmalig)
    UpdateBonesFromSplineRequested,
    /// Kurve neu aus den Bones aufbauen
    InitializeRequested,
    /// Aktuellen Zustand als Baseline speichern
    SaveBaselineRequested,
    /// Alles auf die Baseline zurücksetzen
    RestoreBaselineRequested,
    /// Einen Knot auf die Baseline zurücksetzen
    RestoreKnotRequested { index: usize },
    /// Knot direkt auf Weltposition setzen (ohne Handle-Auswahl)
    KnotMoveRequested { index: usize, world_pos: Vec3 },
    /// Neuen Bone ans Kurvenende anhängen
    AppendBoneRequested { bone: BoneId },
    /// Auto-Update der Bones umgeschaltet
    AutoUpdateToggled { enabled: bool },
    /// Handle-Größe geändert (Slider)
    HandleSizeChanged { size: f32 },
    /// Glättungsfaktor geändert
    TangentStrengthChanged { strength: f32 },
}
