use crate::core::BoneId;
use glam::Vec3;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum RigCommand {
    /// Nächstes Handle im Pick-Radius greifen
    SelectHandleAt { world_pos: Vec3, max_distance: f32 },
    /// Gegriffenes Handle verschieben
    DragSelectedHandle { world_pos: Vec3 },
    /// Gegriffenes Handle loslassen
    ReleaseHandle,
    /// Knot direkt verschieben
    SetKnotPosition { index: usize, world_pos: Vec3 },
    /// Handles aktivieren/deaktivieren
    SetRuntimeManipulation { enabled: bool },
    /// Alle Tangenten neu glätten
    RecalculateTangents,
    /// Knots aus Bones übernehmen
    SyncCurveFromBones,
    /// Bones aus Knots aktualisieren
    SyncBonesFromCurve,
    /// Kurve aus Bones aufbauen
    InitializeRig,
    /// Baseline speichern
    SaveBaseline,
    /// Baseline wiederherstellen
    RestoreBaseline,
    /// Einzelnen Knot aus Baseline wiederherstellen
    RestoreKnot { index: usize },
    /// Bone anhängen
    AppendBone { bone: BoneId },
    /// Auto-Update setzen
    SetAutoUpdate { enabled: bool },
    /// Handle-Größe setzen
    SetHandleSize { size: f32 },
    /// Glättungsfaktor setzen
    SetTangentStrength { strength: f32 },
    /// Statuszeile überschreiben
    ShowStatus { message: String },
}
