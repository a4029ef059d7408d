//! Zustand eines interaktiven Rigs (Kurve, Handles, Optionen, Status).

use super::handles::HandleSet;
use super::CommandLog;
use crate::core::{BoneId, CurveRig, LocalFrame};
use crate::shared::RigOptions;

/// Hauptzustand eines Rigs
pub struct RigState {
    /// Kurven-Rig (Knots, Bindung, Baseline)
    pub rig: CurveRig,
    /// Ziehbare Handles, ein Eintrag pro Knot
    pub handles: HandleSet,
    /// Laufzeit-Optionen
    pub options: RigOptions,
    /// Handles aktiv und Zeiger-Eingaben werden ausgewertet
    pub manipulation_enabled: bool,
    /// Bones jeden Frame aus der Kurve aktualisieren
    pub auto_update: bool,
    /// Letzte Statusmeldung (None = Steuerungs-Hilfe anzeigen)
    pub status_message: Option<String>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
}

impl RigState {
    /// Erstellt einen neuen, noch nicht initialisierten Rig-State.
    pub fn new(bones: Vec<BoneId>, frame: LocalFrame, options: RigOptions) -> Self {
        let rig = CurveRig::new(bones, frame, options.rig_settings());
        Self {
            rig,
            handles: HandleSet::new(),
            manipulation_enabled: options.enable_runtime_manipulation,
            auto_update: options.auto_update_spline,
            options,
            status_message: None,
            command_log: CommandLog::new(),
        }
    }

    /// Gibt die Anzahl der Knots zurück (für UI-Anzeige)
    pub fn knot_count(&self) -> usize {
        self.rig.knot_count()
    }

    /// Index des gerade gegriffenen Knots
    pub fn selected_knot(&self) -> Option<usize> {
        self.handles.selected()
    }

    /// Ob die Bones in diesem Frame aus der Kurve aktualisiert werden.
    pub fn wants_bone_sync(&self) -> bool {
        self.auto_update || self.manipulation_enabled
    }

    /// Overlay-Text: letzte Meldung oder Steuerungs-Hilfe.
    pub fn status_text(&self) -> String {
        if let Some(message) = &self.status_message {
            return message.clone();
        }
        format!(
            "Steuerung:\n[M] Manipulation: {}\n[R] Tangenten neu berechnen\n[Backspace] Kurve zurücksetzen\nLinksklick + Ziehen verschiebt Handles",
            if self.manipulation_enabled { "AN" } else { "AUS" }
        )
    }
}
