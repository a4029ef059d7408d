//! Zentrale Konfiguration für das Spline-Rig.
//!
//! `RigOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::rig::clamp_tangent_strength;
use crate::core::{RigSettings, TangentMode, DEFAULT_TANGENT_STRENGTH};
use serde::{Deserialize, Serialize};

// ── Kurve ───────────────────────────────────────────────────────────

/// Standard-Glättungsfaktor der Tangenten.
pub const TANGENT_STRENGTH: f32 = DEFAULT_TANGENT_STRENGTH;
/// Zwischenpunkte pro Bézier-Segment für die Darstellung.
pub const CURVE_SAMPLES_PER_SEGMENT: usize = 16;
/// Obergrenze der Zwischenpunkte pro Segment.
pub const MAX_CURVE_SAMPLES_PER_SEGMENT: usize = 256;
/// Farbe der Kurven-Polyline (RGBA: Cyan).
pub const CURVE_COLOR: [f32; 4] = [0.0, 0.8, 1.0, 1.0];

// ── Handles ─────────────────────────────────────────────────────────

/// Handle-Größe (Skalierung) in Welteinheiten.
pub const HANDLE_SIZE: f32 = 0.5;
/// Kollisionsradius eines Handles relativ zu seiner Größe.
pub const HANDLE_COLLIDER_RADIUS: f32 = 0.5;
/// Farbe normaler Handles (RGBA: Gelb, halbtransparent).
pub const HANDLE_COLOR: [f32; 4] = [1.0, 1.0, 0.0, 0.7];
/// Farbe des gegriffenen Handles (RGBA: Grün, halbtransparent).
pub const HANDLE_COLOR_SELECTED: [f32; 4] = [0.0, 1.0, 0.0, 0.7];
/// Zeichenreihenfolge der Handles (höher = weiter oben).
pub const HANDLE_SORTING_ORDER: i32 = 100;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Rig-Optionen.
/// Wird als `spline_bone_rig.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RigOptions {
    // ── Kurve ───────────────────────────────────────────────────
    /// Tangentenlänge relativ zum Nachbarabstand, in (0, 1]
    pub tangent_strength: f32,
    /// Tangenten-Modus neu angehängter Knots
    #[serde(default)]
    pub default_tangent_mode: TangentMode,
    /// Bones jeden Frame aus der Kurve aktualisieren
    pub auto_update_spline: bool,
    /// Beim Initialisieren eine Baseline aufnehmen
    #[serde(default = "default_true")]
    pub capture_baseline_on_init: bool,
    /// Zwischenpunkte pro Segment für die Darstellung
    #[serde(default = "default_curve_samples_per_segment")]
    pub curve_samples_per_segment: usize,
    /// Farbe der Kurven-Polyline
    pub curve_color: [f32; 4],

    // ── Handles ─────────────────────────────────────────────────
    /// Ziehbare Handles aktiv
    pub enable_runtime_manipulation: bool,
    /// Handle-Größe in Welteinheiten
    pub handle_size: f32,
    /// Farbe normaler Handles
    pub handle_color: [f32; 4],
    /// Farbe des gegriffenen Handles
    pub handle_color_selected: [f32; 4],
    /// Zeichenreihenfolge der Handles
    #[serde(default = "default_handle_sorting_order")]
    pub handle_sorting_order: i32,

    // ── Diagnose ────────────────────────────────────────────────
    /// Ausführliches Logging pro Frame
    #[serde(default)]
    pub debug_mode: bool,
}

impl Default for RigOptions {
    fn default() -> Self {
        Self {
            tangent_strength: TANGENT_STRENGTH,
            default_tangent_mode: TangentMode::AutoSmooth,
            auto_update_spline: true,
            capture_baseline_on_init: true,
            curve_samples_per_segment: CURVE_SAMPLES_PER_SEGMENT,
            curve_color: CURVE_COLOR,

            enable_runtime_manipulation: true,
            handle_size: HANDLE_SIZE,
            handle_color: HANDLE_COLOR,
            handle_color_selected: HANDLE_COLOR_SELECTED,
            handle_sorting_order: HANDLE_SORTING_ORDER,

            debug_mode: false,
        }
    }
}

/// Serde-Default für boolesche Felder, die standardmäßig aktiv sind.
fn default_true() -> bool {
    true
}

/// Serde-Default für `curve_samples_per_segment` (Abwärtskompatibilität).
fn default_curve_samples_per_segment() -> usize {
    CURVE_SAMPLES_PER_SEGMENT
}

/// Serde-Default für `handle_sorting_order` (Abwärtskompatibilität).
fn default_handle_sorting_order() -> i32 {
    HANDLE_SORTING_ORDER
}

impl RigOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus TOML-Text und normalisiert ungültige Werte.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let mut opts: Self = toml::from_str(content)?;
        opts.tangent_strength = clamp_tangent_strength(opts.tangent_strength);
        opts.curve_samples_per_segment = opts
            .curve_samples_per_segment
            .clamp(1, MAX_CURVE_SAMPLES_PER_SEGMENT);
        Ok(opts)
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("spline_bone_rig"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("spline_bone_rig.toml")
    }

    /// Einstellungen, die das Rig selbst auswertet.
    pub fn rig_settings(&self) -> RigSettings {
        RigSettings {
            tangent_strength: clamp_tangent_strength(self.tangent_strength),
            default_tangent_mode: self.default_tangent_mode,
            capture_baseline_on_init: self.capture_baseline_on_init,
            debug_mode: self.debug_mode,
        }
    }

    /// Pick-Radius eines Handles in Welteinheiten.
    ///
    /// `handle_size * HANDLE_COLLIDER_RADIUS`
    pub fn handle_pick_radius(&self) -> f32 {
        self.handle_size * HANDLE_COLLIDER_RADIUS
    }
}
