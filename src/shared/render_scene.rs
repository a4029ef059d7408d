//! Render-Szene als expliziter Übergabevertrag zwischen App und Host-Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und der Host sie konsumiert.

use glam::Vec3;

/// Darstellungsdaten eines Handles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleVisual {
    /// Index des zugehörigen Knots
    pub knot_index: usize,
    /// Weltposition (z = 0)
    pub position: Vec3,
    /// Skalierung in Welteinheiten
    pub size: f32,
    /// Füllfarbe (RGBA)
    pub color: [f32; 4],
    /// Zeichenreihenfolge
    pub sorting_order: i32,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderScene {
    /// Gesampelte Kurve in Weltkoordinaten (leer ohne Kurve)
    pub curve_polyline: Vec<Vec3>,
    /// Farbe der Kurve (RGBA)
    pub curve_color: [f32; 4],
    /// Handles aller Knots (leer wenn Manipulation aus)
    pub handles: Vec<HandleVisual>,
    /// Anzahl Knots der Kurve
    pub knot_count: usize,
    /// Status-/Hilfetext für das Overlay
    pub status_text: String,
}

impl RenderScene {
    /// Gibt zurück, ob eine Kurve für Rendering vorhanden ist.
    pub fn has_curve(&self) -> bool {
        self.curve_polyline.len() >= 2
    }
}
