//! Ziehbare Handles: ein Zustand pro Knot, in-place aktualisiert.
//!
//! Die Handle-Liste wird nur neu aufgebaut, wenn sich die Knot-Anzahl
//! ändert; sonst werden nur Positionen überschrieben.

use crate::core::{Curve, LocalFrame};
use crate::shared::{HandleVisual, RigOptions};
use glam::Vec3;

/// Zustand eines einzelnen Handles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleState {
    /// Index des zugehörigen Knots
    pub knot_index: usize,
    /// Weltposition (z = 0)
    pub position: Vec3,
}

/// Alle Handles eines Rigs plus aktuelle Auswahl.
#[derive(Debug, Clone, Default)]
pub struct HandleSet {
    handles: Vec<HandleState>,
    selected: Option<usize>,
}

impl HandleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn get(&self, knot_index: usize) -> Option<&HandleState> {
        self.handles.get(knot_index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HandleState> {
        self.handles.iter()
    }

    /// Gleicht die Handles mit der Kurve ab.
    ///
    /// Gibt `true` zurück, wenn die Liste neu aufgebaut werden musste.
    pub fn sync_from_curve(&mut self, curve: &Curve, frame: &LocalFrame) -> bool {
        let rebuilt = self.handles.len() != curve.len();
        if rebuilt {
            self.handles.clear();
            self.handles.extend((0..curve.len()).map(|knot_index| HandleState {
                knot_index,
                position: Vec3::ZERO,
            }));
            if self.selected.is_some_and(|s| s >= curve.len()) {
                self.selected = None;
            }
            log::debug!("{} Handles aufgebaut", curve.len());
        }
        for (handle, knot) in self.handles.iter_mut().zip(curve.knots()) {
            handle.position = handle_position(frame, knot.position);
        }
        rebuilt
    }

    /// Aktualisiert die Position eines einzelnen Handles.
    pub fn update_one(&mut self, curve: &Curve, frame: &LocalFrame, knot_index: usize) {
        if let (Some(handle), Some(knot)) = (self.handles.get_mut(knot_index), curve.knot(knot_index))
        {
            handle.position = handle_position(frame, knot.position);
        }
    }

    /// Entfernt alle Handles und die Auswahl.
    pub fn clear(&mut self) {
        self.handles.clear();
        self.selected = None;
    }

    /// Findet das nächste Handle innerhalb von `max_distance` (in der XY-Ebene).
    pub fn pick(&self, world_pos: Vec3, max_distance: f32) -> Option<usize> {
        let query = world_pos.truncate();
        self.handles
            .iter()
            .map(|h| (h.knot_index, h.position.truncate().distance(query)))
            .filter(|(_, dist)| *dist <= max_distance)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(index, _)| index)
    }

    pub fn select(&mut self, knot_index: usize) -> bool {
        if knot_index < self.handles.len() {
            self.selected = Some(knot_index);
            true
        } else {
            false
        }
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Darstellungsdaten für den Host-Renderer.
    pub fn visuals(&self, options: &RigOptions) -> Vec<HandleVisual> {
        self.handles
            .iter()
            .map(|h| HandleVisual {
                knot_index: h.knot_index,
                position: h.position,
                size: options.handle_size,
                color: if self.selected == Some(h.knot_index) {
                    options.handle_color_selected
                } else {
                    options.handle_color
                },
                sorting_order: options.handle_sorting_order,
            })
            .collect()
    }
}

/// Handles liegen immer auf z = 0 in Weltkoordinaten.
fn handle_position(frame: &LocalFrame, local: Vec3) -> Vec3 {
    let world = frame.to_world(local);
    Vec3::new(world.x, world.y, 0.0)
}
