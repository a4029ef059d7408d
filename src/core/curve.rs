//! Geordnete Knot-Folge mit stückweise kubischer Bézier-Auswertung.

use super::knot::{Knot, TangentMode};
use super::tangent::{derive_tangents, derive_tangents_at};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
pub fn cubic_bezier(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * p1 + 3.0 * inv * t2 * p2 + t2 * t * p3
}

/// Kurve als geordnete Knot-Liste. Die Reihenfolge definiert die Nachbarschaft.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    knots: Vec<Knot>,
}

impl Curve {
    /// Baut eine Kurve aus Positionen und leitet alle Tangenten ab.
    pub fn from_positions(positions: &[Vec3], strength: f32) -> Self {
        let knots = positions
            .iter()
            .enumerate()
            .map(|(i, &position)| {
                let (tangent_in, tangent_out) = derive_tangents_at(positions, i, strength);
                Knot {
                    position,
                    tangent_in,
                    tangent_out,
                    mode: TangentMode::AutoSmooth,
                }
            })
            .collect();
        Self { knots }
    }

    pub fn len(&self) -> usize {
        self.knots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.knots.is_empty()
    }

    /// Kurven mit weniger als 2 Knots sind nicht auswertbar.
    pub fn is_evaluable(&self) -> bool {
        self.knots.len() >= 2
    }

    pub fn knot(&self, index: usize) -> Option<&Knot> {
        self.knots.get(index)
    }

    pub(crate) fn knot_mut(&mut self, index: usize) -> Option<&mut Knot> {
        self.knots.get_mut(index)
    }

    pub fn knots(&self) -> &[Knot] {
        &self.knots
    }

    pub(crate) fn push(&mut self, knot: Knot) {
        self.knots.push(knot);
    }

    /// Aktuelle Knot-Positionen in Reihenfolge.
    pub fn positions(&self) -> Vec<Vec3> {
        self.knots.iter().map(|k| k.position).collect()
    }

    /// Leitet die Tangenten für `index` und seine direkten Nachbarn neu ab.
    ///
    /// Nutzt die aktuellen Positionen. Knots im Modus `Manual` bleiben
    /// unberührt. Gibt die Anzahl neu berechneter Knots zurück.
    pub fn retangent_window(&mut self, index: usize, strength: f32) -> usize {
        if index >= self.knots.len() {
            return 0;
        }
        let first = index.saturating_sub(1);
        let last = (index + 1).min(self.knots.len() - 1);
        self.retangent_range(first, last, strength)
    }

    /// Leitet die Tangenten aller automatisch verwalteten Knots neu ab.
    pub fn retangent_all(&mut self, strength: f32) -> usize {
        if self.knots.is_empty() {
            return 0;
        }
        let last = self.knots.len() - 1;
        self.retangent_range(0, last, strength)
    }

    fn retangent_range(&mut self, first: usize, last: usize, strength: f32) -> usize {
        // Positionen bleiben beim Re-Tangenting fest: Nachbarn direkt lesen
        let mut updated = 0;
        for i in first..=last {
            if !self.knots[i].is_auto() {
                continue;
            }
            let prev = i.checked_sub(1).map(|j| self.knots[j].position);
            let next = self.knots.get(i + 1).map(|k| k.position);
            let (tangent_in, tangent_out) =
                derive_tangents(prev, self.knots[i].position, next, strength);
            let knot = &mut self.knots[i];
            knot.tangent_in = tangent_in;
            knot.tangent_out = tangent_out;
            updated += 1;
        }
        updated
    }

    /// Anzahl der Bézier-Segmente.
    pub fn segment_count(&self) -> usize {
        self.knots.len().saturating_sub(1)
    }

    /// Punkt auf Segment `segment` bei `t` ∈ [0, 1].
    pub fn evaluate(&self, segment: usize, t: f32) -> Option<Vec3> {
        let a = self.knots.get(segment)?;
        let b = self.knots.get(segment + 1)?;
        Some(cubic_bezier(
            a.position,
            a.out_handle(),
            b.in_handle(),
            b.position,
            t.clamp(0.0, 1.0),
        ))
    }

    /// Dichte Punktliste entlang der ganzen Kurve (lokaler Frame).
    ///
    /// `samples_per_segment`: Zwischenpunkte pro Segment (ohne Endpunkt).
    /// Nicht auswertbare Kurven liefern ihre Knot-Positionen unverändert.
    pub fn sample(&self, samples_per_segment: usize) -> Vec<Vec3> {
        if !self.is_evaluable() {
            return self.positions();
        }
        let steps = samples_per_segment.max(1);
        let mut result = Vec::with_capacity(self.segment_count() * steps + 1);
        for (seg, pair) in self.knots.windows(2).enumerate() {
            let (a, b) = (&pair[0], &pair[1]);
            let count = if seg + 1 == self.segment_count() {
                steps + 1 // letztes Segment: Endpunkt einschließen
            } else {
                steps
            };
            for i in 0..count {
                let t = i as f32 / steps as f32;
                result.push(cubic_bezier(
                    a.position,
                    a.out_handle(),
                    b.in_handle(),
                    b.position,
                    t,
                ));
            }
        }
        result
    }

    /// Approximierte Kurvenlänge über die gesampelte Polyline.
    pub fn approx_length(&self, samples_per_segment: usize) -> f32 {
        self.sample(samples_per_segment)
            .windows(2)
            .map(|w| w[0].distance(w[1]))
            .sum()
    }
}
