//! Tangenten-Ableitung aus den Nachbar-Knots.
//!
//! Reine Geometrie ohne Rig-Zustand: bekommt die Positionen des Knots und
//! seiner vorhandenen Nachbarn und liefert `(tangent_in, tangent_out)`.

use glam::Vec3;

/// Faktor für die schwächere, gespiegelte Stummel-Tangente an Kurvenenden.
pub const END_STUB_FACTOR: f32 = 0.5;

/// Berechnet die geglätteten Tangenten für einen Knot.
///
/// - Innerer Knot: Richtung `prev → next`, Länge je Seite = Abstand zum
///   jeweiligen Nachbarn × `strength`.
/// - Erster Knot: ausgehend Richtung `next`, eingehend halb so lang gespiegelt.
/// - Letzter Knot: eingehend Richtung `prev`, ausgehend halb so lang gespiegelt.
/// - Ohne Nachbarn oder bei zusammenfallenden Punkten: Null-Tangenten.
pub fn derive_tangents(
    prev: Option<Vec3>,
    position: Vec3,
    next: Option<Vec3>,
    strength: f32,
) -> (Vec3, Vec3) {
    match (prev, next) {
        (Some(prev), Some(next)) => {
            let dir = (next - prev).normalize_or_zero();
            let tangent_in = -dir * prev.distance(position) * strength;
            let tangent_out = dir * position.distance(next) * strength;
            (tangent_in, tangent_out)
        }
        (None, Some(next)) => {
            let dir = (next - position).normalize_or_zero();
            let tangent_out = dir * position.distance(next) * strength;
            (-tangent_out * END_STUB_FACTOR, tangent_out)
        }
        (Some(prev), None) => {
            let dir = (position - prev).normalize_or_zero();
            let tangent_in = -dir * prev.distance(position) * strength;
            (tangent_in, -tangent_in * END_STUB_FACTOR)
        }
        (None, None) => (Vec3::ZERO, Vec3::ZERO),
    }
}

/// Tangenten für Index `index` in einer Positionsliste.
pub fn derive_tangents_at(positions: &[Vec3], index: usize, strength: f32) -> (Vec3, Vec3) {
    let prev = index.checked_sub(1).and_then(|i| positions.get(i)).copied();
    let next = positions.get(index + 1).copied();
    derive_tangents(prev, positions[index], next, strength)
}
