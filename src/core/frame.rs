//! Lokaler Koordinaten-Frame des Rigs (Host-Transform).

use super::error::{RigError, RigResult};
use glam::{Affine3A, Quat, Vec3};

/// Lokal ↔ Welt Transformation des Rig-Objekts.
///
/// Die Kurve liegt in der lokalen XY-Ebene; `to_local_planar` setzt die
/// Z-Koordinate nach der Transformation auf 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalFrame {
    local_to_world: Affine3A,
    world_to_local: Affine3A,
}

impl LocalFrame {
    /// Identitäts-Frame (lokal = Welt).
    pub const IDENTITY: Self = Self {
        local_to_world: Affine3A::IDENTITY,
        world_to_local: Affine3A::IDENTITY,
    };

    /// Erstellt einen Frame aus der Lokal→Welt-Matrix.
    ///
    /// Singuläre oder nicht-endliche Matrizen werden abgelehnt, damit keine
    /// NaN-Positionen in Knots oder Bones landen.
    pub fn new(local_to_world: Affine3A) -> RigResult<Self> {
        let det = local_to_world.matrix3.determinant();
        if !local_to_world.is_finite() || !det.is_finite() || det == 0.0 {
            log::warn!("Rig-Frame nicht invertierbar (Determinante: {})", det);
            return Err(RigError::SingularFrame);
        }
        let world_to_local = local_to_world.inverse();
        if !world_to_local.is_finite() {
            log::warn!("Inverse des Rig-Frames ist nicht endlich");
            return Err(RigError::SingularFrame);
        }
        Ok(Self {
            local_to_world,
            world_to_local,
        })
    }

    /// Frame aus Skalierung, Rotation und Translation.
    pub fn from_scale_rotation_translation(
        scale: Vec3,
        rotation: Quat,
        translation: Vec3,
    ) -> RigResult<Self> {
        Self::new(Affine3A::from_scale_rotation_translation(
            scale,
            rotation,
            translation,
        ))
    }

    /// Reiner Verschiebungs-Frame (immer invertierbar).
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            local_to_world: Affine3A::from_translation(translation),
            world_to_local: Affine3A::from_translation(-translation),
        }
    }

    pub fn to_world(&self, local: Vec3) -> Vec3 {
        self.local_to_world.transform_point3(local)
    }

    pub fn to_local(&self, world: Vec3) -> Vec3 {
        self.world_to_local.transform_point3(world)
    }

    /// Welt → lokal mit Z = 0.
    pub fn to_local_planar(&self, world: Vec3) -> Vec3 {
        flatten(self.to_local(world))
    }

    pub fn local_to_world(&self) -> Affine3A {
        self.local_to_world
    }
}

impl Default for LocalFrame {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Setzt die Z-Koordinate (außerhalb der Kurvenebene) auf 0.
pub fn flatten(v: Vec3) -> Vec3 {
    Vec3::new(v.x, v.y, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_through_translated_frame() {
        let frame = LocalFrame::from_translation(Vec3::new(10.0, -2.0, 5.0));
        let world = Vec3::new(11.0, 0.0, 5.0);

        let local = frame.to_local(world);
        assert!((local - Vec3::new(1.0, 2.0, 0.0)).length() < 1e-6);
        assert!((frame.to_world(local) - world).length() < 1e-6);
    }

    #[test]
    fn planar_mapping_drops_depth() {
        let frame = LocalFrame::from_scale_rotation_translation(
            Vec3::splat(2.0),
            Quat::IDENTITY,
            Vec3::ZERO,
        )
        .expect("Skalierung 2 ist invertierbar");
        let local = frame.to_local_planar(Vec3::new(4.0, 2.0, 8.0));
        assert_eq!(local, Vec3::new(2.0, 1.0, 0.0));
    }

    #[test]
    fn singular_frame_is_rejected() {
        let flat = LocalFrame::from_scale_rotation_translation(
            Vec3::new(1.0, 1.0, 0.0),
            Quat::IDENTITY,
            Vec3::ZERO,
        );
        assert_eq!(flat, Err(RigError::SingularFrame));

        let mut broken = Affine3A::IDENTITY;
        broken.translation.x = f32::NAN;
        assert_eq!(LocalFrame::new(broken), Err(RigError::SingularFrame));
    }
}
