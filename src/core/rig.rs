//! Kurven-Rig: Knot-Folge, Bone-Bindung und Baseline eines Charakters.
//!
//! Alle Operationen sind "best effort": Vorbedingungs-Fehler werden geloggt
//! und als `Err` gemeldet, der Zustand bleibt dabei unverändert.

use super::baseline::Baseline;
use super::binding::Binding;
use super::curve::Curve;
use super::error::{RigError, RigResult};
use super::frame::{flatten, LocalFrame};
use super::host::{BoneHost, BoneId};
use super::knot::{Knot, TangentMode};
use glam::Vec3;

/// Standard-Glättungsfaktor der Tangenten.
pub const DEFAULT_TANGENT_STRENGTH: f32 = 0.33;

/// Einstellungen, die das Rig selbst auswertet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigSettings {
    /// Tangentenlänge relativ zum Nachbarabstand, in (0, 1]
    pub tangent_strength: f32,
    /// Modus für per `append_bone` angehängte Knots
    pub default_tangent_mode: TangentMode,
    /// Beim Initialisieren automatisch eine Baseline aufnehmen
    pub capture_baseline_on_init: bool,
    /// Ausführliches Logging pro Frame
    pub debug_mode: bool,
}

impl Default for RigSettings {
    fn default() -> Self {
        Self {
            tangent_strength: DEFAULT_TANGENT_STRENGTH,
            default_tangent_mode: TangentMode::AutoSmooth,
            capture_baseline_on_init: true,
            debug_mode: false,
        }
    }
}

/// Begrenzt den Glättungsfaktor auf (0, 1]; ungültige Werte → Standard.
pub fn clamp_tangent_strength(strength: f32) -> f32 {
    if strength.is_finite() && strength > 0.0 {
        strength.min(1.0)
    } else {
        DEFAULT_TANGENT_STRENGTH
    }
}

/// Ergebnis eines Sync-Durchlaufs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Erfolgreich synchronisierte Knots
    pub written: usize,
    /// Übersprungene Bindungen (Bone nicht mehr vorhanden)
    pub skipped: usize,
}

/// Spline-Rig eines Charakters.
#[derive(Debug, Clone)]
pub struct CurveRig {
    settings: RigSettings,
    frame: LocalFrame,
    /// Quell-Bones in Kurvenreihenfolge
    bones: Vec<BoneId>,
    curve: Option<Curve>,
    binding: Binding,
    baseline: Option<Baseline>,
    changed: bool,
}

impl CurveRig {
    /// Erstellt ein noch nicht initialisiertes Rig.
    pub fn new(bones: Vec<BoneId>, frame: LocalFrame, settings: RigSettings) -> Self {
        let settings = RigSettings {
            tangent_strength: clamp_tangent_strength(settings.tangent_strength),
            ..settings
        };
        Self {
            settings,
            frame,
            bones,
            curve: None,
            binding: Binding::new(),
            baseline: None,
            changed: false,
        }
    }

    pub fn settings(&self) -> &RigSettings {
        &self.settings
    }

    pub fn set_tangent_strength(&mut self, strength: f32) {
        self.settings.tangent_strength = clamp_tangent_strength(strength);
    }

    pub fn frame(&self) -> &LocalFrame {
        &self.frame
    }

    pub fn bones(&self) -> &[BoneId] {
        &self.bones
    }

    pub fn curve(&self) -> Option<&Curve> {
        self.curve.as_ref()
    }

    pub fn binding(&self) -> &Binding {
        &self.binding
    }

    pub fn baseline(&self) -> Option<&Baseline> {
        self.baseline.as_ref()
    }

    /// Übernimmt eine vom Host persistierte Baseline.
    pub fn set_baseline(&mut self, baseline: Baseline) {
        self.baseline = Some(baseline);
    }

    pub fn is_initialized(&self) -> bool {
        self.curve.is_some()
    }

    pub fn knot_count(&self) -> usize {
        self.curve.as_ref().map_or(0, Curve::len)
    }

    /// Weltposition eines Knots.
    pub fn knot_world_position(&self, index: usize) -> Option<Vec3> {
        let knot = self.curve.as_ref()?.knot(index)?;
        Some(self.frame.to_world(knot.position))
    }

    /// Gibt zurück, ob sich die Kurve seit dem letzten Aufruf geändert hat,
    /// und setzt das Flag zurück.
    pub fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }

    pub fn is_changed(&self) -> bool {
        self.changed
    }

    // ── Initialisierung ─────────────────────────────────────────────

    /// Baut Kurve und Bindung aus den aktuellen Bone-Positionen.
    ///
    /// Nicht auflösbare Bones werden übersprungen. Schreibt keine Bones.
    /// Gibt die Anzahl der erzeugten Knots zurück.
    pub fn initialize(&mut self, host: &impl BoneHost) -> RigResult<usize> {
        let mut resolved = Vec::with_capacity(self.bones.len());
        for &bone in &self.bones {
            match host.bone_position(bone) {
                Some(world) => resolved.push((bone, self.frame.to_local_planar(world))),
                None => log::warn!("Bone {} nicht verfügbar, wird übersprungen", bone),
            }
        }

        if resolved.len() < 2 {
            log::warn!(
                "Mindestens 2 Bones nötig um eine Kurve zu erzeugen (gefunden: {})",
                resolved.len()
            );
            return Err(RigError::NotEnoughBones {
                found: resolved.len(),
            });
        }

        let positions: Vec<Vec3> = resolved.iter().map(|(_, p)| *p).collect();
        let curve = Curve::from_positions(&positions, self.settings.tangent_strength);

        let mut binding = Binding::new();
        for (i, (bone, _)) in resolved.iter().enumerate() {
            binding.bind(i, *bone);
        }

        self.curve = Some(curve);
        self.binding = binding;
        self.changed = true;

        if self.settings.capture_baseline_on_init {
            if let Some(curve) = &self.curve {
                self.baseline = Some(Baseline::capture(curve, &self.binding, host));
            }
        }

        log::info!("Kurve mit {} Knots erzeugt", positions.len());
        Ok(positions.len())
    }

    // ── Synchronisation ─────────────────────────────────────────────

    /// Schreibt die Knot-Positionen (Welt) auf alle gebundenen Bones.
    ///
    /// Wird jeden Frame aufgerufen; fehlende Bones werden übersprungen.
    pub fn sync_bones_from_curve(&self, host: &mut impl BoneHost) -> RigResult<SyncReport> {
        let curve = self.curve.as_ref().ok_or(RigError::NotInitialized)?;
        let mut report = SyncReport::default();
        for (index, bone) in self.binding.iter() {
            let Some(knot) = curve.knot(index) else {
                continue;
            };
            let world = self.frame.to_world(knot.position);
            if host.set_bone_position(bone, world) {
                report.written += 1;
            } else {
                report.skipped += 1;
            }
        }
        if self.settings.debug_mode {
            log::debug!(
                "Bones aus Kurve aktualisiert: {} geschrieben, {} übersprungen",
                report.written,
                report.skipped
            );
        }
        Ok(report)
    }

    /// Übernimmt die aktuellen Bone-Positionen in die Knots (Tangenten bleiben).
    pub fn sync_curve_from_bones(&mut self, host: &impl BoneHost) -> RigResult<SyncReport> {
        let curve = self.curve.as_mut().ok_or(RigError::NotInitialized)?;
        let mut report = SyncReport::default();
        for (index, bone) in self.binding.iter() {
            let Some(knot) = curve.knot_mut(index) else {
                continue;
            };
            match host.bone_position(bone) {
                Some(world) => {
                    knot.position = self.frame.to_local_planar(world);
                    report.written += 1;
                }
                None => report.skipped += 1,
            }
        }
        if report.written > 0 {
            self.changed = true;
        }
        Ok(report)
    }

    // ── Interaktives Editieren ──────────────────────────────────────

    /// Verschiebt einen Knot auf eine Weltposition.
    ///
    /// Tangenten werden um dasselbe Delta mitgeführt, danach für den Knot und
    /// seine direkten Nachbarn neu abgeleitet. Ein gebundener Bone bekommt
    /// `world_position` direkt (ohne Rundweg über den lokalen Frame).
    pub fn set_knot_position(
        &mut self,
        index: usize,
        world_position: Vec3,
        host: &mut impl BoneHost,
    ) -> RigResult<()> {
        let strength = self.settings.tangent_strength;
        let local = self.frame.to_local(world_position);
        let curve = self.curve.as_mut().ok_or(RigError::NotInitialized)?;
        let count = curve.len();
        let knot = curve
            .knot_mut(index)
            .ok_or(RigError::KnotOutOfRange { index, count })?;

        let delta = local - knot.position;
        knot.position = flatten(local);
        knot.tangent_in += delta;
        knot.tangent_out += delta;

        curve.retangent_window(index, strength);
        self.changed = true;

        if let Some(bone) = self.binding.bone(index) {
            if !host.set_bone_position(bone, world_position) {
                log::warn!("Bone {} für Knot {} nicht verfügbar", bone, index);
            }
        }

        if self.settings.debug_mode {
            log::debug!("Knot {} nach {:?} verschoben", index, world_position);
        }
        Ok(())
    }

    /// Leitet die Tangenten von `index` und seinen Nachbarn neu ab.
    pub fn retangent(&mut self, index: usize) -> RigResult<usize> {
        let strength = self.settings.tangent_strength;
        let curve = self.curve.as_mut().ok_or(RigError::NotInitialized)?;
        if index >= curve.len() {
            return Err(RigError::KnotOutOfRange {
                index,
                count: curve.len(),
            });
        }
        let updated = curve.retangent_window(index, strength);
        self.changed = true;
        Ok(updated)
    }

    /// Leitet alle automatisch verwalteten Tangenten neu ab.
    pub fn recalculate_tangents(&mut self) -> RigResult<usize> {
        let strength = self.settings.tangent_strength;
        let curve = self.curve.as_mut().ok_or(RigError::NotInitialized)?;
        let updated = curve.retangent_all(strength);
        self.changed = true;
        log::info!("Tangenten neu berechnet ({} Knots)", updated);
        Ok(updated)
    }

    /// Setzt die Tangenten eines Knots von Hand (Modus wird `Manual`).
    pub fn set_knot_tangents(
        &mut self,
        index: usize,
        tangent_in: Vec3,
        tangent_out: Vec3,
    ) -> RigResult<()> {
        let knot = self.knot_mut(index)?;
        knot.tangent_in = tangent_in;
        knot.tangent_out = tangent_out;
        knot.mode = TangentMode::Manual;
        self.changed = true;
        Ok(())
    }

    /// Wechselt den Tangenten-Modus. Zurück auf `AutoSmooth` glättet das
    /// Nachbarschaftsfenster sofort neu.
    pub fn set_tangent_mode(&mut self, index: usize, mode: TangentMode) -> RigResult<()> {
        self.knot_mut(index)?.mode = mode;
        self.changed = true;
        if mode == TangentMode::AutoSmooth {
            self.retangent(index)?;
        }
        Ok(())
    }

    /// Hängt einen neuen Bone als Knot ans Kurvenende an.
    ///
    /// Der Knot startet ohne Tangenten; bestehende Knots werden nicht
    /// nachgeglättet. Gibt den Index des neuen Knots zurück.
    pub fn append_bone(&mut self, bone: BoneId, host: &impl BoneHost) -> RigResult<usize> {
        let curve = self.curve.as_mut().ok_or(RigError::NotInitialized)?;
        let world = host.bone_position(bone).ok_or_else(|| {
            log::warn!("Bone {} nicht verfügbar, wird nicht angehängt", bone);
            RigError::DanglingBone { bone }
        })?;

        let position = self.frame.to_local_planar(world);
        curve.push(Knot::new(position, self.settings.default_tangent_mode));
        let index = curve.len() - 1;

        self.binding.bind(index, bone);
        self.bones.push(bone);
        self.changed = true;
        log::info!("Bone {} als Knot {} angehängt", bone, index);
        Ok(index)
    }

    // ── Baseline ────────────────────────────────────────────────────

    /// Speichert den aktuellen Zustand als Baseline (ersetzt eine bestehende).
    pub fn save_baseline(&mut self, host: &impl BoneHost) -> RigResult<&Baseline> {
        let Some(curve) = self.curve.as_ref() else {
            log::warn!("Keine Kurve zum Speichern vorhanden");
            return Err(RigError::NotInitialized);
        };
        let baseline = Baseline::capture(curve, &self.binding, host);
        if self.settings.debug_mode {
            log::debug!("Baseline für {} Knots gespeichert", baseline.len());
        }
        Ok(self.baseline.insert(baseline))
    }

    /// Setzt alle Knots und gebundenen Bones auf die Baseline zurück.
    ///
    /// Bei abweichender Knot-Anzahl wird der gemeinsame Präfix
    /// wiederhergestellt. Gibt die Anzahl wiederhergestellter Knots zurück.
    pub fn restore_baseline(&mut self, host: &mut impl BoneHost) -> RigResult<usize> {
        let curve = self.curve.as_mut().ok_or(RigError::NotInitialized)?;
        let Some(baseline) = self.baseline.as_ref() else {
            log::warn!("Keine Baseline zum Zurücksetzen gespeichert");
            return Err(RigError::NoBaseline);
        };

        let count = curve.len().min(baseline.len());
        for index in 0..count {
            if let (Some(knot), Some(saved)) = (curve.knot_mut(index), baseline.knot(index)) {
                *knot = *saved;
            }
        }
        for (_, bone) in self.binding.iter() {
            restore_bone(baseline, bone, host);
        }
        self.changed = true;
        log::info!("{} Knots auf Baseline zurückgesetzt", count);
        Ok(count)
    }

    /// Setzt einen einzelnen Knot samt Bone auf die Baseline zurück.
    pub fn restore_knot(&mut self, index: usize, host: &mut impl BoneHost) -> RigResult<()> {
        let curve = self.curve.as_mut().ok_or(RigError::NotInitialized)?;
        if index >= curve.len() {
            log::warn!("Ungültiger Knot-Index: {}", index);
            return Err(RigError::KnotOutOfRange {
                index,
                count: curve.len(),
            });
        }
        let baseline = self.baseline.as_ref().ok_or(RigError::NoBaseline)?;
        if baseline.knot(index).is_none() {
            log::warn!("Keine Baseline-Daten für Knot {}", index);
            return Err(RigError::NoBaselineForKnot { index });
        }
        if let (Some(knot), Some(saved)) = (curve.knot_mut(index), baseline.knot(index)) {
            *knot = *saved;
        }
        if let Some(bone) = self.binding.bone(index) {
            restore_bone(baseline, bone, host);
        }
        self.changed = true;
        Ok(())
    }

    fn knot_mut(&mut self, index: usize) -> RigResult<&mut Knot> {
        let curve = self.curve.as_mut().ok_or(RigError::NotInitialized)?;
        let count = curve.len();
        curve
            .knot_mut(index)
            .ok_or(RigError::KnotOutOfRange { index, count })
    }
}

/// Setzt einen Bone auf seine gespeicherte Position (Zuordnung über `BoneId`).
fn restore_bone(baseline: &Baseline, bone: BoneId, host: &mut impl BoneHost) {
    let Some(position) = baseline.bone_position(bone) else {
        return;
    };
    if !host.set_bone_position(bone, position) {
        log::warn!("Bone {} beim Zurücksetzen nicht verfügbar", bone);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BoneScene;
    use approx::assert_relative_eq;

    fn scene_with(points: &[Vec3]) -> (BoneScene, Vec<BoneId>) {
        let mut scene = BoneScene::new();
        let bones = points
            .iter()
            .enumerate()
            .map(|(i, p)| scene.spawn(format!("bone_{}", i), *p))
            .collect();
        (scene, bones)
    }

    fn rig_with(points: &[Vec3]) -> (CurveRig, BoneScene) {
        let (scene, bones) = scene_with(points);
        let mut rig = CurveRig::new(bones, LocalFrame::IDENTITY, RigSettings::default());
        rig.initialize(&scene).expect("Initialisierung erwartet");
        (rig, scene)
    }

    fn three_points() -> [Vec3; 3] {
        [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(2.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn initialize_requires_two_bones() {
        for points in [&[][..], &[Vec3::ONE][..]] {
            let (scene, bones) = scene_with(points);
            let mut rig = CurveRig::new(bones, LocalFrame::IDENTITY, RigSettings::default());

            let result = rig.initialize(&scene);

            assert_eq!(
                result,
                Err(RigError::NotEnoughBones {
                    found: points.len()
                })
            );
            assert!(rig.curve().is_none());
            assert!(rig.binding().is_empty());
        }
    }

    #[test]
    fn initialize_two_points_tangents_face_each_other() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(3.0, 4.0, 0.0);
        let (rig, _) = rig_with(&[a, b]);
        let curve = rig.curve().unwrap();
        let k0 = curve.knot(0).unwrap();
        let k1 = curve.knot(1).unwrap();

        let dir = (b - a).normalize();
        assert!((k0.tangent_out - dir * 5.0 * 0.33).length() < 1e-5);
        assert!((k1.tangent_in + dir * 5.0 * 0.33).length() < 1e-5);
        assert_eq!(rig.binding().len(), 2);
    }

    #[test]
    fn initialize_maps_into_local_frame_and_flattens() {
        let (scene, bones) = scene_with(&[Vec3::new(10.0, 0.0, 7.0), Vec3::new(12.0, 1.0, -3.0)]);
        let mut rig = CurveRig::new(
            bones,
            LocalFrame::from_translation(Vec3::new(10.0, 0.0, 0.0)),
            RigSettings::default(),
        );
        rig.initialize(&scene).unwrap();

        let curve = rig.curve().unwrap();
        assert_eq!(curve.knot(0).unwrap().position, Vec3::ZERO);
        assert_eq!(curve.knot(1).unwrap().position, Vec3::new(2.0, 1.0, 0.0));
    }

    #[test]
    fn initialize_skips_dangling_bones() {
        let (mut scene, bones) = scene_with(&three_points());
        scene.despawn(bones[1]);
        let mut rig = CurveRig::new(bones.clone(), LocalFrame::IDENTITY, RigSettings::default());

        assert_eq!(rig.initialize(&scene), Ok(2));
        assert_eq!(rig.binding().bone(1), Some(bones[2]));
    }

    #[test]
    fn interior_knot_direction_matches_scenario() {
        let (rig, _) = rig_with(&three_points());
        let knot = *rig.curve().unwrap().knot(1).unwrap();

        let dir = knot.tangent_out.normalize();
        assert_relative_eq!(dir.x, 0.894, epsilon = 1e-3);
        assert_relative_eq!(dir.y, 0.447, epsilon = 1e-3);
        assert_relative_eq!(knot.tangent_in.length(), 1.0 * 0.33, epsilon = 1e-5);
    }

    #[test]
    fn sync_bones_writes_knot_world_positions() {
        let frame = LocalFrame::from_translation(Vec3::new(0.0, 0.0, 2.0));
        let (mut scene, bones) = scene_with(&three_points());
        let mut rig = CurveRig::new(bones.clone(), frame, RigSettings::default());
        rig.initialize(&scene).unwrap();

        let report = rig.sync_bones_from_curve(&mut scene).unwrap();

        assert_eq!(report, SyncReport { written: 3, skipped: 0 });
        // Bones liegen nach dem Sync in der Kurvenebene des Frames (z = 2)
        assert_eq!(scene.bone_position(bones[1]), Some(Vec3::new(1.0, 0.0, 2.0)));
    }

    #[test]
    fn sync_skips_dangling_binding() {
        let (mut rig, mut scene) = rig_with(&three_points());
        let dangling = rig.binding().bone(0).unwrap();
        scene.despawn(dangling);

        let report = rig.sync_bones_from_curve(&mut scene).unwrap();
        assert_eq!(report, SyncReport { written: 2, skipped: 1 });

        let report = rig.sync_curve_from_bones(&scene).unwrap();
        assert_eq!(report, SyncReport { written: 2, skipped: 1 });
    }

    #[test]
    fn sync_curve_from_bones_keeps_tangents() {
        let (mut rig, mut scene) = rig_with(&three_points());
        let before = *rig.curve().unwrap().knot(2).unwrap();
        let bone = rig.binding().bone(2).unwrap();
        scene.set_bone_position(bone, Vec3::new(5.0, 5.0, 9.0));

        rig.sync_curve_from_bones(&scene).unwrap();

        let after = *rig.curve().unwrap().knot(2).unwrap();
        assert_eq!(after.position, Vec3::new(5.0, 5.0, 0.0));
        assert_eq!(after.tangent_in, before.tangent_in);
        assert_eq!(after.tangent_out, before.tangent_out);
    }

    #[test]
    fn set_knot_position_updates_window_only() {
        let points = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(2.0, 1.0, 0.0),
            Vec3::new(3.0, 0.0, 0.0),
        ];
        let (mut rig, mut scene) = rig_with(&points);
        let before = rig.curve().unwrap().clone();

        rig.set_knot_position(0, Vec3::new(0.0, 2.0, 0.0), &mut scene)
            .unwrap();

        let after = rig.curve().unwrap();
        assert_ne!(after.knot(1), before.knot(1));
        assert_eq!(after.knot(2), before.knot(2));
        assert_eq!(after.knot(3), before.knot(3));
    }

    #[test]
    fn set_knot_position_writes_bone_directly() {
        let (mut rig, mut scene) = rig_with(&three_points());
        let target = Vec3::new(1.5, -1.0, 0.25);

        rig.set_knot_position(1, target, &mut scene).unwrap();

        let bone = rig.binding().bone(1).unwrap();
        // z bleibt beim direkten Schreiben erhalten, die Kurve selbst ist flach
        assert_eq!(scene.bone_position(bone), Some(target));
        assert_eq!(
            rig.curve().unwrap().knot(1).unwrap().position,
            Vec3::new(1.5, -1.0, 0.0)
        );
    }

    #[test]
    fn set_knot_position_moves_manual_tangents_by_delta() {
        let (mut rig, mut scene) = rig_with(&three_points());
        rig.set_knot_tangents(1, Vec3::new(-1.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0))
            .unwrap();

        rig.set_knot_position(1, Vec3::new(1.0, 2.0, 0.0), &mut scene)
            .unwrap();

        let knot = rig.curve().unwrap().knot(1).unwrap();
        assert_eq!(knot.tangent_in, Vec3::new(-1.0, 2.0, 0.0));
        assert_eq!(knot.tangent_out, Vec3::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn mutators_out_of_range_leave_curve_unchanged() {
        let (mut rig, mut scene) = rig_with(&three_points());
        rig.take_changed();
        let before = rig.curve().unwrap().clone();

        assert!(matches!(
            rig.set_knot_position(3, Vec3::ONE, &mut scene),
            Err(RigError::KnotOutOfRange { index: 3, count: 3 })
        ));
        assert!(rig.retangent(7).is_err());
        assert!(rig.set_knot_tangents(3, Vec3::ONE, Vec3::ONE).is_err());
        assert!(rig.set_tangent_mode(usize::MAX, TangentMode::Manual).is_err());
        assert!(rig.restore_knot(3, &mut scene).is_err());

        assert_eq!(rig.curve().unwrap(), &before);
        assert!(!rig.is_changed());
    }

    #[test]
    fn operations_on_uninitialized_rig_fail() {
        let (mut scene, bones) = scene_with(&three_points());
        let mut rig = CurveRig::new(bones.clone(), LocalFrame::IDENTITY, RigSettings::default());

        assert_eq!(
            rig.set_knot_position(0, Vec3::ONE, &mut scene),
            Err(RigError::NotInitialized)
        );
        assert_eq!(rig.sync_bones_from_curve(&mut scene), Err(RigError::NotInitialized));
        assert_eq!(rig.recalculate_tangents(), Err(RigError::NotInitialized));
        assert_eq!(rig.append_bone(bones[0], &scene), Err(RigError::NotInitialized));
        assert!(rig.save_baseline(&scene).is_err());
        assert_eq!(rig.restore_baseline(&mut scene), Err(RigError::NotInitialized));
    }

    #[test]
    fn append_bone_adds_unsmoothed_knot() {
        let (mut rig, mut scene) = rig_with(&three_points());
        let before = rig.curve().unwrap().clone();
        let bone = scene.spawn("extra", Vec3::new(4.0, 0.0, 3.0));

        let index = rig.append_bone(bone, &scene).unwrap();

        let curve = rig.curve().unwrap();
        assert_eq!(index, 3);
        assert_eq!(&curve.knots()[..3], before.knots());
        let knot = curve.knot(3).unwrap();
        assert_eq!(knot.position, Vec3::new(4.0, 0.0, 0.0));
        assert_eq!(knot.tangent_in, Vec3::ZERO);
        assert_eq!(rig.binding().bone(3), Some(bone));
        assert_eq!(rig.bones().len(), 4);
    }

    #[test]
    fn append_dangling_bone_is_rejected() {
        let (mut rig, mut scene) = rig_with(&three_points());
        let bone = scene.spawn("gone", Vec3::ZERO);
        scene.despawn(bone);

        assert_eq!(rig.append_bone(bone, &scene), Err(RigError::DanglingBone { bone }));
        assert_eq!(rig.knot_count(), 3);
    }

    #[test]
    fn save_then_restore_is_noop() {
        let (mut rig, mut scene) = rig_with(&three_points());
        rig.set_knot_position(1, Vec3::new(1.0, 1.0, 0.0), &mut scene)
            .unwrap();
        rig.save_baseline(&scene).unwrap();
        let curve_before = rig.curve().unwrap().clone();
        let bones_before: Vec<_> = scene.iter().map(|(_, b)| b.position).collect();

        rig.restore_baseline(&mut scene).unwrap();

        assert_eq!(rig.curve().unwrap(), &curve_before);
        let bones_after: Vec<_> = scene.iter().map(|(_, b)| b.position).collect();
        assert_eq!(bones_after, bones_before);
    }

    #[test]
    fn restore_without_baseline_reports_error() {
        let (scene, bones) = scene_with(&three_points());
        let settings = RigSettings {
            capture_baseline_on_init: false,
            ..RigSettings::default()
        };
        let mut rig = CurveRig::new(bones, LocalFrame::IDENTITY, settings);
        rig.initialize(&scene).unwrap();
        let mut scene = scene;

        assert_eq!(rig.restore_baseline(&mut scene), Err(RigError::NoBaseline));
    }

    #[test]
    fn restore_baseline_reverts_drag() {
        let (mut rig, mut scene) = rig_with(&three_points());
        let original = rig.curve().unwrap().clone();
        let bone = rig.binding().bone(2).unwrap();

        rig.set_knot_position(2, Vec3::new(9.0, 9.0, 0.0), &mut scene)
            .unwrap();
        rig.restore_baseline(&mut scene).unwrap();

        assert_eq!(rig.curve().unwrap(), &original);
        assert_eq!(scene.bone_position(bone), Some(Vec3::new(2.0, 1.0, 0.0)));
        assert!(rig.take_changed());
    }

    #[test]
    fn restore_after_reinitialize_moves_bones_by_identity() {
        let (mut scene, bones) = scene_with(&three_points());
        let settings = RigSettings {
            capture_baseline_on_init: false,
            ..RigSettings::default()
        };
        let mut rig = CurveRig::new(bones.clone(), LocalFrame::IDENTITY, settings);
        rig.initialize(&scene).unwrap();
        rig.save_baseline(&scene).unwrap();

        scene.despawn(bones[0]);
        rig.initialize(&scene).unwrap();
        rig.set_knot_position(0, Vec3::new(7.0, 7.0, 0.0), &mut scene)
            .unwrap();
        rig.restore_baseline(&mut scene).unwrap();

        // Knot 0 ist jetzt an Bone b gebunden, b muss trotzdem zu seiner eigenen Position
        assert_eq!(scene.bone_position(bones[1]), Some(Vec3::new(1.0, 0.0, 0.0)));
        assert_eq!(scene.bone_position(bones[2]), Some(Vec3::new(2.0, 1.0, 0.0)));
    }

    #[test]
    fn restore_single_knot_leaves_others() {
        let (mut rig, mut scene) = rig_with(&three_points());
        rig.set_knot_position(0, Vec3::new(0.0, -1.0, 0.0), &mut scene)
            .unwrap();
        rig.set_knot_position(2, Vec3::new(2.0, 3.0, 0.0), &mut scene)
            .unwrap();

        rig.restore_knot(2, &mut scene).unwrap();

        let curve = rig.curve().unwrap();
        assert_eq!(curve.knot(2).unwrap().position, Vec3::new(2.0, 1.0, 0.0));
        assert_eq!(curve.knot(0).unwrap().position, Vec3::new(0.0, -1.0, 0.0));
    }

    #[test]
    fn tangent_mode_back_to_auto_resmooths() {
        let (mut rig, _) = rig_with(&three_points());
        let smooth = *rig.curve().unwrap().knot(1).unwrap();
        rig.set_knot_tangents(1, Vec3::ZERO, Vec3::ZERO).unwrap();

        rig.set_tangent_mode(1, TangentMode::AutoSmooth).unwrap();

        assert_eq!(rig.curve().unwrap().knot(1), Some(&smooth));
    }

    #[test]
    fn tangent_strength_is_clamped() {
        assert_eq!(clamp_tangent_strength(2.0), 1.0);
        assert_eq!(clamp_tangent_strength(0.0), DEFAULT_TANGENT_STRENGTH);
        assert_eq!(clamp_tangent_strength(f32::NAN), DEFAULT_TANGENT_STRENGTH);
        assert_eq!(clamp_tangent_strength(0.5), 0.5);
    }
}
