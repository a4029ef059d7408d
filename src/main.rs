//! Spline Bone Rig Demo.
//!
//! Headless-Demo: baut einen Mund aus fünf Bones, initialisiert das Rig,
//! spielt eine Drag-Sequenz ab und speichert die Baseline als JSON.

use glam::Vec3;
use spline_bone_rig::app::keyboard;
use spline_bone_rig::{
    BoneScene, LocalFrame, RigController, RigIntent, RigOptions, RigState,
};

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Spline Bone Rig v{} startet...", env!("CARGO_PKG_VERSION"));

    // Optionen aus TOML laden (oder Standardwerte)
    let config_path = RigOptions::config_path();
    let options = RigOptions::load_from_file(&config_path);
    if !config_path.exists() {
        // Standardwerte als editierbare Vorlage ablegen
        if let Err(e) = options.save_to_file(&config_path) {
            log::warn!("Optionen konnten nicht gespeichert werden: {:#}", e);
        }
    }

    let mut scene = BoneScene::new();
    let bones = vec![
        scene.spawn("mouth_corner_l", Vec3::new(-2.0, 0.2, 0.0)),
        scene.spawn("lip_lower_l", Vec3::new(-1.0, -0.3, 0.0)),
        scene.spawn("lip_lower_c", Vec3::new(0.0, -0.5, 0.0)),
        scene.spawn("lip_lower_r", Vec3::new(1.0, -0.3, 0.0)),
        scene.spawn("mouth_corner_r", Vec3::new(2.0, 0.2, 0.0)),
    ];
    let frame = LocalFrame::from_translation(Vec3::new(0.0, 1.5, 0.0));

    let mut state = RigState::new(bones, frame, options);
    let mut controller = RigController::new();

    // Frame 0: Initialisieren
    controller.update_frame(&mut state, &mut scene, vec![RigIntent::InitializeRequested]);

    // Mundwinkel links greifen und nach oben ziehen (Lächeln)
    let corner = state
        .rig
        .knot_world_position(0)
        .ok_or_else(|| anyhow::anyhow!("Rig konnte nicht initialisiert werden"))?;
    let drag_frames = [
        vec![RigIntent::PointerPressed { world_pos: corner }],
        vec![RigIntent::PointerDragged {
            world_pos: corner + Vec3::new(0.0, 0.3, 0.0),
        }],
        vec![RigIntent::PointerDragged {
            world_pos: corner + Vec3::new(-0.1, 0.6, 0.0),
        }],
        vec![RigIntent::PointerReleased],
    ];
    for intents in drag_frames {
        if let Some(report) = controller.update_frame(&mut state, &mut scene, intents) {
            log::debug!("Sync: {} Bones geschrieben", report.written);
        }
    }

    for (id, bone) in scene.iter() {
        log::info!("Bone {} ({}): {:?}", id, bone.name, bone.position);
    }

    let render_scene = controller.build_render_scene(&state);
    log::info!(
        "Render-Szene: {} Knots, {} Kurvenpunkte, {} Handles",
        render_scene.knot_count,
        render_scene.curve_polyline.len(),
        render_scene.handles.len()
    );

    // Baseline sichern; "R" glättet danach alle Tangenten, "B" setzt zurück
    let intents: Vec<RigIntent> = ["S", "R", "B"]
        .into_iter()
        .filter_map(keyboard::map_key)
        .collect();
    controller.update_frame(&mut state, &mut scene, intents);
    println!("{}", state.status_text());

    if let Some(baseline) = state.rig.baseline() {
        let path = config_path.with_file_name("spline_bone_rig_baseline.json");
        std::fs::write(&path, serde_json::to_string_pretty(baseline)?)?;
        log::info!("Baseline gespeichert nach: {}", path.display());
    }

    Ok(())
}
