//! Builder für Render-Szenen aus dem RigState.

use crate::app::RigState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen RigState.
pub fn build(state: &RigState) -> RenderScene {
    let frame = state.rig.frame();
    let curve_polyline = state
        .rig
        .curve()
        .map(|curve| {
            curve
                .sample(state.options.curve_samples_per_segment)
                .into_iter()
                .map(|local| frame.to_world(local))
                .collect()
        })
        .unwrap_or_default();

    let handles = if state.manipulation_enabled {
        state.handles.visuals(&state.options)
    } else {
        Vec::new()
    };

    RenderScene {
        curve_polyline,
        curve_color: state.options.curve_color,
        handles,
        knot_count: state.knot_count(),
        status_text: state.status_text(),
    }
}
