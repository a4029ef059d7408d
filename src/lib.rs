//! Spline Bone Rig Library.
//! Kurven-Rig mit Bone-Bindung, live ziehbaren Handles und Baseline-Reset.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{RigCommand, RigController, RigIntent, RigState};
pub use core::{
    Baseline, Binding, BoneHost, BoneId, BoneScene, Curve, CurveRig, Knot, LocalFrame, RigError,
    RigResult, RigSettings, SyncReport, TangentMode,
};
pub use shared::{HandleVisual, RenderScene, RigOptions};
