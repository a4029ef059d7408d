//! Core-Domänentypen: Knots, Kurve, Bone-Bindung, Baseline und das Kurven-Rig.

pub mod baseline;
pub mod binding;
pub mod curve;
pub mod error;
pub mod frame;
pub mod host;
pub mod knot;
pub mod rig;
pub mod tangent;

pub use baseline::Baseline;
pub use binding::Binding;
pub use curve::{cubic_bezier, Curve};
pub use error::{RigError, RigResult};
pub use frame::LocalFrame;
pub use host::{BoneHost, BoneId, BoneScene, SceneBone};
pub use knot::{Knot, TangentMode};
pub use rig::{CurveRig, RigSettings, SyncReport, DEFAULT_TANGENT_STRENGTH};
pub use tangent::derive_tangents;
