//! Runtime side of the engine: what is attached to the scene root and how it moves.

mod animation;
mod composer;
mod particles;
mod root;

pub use animation::{ease_toward_one, pulse_scale, spin_angle, AnimationState, FrameMotion};
pub use composer::SceneComposer;
pub use particles::{FlowMotion, ParticleSystem};
pub use root::{NodeHandle, SceneGraph, SceneObject, SceneRoot};
