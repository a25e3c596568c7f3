pub mod cli;
pub mod config;
pub mod core;
pub mod export;
pub mod math;
pub mod mesh;
pub mod recipes;
pub mod scene;
pub mod types;

pub use config::EngineConfig;
pub use recipes::{BehaviorFlags, Catalog, MotionRule, Structure};
pub use scene::{SceneComposer, SceneGraph, SceneRoot};
