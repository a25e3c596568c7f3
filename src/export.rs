// export.rs - JSON snapshots of the composed scene
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

use crate::math::AABB;
use crate::recipes::BehaviorFlags;
use crate::scene::{AnimationState, ParticleSystem, SceneComposer, SceneRoot};
use crate::types::CompositeNode;

/// Everything attached to the root at one instant, ready to serialize
#[derive(Debug, Serialize)]
pub struct SceneSnapshot<'a> {
    pub generated_at: String,
    pub structure_name: Option<&'a str>,
    pub flags: Option<BehaviorFlags>,
    pub animation: AnimationState,
    pub primitive_count: usize,
    /// Bounds of the structure at full scale, in its own frame
    pub bounds: Option<AABB>,
    pub structure: Option<&'a CompositeNode>,
    pub particles: Option<&'a ParticleSystem>,
}

impl<'a> SceneSnapshot<'a> {
    pub fn capture<R: SceneRoot>(composer: &'a SceneComposer<R>) -> Self {
        let structure = composer.current_structure();
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            structure_name: composer.current_name(),
            flags: composer.current_flags(),
            animation: *composer.state(),
            primitive_count: structure.map_or(0, CompositeNode::primitive_count),
            bounds: structure.and_then(CompositeNode::bounds),
            structure,
            particles: composer.particles(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize scene snapshot")
    }

    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?)
            .with_context(|| format!("Failed to write scene snapshot: {:?}", path))?;
        log::info!("Wrote scene snapshot to {:?}", path);
        Ok(())
    }
}
