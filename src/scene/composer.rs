use glam::Vec3;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use super::animation::AnimationState;
use super::particles::ParticleSystem;
use super::root::{NodeHandle, SceneGraph, SceneObject, SceneRoot};
use crate::config::EngineConfig;
use crate::recipes::{BehaviorFlags, Catalog, FlowKind};
use crate::types::CompositeNode;

/// Structure currently attached to the root
#[derive(Clone, Debug)]
struct Current {
    name: String,
    handle: NodeHandle,
    flags: BehaviorFlags,
}

/// Owns the active structure and its particle effect, swaps them on request
/// and drives their per-frame motion.
///
/// At most one structure and one particle system are attached at a time.
pub struct SceneComposer<R: SceneRoot = SceneGraph> {
    root: R,
    catalog: Catalog,
    config: EngineConfig,
    rng: Box<dyn RngCore>,
    current: Option<Current>,
    particles: Option<NodeHandle>,
    /// Particles copy the structure's transform every tick
    particles_follow: bool,
    state: AnimationState,
}

impl SceneComposer<SceneGraph> {
    /// Composer over a fresh in-memory root, seeded from the OS
    pub fn new(config: EngineConfig) -> Self {
        let catalog = Catalog::builtin().with_rule(config.motion_rule);
        Self::with_root(SceneGraph::new(), catalog, config, Box::new(StdRng::from_os_rng()))
    }

    /// Reproducible composer: the same seed builds the same scenes
    pub fn with_seed(config: EngineConfig, seed: u64) -> Self {
        let catalog = Catalog::builtin().with_rule(config.motion_rule);
        Self::with_root(SceneGraph::new(), catalog, config, Box::new(StdRng::seed_from_u64(seed)))
    }
}

impl<R: SceneRoot> SceneComposer<R> {
    pub fn with_root(root: R, catalog: Catalog, config: EngineConfig, rng: Box<dyn RngCore>) -> Self {
        Self {
            root,
            catalog,
            config,
            rng,
            current: None,
            particles: None,
            particles_follow: false,
            state: AnimationState::default(),
        }
    }

    /// Replaces whatever is shown with the structure called `name`.
    /// Unknown names show the fallback sphere; this never fails.
    pub fn load(&mut self, name: &str) {
        self.clear();

        let structure = self.catalog.resolve(name, &mut *self.rng);
        let primitives = structure.root.primitive_count();

        let mut node = structure.root;
        node.transform.position = Vec3::ZERO;
        node.transform.scale = Vec3::ZERO;
        let entering = node.transform;
        let handle = self.root.add_child(SceneObject::Structure(node));

        self.state = AnimationState::entering(structure.flags);

        if let Some(flow) = structure.flow {
            let mut system = match flow.kind {
                FlowKind::Fountain => ParticleSystem::fountain(&self.config.fountain, flow.color, &mut *self.rng),
                FlowKind::Halo => ParticleSystem::halo(&self.config.halo, flow.color, &mut *self.rng),
            };
            self.particles_follow = flow.kind.follows_structure();
            if self.particles_follow {
                system.transform = entering;
            }
            log::debug!("Attaching {:?} flow with {} particles", flow.kind, system.len());
            self.particles = Some(self.root.add_child(SceneObject::Particles(system)));
        }

        log::info!(
            "Loaded {} ({} primitives, spins: {}, pulses: {})",
            structure.name,
            primitives,
            structure.flags.spins,
            structure.flags.pulses
        );

        self.current = Some(Current {
            name: structure.name,
            handle,
            flags: structure.flags,
        });
    }

    /// Detaches and disposes the current structure and its particles
    pub fn clear(&mut self) {
        if let Some(current) = self.current.take() {
            if let Some(object) = self.root.remove_child(current.handle) {
                object.dispose();
            }
        }
        if let Some(handle) = self.particles.take() {
            if let Some(object) = self.root.remove_child(handle) {
                object.dispose();
            }
        }
        self.particles_follow = false;
    }

    /// Advances the scene to `elapsed` seconds since the render loop started.
    /// No-op on anything that is not attached.
    pub fn animate(&mut self, elapsed: f32) {
        let Some(current) = &self.current else {
            return;
        };

        let motion = self.state.tick(elapsed, &self.config.animation);
        let structure_transform = self
            .root
            .child_mut(current.handle)
            .and_then(SceneObject::as_structure_mut)
            .map(|node| {
                if let Some(angle) = motion.rotation_y {
                    node.transform.rotation.y = angle;
                }
                if let Some(scale) = motion.uniform_scale {
                    node.transform.scale = Vec3::splat(scale);
                }
                node.transform
            });

        if let Some(handle) = self.particles {
            if let Some(system) = self.root.child_mut(handle).and_then(SceneObject::as_particles_mut) {
                if self.particles_follow {
                    if let Some(transform) = structure_transform {
                        system.transform = transform;
                    }
                }
                system.advance();
            }
        }
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn current_name(&self) -> Option<&str> {
        self.current.as_ref().map(|c| c.name.as_str())
    }

    /// Effective flags of the current structure, after the motion rule
    pub fn current_flags(&self) -> Option<BehaviorFlags> {
        self.current.as_ref().map(|c| c.flags)
    }

    pub fn current_structure(&self) -> Option<&CompositeNode> {
        let current = self.current.as_ref()?;
        self.root.child(current.handle)?.as_structure()
    }

    pub fn particles(&self) -> Option<&ParticleSystem> {
        self.root.child(self.particles?)?.as_particles()
    }

    pub fn root(&self) -> &R {
        &self.root
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
