use serde::Serialize;
use std::collections::BTreeMap;

use super::particles::ParticleSystem;
use crate::types::CompositeNode;

/// Opaque handle to an object attached to a [`SceneRoot`]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeHandle(u64);

/// Anything that can hang off the scene root
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SceneObject {
    Structure(CompositeNode),
    Particles(ParticleSystem),
}

impl SceneObject {
    pub fn as_structure(&self) -> Option<&CompositeNode> {
        match self {
            SceneObject::Structure(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_structure_mut(&mut self) -> Option<&mut CompositeNode> {
        match self {
            SceneObject::Structure(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_particles(&self) -> Option<&ParticleSystem> {
        match self {
            SceneObject::Particles(system) => Some(system),
            _ => None,
        }
    }

    pub fn as_particles_mut(&mut self) -> Option<&mut ParticleSystem> {
        match self {
            SceneObject::Particles(system) => Some(system),
            _ => None,
        }
    }

    /// Releases the object and everything it owns
    pub fn dispose(self) {
        match &self {
            SceneObject::Structure(node) => {
                log::debug!("Disposing structure with {} primitives", node.primitive_count())
            }
            SceneObject::Particles(system) => {
                log::debug!("Disposing particle system with {} particles", system.len())
            }
        }
    }
}

/// Attachment point the composer builds into
pub trait SceneRoot {
    fn add_child(&mut self, object: SceneObject) -> NodeHandle;

    /// Detaches a child, handing ownership back to the caller
    fn remove_child(&mut self, handle: NodeHandle) -> Option<SceneObject>;

    fn child(&self, handle: NodeHandle) -> Option<&SceneObject>;

    fn child_mut(&mut self, handle: NodeHandle) -> Option<&mut SceneObject>;
}

/// In-memory scene root keeping children in attachment order
#[derive(Debug, Default)]
pub struct SceneGraph {
    next_id: u64,
    children: BTreeMap<NodeHandle, SceneObject>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeHandle, &SceneObject)> {
        self.children.iter().map(|(handle, object)| (*handle, object))
    }

    pub fn structure_count(&self) -> usize {
        self.children.values().filter(|o| o.as_structure().is_some()).count()
    }

    pub fn particle_system_count(&self) -> usize {
        self.children.values().filter(|o| o.as_particles().is_some()).count()
    }
}

impl SceneRoot for SceneGraph {
    fn add_child(&mut self, object: SceneObject) -> NodeHandle {
        self.next_id += 1;
        let handle = NodeHandle(self.next_id);
        self.children.insert(handle, object);
        handle
    }

    fn remove_child(&mut self, handle: NodeHandle) -> Option<SceneObject> {
        self.children.remove(&handle)
    }

    fn child(&self, handle: NodeHandle) -> Option<&SceneObject> {
        self.children.get(&handle)
    }

    fn child_mut(&mut self, handle: NodeHandle) -> Option<&mut SceneObject> {
        self.children.get_mut(&handle)
    }
}
