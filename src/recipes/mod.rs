//! Shape catalog: maps structure names to procedural construction recipes.
//!
//! Every recipe is a plain function from a random source to a [`Structure`]. The
//! [`Catalog`] owns the registry, resolves category aliases, applies the
//! [`MotionRule`] to the declared behavior flags and falls back to a neutral sphere
//! for names it does not know, so resolution never fails.

mod bilateral;
mod builder;
mod cardiac;
mod cluster;
mod fixed;
mod helix;
mod human;
mod membrane;
mod segmented;
mod spikes;

pub use builder::*;
pub use cluster::ALVEOLI_SACS;
pub use helix::{HELIX_ANGULAR_STEP, HELIX_HEIGHT, HELIX_RADIUS, HELIX_SEGMENTS};
pub use membrane::{membrane_mesh, membrane_ripple};
pub use segmented::SPINE_SEGMENTS;
pub use spikes::T_CELL_SPIKES;

use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::{CompositeNode, Material, PrimitiveNode, ShapeKind};

/// Name reported for structures built by the fallback recipe
pub const FALLBACK_NAME: &str = "Unknown";

/// Neutral color of the fallback sphere
pub const FALLBACK_COLOR: u32 = 0x00D2FF;

/// Construction function for one structure
pub type Recipe = fn(&mut dyn RngCore) -> Structure;

/// Default animation behavior declared by a recipe
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BehaviorFlags {
    pub pulses: bool,
    pub spins: bool,
}

impl BehaviorFlags {
    /// Continuous rotation, no pulse
    pub const SPINNING: Self = Self {
        pulses: false,
        spins: true,
    };

    /// Periodic pulse. Whether it also spins is decided by the [`MotionRule`].
    pub const PULSING: Self = Self {
        pulses: true,
        spins: true,
    };
}

impl Default for BehaviorFlags {
    fn default() -> Self {
        Self::SPINNING
    }
}

/// How a structure's pulse and spin flags interact.
///
/// `ExclusivePulse` matches the behavior the viewer has always shown: a beating
/// structure holds still. `Independent` keeps both motions.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionRule {
    #[default]
    ExclusivePulse,
    Independent,
}

impl MotionRule {
    pub fn apply(self, flags: BehaviorFlags) -> BehaviorFlags {
        match self {
            MotionRule::ExclusivePulse => BehaviorFlags {
                pulses: flags.pulses,
                spins: flags.spins && !flags.pulses,
            },
            MotionRule::Independent => flags,
        }
    }
}

/// Particle effect a structure wants next to it
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowKind {
    /// Falling stream recycled from the bottom of its box to the top
    Fountain,
    /// Slowly orbiting cloud around the figure
    Halo,
}

impl FlowKind {
    /// Whether the particles ride along with the structure's transform
    /// instead of staying fixed in the scene
    pub fn follows_structure(self) -> bool {
        matches!(self, FlowKind::Halo)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Flow {
    pub kind: FlowKind,
    pub color: [f32; 3],
}

/// Output of a recipe
#[derive(Clone, Debug, PartialEq)]
pub struct Structure {
    pub name: String,
    pub root: CompositeNode,
    pub flags: BehaviorFlags,
    pub flow: Option<Flow>,
}

impl Structure {
    pub fn new(name: impl Into<String>, root: CompositeNode) -> Self {
        Self {
            name: name.into(),
            root,
            flags: BehaviorFlags::default(),
            flow: None,
        }
    }

    pub fn with_flags(mut self, flags: BehaviorFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_flow(mut self, flow: Flow) -> Self {
        self.flow = Some(flow);
        self
    }

    pub fn is_fallback(&self) -> bool {
        self.name == FALLBACK_NAME
    }
}

/// Plain sphere shown for names the catalog does not recognize
pub fn fallback(_rng: &mut dyn RngCore) -> Structure {
    let mut root = CompositeNode::new();
    root.push(
        PrimitiveNode::new(ShapeKind::sphere_segments(1.0, 32, 32), Material::tissue(FALLBACK_COLOR))
            .labeled("unknown"),
    );
    Structure::new(FALLBACK_NAME, root)
}

/// Registry of recipes keyed by display name
#[derive(Clone, Debug)]
pub struct Catalog {
    recipes: HashMap<&'static str, Recipe>,
    aliases: HashMap<String, &'static str>,
    rule: MotionRule,
}

impl Catalog {
    /// Empty registry; every name resolves to the fallback
    pub fn empty() -> Self {
        Self {
            recipes: HashMap::new(),
            aliases: HashMap::new(),
            rule: MotionRule::default(),
        }
    }

    /// Registry holding every built-in structure and category alias
    pub fn builtin() -> Self {
        let mut catalog = Self::empty();

        catalog.register("DNA Helix", helix::dna);
        catalog.register("RNA Strand", helix::rna);
        catalog.register("Protein", fixed::protein);
        catalog.register("Enzyme", fixed::enzyme);

        catalog.register("Brain", bilateral::brain);
        catalog.register("Neurons", fixed::neurons);
        catalog.register("Spine", segmented::spine);
        catalog.register("Synapse", bilateral::synapse);

        catalog.register("Heart", cardiac::heart);
        catalog.register("Arteries", fixed::arteries);
        catalog.register("Veins", fixed::veins);
        catalog.register("Red Blood Cells", fixed::red_blood_cells);

        catalog.register("Bone Marrow", fixed::bone_marrow);

        catalog.register("Lungs", bilateral::lungs);
        catalog.register("Alveoli", cluster::alveoli);

        catalog.register("Stomach", fixed::stomach);
        catalog.register("Liver", fixed::liver);
        catalog.register("Pancreas", fixed::pancreas);
        catalog.register("Intestine", fixed::intestine);

        catalog.register("Kidneys", bilateral::kidneys);
        catalog.register("Bladder", fixed::bladder);

        catalog.register("T-Cells", spikes::t_cells);
        catalog.register("White Blood Cells", membrane::white_blood_cells);
        catalog.register("Antibodies", fixed::antibodies);
        catalog.register("Virus", fixed::virus);

        catalog.register("Human Male", human::male);
        catalog.register("Human Female", human::female);

        catalog.alias("nervous", "Brain");
        catalog.alias("circulation", "Heart");
        catalog.alias("circulatory", "Heart");
        catalog.alias("skeletal", "Spine");
        catalog.alias("digestive", "Stomach");
        catalog.alias("genetic", "DNA Helix");
        catalog.alias("immune", "Virus");
        catalog.alias("respiratory", "Lungs");
        catalog.alias("filtration", "Kidneys");
        catalog.alias("home", "Human Male");

        catalog
    }

    pub fn with_rule(mut self, rule: MotionRule) -> Self {
        self.rule = rule;
        self
    }

    pub fn rule(&self) -> MotionRule {
        self.rule
    }

    /// Adds or replaces a recipe
    pub fn register(&mut self, name: &'static str, recipe: Recipe) {
        self.recipes.insert(name, recipe);
    }

    /// Maps a category key (matched case-insensitively) onto a registered name.
    /// Aliases pointing at unregistered names are ignored.
    pub fn alias(&mut self, alias: &str, target: &'static str) {
        if self.recipes.contains_key(target) {
            self.aliases.insert(alias.to_lowercase(), target);
        } else {
            log::warn!("Ignoring alias {:?}: no recipe named {:?}", alias, target);
        }
    }

    /// Registered display names, sorted
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.recipes.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// `(alias, target)` pairs, sorted by alias
    pub fn aliases(&self) -> Vec<(&str, &'static str)> {
        let mut aliases: Vec<_> = self.aliases.iter().map(|(a, t)| (a.as_str(), *t)).collect();
        aliases.sort_unstable();
        aliases
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Registered name a display name or alias refers to
    pub fn canonical_name(&self, name: &str) -> Option<&'static str> {
        if let Some((key, _)) = self.recipes.get_key_value(name) {
            return Some(*key);
        }
        self.aliases.get(&name.to_lowercase()).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.canonical_name(name).is_some()
    }

    /// Builds the structure for `name`. Never fails: unknown names yield the fallback sphere.
    pub fn resolve(&self, name: &str, rng: &mut dyn RngCore) -> Structure {
        let mut structure = match self.canonical_name(name) {
            Some(key) => {
                let mut structure = (self.recipes[key])(rng);
                structure.name = key.to_string();
                structure
            }
            None => {
                log::warn!("No recipe for structure {:?}, using fallback", name);
                fallback(rng)
            }
        };

        structure.flags = self.rule.apply(structure.flags);
        structure
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
