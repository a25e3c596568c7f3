use anatomy_engine::math::hex_to_rgb;
use anatomy_engine::recipes::{Catalog, FALLBACK_COLOR, FALLBACK_NAME};
use anatomy_engine::types::ShapeKind;
use anatomy_engine::BehaviorFlags;
use rand::rngs::StdRng;
use rand::SeedableRng;

const RANDOMIZED: [&str; 2] = ["Alveoli", "T-Cells"];

#[cfg(test)]
mod catalog_tests {
    use super::*;

    #[test]
    fn test_every_structure_has_primitives() {
        let catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(11);
        for name in catalog.names() {
            let structure = catalog.resolve(name, &mut rng);
            assert_eq!(structure.name, name);
            assert!(structure.root.primitive_count() > 0, "{} is empty", name);
            assert!(structure.root.bounds().is_some(), "{} has no bounds", name);
        }
    }

    #[test]
    fn test_builtin_size() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 27);
        assert_eq!(catalog.aliases().len(), 10);
    }

    #[test]
    fn test_unknown_names_fall_back() {
        let catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(1);
        for name in ["", "Spleen", "dna helix", "  Heart"] {
            let structure = catalog.resolve(name, &mut rng);
            assert_eq!(structure.name, FALLBACK_NAME);
            assert_eq!(structure.root.primitive_count(), 1);
            assert_eq!(structure.flags, BehaviorFlags::SPINNING);
            assert!(structure.flow.is_none());

            let sphere = structure.root.primitives()[0];
            assert_eq!(sphere.material.color, hex_to_rgb(FALLBACK_COLOR));
            assert!(matches!(
                sphere.shape,
                ShapeKind::Sphere {
                    radius,
                    width_segments: 32,
                    height_segments: 32,
                    ..
                } if radius == 1.0
            ));
        }
    }

    #[test]
    fn test_deterministic_recipes_ignore_rng() {
        let catalog = Catalog::builtin();
        for name in catalog.names().into_iter().filter(|n| !RANDOMIZED.contains(n)) {
            let a = catalog.resolve(name, &mut StdRng::seed_from_u64(1));
            let b = catalog.resolve(name, &mut StdRng::seed_from_u64(2));
            assert_eq!(a, b, "{} depends on the random source", name);
        }
    }

    #[test]
    fn test_randomized_recipes_keep_their_shape_count() {
        let catalog = Catalog::builtin();
        for name in RANDOMIZED {
            let a = catalog.resolve(name, &mut StdRng::seed_from_u64(1));
            let b = catalog.resolve(name, &mut StdRng::seed_from_u64(2));
            assert_eq!(a.root.primitive_count(), b.root.primitive_count());
            assert_ne!(a.root, b.root, "{} should vary with the seed", name);
        }
    }

    #[test]
    fn test_same_seed_same_structure() {
        let catalog = Catalog::builtin();
        for name in RANDOMIZED {
            let a = catalog.resolve(name, &mut StdRng::seed_from_u64(5));
            let b = catalog.resolve(name, &mut StdRng::seed_from_u64(5));
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_aliases_match_display_names() {
        let catalog = Catalog::builtin();
        for (alias, target) in catalog.aliases() {
            let via_alias = catalog.resolve(alias, &mut StdRng::seed_from_u64(3));
            let direct = catalog.resolve(target, &mut StdRng::seed_from_u64(3));
            assert_eq!(via_alias, direct, "alias {} differs from {}", alias, target);
        }
    }

    #[test]
    fn test_only_heart_pulses() {
        let catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(9);
        for name in catalog.names() {
            let flags = catalog.resolve(name, &mut rng).flags;
            assert_eq!(flags.pulses, name == "Heart", "{}", name);
            assert_ne!(flags.pulses, flags.spins, "{}", name);
        }
    }

    #[test]
    fn test_flows() {
        let catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(9);
        let with_flow: Vec<&str> = catalog
            .names()
            .into_iter()
            .filter(|name| catalog.resolve(name, &mut rng).flow.is_some())
            .collect();
        assert_eq!(with_flow, vec!["Heart", "Human Female", "Human Male"]);
    }
}
