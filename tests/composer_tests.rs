use anatomy_engine::config::EngineConfig;
use anatomy_engine::export::SceneSnapshot;
use anatomy_engine::recipes::{MotionRule, FALLBACK_NAME};
use anatomy_engine::scene::SceneComposer;
use glam::Vec3;

fn composer() -> SceneComposer {
    SceneComposer::with_seed(EngineConfig::default(), 2024)
}

fn run(composer: &mut SceneComposer, frames: u32) {
    for frame in 1..=frames {
        composer.animate(frame as f32 / 60.0);
    }
}

#[cfg(test)]
mod composer_tests {
    use super::*;

    #[test]
    fn test_dna_helix_scenario() {
        let mut composer = composer();
        composer.load("DNA Helix");

        assert_eq!(composer.current_structure().unwrap().primitive_count(), 120);
        let state = composer.state();
        assert!(state.spin);
        assert!(!state.pulse);
        assert_eq!(composer.root().particle_system_count(), 0);

        run(&mut composer, 60);
        let node = composer.current_structure().unwrap();
        assert!((node.transform.rotation.y - 0.2).abs() < 1e-5);
        assert!(node.transform.scale.x > 0.99 && node.transform.scale.x < 1.0);
    }

    #[test]
    fn test_heart_scenario() {
        let mut composer = composer();
        composer.load("Heart");

        let state = *composer.state();
        assert!(state.pulse);
        assert!(!state.spin);
        assert_eq!(composer.particles().unwrap().len(), 200);

        let rotation_before = composer.current_structure().unwrap().transform.rotation;
        for frame in 0..600 {
            composer.animate(frame as f32 * 0.013);
            let node = composer.current_structure().unwrap();
            assert!(node.transform.scale.x >= 1.0);
            assert!(node.transform.scale.x <= 1.1 + 1e-6);
            assert_eq!(node.transform.scale, Vec3::splat(node.transform.scale.x));
        }
        assert_eq!(composer.current_structure().unwrap().transform.rotation, rotation_before);
    }

    #[test]
    fn test_heart_particles_stay_in_bounds() {
        let mut composer = composer();
        composer.load("Heart");
        for _ in 0..1000 {
            composer.animate(0.0);
            for y in composer.particles().unwrap().heights() {
                assert!((-2.0..=2.0).contains(&y));
            }
        }
    }

    #[test]
    fn test_heart_then_brain() {
        let mut composer = composer();
        composer.load("Heart");
        run(&mut composer, 10);
        composer.load("Brain");

        assert_eq!(composer.root().particle_system_count(), 0);
        assert_eq!(composer.root().structure_count(), 1);
        assert_eq!(composer.current_structure().unwrap().primitive_count(), 3);
        assert_eq!(composer.state().current_scale, 0.0);
        assert_eq!(composer.state().ticks, 0);
    }

    #[test]
    fn test_unknown_name_loads_fallback() {
        let mut composer = composer();
        composer.load("Spleen");
        assert_eq!(composer.current_name(), Some(FALLBACK_NAME));
        assert_eq!(composer.current_structure().unwrap().primitive_count(), 1);
        assert!(composer.state().spin);
    }

    #[test]
    fn test_category_alias_loads_structure() {
        let mut composer = composer();
        composer.load("circulation");
        assert_eq!(composer.current_name(), Some("Heart"));
        assert!(composer.particles().is_some());
    }

    #[test]
    fn test_entrance_converges_within_200_ticks() {
        let mut composer = composer();
        composer.load("Liver");
        let mut ticks = 0;
        while 1.0 - composer.current_structure().unwrap().transform.scale.x > 1e-3 {
            ticks += 1;
            composer.animate(ticks as f32 / 60.0);
            assert!(ticks <= 200);
        }
    }

    #[test]
    fn test_scale_monotonic_while_entering() {
        let mut composer = composer();
        composer.load("Kidneys");
        let mut last = 0.0;
        for frame in 1..=300 {
            composer.animate(frame as f32 / 60.0);
            let scale = composer.current_structure().unwrap().transform.scale.x;
            assert!(scale >= last);
            assert!(scale < 1.0 + 1e-6);
            last = scale;
        }
    }

    #[test]
    fn test_halo_orbits_human() {
        let mut composer = composer();
        composer.load("Human Male");
        let before: Vec<f32> = composer.particles().unwrap().heights().collect();
        assert_eq!(before.len(), 40);

        run(&mut composer, 100);
        let after: Vec<f32> = composer.particles().unwrap().heights().collect();
        assert_eq!(before, after);
        assert!(composer.state().spin);
    }

    #[test]
    fn test_halo_grows_and_turns_with_figure() {
        let mut composer = composer();
        composer.load("Human Male");

        let halo = composer.particles().unwrap();
        for i in 0..halo.len() {
            assert_eq!(halo.world_position(i), Vec3::ZERO);
        }

        run(&mut composer, 60);
        let figure = composer.current_structure().unwrap().transform;
        let halo = composer.particles().unwrap();
        assert!((figure.rotation.y - 0.2).abs() < 1e-5);
        assert_eq!(halo.transform.rotation, figure.rotation);
        assert_eq!(halo.transform.scale, figure.scale);

        for i in 0..halo.len() {
            let expected = figure.matrix().transform_point3(halo.position(i));
            assert!((halo.world_position(i) - expected).length() < 1e-5);
        }
    }

    #[test]
    fn test_independent_rule_spins_and_pulses() {
        let config = EngineConfig {
            motion_rule: MotionRule::Independent,
            ..EngineConfig::default()
        };
        let mut composer = SceneComposer::with_seed(config, 1);
        composer.load("Heart");
        assert!(composer.state().spin && composer.state().pulse);

        composer.animate(1.0);
        let node = composer.current_structure().unwrap();
        assert!((node.transform.rotation.y - 0.2).abs() < 1e-6);
        assert!(node.transform.scale.x >= 1.0);
    }

    #[test]
    fn test_seeded_composers_agree() {
        let mut a = SceneComposer::with_seed(EngineConfig::default(), 77);
        let mut b = SceneComposer::with_seed(EngineConfig::default(), 77);
        for name in ["T-Cells", "Heart", "Alveoli"] {
            a.load(name);
            b.load(name);
            assert_eq!(a.current_structure(), b.current_structure());
            assert_eq!(a.particles(), b.particles());
        }
    }

    #[test]
    fn test_snapshot_after_animation() {
        let mut composer = composer();
        composer.load("Heart");
        run(&mut composer, 5);

        let snapshot = SceneSnapshot::capture(&composer);
        assert_eq!(snapshot.structure_name, Some("Heart"));
        assert!(snapshot.bounds.is_some());

        let json: serde_json::Value = serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();
        assert_eq!(json["animation"]["ticks"], 5);
        assert_eq!(json["structure"]["children"].as_array().unwrap().len(), 4);
    }
}
