use anyhow::{bail, Result};
use clap::Parser;
use std::time::Instant;

use anatomy_engine::cli::Cli;
use anatomy_engine::config::EngineConfig;
use anatomy_engine::core::Clock;
use anatomy_engine::export::SceneSnapshot;
use anatomy_engine::recipes::Catalog;
use anatomy_engine::scene::SceneComposer;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.list {
        print_catalog(&Catalog::builtin());
        return Ok(());
    }

    if cli.fps.is_nan() || cli.fps <= 0.0 {
        bail!("--fps must be positive, got {}", cli.fps);
    }

    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };

    let mut composer = match cli.seed {
        Some(seed) => SceneComposer::with_seed(config, seed),
        None => SceneComposer::new(config),
    };

    for name in &cli.structures {
        let build_start = Instant::now();
        composer.load(name);
        let build_time = build_start.elapsed();

        let mut clock = Clock::fixed(cli.fps);
        for _ in 0..cli.frames {
            clock.tick();
            composer.animate(clock.elapsed());
        }

        if !cli.quiet {
            print_summary(&composer, build_time.as_secs_f64() * 1000.0, clock.elapsed());
        }
    }

    if let Some(path) = &cli.export {
        SceneSnapshot::capture(&composer).write(path)?;
    }

    Ok(())
}

fn print_catalog(catalog: &Catalog) {
    println!("Structures:");
    for name in catalog.names() {
        println!("  {}", name);
    }
    println!("Categories:");
    for (alias, target) in catalog.aliases() {
        println!("  {:<12} -> {}", alias, target);
    }
}

fn print_summary(composer: &SceneComposer, build_ms: f64, elapsed: f32) {
    let Some(node) = composer.current_structure() else {
        return;
    };
    let state = composer.state();

    println!("\n=== {} ===", composer.current_name().unwrap_or_default());
    println!("  Primitives: {}", node.primitive_count());
    println!("  Spins: {}  Pulses: {}", state.spin, state.pulse);
    if let Some(bounds) = node.bounds() {
        let size = bounds.size();
        println!("  Extent: {:.2} x {:.2} x {:.2}", size.x, size.y, size.z);
    }
    println!(
        "  After {} ticks ({:.2}s): scale {:.3}, rotation.y {:.3}",
        state.ticks, elapsed, node.transform.scale.x, node.transform.rotation.y
    );
    if let Some(particles) = composer.particles() {
        println!("  Particles: {}", particles.len());
    }
    println!("  Build time: {:.3}ms", build_ms);
}
