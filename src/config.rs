// config.rs - Engine tuning constants, loadable from JSON
use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::recipes::MotionRule;

/// Per-frame animation constants
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Radians per second about the vertical axis
    pub spin_rate: f32,
    /// Angular frequency of the pulse, radians per second
    pub pulse_frequency: f32,
    /// Peak extra scale at the top of a beat
    pub pulse_amplitude: f32,
    /// Fraction of the remaining distance to full size covered each tick
    pub easing_factor: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            spin_rate: 0.2,
            pulse_frequency: 5.0,
            pulse_amplitude: 0.1,
            easing_factor: 0.1,
        }
    }
}

/// Falling particle stream next to flow structures
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FountainConfig {
    pub particle_count: usize,
    /// Half width of the spawn box on X and Z
    pub spawn_half_extent: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    /// Particles falling below this height wrap to `upper_bound`
    pub lower_bound: f32,
    pub upper_bound: f32,
    pub point_size: f32,
    pub opacity: f32,
}

impl Default for FountainConfig {
    fn default() -> Self {
        Self {
            particle_count: 200,
            spawn_half_extent: 2.0,
            min_speed: 0.01,
            max_speed: 0.03,
            lower_bound: -2.0,
            upper_bound: 2.0,
            point_size: 0.05,
            opacity: 0.6,
        }
    }
}

/// Orbiting particle cloud around full-body figures
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HaloConfig {
    pub particle_count: usize,
    pub radius: f32,
    pub height: f32,
    /// Radians per tick; positive values orbit clockwise seen from above
    pub angular_speed: f32,
    pub point_size: f32,
    pub opacity: f32,
}

impl Default for HaloConfig {
    fn default() -> Self {
        Self {
            particle_count: 40,
            radius: 0.6,
            height: 1.8,
            angular_speed: 0.002,
            point_size: 0.04,
            opacity: 0.6,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub animation: AnimationConfig,
    pub fountain: FountainConfig,
    pub halo: HaloConfig,
    pub motion_rule: MotionRule,
}

impl EngineConfig {
    /// Parses a JSON document; missing fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("Invalid engine config JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config = Self::from_json_str(&text)
            .with_context(|| format!("Failed to load config file: {:?}", path))?;
        log::info!("Loaded engine config from {:?}", path);
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let anim = &self.animation;
        ensure!(
            anim.easing_factor > 0.0 && anim.easing_factor <= 1.0,
            "easing_factor must be in (0, 1], got {}",
            anim.easing_factor
        );
        ensure!(anim.pulse_amplitude >= 0.0, "pulse_amplitude must not be negative");

        let fountain = &self.fountain;
        ensure!(
            fountain.lower_bound < fountain.upper_bound,
            "fountain lower_bound ({}) must be below upper_bound ({})",
            fountain.lower_bound,
            fountain.upper_bound
        );
        ensure!(
            0.0 <= fountain.min_speed && fountain.min_speed <= fountain.max_speed,
            "fountain speeds must satisfy 0 <= min_speed <= max_speed"
        );
        ensure!(fountain.spawn_half_extent >= 0.0, "spawn_half_extent must not be negative");
        ensure!(
            (fountain.spawn_half_extent * 2.0).is_finite(),
            "spawn_half_extent ({}) is too large",
            fountain.spawn_half_extent
        );
        ensure!(
            (fountain.upper_bound - fountain.lower_bound).is_finite(),
            "fountain bounds span too wide a range"
        );
        ensure!(
            (fountain.max_speed - fountain.min_speed).is_finite(),
            "fountain speeds span too wide a range"
        );

        let halo = &self.halo;
        ensure!(halo.radius >= 0.0 && halo.height >= 0.0, "halo radius and height must not be negative");
        ensure!(
            (halo.radius * 2.0).is_finite() && halo.height.is_finite(),
            "halo radius ({}) or height ({}) is too large",
            halo.radius,
            halo.height
        );

        Ok(())
    }
}
