use serde::Serialize;

use crate::config::AnimationConfig;
use crate::recipes::BehaviorFlags;

/// Rotation about the vertical axis at `elapsed` seconds. Absolute, not incremental.
pub fn spin_angle(elapsed: f32, spin_rate: f32) -> f32 {
    elapsed * spin_rate
}

/// Uniform scale of a beating structure: `1 + sin(elapsed * frequency)^2 * amplitude`.
/// The squared sine keeps it at or above the resting size.
pub fn pulse_scale(elapsed: f32, frequency: f32, amplitude: f32) -> f32 {
    let beat = (elapsed * frequency).sin();
    1.0 + beat * beat * amplitude
}

/// One step of the exponential approach to full size
pub fn ease_toward_one(current: f32, easing_factor: f32) -> f32 {
    current + (1.0 - current) * easing_factor
}

/// Transform changes produced by one tick
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FrameMotion {
    pub rotation_y: Option<f32>,
    pub uniform_scale: Option<f32>,
}

/// Animation state of the current structure
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct AnimationState {
    pub spin: bool,
    pub pulse: bool,
    pub current_scale: f32,
    /// Last elapsed time passed to [`AnimationState::tick`]
    pub elapsed: f32,
    pub ticks: u64,
}

impl AnimationState {
    /// Fresh state for a newly attached structure; it enters at zero scale
    pub fn entering(flags: BehaviorFlags) -> Self {
        Self {
            spin: flags.spins,
            pulse: flags.pulses,
            current_scale: 0.0,
            elapsed: 0.0,
            ticks: 0,
        }
    }

    /// True while the entrance ease is still running
    pub fn is_entering(&self) -> bool {
        !self.pulse && self.current_scale < 1.0
    }

    pub fn tick(&mut self, elapsed: f32, config: &AnimationConfig) -> FrameMotion {
        self.elapsed = elapsed;
        self.ticks += 1;

        let mut motion = FrameMotion::default();
        if self.spin {
            motion.rotation_y = Some(spin_angle(elapsed, config.spin_rate));
        }

        if self.pulse {
            self.current_scale = pulse_scale(elapsed, config.pulse_frequency, config.pulse_amplitude);
            motion.uniform_scale = Some(self.current_scale);
        } else if self.current_scale < 1.0 {
            self.current_scale = ease_toward_one(self.current_scale, config.easing_factor);
            motion.uniform_scale = Some(self.current_scale);
        }

        motion
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::entering(BehaviorFlags::SPINNING)
    }
}
