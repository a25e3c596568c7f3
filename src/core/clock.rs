use std::time::Instant;

#[derive(Debug)]
enum Source {
    Wall { started: Instant, last_tick: Instant },
    Fixed { step: f32 },
}

/// Frame clock feeding the composer its elapsed time.
/// Either follows the wall clock or steps a fixed amount per frame.
#[derive(Debug)]
pub struct Clock {
    source: Source,
    elapsed: f32,
    frames: u64,
}

impl Clock {
    /// Wall clock starting now
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            source: Source::Wall {
                started: now,
                last_tick: now,
            },
            elapsed: 0.0,
            frames: 0,
        }
    }

    /// Deterministic clock advancing `1 / fps` seconds per tick
    pub fn fixed(fps: f32) -> Self {
        Self {
            source: Source::Fixed { step: 1.0 / fps },
            elapsed: 0.0,
            frames: 0,
        }
    }

    /// Advances one frame and returns the delta in seconds
    pub fn tick(&mut self) -> f32 {
        let delta = match &mut self.source {
            Source::Wall { started, last_tick } => {
                let now = Instant::now();
                let delta = now.duration_since(*last_tick).as_secs_f32();
                *last_tick = now;
                self.elapsed = now.duration_since(*started).as_secs_f32();
                delta
            }
            Source::Fixed { step } => {
                self.elapsed = (self.frames + 1) as f32 * *step;
                *step
            }
        };
        self.frames += 1;
        delta
    }

    /// Seconds since the clock started, as of the last tick
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Restarts from zero
    pub fn reset(&mut self) {
        if let Source::Wall { started, last_tick } = &mut self.source {
            let now = Instant::now();
            *started = now;
            *last_tick = now;
        }
        self.elapsed = 0.0;
        self.frames = 0;
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
