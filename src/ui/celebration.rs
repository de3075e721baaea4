use rand::Rng;
use std::f32::consts::TAU;

/// One confetti particle. Coordinates and motion are abstract: `x` is a
/// 0..1 horizontal fraction, leaving actual projection to the host surface.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub x: f32,
    pub angle: f32,
    pub velocity: f32,
    pub duration_ms: u64,
    pub color: u8,
}

pub const COLOR_COUNT: u8 = 3;
pub const DEFAULT_PARTICLES: usize = 50;

#[derive(Debug, Clone)]
pub struct Burst {
    particles: Vec<Particle>,
}

impl Burst {
    pub fn generate(count: usize) -> Self {
        let mut rng = rand::thread_rng();
        let particles = (0..count)
            .map(|_| Particle {
                x: rng.r#gen::<f32>(),
                angle: rng.r#gen::<f32>() * TAU,
                velocity: 2.0 + rng.r#gen::<f32>() * 4.0,
                duration_ms: rng.gen_range(1000..2000),
                color: rng.gen_range(0..COLOR_COUNT),
            })
            .collect();
        Self { particles }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}
