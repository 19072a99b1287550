//! Decorative particle-network backdrop: drifting points linked by
//! distance-faded lines. Purely cosmetic and fully deterministic for a given
//! seed, so rendered frames are reproducible.

use kurbo::Point;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// One particle per this many square pixels.
const DENSITY_AREA: f64 = 15_000.0;
/// Particles closer than this are linked.
const LINK_DISTANCE: f64 = 100.0;
const MAX_SPEED: f64 = 0.25;

#[derive(Clone, Copy, Debug)]
struct Particle {
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
}

#[derive(Clone, Debug)]
pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleLink {
    pub from: Point,
    pub to: Point,
    pub opacity: f64,
}

impl ParticleField {
    pub fn new(width: u32, height: u32, seed: u64) -> Self {
        let width = f64::from(width);
        let height = f64::from(height);
        let count = ((width * height) / DENSITY_AREA) as usize;
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..count)
            .map(|_| Particle {
                x: rng.random_range(0.0..width),
                y: rng.random_range(0.0..height),
                vx: rng.random_range(-MAX_SPEED..MAX_SPEED),
                vy: rng.random_range(-MAX_SPEED..MAX_SPEED),
            })
            .collect();
        Self {
            width,
            height,
            particles,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Advance every particle one step, bouncing off the walls.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            if p.x < 0.0 || p.x > self.width {
                p.vx = -p.vx;
            }
            if p.y < 0.0 || p.y > self.height {
                p.vy = -p.vy;
            }
        }
    }

    pub fn positions(&self) -> impl Iterator<Item = Point> + '_ {
        self.particles.iter().map(|p| Point::new(p.x, p.y))
    }

    /// Links between all pairs within `LINK_DISTANCE`, opacity fading to zero
    /// at the cutoff.
    pub fn links(&self) -> Vec<ParticleLink> {
        let mut links = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let dx = a.x - b.x;
                let dy = a.y - b.y;
                let dist = (dx * dx + dy * dy).sqrt();
                if dist < LINK_DISTANCE {
                    links.push(ParticleLink {
                        from: Point::new(a.x, a.y),
                        to: Point::new(b.x, b.y),
                        opacity: 0.15 * (1.0 - dist / LINK_DISTANCE),
                    });
                }
            }
        }
        links
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particle_count_scales_with_area() {
        let field = ParticleField::new(1280, 720, 7);
        assert_eq!(field.len(), (1280.0 * 720.0 / DENSITY_AREA) as usize);
        assert!(!field.is_empty());
    }

    #[test]
    fn same_seed_same_field() {
        let mut a = ParticleField::new(640, 360, 42);
        let mut b = ParticleField::new(640, 360, 42);
        for _ in 0..100 {
            a.step();
            b.step();
        }
        let pa: Vec<Point> = a.positions().collect();
        let pb: Vec<Point> = b.positions().collect();
        assert_eq!(pa, pb);
    }

    #[test]
    fn particles_stay_near_bounds() {
        let mut field = ParticleField::new(200, 200, 3);
        for _ in 0..5_000 {
            field.step();
        }
        for p in field.positions() {
            // One step of overshoot is possible before the bounce applies.
            assert!((-MAX_SPEED..=200.0 + MAX_SPEED).contains(&p.x));
            assert!((-MAX_SPEED..=200.0 + MAX_SPEED).contains(&p.y));
        }
    }

    #[test]
    fn link_opacity_fades_with_distance() {
        let mut field = ParticleField::new(300, 300, 11);
        field.step();
        for link in field.links() {
            assert!(link.opacity > 0.0);
            assert!(link.opacity <= 0.15);
        }
    }
}
