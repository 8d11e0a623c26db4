use crate::constants::*;
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub fn css(&self) -> String {
        format!(
            "rgba({:.0}, {:.0}, {:.0}, {:.2})",
            self.r, self.g, self.b, self.a
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub color: Rgba,
    pub opacity: f32,
}

/// Seeding and rendering knobs for the particle field.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub area_per_particle: f32,
    pub max_particles: usize,
    pub size_range: (f32, f32),
    pub speed_max: f32,
    pub opacity_range: (f32, f32),
    pub link_distance: f32,
    pub link_alpha: f32,
    pub link_width: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            area_per_particle: AREA_PER_PARTICLE,
            max_particles: MAX_PARTICLES,
            size_range: (PARTICLE_SIZE_MIN, PARTICLE_SIZE_MAX),
            speed_max: PARTICLE_SPEED_MAX,
            opacity_range: (PARTICLE_OPACITY_MIN, PARTICLE_OPACITY_MAX),
            link_distance: LINK_DISTANCE,
            link_alpha: LINK_ALPHA,
            link_width: LINK_WIDTH,
        }
    }
}

/// Drawing surface the field renders onto.
pub trait FieldCanvas {
    fn resize(&mut self, width: f32, height: f32);
    fn clear(&mut self, width: f32, height: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba, alpha: f32);
    fn begin_links(&mut self, color: Rgba, alpha: f32, width: f32);
    fn stroke_line(&mut self, from: Vec2, to: Vec2);
}

/// `min(floor(width * height / area_per_particle), max_particles)`; zero for
/// empty or non-finite surfaces.
pub fn particle_count(width: f32, height: f32, config: &FieldConfig) -> usize {
    if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
        return 0;
    }
    if config.area_per_particle <= 0.0 {
        return config.max_particles;
    }
    let area = width as f64 * height as f64;
    let n = (area / config.area_per_particle as f64).floor();
    (n as usize).min(config.max_particles)
}

/// Advance every particle by its velocity and reflect off the surface edges.
///
/// A velocity component only flips while the particle is outside on that
/// axis and still heading outward, so an overshoot of one frame's travel
/// produces exactly one flip per crossing.
pub fn advance_particles(particles: &mut [Particle], width: f32, height: f32) {
    for p in particles.iter_mut() {
        p.position += p.velocity;
        if (p.position.x < 0.0 && p.velocity.x < 0.0)
            || (p.position.x > width && p.velocity.x > 0.0)
        {
            p.velocity.x = -p.velocity.x;
        }
        if (p.position.y < 0.0 && p.velocity.y < 0.0)
            || (p.position.y > height && p.velocity.y > 0.0)
        {
            p.velocity.y = -p.velocity.y;
        }
    }
}

/// Unordered index pairs `(i, j)`, `i < j`, closer than `max_distance`.
///
/// Quadratic in the particle count; fine under the particle cap.
pub fn link_pairs(particles: &[Particle], max_distance: f32) -> Vec<(usize, usize)> {
    let max_sq = max_distance * max_distance;
    let mut out = Vec::new();
    for i in 0..particles.len() {
        for j in (i + 1)..particles.len() {
            let d2 = particles[i].position.distance_squared(particles[j].position);
            if d2 < max_sq {
                out.push((i, j));
            }
        }
    }
    out
}

fn channel(rng: &mut impl Rng, i: usize) -> f32 {
    PALETTE_BASE_RGB[i] + rng.gen::<f32>() * PALETTE_SPREAD_RGB[i]
}

fn random_particle(width: f32, height: f32, config: &FieldConfig, rng: &mut impl Rng) -> Particle {
    let (size_lo, size_hi) = config.size_range;
    let (op_lo, op_hi) = config.opacity_range;
    let speed = config.speed_max;
    Particle {
        position: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
        velocity: Vec2::new(
            rng.gen::<f32>() * 2.0 * speed - speed,
            rng.gen::<f32>() * 2.0 * speed - speed,
        ),
        size: size_lo + rng.gen::<f32>() * (size_hi - size_lo),
        color: Rgba {
            r: channel(rng, 0),
            g: channel(rng, 1),
            b: channel(rng, 2),
            a: PALETTE_ALPHA_MIN + rng.gen::<f32>() * PALETTE_ALPHA_SPAN,
        },
        opacity: op_lo + rng.gen::<f32>() * (op_hi - op_lo),
    }
}

#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
}

impl ParticleField {
    /// Fresh field sized by surface area, with randomized particles.
    pub fn seed(width: f32, height: f32, config: &FieldConfig, rng: &mut impl Rng) -> Self {
        let n = particle_count(width, height, config);
        let particles = (0..n)
            .map(|_| random_particle(width, height, config, rng))
            .collect();
        Self {
            particles,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn advance(&mut self) {
        advance_particles(&mut self.particles, self.width, self.height);
    }

    pub fn links(&self, max_distance: f32) -> Vec<(usize, usize)> {
        link_pairs(&self.particles, max_distance)
    }

    pub fn draw(&self, canvas: &mut impl FieldCanvas, config: &FieldConfig) {
        canvas.clear(self.width, self.height);
        for p in &self.particles {
            canvas.fill_circle(p.position, p.size, p.color, p.opacity);
        }
        let base = PALETTE_BASE_RGB;
        let link_color = Rgba {
            r: base[0],
            g: base[1],
            b: base[2],
            a: config.link_alpha,
        };
        canvas.begin_links(link_color, config.link_alpha, config.link_width);
        for (i, j) in self.links(config.link_distance) {
            canvas.stroke_line(self.particles[i].position, self.particles[j].position);
        }
    }
}
