// Host-side tests for the particle field: sizing, motion and link detection.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod particles {
        include!("../src/core/particles.rs");
    }
}

use crate::core::particles::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn still(x: f32, y: f32) -> Particle {
    moving(x, y, 0.0, 0.0)
}

fn moving(x: f32, y: f32, vx: f32, vy: f32) -> Particle {
    Particle {
        position: Vec2::new(x, y),
        velocity: Vec2::new(vx, vy),
        size: 2.0,
        color: Rgba {
            r: 160.0,
            g: 120.0,
            b: 220.0,
            a: 0.5,
        },
        opacity: 0.4,
    }
}

#[derive(Debug, PartialEq)]
enum Op {
    Resize(f32, f32),
    Clear(f32, f32),
    Circle(Vec2, f32),
    BeginLinks(Rgba, f32, f32),
    Line(Vec2, Vec2),
}

#[derive(Default)]
struct Recorder {
    ops: Vec<Op>,
}

impl FieldCanvas for Recorder {
    fn resize(&mut self, width: f32, height: f32) {
        self.ops.push(Op::Resize(width, height));
    }
    fn clear(&mut self, width: f32, height: f32) {
        self.ops.push(Op::Clear(width, height));
    }
    fn fill_circle(&mut self, center: Vec2, radius: f32, _color: Rgba, _alpha: f32) {
        self.ops.push(Op::Circle(center, radius));
    }
    fn begin_links(&mut self, color: Rgba, alpha: f32, width: f32) {
        self.ops.push(Op::BeginLinks(color, alpha, width));
    }
    fn stroke_line(&mut self, from: Vec2, to: Vec2) {
        self.ops.push(Op::Line(from, to));
    }
}

#[test]
fn count_follows_area_and_cap() {
    let cfg = FieldConfig::default();
    assert_eq!(particle_count(800.0, 600.0, &cfg), 32);
    assert_eq!(particle_count(300.0, 300.0, &cfg), 6);
    assert_eq!(particle_count(100.0, 100.0, &cfg), 0);
    assert_eq!(particle_count(1920.0, 1080.0, &cfg), 100);
}

#[test]
fn count_is_zero_for_degenerate_surfaces() {
    let cfg = FieldConfig::default();
    assert_eq!(particle_count(0.0, 600.0, &cfg), 0);
    assert_eq!(particle_count(800.0, -1.0, &cfg), 0);
    assert_eq!(particle_count(f32::NAN, 600.0, &cfg), 0);
    assert_eq!(particle_count(f32::INFINITY, 600.0, &cfg), 0);
}

#[test]
fn custom_cap_is_respected() {
    let cfg = FieldConfig {
        max_particles: 10,
        ..FieldConfig::default()
    };
    assert_eq!(particle_count(800.0, 600.0, &cfg), 10);
}

#[test]
fn seeded_particles_fall_inside_their_ranges() {
    let cfg = FieldConfig::default();
    let mut rng = StdRng::seed_from_u64(7);
    let field = ParticleField::seed(800.0, 600.0, &cfg, &mut rng);
    assert_eq!(field.len(), 32);
    assert_eq!(field.size(), (800.0, 600.0));
    for p in field.particles() {
        assert!((0.0..800.0).contains(&p.position.x));
        assert!((0.0..600.0).contains(&p.position.y));
        assert!(p.velocity.x.abs() <= cfg.speed_max);
        assert!(p.velocity.y.abs() <= cfg.speed_max);
        assert!((cfg.size_range.0..cfg.size_range.1).contains(&p.size));
        assert!((cfg.opacity_range.0..cfg.opacity_range.1).contains(&p.opacity));
        assert!((157.0..177.0).contains(&p.color.r));
        assert!((112.0..142.0).contains(&p.color.g));
        assert!((213.0..243.0).contains(&p.color.b));
        assert!((0.3..0.8).contains(&p.color.a));
    }
}

#[test]
fn same_seed_gives_same_field() {
    let cfg = FieldConfig::default();
    let a = ParticleField::seed(640.0, 480.0, &cfg, &mut StdRng::seed_from_u64(3));
    let b = ParticleField::seed(640.0, 480.0, &cfg, &mut StdRng::seed_from_u64(3));
    assert_eq!(a.particles(), b.particles());
}

#[test]
fn empty_surface_seeds_empty_field() {
    let cfg = FieldConfig::default();
    let field = ParticleField::seed(0.0, 0.0, &cfg, &mut StdRng::seed_from_u64(1));
    assert!(field.is_empty());
    assert!(field.links(cfg.link_distance).is_empty());
}

#[test]
fn velocity_flips_once_per_edge_crossing() {
    let mut ps = vec![moving(0.05, 50.0, -0.1, 0.0)];
    advance_particles(&mut ps, 100.0, 100.0);
    assert!(ps[0].position.x < 0.0);
    assert_eq!(ps[0].velocity.x, 0.1);

    // Still outside but heading back in: no second flip.
    let mut overshoot = vec![moving(-0.5, 50.0, 0.1, 0.0)];
    advance_particles(&mut overshoot, 100.0, 100.0);
    assert_eq!(overshoot[0].velocity.x, 0.1);

    advance_particles(&mut ps, 100.0, 100.0);
    assert_eq!(ps[0].velocity.x, 0.1);
    assert!(ps[0].position.x > 0.0);
}

#[test]
fn far_edges_reflect_on_both_axes() {
    let mut ps = vec![moving(99.95, 99.95, 0.1, 0.1)];
    advance_particles(&mut ps, 100.0, 100.0);
    assert_eq!(ps[0].velocity, Vec2::new(-0.1, -0.1));
}

#[test]
fn interior_particles_keep_their_velocity() {
    let mut ps = vec![moving(50.0, 50.0, 0.1, -0.1)];
    for _ in 0..10 {
        advance_particles(&mut ps, 100.0, 100.0);
    }
    assert_eq!(ps[0].velocity, Vec2::new(0.1, -0.1));
    assert!((ps[0].position.x - 51.0).abs() < 1e-3);
    assert!((ps[0].position.y - 49.0).abs() < 1e-3);
}

#[test]
fn links_use_strict_distance_and_report_each_pair_once() {
    let ps = vec![still(0.0, 0.0), still(99.9, 0.0), still(0.0, 100.0), still(60.0, 60.0)];
    let pairs = link_pairs(&ps, 100.0);
    assert_eq!(pairs, vec![(0, 1), (0, 3), (1, 3), (2, 3)]);
    assert!(pairs.iter().all(|(i, j)| i < j));
}

#[test]
fn draw_clears_then_fills_then_links() {
    let cfg = FieldConfig::default();
    let mut field = ParticleField::seed(800.0, 600.0, &cfg, &mut StdRng::seed_from_u64(11));
    field.advance();
    let mut canvas = Recorder::default();
    field.draw(&mut canvas, &cfg);

    assert_eq!(canvas.ops[0], Op::Clear(800.0, 600.0));
    let circles = canvas.ops.iter().filter(|o| matches!(o, Op::Circle(..))).count();
    let lines = canvas.ops.iter().filter(|o| matches!(o, Op::Line(..))).count();
    assert_eq!(circles, field.len());
    assert_eq!(lines, field.links(cfg.link_distance).len());

    let begin = canvas
        .ops
        .iter()
        .position(|o| matches!(o, Op::BeginLinks(..)))
        .expect("links begin");
    assert_eq!(begin, 1 + circles);
    match &canvas.ops[begin] {
        Op::BeginLinks(color, alpha, width) => {
            assert_eq!((color.r, color.g, color.b), (157.0, 112.0, 213.0));
            assert_eq!(*alpha, cfg.link_alpha);
            assert_eq!(*width, cfg.link_width);
        }
        other => panic!("unexpected op {other:?}"),
    }
}

#[test]
fn rgba_formats_as_css() {
    let c = Rgba {
        r: 157.4,
        g: 112.6,
        b: 213.0,
        a: 0.25,
    };
    assert_eq!(c.css(), "rgba(157, 113, 213, 0.25)");
}

#[test]
fn seeded_field_flips_once_per_exit_over_many_frames() {
    let cfg = FieldConfig {
        area_per_particle: 500.0,
        speed_max: 3.0,
        ..FieldConfig::default()
    };
    let (w, h) = (200.0, 100.0);
    let mut field = ParticleField::seed(w, h, &cfg, &mut StdRng::seed_from_u64(21));
    assert_eq!(field.len(), 40);

    let (mut exits, mut flips) = (0usize, 0usize);
    for _ in 0..2_000 {
        let before = field.particles().to_vec();
        field.advance();
        for (old, new) in before.iter().zip(field.particles()) {
            let axes = [
                (old.position.x, new.position.x, old.velocity.x, new.velocity.x, w),
                (old.position.y, new.position.y, old.velocity.y, new.velocity.y, h),
            ];
            for (p0, p1, v0, v1, extent) in axes {
                let was_inside = (0.0..=extent).contains(&p0);
                let now_outside = p1 < 0.0 || p1 > extent;
                if was_inside && now_outside {
                    exits += 1;
                }
                if v0 != v1 {
                    assert_eq!(v1, -v0);
                    flips += 1;
                }
                assert!(p1 >= -v0.abs() && p1 <= extent + v0.abs());
            }
        }
    }
    assert!(exits > 0);
    assert_eq!(flips, exits);
}
