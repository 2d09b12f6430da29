// Host-side tests for the decorative sprite groups.

use glam::{Vec2, Vec3};
use hero_core::decor::*;

fn ctx(time: f32, pointer_world: Option<Vec2>) -> DecorContext {
    DecorContext {
        time,
        pointer_world,
    }
}

#[test]
fn orbit_cloud_count_and_bounds() {
    let cfg = OrbitConfig::default();
    let cloud = OrbitCloud::new(&cfg, 7);
    assert_eq!(cloud.len(), 50);
    for p in cloud.positions() {
        let r = Vec2::new(p.x, p.z).length();
        assert!(r >= cfg.radius_min - 1e-4 && r <= cfg.radius_min + cfg.radius_span + 1e-4);
        assert!(p.y.abs() <= cfg.height * 0.5);
    }
}

#[test]
fn orbit_spin_preserves_radius() {
    let mut cloud = OrbitCloud::new(&OrbitConfig::default(), 7);
    let mut out = Vec::new();
    cloud.update(&ctx(12.5, None), &mut out);
    assert_eq!(out.len(), cloud.len());
    for (s, p) in out.iter().zip(cloud.positions()) {
        let a = Vec3::from_array(s.position);
        assert!((a.length() - p.length()).abs() < 1e-4);
        assert!((a.y - p.y).abs() < 1e-5);
    }
}

#[test]
fn same_seed_same_layout() {
    let a = ParticleField::new(&FieldConfig::default(), 99);
    let b = ParticleField::new(&FieldConfig::default(), 99);
    assert_eq!(a.originals(), b.originals());
    let c = ParticleField::new(&FieldConfig::default(), 100);
    assert_ne!(a.originals(), c.originals());
}

#[test]
fn particle_field_count_and_radius_bounds() {
    let cfg = FieldConfig::default();
    let field = ParticleField::new(&cfg, 42);
    assert_eq!(field.len(), 3000);
    let (min, max) = cfg.radius_bounds();
    assert!((min - 2.0).abs() < 1e-6 && (max - 3.0).abs() < 1e-6);
    for p in field.originals() {
        let r = p.length();
        assert!(r >= min - 1e-4 && r <= max + 1e-4, "radius {r} outside [{min}, {max}]");
    }
}

#[test]
fn starfield_count_and_bounds() {
    let cfg = StarfieldConfig::default();
    let stars = Starfield::new(&cfg, 3);
    assert_eq!(stars.len(), 400);
    for p in stars.positions() {
        let r = p.length();
        assert!(r >= cfg.radius_min - 1e-3 && r <= cfg.radius_max + 1e-3);
    }
}

#[test]
fn rings_alternate_direction_by_parity() {
    let cfg = RingConfig::default();
    let set = RingSet::new(&cfg);
    assert_eq!(set.rings().len(), cfg.count);
    assert_eq!(set.len(), cfg.count * cfg.dots);
    for (i, ring) in set.rings().iter().enumerate() {
        if i % 2 == 0 {
            assert!(ring.rate > 0.0);
        } else {
            assert!(ring.rate < 0.0);
        }
        let expected = cfg.base_radius + cfg.spacing * i as f32;
        assert!((ring.radius - expected).abs() < 1e-6);
        assert_eq!(ring.angle_at(0.0), 0.0);
    }
}

#[test]
fn ring_dots_stay_on_their_ring() {
    let cfg = RingConfig::default();
    let mut set = RingSet::new(&cfg);
    let mut out = Vec::new();
    set.update(&ctx(3.3, None), &mut out);
    assert_eq!(out.len(), set.len());
    for (i, ring) in set.rings().iter().enumerate() {
        for s in &out[i * cfg.dots..(i + 1) * cfg.dots] {
            let r = Vec3::from_array(s.position).length();
            assert!((r - ring.radius).abs() < 1e-4);
        }
    }
}

#[test]
fn repulsion_at_zero_distance_is_finite_and_maximal() {
    let radius = 1.5;
    let strength = 0.5;
    let max = strength * radius * 0.5;

    let on_pointer = repel_offset(Vec3::new(1.0, 0.5, 0.2), Vec2::new(1.0, 0.5), radius, strength);
    assert!(on_pointer.is_finite());
    assert!((on_pointer.length() - max).abs() < 1e-6);
    // Pushed outward along the particle's own direction.
    assert!(on_pointer.x > 0.0 && on_pointer.y > 0.0);

    let at_origin = repel_offset(Vec3::ZERO, Vec2::ZERO, radius, strength);
    assert!(at_origin.is_finite());
    assert!((at_origin.length() - max).abs() < 1e-6);
}

#[test]
fn repulsion_fades_with_distance() {
    let near = repel_offset(Vec3::new(0.3, 0.0, 0.0), Vec2::ZERO, 1.5, 0.5);
    let far = repel_offset(Vec3::new(1.2, 0.0, 0.0), Vec2::ZERO, 1.5, 0.5);
    assert!(near.length() > far.length());
    assert!(near.x > 0.0 && far.x > 0.0);
    assert_eq!(repel_offset(Vec3::new(2.0, 0.0, 0.0), Vec2::ZERO, 1.5, 0.5), Vec2::ZERO);
    assert_eq!(repel_offset(Vec3::X, Vec2::ZERO, 0.0, 0.5), Vec2::ZERO);
}

#[test]
fn field_without_pointer_only_shimmers() {
    let cfg = FieldConfig::default();
    let mut field = ParticleField::new(&cfg, 5);
    let mut out = Vec::new();
    field.update(&ctx(1.0, None), &mut out);
    assert_eq!(out.len(), field.len());
    for (d, o) in field.displaced().iter().zip(field.originals()) {
        assert!((*d - *o).abs().max_element() <= cfg.wave_amplitude + 1e-6);
    }
}

#[test]
fn field_pushes_particles_away_from_pointer() {
    let cfg = FieldConfig {
        wave_amplitude: 0.0,
        ..FieldConfig::default()
    };
    let mut field = ParticleField::new(&cfg, 5);
    let pointer = Vec2::new(0.0, 2.0);
    let mut out = Vec::new();
    field.update(&ctx(0.0, Some(pointer)), &mut out);
    for (d, o) in field.displaced().iter().zip(field.originals()) {
        let before = (o.truncate() - pointer).length();
        let after = (d.truncate() - pointer).length();
        assert!(after >= before - 1e-5);
        assert_eq!(d.z, o.z);
    }
}

#[test]
fn sprite_instance_layout_is_32_bytes() {
    assert_eq!(std::mem::size_of::<SpriteInstance>(), 32);
}
