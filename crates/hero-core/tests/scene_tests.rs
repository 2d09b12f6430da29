// Host-side tests for scene assembly, presets and hover picking.

use glam::{Vec2, Vec3};
use hero_core::picking::{ray_sphere, ray_triangle};
use hero_core::*;

#[test]
fn preset_names_round_trip() {
    assert_eq!("hero".parse::<ScenePreset>(), Ok(ScenePreset::Hero));
    assert_eq!(" PARTICLES ".parse::<ScenePreset>(), Ok(ScenePreset::Particles));
    assert_eq!("".parse::<ScenePreset>(), Ok(ScenePreset::Hero));
    assert_eq!(
        "cube".parse::<ScenePreset>(),
        Err(SceneError::UnknownPreset("cube".into()))
    );
    assert_eq!(ScenePreset::Particles.to_string(), "particles");
}

#[test]
fn hero_preset_contents() {
    let scene = Scene::new(&SceneConfig::preset(ScenePreset::Hero)).unwrap();
    let hero = scene.hero().expect("hero mesh");
    assert_eq!(hero.geometry().vertex_count(), 6633);
    assert_eq!(scene.sprite_capacity(), STAR_COUNT + RING_COUNT * RING_DOTS + ORBIT_COUNT);
    assert_eq!(scene.camera().eye, Vec3::new(0.0, 0.0, CAMERA_Z));
}

#[test]
fn particles_preset_has_no_mesh() {
    let mut scene = Scene::new(&SceneConfig::preset(ScenePreset::Particles)).unwrap();
    assert!(scene.hero().is_none());
    assert_eq!(scene.sprite_capacity(), FIELD_COUNT);
    scene.advance(FrameSample::new(0.5, Some(Vec2::ZERO), 0.0));
    assert_eq!(scene.sprites().len(), FIELD_COUNT);
    assert!(!scene.last_inputs().hovered);
}

#[test]
fn validation_rejects_broken_configs() {
    let mut cfg = SceneConfig::default();
    cfg.camera.fov_deg = 0.0;
    assert_eq!(cfg.validate(), Err(SceneError::FieldOfView(0.0)));
    assert!(Scene::new(&cfg).is_err());

    let mut cfg = SceneConfig::default();
    if let Some(r) = cfg.rings.as_mut() {
        r.count = 0;
    }
    assert_eq!(cfg.validate(), Err(SceneError::EmptyGroup { what: "rings" }));

    let mut cfg = SceneConfig::preset(ScenePreset::Particles);
    if let Some(f) = cfg.field.as_mut() {
        f.radius = -1.0;
    }
    assert!(matches!(cfg.validate(), Err(SceneError::RadiusRange { what: "field", .. })));

    let mut cfg = SceneConfig::default();
    if let Some(h) = cfg.hero.as_mut() {
        h.shape = geometry::MeshShape::Icosphere {
            radius: 1.0,
            detail: 9,
        };
    }
    assert!(matches!(Scene::new(&cfg), Err(SceneError::Geometry(_))));
}

#[test]
fn sprite_buffer_is_filled_to_capacity_every_frame() {
    let mut scene = Scene::new(&SceneConfig::default()).unwrap();
    let cap = scene.sprite_capacity();
    for i in 0..5 {
        scene.advance(FrameSample::new(i as f32 * 0.016, None, 0.0));
        assert_eq!(scene.sprites().len(), cap);
    }
}

#[test]
fn center_ray_hits_and_corner_ray_misses() {
    let mut cam = Camera::looking_at_origin(CAMERA_Z, HERO_FOV_DEG, CAMERA_ZNEAR, CAMERA_ZFAR);
    cam.set_aspect(1, 1);
    let (ro, rd) = cam.ray_from_ndc(Vec2::ZERO);
    assert_eq!(ro, cam.eye);
    assert!((rd - Vec3::NEG_Z).length() < 1e-4);
    let t = ray_sphere(ro, rd, Vec3::ZERO, 1.0).unwrap();
    assert!((t - (CAMERA_Z - 1.0)).abs() < 1e-3);

    let (ro, rd) = cam.ray_from_ndc(Vec2::new(1.0, 1.0));
    assert!(ray_sphere(ro, rd, Vec3::ZERO, 1.0).is_none());
}

#[test]
fn ray_sphere_ignores_spheres_behind_the_origin() {
    assert!(ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, -5.0), 1.0).is_none());
    assert!(ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(1.0, 0.0, 5.0), 1.0).is_some());
}

/// NDC of the knot's centerline between the first two tube rings, under the
/// identity pose the mesh holds after a pointer-free frame at t = 0.
fn tube_ndc(scene: &Scene) -> Vec2 {
    let hero = scene.hero().unwrap();
    let radial = (KNOT_RADIAL_SEGMENTS + 1) as usize;
    let positions = &hero.geometry().positions;
    let center = positions[..2 * radial]
        .iter()
        .map(|p| Vec3::from_array(*p))
        .sum::<Vec3>()
        / (2 * radial) as f32;
    let world = hero.transform().model_matrix().transform_point3(center);
    scene.camera().view_proj().project_point3(world).truncate()
}

#[test]
fn pointer_over_tube_sets_hover_and_leaving_clears_it() {
    let mut scene = Scene::new(&SceneConfig::default()).unwrap();
    scene.set_viewport_size(800, 800);
    scene.advance(FrameSample::new(0.0, None, 0.0));
    assert_eq!(*scene.hero().unwrap().transform(), MeshTransform::default());
    let on_tube = tube_ndc(&scene);

    scene.advance(FrameSample::new(0.0, Some(on_tube), 0.0));
    assert!(scene.hero().unwrap().hover().is_hovered());
    assert!(scene.last_inputs().hovered);

    scene.advance(FrameSample::new(0.0, Some(Vec2::new(0.95, 0.95)), 0.0));
    assert!(!scene.hero().unwrap().hover().is_hovered());

    scene.advance(FrameSample::new(0.0, Some(on_tube), 0.0));
    scene.advance(FrameSample::new(0.0, None, 0.0));
    assert!(!scene.hero().unwrap().hover().is_hovered());
}

#[test]
fn pointer_in_the_knot_core_stays_idle() {
    let mut scene = Scene::new(&SceneConfig::default()).unwrap();
    scene.set_viewport_size(800, 800);
    for i in 0..3 {
        scene.advance(FrameSample::new(i as f32 / 60.0, Some(Vec2::ZERO), 0.0));
        let hero = scene.hero().unwrap();
        assert_eq!(hero.hover(), HoverState::Idle);
        assert!(!scene.last_inputs().hovered);
        assert_eq!(hero.material().hover_blend, 0.0);
    }
    // The core is inside the bounding sphere, so only the triangle pass rejects it.
    let hero = scene.hero().unwrap();
    let (ro, rd) = scene.camera().ray_from_ndc(Vec2::ZERO);
    assert!(ray_sphere(ro, rd, Vec3::ZERO, hero.geometry().bounding_radius()).is_some());
    assert!(!hero.hit_test(scene.camera(), Vec2::ZERO));
}

#[test]
fn ray_triangle_hits_inside_and_misses_outside() {
    let (a, b, c) = (Vec3::ZERO, Vec3::X, Vec3::Y);
    let t = ray_triangle(Vec3::new(0.25, 0.25, 2.0), Vec3::NEG_Z, a, b, c).unwrap();
    assert!((t - 2.0).abs() < 1e-6);
    // Back face counts too.
    assert!(ray_triangle(Vec3::new(0.25, 0.25, -2.0), Vec3::Z, a, b, c).is_some());
    assert!(ray_triangle(Vec3::new(0.75, 0.75, 2.0), Vec3::NEG_Z, a, b, c).is_none());
    assert!(ray_triangle(Vec3::new(0.25, 0.25, 2.0), Vec3::Z, a, b, c).is_none());
    assert!(ray_triangle(Vec3::new(0.25, 0.25, 2.0), Vec3::X, a, b, c).is_none());
}

#[test]
fn mesh_ray_hit_returns_nearest_surface() {
    let sphere = geometry::icosphere(1.0, 2).unwrap();
    let t = sphere.ray_hit(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z).unwrap();
    assert!(t >= 4.0 - 1e-4 && t < 4.1);
    assert!(sphere.ray_hit(Vec3::new(2.0, 0.0, 5.0), Vec3::NEG_Z).is_none());
}

#[test]
fn sustained_hover_grows_the_mesh_in_scene() {
    let mut cfg = SceneConfig::default();
    if let Some(h) = cfg.hero.as_mut() {
        h.shape = geometry::MeshShape::Icosphere {
            radius: 1.0,
            detail: 2,
        };
    }
    let mut scene = Scene::new(&cfg).unwrap();
    scene.set_viewport_size(800, 800);
    for i in 0..120 {
        scene.advance(FrameSample::new(i as f32 / 60.0, Some(Vec2::ZERO), 0.0));
    }
    let hero = scene.hero().unwrap();
    assert!(hero.hover().is_hovered());
    let t = hero.transform();
    assert!(t.scale > BASE_SCALE * 1.1);
    assert!(t.scale <= HOVER_SCALE * (1.0 + BREATHING_AMPLITUDE) + 1e-5);
    assert!(hero.material().hover_blend > 0.99);
}

#[test]
fn scene_scroll_recedes_mesh() {
    let mut scene = Scene::new(&SceneConfig::default()).unwrap();
    scene.advance(FrameSample::new(0.0, None, 1.0));
    let t = scene.hero().unwrap().transform();
    assert_eq!(t.position, Vec3::new(0.0, 0.0, -DEPTH_PER_SCROLL));
    assert!((scene.hero().unwrap().material().intensity - SCROLL_FLOOR).abs() < 1e-5);
}

#[test]
fn mesh_uniforms_pack_layout() {
    use hero_core::material::{LightRig, MaterialUniforms, MeshUniforms};
    assert_eq!(std::mem::size_of::<MeshUniforms>() % 16, 0);

    let cam = Camera::looking_at_origin(CAMERA_Z, HERO_FOV_DEG, CAMERA_ZNEAR, CAMERA_ZFAR);
    let material = MaterialUniforms {
        time: 2.5,
        hover_blend: 0.5,
        ..MaterialUniforms::default()
    };
    let u = MeshUniforms::pack(&cam, &MeshTransform::default(), &material, &LightRig::default());
    assert_eq!(u.params[0], 2.5);
    assert_eq!(u.params[1], 0.5);
    assert_eq!(u.eye_ambient, [0.0, 0.0, CAMERA_Z, AMBIENT_INTENSITY]);
    assert!((Vec3::from_slice(&u.light_dir[..3]).length() - 1.0).abs() < 1e-5);
}
