// Host-side tests for the hero mesh animator.

use glam::{Vec2, Vec3};
use hero_core::smoothing::steps_to_within;
use hero_core::*;

fn viewport() -> Viewport {
    Viewport {
        width: 8.0,
        height: 4.0,
    }
}

fn inputs(time: f32, pointer: Vec2, scroll: f32, hovered: bool) -> FrameInputs {
    FrameInputs {
        time,
        pointer,
        scroll,
        hovered,
    }
}

fn steady_motion() -> HeroMotion {
    HeroMotion {
        breathing_amplitude: 0.0,
        ..HeroMotion::default()
    }
}

#[test]
fn rotation_is_a_pure_function_of_time_and_scroll() {
    let m = HeroMotion::default();
    assert_eq!(m.rotation_at(3.7, 0.4), m.rotation_at(3.7, 0.4));

    // Hover history and frame count do not leak into rotation.
    let mut a = HeroAnimator::new(m);
    let mut b = HeroAnimator::new(m);
    for i in 0..50 {
        a.update(&inputs(i as f32 * 0.1, Vec2::ONE, 0.2, i % 3 == 0), viewport());
    }
    b.update(&inputs(4.9, Vec2::ZERO, 0.2, false), viewport());
    a.update(&inputs(4.9, Vec2::ZERO, 0.2, false), viewport());
    assert_eq!(a.transform().rotation, b.transform().rotation);
    assert_eq!(a.transform().rotation, m.rotation_at(4.9, 0.2));
}

#[test]
fn scroll_injects_rotation_deterministically() {
    let m = HeroMotion::default();
    let delta = m.rotation_at(2.0, 1.0) - m.rotation_at(2.0, 0.0);
    assert!((delta - m.scroll_rotation).length() < 1e-6);
}

#[test]
fn follow_offset_is_zero_when_not_hovered() {
    let m = HeroMotion::default();
    for p in [Vec2::ZERO, Vec2::ONE, Vec2::new(-0.9, 0.3)] {
        assert_eq!(m.follow_target(p, viewport(), false), Vec2::ZERO);
    }

    let mut a = HeroAnimator::new(m);
    for i in 0..120 {
        a.update(&inputs(i as f32 / 60.0, Vec2::new(0.9, -0.7), 0.0, false), viewport());
        assert_eq!(a.follow_offset(), Vec2::ZERO);
        assert_eq!(a.transform().position.truncate(), Vec2::ZERO);
    }
}

#[test]
fn follow_eases_back_to_origin_after_hover_ends() {
    let mut a = HeroAnimator::new(HeroMotion::default());
    for i in 0..100 {
        a.update(&inputs(i as f32 / 60.0, Vec2::ONE, 0.0, true), viewport());
    }
    let peak = a.follow_offset().length();
    assert!(peak > 0.0);
    let mut prev = peak;
    for i in 100..600 {
        a.update(&inputs(i as f32 / 60.0, Vec2::ONE, 0.0, false), viewport());
        let now = a.follow_offset().length();
        assert!(now <= prev);
        prev = now;
    }
    assert!(prev < peak * 0.01);
}

#[test]
fn initial_frame_sits_at_rest() {
    let mut a = HeroAnimator::new(HeroMotion::default());
    let t = *a.update(&inputs(0.0, Vec2::ZERO, 0.0, false), viewport());
    assert_eq!(t.position, Vec3::ZERO);
    assert_eq!(t.scale, BASE_SCALE);
    assert_eq!(t.rotation, Vec3::ZERO);
    assert_eq!(a.material().intensity, 1.0);
    assert_eq!(a.material().hover_blend, 0.0);
    assert_eq!(a.material().distort, DISTORT_IDLE);
}

#[test]
fn full_scroll_recedes_and_hits_the_floor() {
    let mut a = HeroAnimator::new(steady_motion());
    let t = *a.update(&inputs(0.0, Vec2::ZERO, 1.0, false), viewport());
    assert_eq!(t.position.z, -DEPTH_PER_SCROLL);
    assert!((t.scale - BASE_SCALE * SCROLL_FLOOR).abs() < 1e-5);
    assert!((a.material().intensity - SCROLL_FLOOR).abs() < 1e-5);
    // Scroll rotation term is at its full value.
    assert!((t.rotation - SCROLL_ROTATION).length() < 1e-6);
}

#[test]
fn scroll_shrink_does_not_compound_across_frames() {
    let mut a = HeroAnimator::new(steady_motion());
    let mut last = 0.0;
    for i in 0..300 {
        last = a.update(&inputs(i as f32 / 60.0, Vec2::ZERO, 0.5, false), viewport()).scale;
    }
    let expected = BASE_SCALE * hero_core::scroll::scroll_multiplier(0.5);
    assert!((last - expected).abs() < 1e-5);
    assert_eq!(a.base_scale(), BASE_SCALE);
}

#[test]
fn sustained_hover_converges_scale_and_follow() {
    let m = steady_motion();
    let mut a = HeroAnimator::new(m);
    let pointer = Vec2::new(0.5, -0.25);
    let scale_steps = steps_to_within(m.scale_alpha, 0.01).unwrap();

    for i in 0..scale_steps {
        a.update(&inputs(i as f32 / 60.0, pointer, 0.0, true), viewport());
    }
    let gap = (m.hover_scale - m.base_scale).abs();
    assert!((a.base_scale() - m.hover_scale).abs() <= gap * 0.01 + 1e-6);
    assert!(a.transform().scale <= m.hover_scale);

    for i in scale_steps..600 {
        a.update(&inputs(i as f32 / 60.0, pointer, 0.0, true), viewport());
    }
    let target = m.follow_target(pointer, viewport(), true);
    assert_eq!(target, Vec2::new(0.5 * 8.0 / 8.0, -0.25 * 4.0 / 8.0));
    assert!((a.follow_offset() - target).length() < 1e-3);
    assert!((a.material().hover_blend - 1.0).abs() < 1e-3);
    assert!((a.material().distort - DISTORT_HOVER).abs() < 1e-3);
}

#[test]
fn breathing_stays_within_amplitude() {
    let m = HeroMotion::default();
    for i in 0..500 {
        let t = i as f32 * 0.05;
        let s = m.target_scale(t, false);
        assert!((s - m.base_scale).abs() <= m.base_scale * m.breathing_amplitude + 1e-6);
        let h = m.target_scale(t, true);
        assert!((h - m.hover_scale).abs() <= m.hover_scale * m.breathing_amplitude + 1e-6);
    }
}

#[test]
fn hover_state_is_level_sampled() {
    let mut h = HoverState::default();
    assert!(!h.is_hovered());
    assert!(h.sample(true));
    assert!(!h.sample(true));
    assert!(h.is_hovered());
    assert!(h.sample(false));
    assert_eq!(h, HoverState::Idle);
}

#[test]
fn frame_sample_sanitizes_inputs() {
    let s = FrameSample::new(f32::NAN, Some(Vec2::new(f32::NAN, 0.0)), 4.0);
    assert_eq!(s.time, 0.0);
    assert!(s.pointer.is_none());
    assert_eq!(s.scroll, 1.0);
    let i = FrameInputs::from_sample(&s, true);
    assert_eq!(i.pointer, Vec2::ZERO);
    assert!(i.hovered);
}
