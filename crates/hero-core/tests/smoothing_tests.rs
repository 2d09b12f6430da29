// Host-side tests for exponential smoothing.

use hero_core::smoothing::*;

#[test]
fn converges_monotonically_from_below_without_overshoot() {
    let mut s = Smoothed::new(0.0, 0.1);
    let mut prev = s.value();
    for _ in 0..200 {
        let v = s.step(1.0);
        assert!(v >= prev, "not monotone: {v} < {prev}");
        assert!(v <= 1.0, "overshoot: {v}");
        prev = v;
    }
    assert!((1.0 - prev).abs() < 1e-6);
}

#[test]
fn converges_monotonically_from_above_without_overshoot() {
    let mut s = Smoothed::new(1.2, 0.1);
    let mut prev = s.value();
    for _ in 0..200 {
        let v = s.step(1.0);
        assert!(v <= prev);
        assert!(v >= 1.0);
        prev = v;
    }
}

#[test]
fn reaches_one_percent_within_computed_steps() {
    let alpha = 0.1;
    let n = steps_to_within(alpha, 0.01).unwrap();
    assert_eq!(n, 44);

    let (start, target) = (0.0_f32, 1.0_f32);
    let mut v = start;
    for _ in 0..n {
        v = smooth_toward(v, target, alpha);
    }
    assert!((target - v).abs() <= 0.01 * (target - start).abs());

    // One step fewer is not yet enough.
    let mut w = start;
    for _ in 0..n - 1 {
        w = smooth_toward(w, target, alpha);
    }
    assert!((target - w).abs() > 0.01 * (target - start).abs());
}

#[test]
fn follow_rate_step_bound() {
    assert_eq!(steps_to_within(0.05, 0.01), Some(90));
}

#[test]
fn degenerate_alphas() {
    assert_eq!(steps_to_within(0.0, 0.01), None);
    assert_eq!(steps_to_within(-0.5, 0.01), None);
    assert_eq!(steps_to_within(1.0, 0.01), Some(1));
    assert_eq!(smooth_toward(3.0, 5.0, 1.0), 5.0);
    assert_eq!(smooth_toward(3.0, 5.0, 0.0), 3.0);
    // Out-of-range alpha is clamped, so no overshoot.
    assert_eq!(smooth_toward(3.0, 5.0, 7.0), 5.0);
    assert_eq!(Smoothed::new(0.0, 2.0).alpha(), 1.0);
}

#[test]
fn reset_replaces_value() {
    let mut s = Smoothed::new(0.0, 0.5);
    s.step(1.0);
    s.reset(0.25);
    assert_eq!(s.value(), 0.25);
}
