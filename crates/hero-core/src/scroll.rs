use crate::constants::{DEPTH_PER_SCROLL, SCROLL_FLOOR, SCROLL_SHRINK};

/// Page scroll progress through the hero region: `scroll_y / viewport_h`,
/// clamped to [0, 1]. A zero-height viewport reads as "not scrolled".
#[inline]
pub fn scroll_progress(scroll_y: f64, viewport_height: f64) -> f32 {
    if viewport_height.is_nan() || viewport_height <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    sanitize_progress((scroll_y / viewport_height) as f32)
}

/// Clamp an externally supplied progress to [0, 1]; NaN reads as 0.
#[inline]
pub fn sanitize_progress(p: f32) -> f32 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}

/// Scale and intensity multiplier: linear shrink, floored at `SCROLL_FLOOR`.
#[inline]
pub fn scroll_multiplier(progress: f32) -> f32 {
    let p = sanitize_progress(progress);
    (1.0 - p * SCROLL_SHRINK).max(SCROLL_FLOOR)
}

/// Z translation of the hero mesh; it recedes as the page scrolls.
#[inline]
pub fn depth_offset(progress: f32) -> f32 {
    -sanitize_progress(progress) * DEPTH_PER_SCROLL
}
