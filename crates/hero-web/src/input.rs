use glam::Vec2;

pub const MIN_DPR: f64 = 1.0;
pub const MAX_DPR: f64 = 2.0;

/// Canvas bounds in CSS pixels, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CanvasRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CanvasRect {
    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left
            && x <= self.left + self.width
            && y >= self.top
            && y <= self.top + self.height
    }
}

/// Client (CSS pixel) position to canvas NDC, y up.
///
/// `None` when the canvas has no area or the point falls outside it.
#[inline]
pub fn client_to_ndc(client_x: f64, client_y: f64, rect: CanvasRect) -> Option<Vec2> {
    if !(rect.width > 0.0 && rect.height > 0.0) || !rect.contains(client_x, client_y) {
        return None;
    }
    let u = (client_x - rect.left) / rect.width;
    let v = (client_y - rect.top) / rect.height;
    Some(Vec2::new((u * 2.0 - 1.0) as f32, (1.0 - v * 2.0) as f32))
}

#[inline]
pub fn clamp_dpr(dpr: f64) -> f64 {
    if dpr.is_finite() {
        dpr.clamp(MIN_DPR, MAX_DPR)
    } else {
        MIN_DPR
    }
}

/// Backing-store size for a canvas of the given CSS size; never zero.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, dpr: f64) -> (u32, u32) {
    let dpr = clamp_dpr(dpr);
    let px = |v: f64| {
        if v.is_finite() && v > 0.0 {
            ((v * dpr) as u32).max(1)
        } else {
            1
        }
    };
    (px(css_width), px(css_height))
}

/// Latest pointer position in canvas NDC, shared between listeners and the frame loop.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub ndc: Option<Vec2>,
}

impl PointerState {
    #[inline]
    pub fn moved(&mut self, client_x: f64, client_y: f64, rect: CanvasRect) {
        self.ndc = client_to_ndc(client_x, client_y, rect);
    }

    #[inline]
    pub fn left(&mut self) {
        self.ndc = None;
    }
}
