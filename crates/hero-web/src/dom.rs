use crate::input::{self, CanvasRect};
use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("no element with id '{id}'"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| anyhow!("element '{id}' is not a canvas"))
}

#[inline]
pub fn canvas_rect(canvas: &web::HtmlCanvasElement) -> CanvasRect {
    let r = canvas.get_bounding_client_rect();
    CanvasRect {
        left: r.left(),
        top: r.top(),
        width: r.width(),
        height: r.height(),
    }
}

/// Keep the canvas backing store at CSS size times the clamped device pixel ratio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let rect = canvas_rect(canvas);
    let (w, h) = input::backing_size(rect.width, rect.height, dpr);
    if canvas.width() != w || canvas.height() != h {
        canvas.set_width(w);
        canvas.set_height(h);
    }
    (w, h)
}

/// Page scroll as a fraction of one viewport height, in [0, 1].
pub fn page_scroll_progress(window: &web::Window) -> f32 {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let inner_h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    hero_core::scroll::scroll_progress(scroll_y, inner_h)
}
