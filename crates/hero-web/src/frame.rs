use crate::dom;
use crate::gpu::GpuState;
use crate::input::PointerState;
use hero_core::{FrameSample, Scene, SceneClock};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub clock: SceneClock,
    pub canvas: web::HtmlCanvasElement,
    pub pointer: Rc<Cell<PointerState>>,
    pub scroll: Rc<Cell<f32>>,
    pub gpu: Rc<RefCell<Option<GpuState>>>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let (w, h) = (self.canvas.width(), self.canvas.height());
        let mut scene = self.scene.borrow_mut();
        scene.set_viewport_size(w, h);
        let sample = FrameSample::new(
            self.clock.elapsed_secs(),
            self.pointer.get().ndc,
            self.scroll.get(),
        );
        scene.advance(sample);

        let mut gpu = self.gpu.borrow_mut();
        let Some(g) = gpu.as_mut() else {
            log::trace!("[frame] gpu not ready; skipping draw");
            return;
        };
        g.resize_if_needed(w, h);
        match g.render(&scene) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[gpu] surface lost or outdated; reconfiguring");
                g.reconfigure();
            }
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

/// requestAnimationFrame loop that stops and cancels its pending frame when dropped.
pub struct AnimationLoop {
    running: Rc<Cell<bool>>,
    handle: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl AnimationLoop {
    pub fn start(ctx: FrameContext) -> Self {
        let running = Rc::new(Cell::new(true));
        let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

        // The closure reaches itself through a weak slot so dropping the loop frees it.
        let slot = Rc::downgrade(&tick);
        let running_t = running.clone();
        let handle_t = handle.clone();
        let mut ctx = ctx;
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            handle_t.set(None);
            if !running_t.get() {
                return;
            }
            ctx.frame();
            if let Some(slot) = slot.upgrade() {
                if let Some(cb) = slot.borrow().as_ref() {
                    handle_t.set(request_frame(cb));
                }
            }
        }) as Box<dyn FnMut()>));

        if let Some(cb) = tick.borrow().as_ref() {
            handle.set(request_frame(cb));
        }
        Self {
            running,
            handle,
            tick,
        }
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.running.set(false);
        if let (Some(id), Some(w)) = (self.handle.take(), web::window()) {
            let _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
    }
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
    web::window().and_then(|w| w.request_animation_frame(cb.as_ref().unchecked_ref()).ok())
}

/// Scroll progress sampled once so the first frame does not snap.
pub fn initial_scroll() -> f32 {
    web::window()
        .map(|w| dom::page_scroll_progress(&w))
        .unwrap_or(0.0)
}
