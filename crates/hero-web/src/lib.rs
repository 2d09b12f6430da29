#![cfg(target_arch = "wasm32")]
//! WebGPU hero layer mounted onto a page canvas.

mod dom;
mod events;
mod frame;
mod gpu;
mod input;

use events::ListenerGuard;
use frame::{AnimationLoop, FrameContext};
use gpu::GpuState;
use hero_core::{Scene, SceneClock, SceneConfig, ScenePreset};
use input::PointerState;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

const AUTO_MOUNT_CANVAS_ID: &str = "hero-canvas";
const SCENE_ATTRIBUTE: &str = "data-scene";

thread_local! {
    static AUTO_MOUNTED: RefCell<Option<HeroScene>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hero-web starting");

    let Some(document) = dom::window_document() else {
        return Ok(());
    };
    let Some(el) = document.get_element_by_id(AUTO_MOUNT_CANVAS_ID) else {
        log::info!("[mount] no #{} canvas; waiting for mount_hero", AUTO_MOUNT_CANVAS_ID);
        return Ok(());
    };
    let preset = el.get_attribute(SCENE_ATTRIBUTE);
    let scene = mount_hero(AUTO_MOUNT_CANVAS_ID, preset)?;
    AUTO_MOUNTED.with(|slot| *slot.borrow_mut() = Some(scene));
    Ok(())
}

/// Mount the hero layer onto the canvas with id `canvas_id`.
///
/// `preset` is `"hero"` (default) or `"particles"`.
#[wasm_bindgen]
pub fn mount_hero(canvas_id: &str, preset: Option<String>) -> Result<HeroScene, JsValue> {
    let preset: ScenePreset = preset
        .as_deref()
        .unwrap_or_default()
        .parse()
        .map_err(|e: hero_core::SceneError| JsValue::from_str(&e.to_string()))?;
    Mounted::new(canvas_id, preset)
        .map(|m| HeroScene {
            scroll: m.scroll.clone(),
            inner: Some(m),
        })
        .map_err(|e| JsValue::from_str(&format!("{e:#}")))
}

/// Handle to a mounted scene. Dropping it (or calling `free`) releases everything.
#[wasm_bindgen]
pub struct HeroScene {
    scroll: Rc<Cell<f32>>,
    inner: Option<Mounted>,
}

#[wasm_bindgen]
impl HeroScene {
    /// Override scroll progress; the next page scroll event replaces it.
    pub fn set_scroll_progress(&self, progress: f32) {
        self.scroll.set(hero_core::scroll::sanitize_progress(progress));
    }

    pub fn unmount(&mut self) {
        if self.inner.take().is_some() {
            log::info!("[mount] unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.inner.is_some()
    }
}

/// Everything a live mount owns. Dropping releases the GPU, then stops the
/// frame loop and detaches listeners in field order.
struct Mounted {
    _frames: AnimationLoop,
    _listeners: Vec<ListenerGuard>,
    gpu: Rc<RefCell<Option<GpuState>>>,
    alive: Rc<Cell<bool>>,
    scroll: Rc<Cell<f32>>,
}

impl Mounted {
    fn new(canvas_id: &str, preset: ScenePreset) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;
        let canvas = dom::canvas_by_id(&document, canvas_id)?;
        let (w, h) = dom::sync_canvas_backing_size(&canvas);

        let scene = Rc::new(RefCell::new(Scene::new(&SceneConfig::preset(preset))?));
        scene.borrow_mut().set_viewport_size(w, h);
        log::info!("[mount] '{}' preset={} size={}x{}", canvas_id, preset, w, h);

        let pointer = Rc::new(Cell::new(PointerState::default()));
        let scroll = Rc::new(Cell::new(frame::initial_scroll()));
        let gpu: Rc<RefCell<Option<GpuState>>> = Rc::new(RefCell::new(None));
        let alive = Rc::new(Cell::new(true));

        let listeners = wire_listeners(&window, &document, &canvas, &pointer, &scroll)
            .map_err(|e| anyhow::anyhow!("listener setup failed: {:?}", e))?;

        // GPU init is async; the frame loop skips drawing until it lands.
        {
            let gpu = gpu.clone();
            let alive = alive.clone();
            let canvas = canvas.clone();
            let scene = scene.clone();
            spawn_local(async move {
                match GpuState::new(canvas, scene).await {
                    Ok(g) if alive.get() => {
                        *gpu.borrow_mut() = Some(g);
                        log::info!("[gpu] ready");
                    }
                    Ok(_) => log::info!("[gpu] ready after unmount; dropping"),
                    Err(e) => log::error!("WebGPU init error: {:?}", e),
                }
            });
        }

        let frames = AnimationLoop::start(FrameContext {
            scene,
            clock: SceneClock::new(),
            canvas,
            pointer,
            scroll: scroll.clone(),
            gpu: gpu.clone(),
        });

        Ok(Self {
            _frames: frames,
            _listeners: listeners,
            gpu,
            alive,
            scroll,
        })
    }
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.alive.set(false);
        self.gpu.borrow_mut().take();
    }
}

fn wire_listeners(
    window: &web::Window,
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
    pointer: &Rc<Cell<PointerState>>,
    scroll: &Rc<Cell<f32>>,
) -> Result<Vec<ListenerGuard>, JsValue> {
    let mut out = Vec::with_capacity(4);

    // Pointer is tracked on the window: the canvas usually sits behind page content.
    {
        let pointer = pointer.clone();
        let canvas = canvas.clone();
        out.push(ListenerGuard::new(window, "pointermove", move |ev| {
            if let Some(ev) = ev.dyn_ref::<web::PointerEvent>() {
                let mut state = pointer.get();
                state.moved(
                    ev.client_x() as f64,
                    ev.client_y() as f64,
                    dom::canvas_rect(&canvas),
                );
                pointer.set(state);
            }
        })?);
    }
    {
        let pointer = pointer.clone();
        out.push(ListenerGuard::new(document, "pointerleave", move |_| {
            let mut state = pointer.get();
            state.left();
            pointer.set(state);
        })?);
    }
    {
        let scroll = scroll.clone();
        out.push(ListenerGuard::new(window, "scroll", move |_| {
            if let Some(w) = web::window() {
                scroll.set(dom::page_scroll_progress(&w));
            }
        })?);
    }
    {
        let canvas = canvas.clone();
        out.push(ListenerGuard::new(window, "resize", move |_| {
            let (w, h) = dom::sync_canvas_backing_size(&canvas);
            log::info!("[resize] backing store {}x{}", w, h);
        })?);
    }
    Ok(out)
}
