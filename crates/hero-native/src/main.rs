mod cli;

use clap::Parser;
use glam::Vec2;
use hero_core::render::SceneRenderer;
use hero_core::{FrameSample, Scene, SceneClock, SceneConfig};
use winit::dpi::{LogicalSize, PhysicalPosition, PhysicalSize};
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

/// Pixels scrolled per wheel line.
const WHEEL_LINE_PX: f64 = 40.0;

struct GpuState<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    renderer: SceneRenderer,
}

impl<'w> GpuState<'w> {
    async fn new(window: &'w winit::window::Window, scene: &Scene) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let (width, height) = (size.width.max(1), size.height.max(1));
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);
        let renderer = SceneRenderer::new(&device, format, scene, width, height);
        log::info!(
            "[gpu] {} {}x{} format={:?} alpha={:?}",
            adapter.get_info().name,
            width,
            height,
            format,
            alpha_mode
        );

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            renderer,
        })
    }

    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
        self.renderer
            .resize(&self.device, new_size.width, new_size.height);
    }

    fn render(&mut self, scene: &Scene) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        self.renderer.prepare(&self.queue, scene);
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        self.renderer.draw(&mut encoder, &view);
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

/// Window-space cursor to NDC, y up.
fn cursor_to_ndc(pos: PhysicalPosition<f64>, size: PhysicalSize<u32>) -> Option<Vec2> {
    if size.width == 0 || size.height == 0 {
        return None;
    }
    let u = pos.x / size.width as f64;
    let v = pos.y / size.height as f64;
    if !(0.0..=1.0).contains(&u) || !(0.0..=1.0).contains(&v) {
        return None;
    }
    Some(Vec2::new((u * 2.0 - 1.0) as f32, (1.0 - v * 2.0) as f32))
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
    let cli = cli::Cli::parse();

    let mut scene = Scene::new(&SceneConfig::preset(cli.scene))?;
    log::info!("[native] preset={} {}x{}", cli.scene, cli.width, cli.height);

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(format!("Hero scene ({})", cli.scene))
        .with_inner_size(LogicalSize::new(cli.width, cli.height))
        .with_transparent(true)
        .build(&event_loop)?;

    let mut state = pollster::block_on(GpuState::new(&window, &scene))?;
    let size = window.inner_size();
    scene.set_viewport_size(size.width, size.height);

    let clock = SceneClock::new();
    let mut pointer: Option<Vec2> = None;
    let mut scroll_px = 0.0_f64;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => {
                state.resize(size);
                scene.set_viewport_size(size.width, size.height);
            }
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::CursorMoved { position, .. } => {
                pointer = cursor_to_ndc(position, state.window.inner_size());
            }
            WindowEvent::CursorLeft { .. } => pointer = None,
            WindowEvent::MouseWheel { delta, .. } => {
                let dy = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y as f64 * WHEEL_LINE_PX,
                    MouseScrollDelta::PixelDelta(p) => p.y,
                };
                let height = state.window.inner_size().height as f64;
                // Wheel down scrolls the page down.
                scroll_px = (scroll_px - dy).clamp(0.0, height);
            }
            _ => {}
        },
        Event::AboutToWait => {
            let height = state.window.inner_size().height as f64;
            let progress = hero_core::scroll::scroll_progress(scroll_px, height);
            scene.advance(FrameSample::new(clock.elapsed_secs(), pointer, progress));
            match state.render(&scene) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    state.resize(state.window.inner_size())
                }
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::warn!("render error: {:?}", e),
            }
        }
        _ => {}
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_center_is_ndc_origin() {
        let ndc = cursor_to_ndc(PhysicalPosition::new(400.0, 300.0), PhysicalSize::new(800, 600));
        assert_eq!(ndc, Some(Vec2::ZERO));
    }

    #[test]
    fn cursor_outside_window_is_none() {
        let size = PhysicalSize::new(800, 600);
        assert!(cursor_to_ndc(PhysicalPosition::new(-1.0, 10.0), size).is_none());
        assert!(cursor_to_ndc(PhysicalPosition::new(10.0, 601.0), size).is_none());
        assert!(cursor_to_ndc(PhysicalPosition::new(0.0, 0.0), PhysicalSize::new(0, 0)).is_none());
    }

    #[test]
    fn cli_parses_preset_and_size() {
        let cli = cli::Cli::parse_from(["hero-native", "--scene", "particles", "--width", "640"]);
        assert_eq!(cli.scene, hero_core::ScenePreset::Particles);
        assert_eq!(cli.width, 640);
        assert_eq!(cli.height, 720);
    }
}
