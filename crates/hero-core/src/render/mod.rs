//! Shared wgpu renderer for a [`Scene`]: the hero mesh plus all sprites.
//!
//! Front-ends own the device, queue and surface; this module owns every
//! pipeline and buffer and records one pass per frame.

mod helpers;
mod mesh;
mod sprites;
mod targets;

use crate::material::MeshUniforms;
use crate::scene::Scene;
use mesh::MeshResources;
use sprites::{SpriteResources, SpriteUniforms};
use targets::DepthTarget;

pub struct SceneRenderer {
    mesh: Option<MeshResources>,
    sprites: SpriteResources,
    sprite_count: u32,
    depth: DepthTarget,
}

impl SceneRenderer {
    pub fn new(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        scene: &Scene,
        width: u32,
        height: u32,
    ) -> Self {
        let mesh = scene
            .hero()
            .map(|h| mesh::create_mesh_resources(device, color_format, h.geometry()));
        let sprites = sprites::create_sprite_resources(device, color_format, scene.sprite_capacity());
        log::info!(
            "[gpu] renderer ready: mesh={} sprite_capacity={} format={:?}",
            mesh.is_some(),
            sprites.capacity,
            color_format
        );
        Self {
            mesh,
            sprites,
            sprite_count: 0,
            depth: DepthTarget::new(device, width, height),
        }
    }

    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        if width == self.depth.width && height == self.depth.height {
            return;
        }
        self.depth.recreate(device, width, height);
    }

    /// Upload this frame's uniforms and sprite instances.
    pub fn prepare(&mut self, queue: &wgpu::Queue, scene: &Scene) {
        if let (Some(res), Some(hero)) = (&self.mesh, scene.hero()) {
            let u = MeshUniforms::pack(
                scene.camera(),
                hero.transform(),
                hero.material(),
                scene.lights(),
            );
            queue.write_buffer(&res.uniform_buffer, 0, bytemuck::bytes_of(&u));
        }

        let su = SpriteUniforms::from_camera(scene.camera());
        queue.write_buffer(&self.sprites.uniform_buffer, 0, bytemuck::bytes_of(&su));

        let sprites = scene.sprites();
        let n = sprites.len().min(self.sprites.capacity);
        if n > 0 {
            queue.write_buffer(
                &self.sprites.instance_vb,
                0,
                bytemuck::cast_slice(&sprites[..n]),
            );
        }
        self.sprite_count = n as u32;
    }

    /// Record the frame into `target`, cleared to fully transparent.
    pub fn draw(&self, encoder: &mut wgpu::CommandEncoder, target: &wgpu::TextureView) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("scene_pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &self.depth.view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            occlusion_query_set: None,
            timestamp_writes: None,
        });

        if let Some(m) = &self.mesh {
            pass.set_pipeline(&m.pipeline);
            pass.set_bind_group(0, &m.bind_group, &[]);
            pass.set_vertex_buffer(0, m.vertex_buffer.slice(..));
            pass.set_index_buffer(m.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            pass.draw_indexed(0..m.index_count, 0, 0..1);
        }

        if self.sprite_count > 0 {
            let s = &self.sprites;
            pass.set_pipeline(&s.pipeline);
            pass.set_bind_group(0, &s.bind_group, &[]);
            pass.set_vertex_buffer(0, s.quad_vb.slice(..));
            pass.set_vertex_buffer(1, s.instance_vb.slice(..));
            pass.draw(0..6, 0..self.sprite_count);
        }
    }
}
