use game_core::render::Frame;
use wgpu::*;

use super::Renderer;

pub fn draw_frame(renderer: &mut Renderer, frame: &Frame) -> Result<(), String> {
    let output = match renderer.surface.get_current_texture() {
        Ok(output) => output,
        Err(SurfaceError::Lost | SurfaceError::Outdated) => {
            // Reconfigure and skip this frame
            renderer
                .surface
                .configure(&renderer.device, &renderer.surface_config);
            return Ok(());
        }
        Err(e) => return Err(format!("Failed to get current texture: {:?}", e)),
    };
    let view = output.texture.create_view(&TextureViewDescriptor {
        format: Some(renderer.view_format),
        ..Default::default()
    });

    upload_frame(renderer, frame)?;

    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });
    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Blit Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(Color::BLACK),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        pass.set_pipeline(&renderer.blit_pipeline);
        pass.set_bind_group(0, &renderer.frame_bind_group, &[]);
        pass.set_vertex_buffer(0, renderer.quad.slice(..));
        pass.draw(0..4, 0..1);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

/// Copy the CPU frame into the frame texture
fn upload_frame(renderer: &Renderer, frame: &Frame) -> Result<(), String> {
    let size = renderer.frame_texture.size;
    if frame.width() != size.width || frame.height() != size.height {
        return Err(format!(
            "Frame is {}x{} but texture is {}x{}",
            frame.width(),
            frame.height(),
            size.width,
            size.height
        ));
    }

    renderer.queue.write_texture(
        TexelCopyTextureInfo {
            texture: &renderer.frame_texture.texture,
            mip_level: 0,
            origin: Origin3d::ZERO,
            aspect: TextureAspect::All,
        },
        frame.as_bytes(),
        TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * size.width),
            rows_per_image: Some(size.height),
        },
        size,
    );
    Ok(())
}
