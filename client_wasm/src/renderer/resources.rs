use wgpu::util::DeviceExt;
use wgpu::*;

use crate::surface::FRAME_FORMAT;

/// Fullscreen quad corner (matches shader vertex input).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct QuadVertex {
    pub position: [f32; 2], // clip space
    pub uv: [f32; 2],       // texture space, v pointing down
}

/// Triangle strip covering the whole surface
pub const QUAD: [QuadVertex; 4] = [
    QuadVertex {
        position: [-1.0, -1.0],
        uv: [0.0, 1.0],
    },
    QuadVertex {
        position: [1.0, -1.0],
        uv: [1.0, 1.0],
    },
    QuadVertex {
        position: [-1.0, 1.0],
        uv: [0.0, 0.0],
    },
    QuadVertex {
        position: [1.0, 1.0],
        uv: [1.0, 0.0],
    },
];

/// GPU copy of the software-rendered game frame
pub struct FrameTexture {
    pub texture: Texture,
    pub view: TextureView,
    pub sampler: Sampler,
    pub size: Extent3d,
}

pub fn create_quad_buffer(device: &Device) -> Buffer {
    device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Frame Quad Vertex Buffer"),
        contents: bytemuck::cast_slice(&QUAD),
        usage: BufferUsages::VERTEX,
    })
}

pub fn create_frame_texture(device: &Device, width: u32, height: u32) -> FrameTexture {
    let size = Extent3d {
        width,
        height,
        depth_or_array_layers: 1,
    };

    let texture = device.create_texture(&TextureDescriptor {
        label: Some("Frame Texture"),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: TextureDimension::D2,
        format: FRAME_FORMAT,
        usage: TextureUsages::TEXTURE_BINDING | TextureUsages::COPY_DST,
        view_formats: &[],
    });
    let view = texture.create_view(&TextureViewDescriptor::default());

    // Nearest keeps the pixel font crisp when the canvas is scaled
    let sampler = device.create_sampler(&SamplerDescriptor {
        label: Some("Frame Sampler"),
        address_mode_u: AddressMode::ClampToEdge,
        address_mode_v: AddressMode::ClampToEdge,
        address_mode_w: AddressMode::ClampToEdge,
        mag_filter: FilterMode::Nearest,
        min_filter: FilterMode::Nearest,
        mipmap_filter: FilterMode::Nearest,
        ..Default::default()
    });

    FrameTexture {
        texture,
        view,
        sampler,
        size,
    }
}
