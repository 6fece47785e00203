pub mod draw;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use game_core::render::Frame;
use resources::FrameTexture;
use web_sys::HtmlCanvasElement;
use wgpu::*;

use crate::surface;

/// Presents software-rendered [`Frame`]s on a WebGPU canvas
pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    /// sRGB view of the surface the blit pass renders into
    pub view_format: TextureFormat,

    pub blit_pipeline: RenderPipeline,
    pub frame_bind_group: BindGroup,

    pub frame_texture: FrameTexture,
    pub quad: Buffer,
}

impl Renderer {
    /// Set up WebGPU on `canvas` for frames of `frame_size` pixels. The
    /// surface is sized from the frame, not from the canvas.
    pub async fn new(canvas: HtmlCanvasElement, frame_size: (u32, u32)) -> Result<Self, String> {
        let instance = Instance::new(&InstanceDescriptor {
            backends: Backends::BROWSER_WEBGPU,
            ..Default::default()
        });
        let surface = instance
            .create_surface(SurfaceTarget::Canvas(canvas))
            .map_err(|e| format!("Failed to create surface: {:?}", e))?;

        let adapter = instance
            .request_adapter(&RequestAdapterOptions {
                power_preference: PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| "No WebGPU adapter".to_string())?;
        log::info!("Using adapter: {:?}", adapter.get_info().name);

        // One texture, one sampler, one quad
        let (device, queue) = adapter
            .request_device(
                &DeviceDescriptor {
                    label: Some("Pong Device"),
                    required_features: Features::empty(),
                    required_limits: Limits::downlevel_webgl2_defaults()
                        .using_resolution(adapter.limits()),
                    memory_hints: MemoryHints::MemoryUsage,
                },
                None,
            )
            .await
            .map_err(|e| format!("Failed to create device: {:?}", e))?;

        let format = surface::pick_format(&surface.get_capabilities(&adapter).formats)
            .ok_or_else(|| "Canvas offers no surface formats".to_string())?;
        let surface_config = surface::surface_config(format, frame_size);
        surface.configure(&device, &surface_config);
        let view_format = surface::view_format(&surface_config);
        log::info!(
            "Surface {}x{} {:?} (drawing as {:?})",
            surface_config.width,
            surface_config.height,
            format,
            view_format
        );

        let frame_texture = resources::create_frame_texture(&device, frame_size.0, frame_size.1);
        let quad = resources::create_quad_buffer(&device);
        let pipes = pipeline::create_pipelines(&device, view_format);

        let frame_bind_group = device.create_bind_group(&BindGroupDescriptor {
            label: Some("Frame Bind Group"),
            layout: &pipes.frame_layout,
            entries: &[
                BindGroupEntry {
                    binding: 0,
                    resource: BindingResource::TextureView(&frame_texture.view),
                },
                BindGroupEntry {
                    binding: 1,
                    resource: BindingResource::Sampler(&frame_texture.sampler),
                },
            ],
        });

        Ok(Self {
            device,
            queue,
            surface,
            surface_config,
            view_format,
            blit_pipeline: pipes.blit_pipeline,
            frame_bind_group,
            frame_texture,
            quad,
        })
    }

    pub fn draw(&mut self, frame: &Frame) -> Result<(), String> {
        draw::draw_frame(self, frame)
    }
}
