//! Canvas surface settings for presenting fixed-size frames

use wgpu::{CompositeAlphaMode, PresentMode, SurfaceConfiguration, TextureFormat, TextureUsages};

/// Format of the uploaded frame texture
pub const FRAME_FORMAT: TextureFormat = TextureFormat::Rgba8UnormSrgb;

/// Pick the canvas format: the frame's own format when offered, otherwise
/// any sRGB format, otherwise whatever comes first.
pub fn pick_format(formats: &[TextureFormat]) -> Option<TextureFormat> {
    formats
        .iter()
        .copied()
        .find(|f| *f == FRAME_FORMAT)
        .or_else(|| formats.iter().copied().find(TextureFormat::is_srgb))
        .or_else(|| formats.first().copied())
}

/// Surface configuration with one canvas pixel per frame pixel.
///
/// Browsers usually only offer linear canvas formats, so the sRGB variant is
/// registered as a view format and the blit renders through it.
pub fn surface_config(format: TextureFormat, frame_size: (u32, u32)) -> SurfaceConfiguration {
    let view_format = format.add_srgb_suffix();
    SurfaceConfiguration {
        usage: TextureUsages::RENDER_ATTACHMENT,
        format,
        width: frame_size.0.max(1),
        height: frame_size.1.max(1),
        present_mode: PresentMode::Fifo,
        alpha_mode: CompositeAlphaMode::Opaque,
        view_formats: if view_format == format {
            vec![]
        } else {
            vec![view_format]
        },
        desired_maximum_frame_latency: 2,
    }
}

/// Format the blit pass renders in
pub fn view_format(config: &SurfaceConfiguration) -> TextureFormat {
    config.format.add_srgb_suffix()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefers_frame_format() {
        let formats = [
            TextureFormat::Bgra8Unorm,
            FRAME_FORMAT,
            TextureFormat::Bgra8UnormSrgb,
        ];
        assert_eq!(pick_format(&formats), Some(FRAME_FORMAT));
    }

    #[test]
    fn test_falls_back_to_srgb_then_first() {
        let srgb = [TextureFormat::Rgba8Unorm, TextureFormat::Bgra8UnormSrgb];
        assert_eq!(pick_format(&srgb), Some(TextureFormat::Bgra8UnormSrgb));

        let linear = [TextureFormat::Bgra8Unorm, TextureFormat::Rgba8Unorm];
        assert_eq!(pick_format(&linear), Some(TextureFormat::Bgra8Unorm));

        assert_eq!(pick_format(&[]), None);
    }

    #[test]
    fn test_surface_sized_from_frame() {
        let config = surface_config(FRAME_FORMAT, (800, 600));
        assert_eq!((config.width, config.height), (800, 600));
        assert!(config.view_formats.is_empty());
        assert_eq!(view_format(&config), FRAME_FORMAT);
    }

    #[test]
    fn test_linear_canvas_renders_through_srgb_view() {
        let config = surface_config(TextureFormat::Bgra8Unorm, (800, 600));
        assert_eq!(config.view_formats, vec![TextureFormat::Bgra8UnormSrgb]);
        assert_eq!(view_format(&config), TextureFormat::Bgra8UnormSrgb);
    }

    #[test]
    fn test_empty_frame_still_configures() {
        let config = surface_config(FRAME_FORMAT, (0, 0));
        assert_eq!((config.width, config.height), (1, 1));
    }
}
