/// Paint commands the rasterizer understands

use crate::color::Color;

/// Opacity of the depth overlay at both ends of the gradient.
pub const OVERLAY_ALPHA: f32 = 0.08;

/// A color with straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub rgb: [u8; 3],
    pub alpha: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    /// Cover the whole buffer with an opaque color
    Fill { rgb: [u8; 3] },
    /// Blend a top-to-bottom linear gradient over the whole buffer
    VerticalGradient { top: GradientStop, bottom: GradientStop },
}

/// Solid fill followed by the white-to-black depth overlay.
pub fn wallpaper_commands(color: &Color) -> Vec<PaintCommand> {
    vec![
        PaintCommand::Fill { rgb: color.rgb() },
        PaintCommand::VerticalGradient {
            top: GradientStop { rgb: [255, 255, 255], alpha: OVERLAY_ALPHA },
            bottom: GradientStop { rgb: [0, 0, 0], alpha: OVERLAY_ALPHA },
        },
    ]
}
