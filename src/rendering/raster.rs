/// Software rasterizer for wallpaper paint commands

use image::{Rgb, RgbImage};

use crate::rendering::paint::{GradientStop, PaintCommand};
use crate::{Error, Result};

/// Largest buffer the rasterizer will allocate, in pixels.
///
/// At the cap the RGB buffer is 300 MB and a full render takes seconds, so
/// async callers run it on the blocking pool.
pub const MAX_PIXELS: u64 = 10_000 * 10_000;

/// Execute `commands` in order on a fresh `width` x `height` buffer.
///
/// The buffer starts black. Zero-area and oversized buffers are rejected.
pub fn rasterize(width: u32, height: u32, commands: &[PaintCommand]) -> Result<RgbImage> {
    if width == 0 || height == 0 {
        return Err(Error::RenderError(format!(
            "cannot rasterize an empty {}x{} canvas",
            width, height
        )));
    }
    if width as u64 * height as u64 > MAX_PIXELS {
        return Err(Error::RenderError(format!(
            "{}x{} exceeds the {} pixel limit",
            width, height, MAX_PIXELS
        )));
    }

    let mut img = RgbImage::new(width, height);
    for cmd in commands {
        match *cmd {
            PaintCommand::Fill { rgb } => fill(&mut img, rgb),
            PaintCommand::VerticalGradient { top, bottom } => {
                vertical_gradient(&mut img, top, bottom)
            }
        }
    }
    Ok(img)
}

fn fill(img: &mut RgbImage, rgb: [u8; 3]) {
    for px in img.pixels_mut() {
        *px = Rgb(rgb);
    }
}

/// Source-over blend of a linear gradient sampled at each row's center.
fn vertical_gradient(img: &mut RgbImage, top: GradientStop, bottom: GradientStop) {
    let height = img.height();
    let rows: Vec<([f32; 3], f32)> = (0..height)
        .map(|y| {
            let t = (y as f32 + 0.5) / height as f32;
            let src = [0, 1, 2].map(|c| lerp(top.rgb[c] as f32, bottom.rgb[c] as f32, t));
            (src, lerp(top.alpha, bottom.alpha, t))
        })
        .collect();

    for (_, y, px) in img.enumerate_pixels_mut() {
        let (src, alpha) = rows[y as usize];
        let dst = px.0;
        *px = Rgb([0, 1, 2].map(|c| blend(src[c], dst[c], alpha)));
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

fn blend(src: f32, dst: u8, alpha: f32) -> u8 {
    (src * alpha + dst as f32 * (1.0 - alpha)).round().clamp(0.0, 255.0) as u8
}
