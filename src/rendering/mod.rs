//! Rendering: paint commands, rasterization and PNG encoding

pub mod paint;
pub mod raster;

use std::io::Cursor;

use base64::Engine as _;
use image::{ImageFormat, RgbImage};
use log::debug;
use sha2::{Digest, Sha256};

use crate::color::Color;
use crate::{Resolution, Result};

/// An encoded wallpaper, ready for a download surface.
#[derive(Debug, Clone)]
pub struct WallpaperImage {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}

impl WallpaperImage {
    /// `wallpaper-{width}x{height}.png`
    pub fn filename(&self) -> String {
        Resolution::new(self.width, self.height).wallpaper_filename()
    }

    /// The PNG as a `data:` URL, as a browser download link would carry it.
    pub fn to_data_url(&self) -> String {
        format!(
            "data:image/png;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(&self.png_data)
        )
    }

    /// SHA-256 of the encoded bytes, hex encoded.
    pub fn digest(&self) -> String {
        hex::encode(Sha256::digest(&self.png_data))
    }
}

/// Rasterize `color` at `resolution` with the depth overlay, then encode.
pub fn render_wallpaper(color: &Color, resolution: Resolution) -> Result<WallpaperImage> {
    let commands = paint::wallpaper_commands(color);
    let img = raster::rasterize(resolution.width, resolution.height, &commands)?;
    let png_data = encode_png(&img)?;
    debug!(
        "Rendered {} at {} into {} PNG bytes",
        color,
        resolution,
        png_data.len()
    );
    Ok(WallpaperImage {
        width: resolution.width,
        height: resolution.height,
        png_data,
    })
}

/// Lossless PNG encoding of an RGB buffer.
pub fn encode_png(img: &RgbImage) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_produces_png_of_requested_size() {
        let color = Color::parse("#34c759").unwrap();
        let img = render_wallpaper(&color, Resolution::new(120, 240)).unwrap();
        assert_eq!(&img.png_data[0..8], b"\x89PNG\r\n\x1a\n");
        assert_eq!(img.filename(), "wallpaper-120x240.png");

        let decoded = image::load_from_memory(&img.png_data).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (120, 240));
    }

    #[test]
    fn encoding_is_lossless() {
        let commands = paint::wallpaper_commands(&Color::parse("#764ba2").unwrap());
        let raw = raster::rasterize(33, 77, &commands).unwrap();
        let png = encode_png(&raw).unwrap();
        let decoded = image::load_from_memory(&png).unwrap().to_rgb8();
        assert_eq!(decoded.as_raw(), raw.as_raw());
    }

    #[test]
    fn data_url_and_digest() {
        let img = WallpaperImage { width: 1, height: 1, png_data: b"abc".to_vec() };
        assert_eq!(img.to_data_url(), "data:image/png;base64,YWJj");
        assert_eq!(
            img.digest(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn render_is_deterministic() {
        let color = Color::parse("#f093fb").unwrap();
        let a = render_wallpaper(&color, Resolution::new(100, 100)).unwrap();
        let b = render_wallpaper(&color, Resolution::new(100, 100)).unwrap();
        assert_eq!(a.digest(), b.digest());
    }
}
