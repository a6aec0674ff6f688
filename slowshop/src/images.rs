//! Product image thumbnails
//!
//! Images are decoded once, shrunk to thumbnail size, converted to grayscale
//! for the e-ink panel and uploaded as egui textures. Misses are remembered
//! so a broken path is not re-read every frame; the grid draws an outlined
//! placeholder for them instead.

use crate::error::{Result, ShopError};
use egui::{ColorImage, TextureHandle, TextureOptions};
use image::{imageops::FilterType, DynamicImage};
use std::collections::HashMap;
use std::path::Path;

/// Largest thumbnail edge in pixels
pub const THUMB_MAX: u32 = 160;

/// Dimensions that fit within max_w × max_h while preserving aspect ratio.
/// Images already small enough keep their size.
pub fn fit_dimensions(w: u32, h: u32, max_w: u32, max_h: u32) -> (u32, u32) {
    if w <= max_w && h <= max_h {
        return (w, h);
    }

    let scale_x = max_w as f64 / w as f64;
    let scale_y = max_h as f64 / h as f64;
    let scale = scale_x.min(scale_y);

    let new_w = (w as f64 * scale).round() as u32;
    let new_h = (h as f64 * scale).round() as u32;

    (new_w.max(1), new_h.max(1))
}

/// Decode `path` into a grayscale thumbnail ready for upload.
pub fn load_thumbnail(path: &Path) -> Result<ColorImage> {
    let full = image::open(path).map_err(|source| ShopError::Image {
        path: path.to_path_buf(),
        source,
    })?;

    let (w, h) = fit_dimensions(full.width(), full.height(), THUMB_MAX, THUMB_MAX);
    let resized = if w < full.width() || h < full.height() {
        full.resize_exact(w, h, FilterType::Triangle)
    } else {
        full
    };

    let gray = DynamicImage::ImageLuma8(resized.to_luma8());
    let rgba = gray.to_rgba8();
    Ok(ColorImage::from_rgba_unmultiplied(
        [rgba.width() as usize, rgba.height() as usize],
        rgba.as_raw(),
    ))
}

/// Texture cache keyed by image reference.
#[derive(Default)]
pub struct ImageCache {
    textures: HashMap<String, Option<TextureHandle>>,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Texture for `image`, loading it on first use. `None` for blank or broken refs.
    pub fn get(&mut self, ctx: &egui::Context, image: &str) -> Option<TextureHandle> {
        if image.is_empty() {
            return None;
        }
        self.textures
            .entry(image.to_string())
            .or_insert_with(|| match load_thumbnail(Path::new(image)) {
                Ok(color_image) => Some(ctx.load_texture(image, color_image, TextureOptions::LINEAR)),
                Err(e) => {
                    tracing::warn!(error = %e, "image unavailable");
                    None
                }
            })
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_dimensions() {
        assert_eq!(fit_dimensions(100, 50, 160, 160), (100, 50));
        assert_eq!(fit_dimensions(640, 320, 160, 160), (160, 80));
        assert_eq!(fit_dimensions(300, 900, 160, 160), (53, 160));
        assert_eq!(fit_dimensions(10_000, 1, 160, 160), (160, 1));
    }

    #[test]
    fn test_load_thumbnail_shrinks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ring.png");
        image::RgbaImage::from_pixel(320, 200, image::Rgba([200, 40, 40, 255]))
            .save(&path)
            .unwrap();

        let thumb = load_thumbnail(&path).unwrap();
        assert_eq!(thumb.size, [160, 100]);
        // grayscale: r == g == b
        let px = thumb.pixels[0];
        assert_eq!(px.r(), px.g());
        assert_eq!(px.g(), px.b());
    }

    #[test]
    fn test_missing_image_is_an_error() {
        let err = load_thumbnail(Path::new("/definitely/not/here.png")).unwrap_err();
        assert!(matches!(err, ShopError::Image { .. }));
    }
}
