//! Sprite decoding for the interactive viewer.
//!
//! Catalog sprites are 96×96 PNGs with wide transparent margins, so the image
//! is cropped to its opaque bounding box once at load time and scaled per
//! frame to whatever area the layout hands out.

use image::imageops::{self, FilterType};
use image::{ImageResult, RgbaImage};

/// Pixels at or below this alpha count as background.
const ALPHA_THRESHOLD: u8 = 16;

#[derive(Debug, Clone, PartialEq)]
pub struct SpriteImage {
    pixels: RgbaImage,
}

impl SpriteImage {
    pub fn decode(bytes: &[u8]) -> ImageResult<Self> {
        let rgba = image::load_from_memory(bytes)?.to_rgba8();
        Ok(Self {
            pixels: crop_to_content(rgba),
        })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Scale to fit within `max_width` × `max_height`, keeping aspect ratio.
    pub fn fit(&self, max_width: u32, max_height: u32) -> RgbaImage {
        let (width, height) = self.pixels.dimensions();
        if width == 0 || height == 0 || max_width == 0 || max_height == 0 {
            return RgbaImage::new(0, 0);
        }

        let scale = f64::min(
            f64::from(max_width) / f64::from(width),
            f64::from(max_height) / f64::from(height),
        );
        let target_width = ((f64::from(width) * scale).floor() as u32).max(1);
        let target_height = ((f64::from(height) * scale).floor() as u32).max(1);

        imageops::resize(&self.pixels, target_width, target_height, FilterType::Nearest)
    }
}

fn crop_to_content(image: RgbaImage) -> RgbaImage {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;

    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel[3] <= ALPHA_THRESHOLD {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((min_x, min_y, max_x, max_y)) => {
                (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
            }
        });
    }

    match bounds {
        Some((min_x, min_y, max_x, max_y)) => {
            imageops::crop_imm(&image, min_x, min_y, max_x - min_x + 1, max_y - min_y + 1)
                .to_image()
        }
        // Fully transparent: keep as-is, the view draws nothing visible.
        None => image,
    }
}
