use std::cell::OnceCell;
use std::path::Path;

use image::{Rgba, RgbaImage};
use log::{debug, warn};
use pdfium_render::prelude::*;

use crate::error::AssetError;
use crate::output::RasterImage;

/// Something that can turn the first page of a PDF into pixels
pub trait PageRasterizer {
    fn first_page(&self, path: &Path) -> Result<RasterImage, AssetError>;
}

/// Rasterizer backed by Pdfium. The library is bound on first use so a
/// dashboard that never shows a PDF never needs it.
pub struct PdfiumRasterizer {
    pdfium: OnceCell<Result<Pdfium, String>>,
}

impl PdfiumRasterizer {
    pub fn new() -> Self {
        Self { pdfium: OnceCell::new() }
    }

    /// Whether the Pdfium shared library could be bound
    pub fn is_available(&self) -> bool {
        self.pdfium().is_ok()
    }

    fn pdfium(&self) -> Result<&Pdfium, AssetError> {
        self.pdfium
            .get_or_init(|| {
                Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
                    .or_else(|_| Pdfium::bind_to_system_library())
                    .map(Pdfium::new)
                    .map_err(|err| {
                        warn!("Failed to initialize Pdfium: {}", err);
                        format!("PDF rendering library unavailable: {}", err)
                    })
            })
            .as_ref()
            .map_err(|msg| AssetError::Pdf(msg.clone()))
    }
}

impl Default for PdfiumRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl PageRasterizer for PdfiumRasterizer {
    /// Renders page 1 at 72 dpi, so one PDF point becomes one pixel
    fn first_page(&self, path: &Path) -> Result<RasterImage, AssetError> {
        if !path.is_file() {
            return Err(AssetError::NotFound(path.to_path_buf()));
        }
        let pdfium = self.pdfium()?;

        let document = pdfium
            .load_pdf_from_file(path, None)
            .map_err(|e| AssetError::Pdf(format!("{:?}", e)))?;
        let pages = document.pages();
        debug!("{} has {} page(s)", path.display(), pages.len());

        let page = pages
            .get(0)
            .map_err(|e| AssetError::Pdf(format!("cannot read page 1: {:?}", e)))?;

        let width_px = page.width().value.round().max(1.0) as i32;
        let height_px = page.height().value.round().max(1.0) as i32;
        let config = PdfRenderConfig::new()
            .set_target_width(width_px)
            .set_target_height(height_px);

        let bitmap = page
            .render_with_config(&config)
            .map_err(|e| AssetError::Pdf(format!("cannot render page 1: {:?}", e)))?;

        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        Ok(RasterImage {
            name,
            pixels: bgra_to_rgb(
                bitmap.width() as u32,
                bitmap.height() as u32,
                &bitmap.as_raw_bytes(),
            ),
        })
    }
}

/// Pdfium hands back BGRA rows; drop alpha onto opaque RGB
fn bgra_to_rgb(width: u32, height: u32, data: &[u8]) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255]));
    for (i, px) in data.chunks_exact(4).enumerate().take((width * height) as usize) {
        let x = i as u32 % width;
        let y = i as u32 / width;
        img.put_pixel(x, y, Rgba([px[2], px[1], px[0], 255]));
    }
    img
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swaps_blue_and_red_channels() {
        let data = [10, 20, 30, 128, 1, 2, 3, 0];
        let img = bgra_to_rgb(2, 1, &data);
        assert_eq!(img.get_pixel(0, 0), &Rgba([30, 20, 10, 255]));
        assert_eq!(img.get_pixel(1, 0), &Rgba([3, 2, 1, 255]));
    }

    #[test]
    fn short_buffer_leaves_white_background() {
        let img = bgra_to_rgb(2, 2, &[0, 0, 0, 255]);
        assert_eq!(img.get_pixel(0, 0), &Rgba([0, 0, 0, 255]));
        assert_eq!(img.get_pixel(1, 1), &Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn missing_file_fails_before_binding_pdfium() {
        let rasterizer = PdfiumRasterizer::new();
        let err = rasterizer
            .first_page(Path::new("/nonexistent/Ethical_clearance.pdf"))
            .unwrap_err();
        assert!(matches!(err, AssetError::NotFound(_)));
        assert!(rasterizer.pdfium.get().is_none());
    }
}
