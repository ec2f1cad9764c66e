use crate::error::RenderError;
use resvg::usvg::{self, Transform};
use std::sync::Arc;
use tiny_skia::Pixmap;

/// Largest raster edge accepted from a request
pub const MAX_PNG_EDGE: u32 = 4000;

/// Validated output size of a raster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PngSize {
    pub width: u32,
    pub height: u32,
}

impl PngSize {
    /// Both edges must be within `1..=MAX_PNG_EDGE`.
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        let valid = |edge: u32| (1..=MAX_PNG_EDGE).contains(&edge);
        if valid(width) && valid(height) {
            Ok(Self { width, height })
        } else {
            Err(RenderError::UnsupportedDimensions { width, height })
        }
    }
}

/// Rasterizes chart SVG to PNG.
///
/// The SVG is scaled to fit the requested size, keeping its aspect ratio,
/// and centered on a white background.
pub struct SvgRasterizer {
    /// Font database for text rendering
    fontdb: Arc<fontdb::Database>,
}

impl SvgRasterizer {
    /// Create a rasterizer with the given fonts plus system fonts
    pub fn with_fonts(fonts: Vec<(String, std::borrow::Cow<'static, [u8]>)>) -> Self {
        let mut fontdb = fontdb::Database::new();

        for (name, data) in fonts {
            fontdb.load_font_data(data.into_owned());
            tracing::debug!(font = %name, "Loaded font");
        }

        // System fonts as fallback
        fontdb.load_system_fonts();

        tracing::info!(
            font_count = fontdb.len(),
            "Loaded fonts for chart rasterizing"
        );

        Self {
            fontdb: Arc::new(fontdb),
        }
    }

    /// Render SVG markup to PNG bytes.
    pub fn render_png(&self, svg_data: &[u8], size: PngSize) -> Result<Vec<u8>, RenderError> {
        let pixmap = self.rasterize_svg(svg_data, size)?;
        pixmap
            .encode_png()
            .map_err(|e| RenderError::PngEncode(e.to_string()))
    }

    /// Parse and rasterize SVG to an RGBA pixmap
    fn rasterize_svg(&self, svg_data: &[u8], size: PngSize) -> Result<Pixmap, RenderError> {
        let options = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_data(svg_data, &options)
            .map_err(|e| RenderError::SvgParse(e.to_string()))?;

        let svg_size = tree.size();
        let scale_x = size.width as f32 / svg_size.width();
        let scale_y = size.height as f32 / svg_size.height();
        let scale = scale_x.min(scale_y);

        let offset_x = (size.width as f32 - svg_size.width() * scale) / 2.0;
        let offset_y = (size.height as f32 - svg_size.height() * scale) / 2.0;

        let mut pixmap =
            Pixmap::new(size.width, size.height).ok_or(RenderError::PixmapAllocation)?;
        pixmap.fill(tiny_skia::Color::WHITE);

        let transform = Transform::from_scale(scale, scale).post_translate(offset_x, offset_y);
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        Ok(pixmap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

    const SQUARE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100" viewBox="0 0 100 100">
      <rect width="100" height="100" fill="rgb(192, 57, 43)"/>
    </svg>"#;

    #[test]
    fn test_png_size_bounds() {
        assert!(PngSize::new(1, 1).is_ok());
        assert!(PngSize::new(MAX_PNG_EDGE, MAX_PNG_EDGE).is_ok());
        assert!(matches!(
            PngSize::new(0, 10),
            Err(RenderError::UnsupportedDimensions {
                width: 0,
                height: 10
            })
        ));
        assert!(PngSize::new(10, MAX_PNG_EDGE + 1).is_err());
    }

    #[test]
    fn test_render_png_signature_and_size() {
        let rasterizer = SvgRasterizer::with_fonts(Vec::new());
        let png = rasterizer
            .render_png(SQUARE.as_bytes(), PngSize::new(200, 100).unwrap())
            .unwrap();
        assert!(png.starts_with(PNG_SIGNATURE));

        // IHDR width and height, big endian
        assert_eq!(u32::from_be_bytes([png[16], png[17], png[18], png[19]]), 200);
        assert_eq!(u32::from_be_bytes([png[20], png[21], png[22], png[23]]), 100);
    }

    #[test]
    fn test_invalid_svg_rejected() {
        let rasterizer = SvgRasterizer::with_fonts(Vec::new());
        let result = rasterizer.render_png(b"<not-svg", PngSize::new(10, 10).unwrap());
        assert!(matches!(result, Err(RenderError::SvgParse(_))));
    }
}
