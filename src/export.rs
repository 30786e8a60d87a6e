//! Drawing export to PNG.
//!
//! The committed drawables are replayed into an SVG document, rasterized
//! offscreen with the resvg/tiny-skia pipeline, and encoded to PNG with the
//! `image` crate. The SVG viewBox stays at the logical canvas size while the
//! output dimensions carry the upscale factor, so the export is the same
//! drawing at higher resolution.

use std::fmt::Write;
use std::io::Cursor;
use std::path::Path;

use crate::element::Drawable;
use crate::error::ExportError;

/// Exported images are rendered at this multiple of the logical canvas size.
pub const EXPORT_SCALE: f32 = 4.0;

/// Default file name offered for the exported drawing.
pub const EXPORT_FILE_NAME: &str = "sketchpad.png";

/// Configuration for the offscreen export render.
#[derive(Debug, Clone, Copy)]
pub struct ExportConfig {
    /// Logical canvas width in points.
    pub width: f32,
    /// Logical canvas height in points.
    pub height: f32,
    /// Output magnification.
    pub scale: f32,
}

impl ExportConfig {
    pub fn new(canvas_size: f32) -> Self {
        Self {
            width: canvas_size,
            height: canvas_size,
            scale: EXPORT_SCALE,
        }
    }

    /// Output pixel dimensions (width, height).
    pub fn output_dimensions(&self) -> (u32, u32) {
        let w = (self.width * self.scale) as u32;
        let h = (self.height * self.scale) as u32;
        (w.max(1), h.max(1))
    }
}

/// Replay the drawables into a standalone SVG document over a white
/// background. An empty history yields a valid blank document.
pub fn scene_to_svg(drawables: &[Drawable], config: &ExportConfig) -> String {
    let (out_w, out_h) = config.output_dimensions();

    let mut svg = String::with_capacity(4096);
    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{out_w}\" height=\"{out_h}\" \
         viewBox=\"0 0 {} {}\">",
        config.width, config.height,
    );
    svg.push_str("<rect width=\"100%\" height=\"100%\" fill=\"#ffffff\"/>");

    for drawable in drawables {
        drawable.write_svg(&mut svg);
    }

    svg.push_str("</svg>");
    svg
}

/// Render the drawables to PNG bytes at the configured scale.
pub fn render_png(drawables: &[Drawable], config: &ExportConfig) -> Result<Vec<u8>, ExportError> {
    let svg = scene_to_svg(drawables, config);

    let mut options = usvg::Options::default();
    // Sticker glyphs are plain text nodes; without fonts they rasterize to
    // nothing.
    options.fontdb_mut().load_system_fonts();
    let tree =
        usvg::Tree::from_str(&svg, &options).map_err(|e| ExportError::Svg(e.to_string()))?;

    let width = tree.size().width() as u32;
    let height = tree.size().height() as u32;
    let mut pixmap = tiny_skia::Pixmap::new(width.max(1), height.max(1))
        .ok_or(ExportError::Pixmap { width, height })?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    // The pixmap is premultiplied RGBA, but everything we draw is opaque over
    // an opaque background, so the bytes can be encoded directly.
    let (width, height) = (pixmap.width(), pixmap.height());
    let rgba = image::RgbaImage::from_raw(width, height, pixmap.take())
        .ok_or(ExportError::Pixmap { width, height })?;

    let mut buf = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(rgba)
        .write_to(&mut buf, image::ImageFormat::Png)
        .map_err(|e| ExportError::Encode(e.to_string()))?;

    Ok(buf.into_inner())
}

/// Render and write the drawing to `path`.
pub fn save_png(
    drawables: &[Drawable],
    config: &ExportConfig,
    path: &Path,
) -> Result<(), ExportError> {
    let png = render_png(drawables, config)?;
    std::fs::write(path, png)?;
    Ok(())
}
