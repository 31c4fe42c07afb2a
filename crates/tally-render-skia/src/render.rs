// File: crates/tally-render-skia/src/render.rs
// Summary: Headless rendering of tally charts to PNG files, PNG bytes or RGBA8 buffers via CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;
use tally_core::config::DEFAULT_CANVAS_HEIGHT;
use tally_core::{ApproxTextMeasure, CanvasSize, Chart, Color, TextMeasure};
use tracing::debug;

use crate::surface::{to_skia_color, SkiaSurface};
use crate::text::{TextShaper, DEFAULT_LABEL_SIZE};

pub const WIDTH: i32 = 800;
pub const HEIGHT: i32 = DEFAULT_CANVAS_HEIGHT as i32;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub background: Color,
    pub label_color: Color,
    pub label_size: f32,
    /// When false, labels are skipped and space is reserved with a fixed-advance estimate,
    /// which keeps output independent of installed fonts.
    pub draw_labels: bool,
    /// Draw the highlight layer on top of the base layer.
    pub draw_overlay: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            background: Color::WHITE,
            label_color: Color::BLACK,
            label_size: DEFAULT_LABEL_SIZE,
            draw_labels: true,
            draw_overlay: true,
        }
    }
}

/// CPU raster renderer. Holds the font collection so repeated renders reuse it.
pub struct SkiaRenderer {
    shaper: TextShaper,
    opts: RenderOptions,
}

impl SkiaRenderer {
    pub fn new(opts: RenderOptions) -> Self {
        let shaper = TextShaper::new(opts.label_size, to_skia_color(opts.label_color));
        Self { shaper, opts }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.opts
    }

    /// Draw `chart` onto a fresh raster surface sized from the options.
    pub fn render_surface(&self, chart: &mut Chart) -> Result<skia::Surface> {
        let (w, h) = (self.opts.width, self.opts.height);
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(to_skia_color(self.opts.background));

        chart.resize(CanvasSize::new(w as f32, h as f32));
        let approx = ApproxTextMeasure::new(self.opts.label_size);
        let measure: &dyn TextMeasure = if self.opts.draw_labels { &self.shaper } else { &approx };
        let mut target = SkiaSurface::new(canvas, self.opts.draw_labels.then_some(&self.shaper));
        chart.draw_base(&mut target, measure)?;
        if self.opts.draw_overlay {
            chart.draw_overlay(&mut target);
        }
        debug!(width = w, height = h, kind = ?chart.kind(), "chart rendered");
        Ok(surface)
    }

    /// Render to PNG bytes.
    pub fn render_to_png_bytes(&self, chart: &mut Chart) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(chart)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(&self, chart: &mut Chart, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(chart)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Render to unpremultiplied RGBA8. Returns `(pixels, width, height, row_bytes)`.
    pub fn render_to_rgba8(&self, chart: &mut Chart) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.render_surface(chart)?;
        let (w, h) = (self.opts.width, self.opts.height);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            anyhow::bail!("failed to read back {w}x{h} pixels");
        }
        Ok((pixels, w as u32, h as u32, row_bytes))
    }
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}
