//! In-memory software raster with 2D-canvas fill semantics.
//!
//! Used as the headless drawing surface and as the test double for the
//! facade. Every mutation is also appended to a command log.

use crate::model::Color;
use crate::surface::{DrawCommand, DrawingSurface, SurfaceConfig};
use std::convert::Infallible;

/// A width×height RGBA bitmap plus the fill state of its context.
///
/// A fresh (or resized) surface is transparent black with an opaque black
/// fill, the same as a new canvas.
#[derive(Debug, Clone)]
pub struct MemorySurface {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
    fill: Color,
    commands: Vec<DrawCommand>,
}

impl MemorySurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::TRANSPARENT; pixel_count(width, height)],
            fill: Color::BLACK,
            commands: Vec::new(),
        }
    }

    pub fn with_config(config: SurfaceConfig) -> Self {
        Self::new(config.width, config.height)
    }

    /// Change the surface size as the host would. Clears the bitmap and
    /// resets the fill; the command log is kept.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels = vec![Color::TRANSPARENT; pixel_count(width, height)];
        self.fill = Color::BLACK;
    }

    /// Color at `(x, y)`, or `None` outside the bitmap.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(self.index(x, y)).copied()
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// The fill that the next `fill_rect` will use.
    pub fn fill_color(&self) -> Color {
        self.fill
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    fn blend(&mut self, x: u32, y: u32, src: Color) {
        let idx = self.index(x, y);
        if let Some(dst) = self.pixels.get_mut(idx) {
            *dst = source_over(src, *dst);
        }
    }
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::with_config(SurfaceConfig::default())
    }
}

impl DrawingSurface for MemorySurface {
    type Style = str;
    type Error = Infallible;

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_fill_style(&mut self, style: &str) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::SetFillStyle {
            style: style.to_string(),
        });
        match Color::from_css(style) {
            Some(color) => self.fill = color,
            None => log::debug!("ignoring unparseable fill style {style:?}"),
        }
        Ok(())
    }

    fn set_fill_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetFillColor { color });
        self.fill = color;
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
        });

        if ![x, y, width, height].iter().all(|v| v.is_finite()) {
            return;
        }
        if width == 0.0 || height == 0.0 || self.fill.a == 0 {
            return;
        }

        let Some((cols, rows)) = covered_span(x, width, self.width)
            .zip(covered_span(y, height, self.height))
        else {
            return;
        };

        let src = self.fill;
        for py in rows.0..rows.1 {
            for px in cols.0..cols.1 {
                self.blend(px, py, src);
            }
        }
    }

    fn present(&mut self) {
        self.commands.push(DrawCommand::Present);
    }
}

fn pixel_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

/// Pixel indices `[start, end)` whose centers fall in the span starting at
/// `origin` with signed `extent`, clipped to `[0, limit)`.
fn covered_span(origin: f64, extent: f64, limit: u32) -> Option<(u32, u32)> {
    let (lo, hi) = if extent < 0.0 {
        (origin + extent, origin)
    } else {
        (origin, origin + extent)
    };

    // Center of pixel i is i + 0.5; covered iff lo <= i + 0.5 < hi.
    let start = (lo - 0.5).ceil().max(0.0);
    let end = (hi - 0.5).ceil().min(f64::from(limit));
    if start >= end {
        return None;
    }
    Some((start as u32, end as u32))
}

/// Porter-Duff source-over on straight (non-premultiplied) alpha.
fn source_over(src: Color, dst: Color) -> Color {
    if src.a == 255 {
        return src;
    }

    let sa = f64::from(src.a) / 255.0;
    let da = f64::from(dst.a) / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return Color::TRANSPARENT;
    }

    let channel = |s: u8, d: u8| -> u8 {
        let v = (f64::from(s) * sa + f64::from(d) * da * (1.0 - sa)) / out_a;
        v.round().clamp(0.0, 255.0) as u8
    };
    Color::rgba(
        channel(src.r, dst.r),
        channel(src.g, dst.g),
        channel(src.b, dst.b),
        (out_a * 255.0).round() as u8,
    )
}
