//! The drawing-surface abstraction.
//!
//! A surface is a raster target owned by the host (a browser canvas, an
//! in-memory bitmap). The facade only ever talks to it through this trait,
//! so any implementation can be swapped in for tests.

use crate::model::{Color, Dimensions, return_size};
use serde::{Deserialize, Serialize};

/// Capabilities the graphics facade needs from a drawing context.
///
/// `width`/`height` are read-only here: the host owns the surface size.
pub trait DrawingSurface {
    /// Whatever the underlying context accepts as a fill style: CSS text
    /// for the in-memory raster, an arbitrary JS value for a browser canvas.
    type Style: ?Sized;

    /// What the context raises when it rejects a style assignment outright.
    /// Surfaces that cannot fail use `std::convert::Infallible`.
    type Error;

    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Make `style` the active fill. Values the context cannot interpret
    /// are handled however the context handles them; anything it throws is
    /// returned unchanged.
    fn set_fill_style(&mut self, style: &Self::Style) -> Result<(), Self::Error>;

    /// Make a concrete color the active fill.
    fn set_fill_color(&mut self, color: Color);

    /// Fill the rectangle using the active fill.
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Flush pending output to the display. Canvases that update live
    /// have nothing to do.
    fn present(&mut self) {}

    fn dimensions(&self) -> Dimensions {
        return_size(self.width(), self.height())
    }
}

/// A single recorded surface mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum DrawCommand {
    /// Raw style text as passed by the caller, valid or not.
    SetFillStyle { style: String },
    SetFillColor { color: Color },
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Present,
}

/// Surface configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}
