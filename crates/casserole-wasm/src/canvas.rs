//! `HtmlCanvasElement` drawing surface.
//!
//! Wraps a canvas and its `"2d"` context behind `DrawingSurface`. The canvas
//! size stays owned by the page; this type only reads it.

use casserole_core::{Color, DrawingSurface};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// A browser canvas and its 2D rendering context.
///
/// Cloning copies the JS handles, so clones draw to the same canvas.
#[derive(Debug, Clone)]
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Look up a `<canvas>` by element id and open its 2D context.
    ///
    /// # Errors
    ///
    /// Fails when there is no document, no element with `id`, the element is
    /// not a canvas, or the 2D context is unavailable.
    pub fn from_element_id(id: &str) -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no global document"))?;
        let element = document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("no element with id \"{id}\"")))?;
        let canvas = element
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str(&format!("element \"{id}\" is not a <canvas>")))?;
        Self::from_canvas(canvas)
    }

    /// Open the 2D context of an existing canvas.
    pub fn from_canvas(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("context is not a CanvasRenderingContext2d"))?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl DrawingSurface for CanvasSurface {
    /// Strings, `CanvasGradient` and `CanvasPattern` all pass through.
    type Style = JsValue;
    type Error = JsValue;

    fn width(&self) -> u32 {
        self.canvas.width()
    }

    fn height(&self) -> u32 {
        self.canvas.height()
    }

    fn set_fill_style(&mut self, style: &JsValue) -> Result<(), JsValue> {
        // Plain property assignment: the context decides what it accepts.
        // Converting `style` may run page JS, which may throw.
        let key = JsValue::from_str("fillStyle");
        js_sys::Reflect::set(self.ctx.as_ref(), &key, style).map(drop)
    }

    fn set_fill_color(&mut self, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.fill_rect(x, y, width, height);
    }
}
