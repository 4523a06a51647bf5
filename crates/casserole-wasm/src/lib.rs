//! WASM bridge for Casserole — binds the graphics facade to an HTML canvas.
//!
//! Compiled via `wasm-pack build --target web`. The page calls
//! `initGraphics()` once, then draws through `getScreenDimensions`,
//! `setFillStyle` and `fillRect`.

mod canvas;

pub use canvas::CanvasSurface;

use casserole_core::{Dimensions, DrawingSurface, Graphics};
use std::cell::RefCell;
use std::fmt;
use wasm_bindgen::prelude::*;

/// Element id looked up when `initGraphics` is called without one.
pub const DEFAULT_CANVAS_ID: &str = "canvas";

/// The surface the exports draw to.
///
/// Lookups hand out a clone and release the borrow before any drawing
/// happens: drawing can call back into page JS, which can call the exports
/// again.
struct Binding<S> {
    surface: RefCell<Option<S>>,
}

impl<S> Binding<S> {
    const fn new() -> Self {
        Self {
            surface: RefCell::new(None),
        }
    }

    fn bind(&self, surface: S) {
        self.surface.replace(Some(surface));
    }
}

impl<S: DrawingSurface + Clone> Binding<S> {
    fn graphics(&self) -> Result<Graphics<S>, NotInitialized> {
        let surface = self.surface.borrow().clone();
        surface.map(Graphics::new).ok_or(NotInitialized)
    }
}

thread_local! {
    static BINDING: Binding<CanvasSurface> = const { Binding::new() };
}

fn bound_graphics() -> Result<Graphics<CanvasSurface>, NotInitialized> {
    BINDING.with(Binding::graphics)
}

/// Canvas size as seen from JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl From<Dimensions> for Size {
    fn from(d: Dimensions) -> Self {
        Self {
            width: d.width,
            height: d.height,
        }
    }
}

impl From<Size> for Dimensions {
    fn from(s: Size) -> Self {
        casserole_core::return_size(s.width, s.height)
    }
}

/// Package a width and height into a `Size`.
#[wasm_bindgen]
pub fn return_size(width: u32, height: u32) -> Size {
    casserole_core::return_size(width, height).into()
}

/// Drawing was attempted before `initGraphics` succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NotInitialized;

impl fmt::Display for NotInitialized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("graphics not initialized: call initGraphics() first")
    }
}

impl From<NotInitialized> for JsValue {
    fn from(e: NotInitialized) -> Self {
        js_sys::Error::new(&e.to_string()).into()
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
}

/// Bind the module to the `<canvas>` with `canvas_id` (default `"canvas"`).
/// Calling again rebinds to the new canvas.
#[wasm_bindgen(js_name = initGraphics)]
pub fn init_graphics(canvas_id: Option<String>) -> Result<(), JsValue> {
    let id = canvas_id.as_deref().unwrap_or(DEFAULT_CANVAS_ID);
    let surface = CanvasSurface::from_element_id(id)?;

    let dims = surface.dimensions();
    log::info!("graphics bound to #{id} ({}x{})", dims.width, dims.height);

    BINDING.with(|binding| binding.bind(surface));
    Ok(())
}

#[wasm_bindgen(js_name = getScreenDimensions)]
pub fn get_screen_dimensions() -> Result<Size, JsValue> {
    Ok(bound_graphics()?.screen_dimensions().into())
}

/// Accepts anything `fillStyle` accepts: CSS text, gradients, patterns.
/// Exceptions raised while assigning it are rethrown.
#[wasm_bindgen(js_name = setFillStyle)]
pub fn set_fill_style(style: &JsValue) -> Result<(), JsValue> {
    bound_graphics()?.set_fill_style(style)
}

#[wasm_bindgen(js_name = fillRect)]
pub fn fill_rect(x: f64, y: f64, width: f64, height: f64) -> Result<(), JsValue> {
    bound_graphics()?.fill_rect(x, y, width, height);
    Ok(())
}
