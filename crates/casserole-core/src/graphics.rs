//! Graphics facade over a single drawing surface.
//!
//! Callers never touch the raw context: they get the surface size, set a
//! fill, and fill rectangles. The surface is injected at construction and
//! owned for the facade's lifetime.

use crate::model::{Color, Dimensions, Position, Size};
use crate::surface::DrawingSurface;

/// Narrow, typed drawing API bound to one surface.
#[derive(Debug)]
pub struct Graphics<S: DrawingSurface> {
    surface: S,
}

impl<S: DrawingSurface> Graphics<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    /// Current pixel size of the surface. Read fresh on every call.
    pub fn screen_dimensions(&self) -> Dimensions {
        self.surface.dimensions()
    }

    /// Forward `style` to the surface as the active fill, unvalidated.
    /// The last style set wins for every later fill.
    ///
    /// # Errors
    ///
    /// Whatever the surface raises for the assignment, untranslated.
    pub fn set_fill_style(&mut self, style: &S::Style) -> Result<(), S::Error> {
        self.surface.set_fill_style(style)
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.surface.set_fill_color(color);
    }

    /// Fill a rectangle with the active fill. Negative extents flip it.
    pub fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        log::trace!("FILL rect at ({x}, {y}) {width}x{height}");
        self.surface.fill_rect(x, y, width, height);
    }

    /// Fill a rectangle with `color`, leaving `color` as the active fill.
    pub fn fill_rect_with(&mut self, position: Position, size: Size, color: Color) {
        self.set_fill_color(color);
        self.fill_rect(position.x, position.y, size.width, size.height);
    }

    /// Fill the whole surface at its current size.
    pub fn fill(&mut self, color: Color) {
        let size = Size::from(self.screen_dimensions());
        self.fill_rect_with(Position::origin(), size, color);
    }

    pub fn present(&mut self) {
        self.surface.present();
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::convert::Infallible;

    /// Minimal double: fixed size, remembers calls as strings.
    #[derive(Debug, Default)]
    struct Probe {
        width: u32,
        height: u32,
        calls: Vec<String>,
    }

    impl DrawingSurface for Probe {
        type Style = str;
        type Error = String;

        fn width(&self) -> u32 {
            self.width
        }

        fn height(&self) -> u32 {
            self.height
        }

        fn set_fill_style(&mut self, style: &str) -> Result<(), String> {
            if style == "throw" {
                return Err("context rejected style".to_string());
            }
            self.calls.push(format!("style {style}"));
            Ok(())
        }

        fn set_fill_color(&mut self, color: Color) {
            self.calls.push(format!("color {color}"));
        }

        fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
            self.calls.push(format!("rect {x} {y} {width} {height}"));
        }

        fn present(&mut self) {
            self.calls.push("present".to_string());
        }
    }

    fn probe(width: u32, height: u32) -> Graphics<Probe> {
        Graphics::new(Probe {
            width,
            height,
            ..Probe::default()
        })
    }

    #[test]
    fn dimensions_reflect_surface_each_call() {
        let mut g = probe(320, 240);
        assert_eq!(g.screen_dimensions(), Dimensions { width: 320, height: 240 });
        assert_eq!(g.screen_dimensions(), g.screen_dimensions());

        g.surface_mut().width = 1024;
        assert_eq!(g.screen_dimensions().width, 1024);
    }

    #[test]
    fn style_and_rect_forwarded_verbatim() {
        let mut g = probe(10, 10);
        g.set_fill_style("definitely not a color").unwrap();
        g.fill_rect(-1.0, 2.5, -3.0, 0.0);
        assert_eq!(
            g.surface().calls,
            vec!["style definitely not a color", "rect -1 2.5 -3 0"]
        );
    }

    #[test]
    fn surface_errors_pass_through_untouched() {
        let mut g = probe(10, 10);
        g.set_fill_style("red").unwrap();
        assert_eq!(
            g.set_fill_style("throw"),
            Err("context rejected style".to_string())
        );
        assert_eq!(g.surface().calls, vec!["style red"]);
    }

    #[test]
    fn infallible_surfaces_need_no_handling() {
        let mut g = Graphics::new(crate::raster::MemorySurface::new(1, 1));
        let result: Result<(), Infallible> = g.set_fill_style("red");
        assert!(result.is_ok());
    }

    #[test]
    fn fill_covers_current_dimensions() {
        let mut g = probe(800, 600);
        g.fill(Color::rgb(0, 255, 0));
        g.present();
        assert_eq!(
            g.into_surface().calls,
            vec!["color rgb(0,255,0)", "rect 0 0 800 600", "present"]
        );
    }

    #[test]
    fn facade_never_resizes() {
        let mut g = probe(50, 40);
        g.fill_rect_with(
            Position { x: 5.0, y: 5.0 },
            Size { width: 100.0, height: 100.0 },
            Color::WHITE,
        );
        assert_eq!(g.screen_dimensions(), Dimensions { width: 50, height: 40 });
    }
}
