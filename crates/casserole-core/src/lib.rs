pub mod graphics;
pub mod model;
pub mod raster;
pub mod surface;

pub use graphics::Graphics;
pub use model::*;
pub use raster::MemorySurface;
pub use surface::{DrawCommand, DrawingSurface, SurfaceConfig};
