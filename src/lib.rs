mod core;
mod server;
mod storage;

pub use crate::core::actions::cancellation::{CancelToken, Cancelled, Deadline, NeverCancel};
pub use crate::core::actions::render_grid::{render_grid, render_grid_with_cancel};
pub use crate::core::actions::render_grid_rayon::render_grid_rayon;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::render_request::{RenderRequest, ValidationError};
pub use crate::core::mandelbrot::escape::escape_time;
pub use crate::core::mandelbrot::greyscale::{GreyscaleMap, GreyscaleMapError};
pub use crate::core::util::equal_range::equal_range;
pub use crate::server::{app, RENDER_PATH};
pub use crate::storage::write_pgm::write_pgm;
