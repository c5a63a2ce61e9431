use rayon::prelude::*;

use crate::core::actions::render_grid::{render_row, sample_axes};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_request::RenderRequest;
use crate::core::mandelbrot::greyscale::GreyscaleMap;

/// Renders the requested grid with rayon's work-stealing scheduler, one image
/// row per task.
///
/// Every row writes only its own pre-computed slice of the buffer, so the
/// result is byte-identical to [`render_grid`](super::render_grid::render_grid)
/// regardless of scheduling order.
#[must_use]
pub fn render_grid_rayon(req: &RenderRequest) -> PixelBuffer {
    let map = GreyscaleMap::new(req.iteration_limit())
        .expect("iteration limit is validated at request construction");
    let (x_coords, y_coords) = sample_axes(req);

    let mut buffer = PixelBuffer::new(req.x_num(), req.y_num());
    let width = req.x_num() as usize;

    buffer
        .as_mut_bytes()
        .par_chunks_mut(width)
        .zip(y_coords.par_iter())
        .for_each(|(row, &y)| render_row(row, y, &x_coords, req.iteration_limit(), map));

    buffer
}
