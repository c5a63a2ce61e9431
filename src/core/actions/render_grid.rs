use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::data::complex::Complex;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_request::RenderRequest;
use crate::core::mandelbrot::escape::escape_time;
use crate::core::mandelbrot::greyscale::GreyscaleMap;
use crate::core::util::equal_range::equal_range;

/// Fills one image row: every cell is a pure function of its own sample
/// coordinates, so the sequential and parallel renders share this.
pub(crate) fn render_row(row: &mut [u8], y: f64, x_coords: &[f64], limit: u32, map: GreyscaleMap) {
    for (pixel, &x) in row.iter_mut().zip(x_coords) {
        let iterations = escape_time(Complex { real: x, imag: y }, limit);
        *pixel = map.pixel(iterations);
    }
}

pub(crate) fn sample_axes(req: &RenderRequest) -> (Vec<f64>, Vec<f64>) {
    // n sample points span n - 1 intervals; a one-point axis degenerates to
    // the single coordinate x_min / y_min.
    let x_coords = equal_range(req.x_min(), req.x_max(), req.x_num() - 1);
    let y_coords = equal_range(req.y_min(), req.y_max(), req.y_num() - 1);
    (x_coords, y_coords)
}

/// Renders the requested grid row by row (y outer, x inner), checking the
/// cancellation token before each row. On cancellation the partial buffer is
/// dropped; callers never observe a half-filled render.
pub fn render_grid_with_cancel(
    req: &RenderRequest,
    cancel: &impl CancelToken,
) -> Result<PixelBuffer, Cancelled> {
    let map = GreyscaleMap::new(req.iteration_limit())
        .expect("iteration limit is validated at request construction");
    let (x_coords, y_coords) = sample_axes(req);

    let mut buffer = PixelBuffer::new(req.x_num(), req.y_num());
    let width = req.x_num() as usize;

    for (row, &y) in buffer.as_mut_bytes().chunks_mut(width).zip(&y_coords) {
        if cancel.is_cancelled() {
            return Err(Cancelled);
        }

        render_row(row, y, &x_coords, req.iteration_limit(), map);
    }

    Ok(buffer)
}

/// Sequential render of a validated request into a row-major grayscale buffer.
#[must_use]
pub fn render_grid(req: &RenderRequest) -> PixelBuffer {
    match render_grid_with_cancel(req, &NeverCancel) {
        Ok(buffer) => buffer,
        Err(Cancelled) => unreachable!("NeverCancel never cancels"),
    }
}
