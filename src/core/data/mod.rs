pub mod complex;
pub mod pixel_buffer;
pub mod render_request;
