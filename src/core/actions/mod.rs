pub mod cancellation;
pub mod render_grid;
pub mod render_grid_rayon;
