pub mod escape;
pub mod greyscale;
