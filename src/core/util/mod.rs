pub mod equal_range;
