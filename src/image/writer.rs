pub mod gbb;
pub mod ppm;
