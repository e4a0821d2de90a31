pub mod actions;
pub mod data;
pub mod mandelbrot;
pub mod util;
