pub mod pixel_to_complex;
