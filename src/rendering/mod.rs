pub mod image_io;
pub mod resample;

pub use image_io::{decode_image, encode_png, read_image, write_png};
pub use resample::ImageResampler;
