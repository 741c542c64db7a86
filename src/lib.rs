//! pixclean - photo to pixel-art cleaner
//!
//! Command-line front end for the `pixel-quantize` crate: PNG I/O, palette
//! files and YAML configuration.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
