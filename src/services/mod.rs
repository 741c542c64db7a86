pub mod clean_service;
pub mod palette_loader;

pub use clean_service::CleanService;
pub use palette_loader::{load_palette_file, palette_from_hex_list};
