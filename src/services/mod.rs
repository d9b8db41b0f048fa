pub mod colorize_service;
pub mod grid_library;

pub use colorize_service::{ColorizeService, Identification};
pub use grid_library::GridLibrary;
