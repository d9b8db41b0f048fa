//! lecroy-colorize
//!
//! Command-line front end for `scope-recolor`: settings files, grid bitmap
//! lookup and image I/O. This library exposes modules for integration testing.

pub mod assets;
pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
