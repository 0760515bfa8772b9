// src/lib.rs

pub mod constants;
pub mod errors;
pub mod geometry;
pub mod settings;
pub mod ui;
pub mod utils;
pub mod window;
