// src/lib.rs
pub mod cli;
pub mod core;
pub mod export;
pub mod generators;
pub mod logging;
pub mod models;
pub mod utils;
