// src/lib.rs

pub mod charts;
pub mod config;
pub mod core;
pub mod error;
pub mod loader;
pub mod persistence;
pub mod ui;
pub use crate::core::engine::VerbInfoEngine;
