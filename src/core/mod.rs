// src/core/mod.rs
pub mod engine;
pub mod index;
pub mod stats;
pub mod types;
