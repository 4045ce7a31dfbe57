// src/core.rs
pub mod codec;
pub mod demo;
pub mod gradebook;
pub mod input;
pub mod loader;
pub mod summary;
