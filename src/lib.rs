pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod mask;
pub mod pattern;
pub mod templates;
