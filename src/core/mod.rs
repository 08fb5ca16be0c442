pub mod app;
pub mod config;
pub mod directory;
pub mod error;
pub mod loader;
pub mod matcher;
pub mod models;
pub mod normalize;
pub mod provinces;
pub mod source;
