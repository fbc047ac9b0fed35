// src/infrastructure/mod.rs
pub mod config;
pub mod file_store;
pub mod ids;
pub mod renderer;

pub use config::Config;
pub use file_store::FileStore;
pub use ids::UuidGenerator;
