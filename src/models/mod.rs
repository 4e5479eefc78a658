pub mod config;
pub mod minecraft_models;
