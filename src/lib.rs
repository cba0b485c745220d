// Core infrastructure modules
pub mod core;

// Feature-specific modules
pub mod config;
pub mod demo;
pub mod prompt;
pub mod render;
pub mod seed;
pub mod sql;
pub mod strategy;
