pub mod commands;
pub mod engine;
pub mod render;
pub mod telemetry;
