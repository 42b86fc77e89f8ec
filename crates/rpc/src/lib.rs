pub mod client;
pub mod config;
pub mod response;

pub use client::RpcClient;
pub use config::RpcConfig;
