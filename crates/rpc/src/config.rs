use std::time::Duration;

use heimdall_ve::config::{DEFAULT_COMET_ENDPOINT, DEFAULT_HEIMDALL_ENDPOINT, DEFAULT_TIMEOUT_SECS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcConfig {
    /// CometBFT RPC, serves `/block`.
    pub comet_endpoint: String,
    /// Heimdall REST, serves `/stake/total-power`.
    pub heimdall_endpoint: String,
    pub timeout: Duration,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            comet_endpoint: DEFAULT_COMET_ENDPOINT.to_string(),
            heimdall_endpoint: DEFAULT_HEIMDALL_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
