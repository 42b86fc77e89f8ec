use heimdall_ve::types::BlockData;
use heimdall_ve::{BlockSource, FetchError, VotingPowerSource};
use reqwest::blocking::Client;

use crate::config::RpcConfig;
use crate::response::{parse_block, parse_total_power};

/// Blocking client for the CometBFT RPC and Heimdall REST endpoints.
#[derive(Debug, Clone)]
pub struct RpcClient {
    comet_url: String,
    heimdall_url: String,
    client: Client,
}

impl RpcClient {
    pub fn new(cfg: &RpcConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(cfg.timeout)
            .build()
            .map_err(|e| FetchError::Transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            comet_url: cfg.comet_endpoint.trim_end_matches('/').to_string(),
            heimdall_url: cfg.heimdall_endpoint.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn comet_url(&self) -> &str {
        &self.comet_url
    }

    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        tracing::debug!("GET {}", url);
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = resp.bytes().map_err(|e| FetchError::Transport(e.to_string()))?;
        Ok(bytes.to_vec())
    }

    pub fn fetch_block(&self, height: i64) -> Result<BlockData, FetchError> {
        let url = format!("{}/block?height={}", self.comet_url, height);
        parse_block(&self.get(&url)?)
    }

    pub fn fetch_total_power(&self) -> Result<i64, FetchError> {
        let url = format!("{}/stake/total-power", self.heimdall_url);
        parse_total_power(&self.get(&url)?)
    }
}

impl BlockSource for RpcClient {
    fn block(&self, height: i64) -> Result<BlockData, FetchError> {
        self.fetch_block(height)
    }
}

impl VotingPowerSource for RpcClient {
    fn total_voting_power(&self) -> Result<i64, FetchError> {
        self.fetch_total_power()
    }
}
