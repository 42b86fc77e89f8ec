//! JSON response shapes of the block and total-power endpoints.
//!
//! Every field is optional at the serde level and checked explicitly, so a
//! response whose shape drifted fails loudly instead of decoding to defaults.

use heimdall_ve::types::BlockData;
use heimdall_ve::FetchError;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct RpcEnvelope<T> {
    result: Option<T>,
    error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
    #[serde(default)]
    data: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct BlockResult {
    block: Option<Block>,
}

#[derive(Debug, Deserialize)]
struct Block {
    header: Option<Header>,
    data: Option<Data>,
}

#[derive(Debug, Deserialize)]
struct Header {
    chain_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Data {
    txs: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PowerValue {
    Text(String),
    Number(i64),
}

#[derive(Debug, Deserialize)]
struct TotalPowerResponse {
    total_power: Option<PowerValue>,
}

fn missing(field: &str) -> FetchError {
    FetchError::InvalidResponse(format!("missing field `{}`", field))
}

/// Parse a CometBFT `/block` response.
pub fn parse_block(body: &[u8]) -> Result<BlockData, FetchError> {
    let envelope: RpcEnvelope<BlockResult> = serde_json::from_slice(body)
        .map_err(|e| FetchError::InvalidResponse(e.to_string()))?;

    if let Some(err) = envelope.error {
        let message = match err.data {
            Some(serde_json::Value::String(data)) => format!("{}: {}", err.message, data),
            _ => err.message,
        };
        return Err(FetchError::Rpc {
            code: err.code,
            message,
        });
    }

    let block = envelope
        .result
        .ok_or_else(|| missing("result"))?
        .block
        .ok_or_else(|| missing("result.block"))?;

    let chain_id = block
        .header
        .ok_or_else(|| missing("result.block.header"))?
        .chain_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| missing("result.block.header.chain_id"))?;

    // CometBFT renders an empty tx list as `null`.
    let txs = block
        .data
        .ok_or_else(|| missing("result.block.data"))?
        .txs
        .unwrap_or_default();

    Ok(BlockData { chain_id, txs })
}

/// Parse a Heimdall `/stake/total-power` response.
pub fn parse_total_power(body: &[u8]) -> Result<i64, FetchError> {
    let resp: TotalPowerResponse = serde_json::from_slice(body)
        .map_err(|e| FetchError::InvalidResponse(e.to_string()))?;

    match resp.total_power.ok_or_else(|| missing("total_power"))? {
        PowerValue::Number(n) => Ok(n),
        PowerValue::Text(s) => s.trim().parse::<i64>().map_err(|e| {
            FetchError::InvalidResponse(format!("total_power {:?} is not an integer: {}", s, e))
        }),
    }
}
