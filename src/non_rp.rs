// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Classification of the non-replay-protected vote extension.
//!
//! Consensus gives this field no height binding, so a validator with nothing
//! to propose signs a placeholder that embeds the previous height and the chain
//! id. Anything else must be a checkpoint proposal prefixed by a one-byte tag.

use prost::Message;

use crate::config::{DUMMY_NON_RP_MARKER, NON_RP_SEPARATOR};
use crate::error::DecodeError;
use crate::types::{CheckpointMsg, NonRpClassification};

/// Decodes the checkpoint body that follows the tag byte.
pub trait CheckpointCodec {
    fn decode_checkpoint(&self, body: &[u8]) -> Result<CheckpointMsg, String>;
}

/// Protobuf `MsgCheckpoint` codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProtoCheckpointCodec;

impl CheckpointCodec for ProtoCheckpointCodec {
    fn decode_checkpoint(&self, body: &[u8]) -> Result<CheckpointMsg, String> {
        if body.is_empty() {
            return Err("empty checkpoint body".to_string());
        }
        CheckpointMsg::decode(body).map_err(|e| e.to_string())
    }
}

/// Build the placeholder for `height` (already offset by the caller) and `chain_id`.
///
/// Layout: `MARKER | height as i64 big-endian | chain_id`.
pub fn dummy_marker(height: i64, chain_id: &str) -> Vec<u8> {
    let mut buf = Vec::with_capacity(DUMMY_NON_RP_MARKER.len() + 10 + chain_id.len());
    buf.extend_from_slice(DUMMY_NON_RP_MARKER);
    buf.push(NON_RP_SEPARATOR);
    buf.extend_from_slice(&height.to_be_bytes());
    buf.push(NON_RP_SEPARATOR);
    buf.extend_from_slice(chain_id.as_bytes());
    buf
}

/// True when `payload` is exactly the placeholder expected at `height` on `chain_id`.
pub fn is_dummy(height: i64, chain_id: &str, payload: &[u8]) -> bool {
    payload == dummy_marker(height.wrapping_sub(1), chain_id).as_slice()
}

/// Classify vote `index`'s non-RP payload observed at `height` on `chain_id`.
pub fn classify_with<C: CheckpointCodec + ?Sized>(
    codec: &C,
    index: usize,
    height: i64,
    chain_id: &str,
    payload: &[u8],
) -> Result<NonRpClassification, DecodeError> {
    if is_dummy(height, chain_id, payload) {
        return Ok(NonRpClassification::Dummy);
    }

    let unrecognized = |reason: String| DecodeError::UnrecognizedNonRpPayload { index, reason };

    let Some((_tag, body)) = payload.split_first() else {
        return Err(unrecognized("empty payload".to_string()));
    };

    codec
        .decode_checkpoint(body)
        .map(NonRpClassification::Checkpoint)
        .map_err(unrecognized)
}

/// [`classify_with`] using the protobuf checkpoint codec.
pub fn classify(
    index: usize,
    height: i64,
    chain_id: &str,
    payload: &[u8],
) -> Result<NonRpClassification, DecodeError> {
    classify_with(&ProtoCheckpointCodec, index, height, chain_id, payload)
}

/// Encode a checkpoint the way validators put it on the wire: tag byte, then body.
pub fn encode_checkpoint_payload(tag: u8, msg: &CheckpointMsg) -> Vec<u8> {
    let mut buf = Vec::with_capacity(1 + msg.encoded_len());
    buf.push(tag);
    buf.extend_from_slice(&msg.encode_to_vec());
    buf
}
