// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Commit info and vote extension decoding.

use base64::{engine::general_purpose::STANDARD as B64, Engine};
use prost::Message;

use crate::error::DecodeError;
use crate::types::commit::WireExtendedCommitInfo;
use crate::types::{CommitInfo, VoteExtension};

/// Decode the commit info carried by a block's transactions.
///
/// Returns `Ok(None)` when the block has no transactions: the height simply
/// carries no vote extension data.
pub fn decode_commit_info(txs: &[String]) -> Result<Option<CommitInfo>, DecodeError> {
    let Some(first) = txs.first() else {
        return Ok(None);
    };

    let raw = B64
        .decode(first.trim())
        .map_err(|e| DecodeError::InvalidBase64(e.to_string()))?;

    decode_commit_info_bytes(&raw).map(Some)
}

/// Protobuf-decode an `ExtendedCommitInfo`.
pub fn decode_commit_info_bytes(raw: &[u8]) -> Result<CommitInfo, DecodeError> {
    let wire = WireExtendedCommitInfo::decode(raw)
        .map_err(|e| DecodeError::MalformedCommitInfo(e.to_string()))?;
    Ok(wire.into())
}

/// Decode a single vote extension. Empty input is the zero value.
pub fn decode_vote_extension(index: usize, raw: &[u8]) -> Result<VoteExtension, DecodeError> {
    if raw.is_empty() {
        return Ok(VoteExtension::default());
    }

    VoteExtension::decode(raw).map_err(|e| DecodeError::MalformedVoteExtension {
        index,
        reason: e.to_string(),
    })
}

/// Decode every vote's extension, positionally aligned with `info.votes`.
///
/// The first malformed extension fails the whole commit.
pub fn decode_vote_extensions(info: &CommitInfo) -> Result<Vec<VoteExtension>, DecodeError> {
    info.votes
        .iter()
        .enumerate()
        .map(|(i, vote)| decode_vote_extension(i, &vote.vote_extension))
        .collect()
}
