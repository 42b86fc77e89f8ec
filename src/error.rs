// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Error types.

use thiserror::Error;

/// Failure talking to a block or voting power source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// A payload that could not be turned into a structured record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid base64 in commit transaction: {0}")]
    InvalidBase64(String),

    #[error("malformed extended commit info: {0}")]
    MalformedCommitInfo(String),

    #[error("malformed vote extension in vote {index}: {reason}")]
    MalformedVoteExtension { index: usize, reason: String },

    #[error("unrecognized non-rp vote extension in vote {index}: {reason}")]
    UnrecognizedNonRpPayload { index: usize, reason: String },
}

/// Input that decoded fine but violates a voting power invariant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    #[error("negative voting power {power} in vote {index}")]
    NegativeVotingPower { index: usize, power: i64 },

    #[error("total voting power is {0}, cannot compute percentages")]
    ZeroTotalVotingPower(i64),

    #[error("voting power for {bucket} overflows i64")]
    VotingPowerOverflow { bucket: String },
}

/// Pipeline error. Every variant names the height it happened at.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InspectError {
    #[error("fetch failed at height {height}: {source}")]
    Fetch {
        height: i64,
        #[source]
        source: FetchError,
    },

    #[error("decode failed at height {height}: {source}")]
    Decode {
        height: i64,
        #[source]
        source: DecodeError,
    },

    #[error("invalid data at height {height}: {source}")]
    Data {
        height: i64,
        #[source]
        source: DataError,
    },

    #[error("invalid height range {start}..={end}: {reason}")]
    InvalidRange { start: i64, end: i64, reason: String },
}

impl InspectError {
    /// Height the error is attributed to. For a rejected range this is its start.
    pub fn height(&self) -> i64 {
        match self {
            InspectError::Fetch { height, .. }
            | InspectError::Decode { height, .. }
            | InspectError::Data { height, .. } => *height,
            InspectError::InvalidRange { start, .. } => *start,
        }
    }
}

impl FetchError {
    pub fn at(self, height: i64) -> InspectError {
        InspectError::Fetch { height, source: self }
    }
}

impl DecodeError {
    pub fn at(self, height: i64) -> InspectError {
        InspectError::Decode { height, source: self }
    }
}

impl DataError {
    pub fn at(self, height: i64) -> InspectError {
        InspectError::Data { height, source: self }
    }
}

pub type Result<T> = std::result::Result<T, InspectError>;
