// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Replay-protected vote extension (`heimdallv2.sidetxs.VoteExtension`).

/// A validator's verdict on a side transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum SideTxVote {
    Unspecified = 0,
    Yes = 1,
    No = 2,
}

impl SideTxVote {
    pub const ALL: [SideTxVote; 3] = [SideTxVote::Yes, SideTxVote::No, SideTxVote::Unspecified];

    pub fn label(&self) -> &'static str {
        match self {
            SideTxVote::Unspecified => "UNSPECIFIED",
            SideTxVote::Yes => "YES",
            SideTxVote::No => "NO",
        }
    }
}

#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct SideTxResponse {
    #[prost(bytes = "vec", tag = "1")]
    pub tx_hash: Vec<u8>,
    #[prost(enumeration = "SideTxVote", tag = "2")]
    pub result: i32,
}

#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct MilestoneProposition {
    #[prost(bytes = "vec", repeated, tag = "1")]
    pub block_hashes: Vec<Vec<u8>>,
    #[prost(uint64, tag = "2")]
    pub start_block_number: u64,
    #[prost(bytes = "vec", tag = "3")]
    pub parent_hash: Vec<u8>,
}

#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct VoteExtension {
    #[prost(bytes = "vec", tag = "1")]
    pub block_hash: Vec<u8>,
    #[prost(int64, tag = "2")]
    pub height: i64,
    #[prost(message, repeated, tag = "3")]
    pub side_tx_responses: Vec<SideTxResponse>,
    #[prost(message, optional, tag = "4")]
    pub milestone_proposition: Option<MilestoneProposition>,
}

impl VoteExtension {
    /// True for the zero value, i.e. a vote that carried no extension data.
    pub fn is_empty(&self) -> bool {
        *self == VoteExtension::default()
    }
}
