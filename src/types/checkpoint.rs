// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Checkpoint proposal carried in the non-replay-protected extension.

/// `heimdallv2.checkpoint.MsgCheckpoint`.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct CheckpointMsg {
    #[prost(string, tag = "1")]
    pub proposer: String,
    #[prost(uint64, tag = "2")]
    pub start_block: u64,
    #[prost(uint64, tag = "3")]
    pub end_block: u64,
    #[prost(bytes = "vec", tag = "4")]
    pub root_hash: Vec<u8>,
    #[prost(bytes = "vec", tag = "5")]
    pub account_root_hash: Vec<u8>,
    #[prost(string, tag = "6")]
    pub bor_chain_id: String,
}

/// What a validator's non-RP extension turned out to be.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NonRpClassification {
    /// The deterministic placeholder bound to the previous height and chain.
    Dummy,
    Checkpoint(CheckpointMsg),
}

impl NonRpClassification {
    pub fn label(&self) -> &'static str {
        match self {
            NonRpClassification::Dummy => "DUMMY",
            NonRpClassification::Checkpoint(_) => "CHECKPOINT",
        }
    }
}
