// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Core data types.

pub mod checkpoint;
pub mod commit;
pub mod vote_ext;

pub use checkpoint::{CheckpointMsg, NonRpClassification};
pub use commit::{BlockIdFlag, CommitInfo, VoteRecord};
pub use vote_ext::{MilestoneProposition, SideTxResponse, SideTxVote, VoteExtension};

/// Block data as reported by the block source for a single height.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct BlockData {
    pub chain_id: String,
    /// Base64 transactions, in block order. The first one carries the commit info.
    pub txs: Vec<String>,
}
