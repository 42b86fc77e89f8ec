// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Extended commit info as carried in the first transaction of a Heimdall block.
//!
//! The wire messages mirror the CometBFT fork's `ExtendedCommitInfo`, which adds
//! the non-replay-protected extension fields (tags 6 and 7) to each vote.

/// `tendermint.types.BlockIDFlag`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum BlockIdFlag {
    Unknown = 0,
    Absent = 1,
    Commit = 2,
    Nil = 3,
}

impl BlockIdFlag {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            BlockIdFlag::Unknown => "BLOCK_ID_FLAG_UNKNOWN",
            BlockIdFlag::Absent => "BLOCK_ID_FLAG_ABSENT",
            BlockIdFlag::Commit => "BLOCK_ID_FLAG_COMMIT",
            BlockIdFlag::Nil => "BLOCK_ID_FLAG_NIL",
        }
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WireValidator {
    #[prost(bytes = "vec", tag = "1")]
    pub address: Vec<u8>,
    #[prost(int64, tag = "3")]
    pub power: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WireExtendedVoteInfo {
    #[prost(message, optional, tag = "1")]
    pub validator: Option<WireValidator>,
    #[prost(bytes = "vec", tag = "3")]
    pub vote_extension: Vec<u8>,
    #[prost(bytes = "vec", tag = "4")]
    pub extension_signature: Vec<u8>,
    #[prost(enumeration = "BlockIdFlag", tag = "5")]
    pub block_id_flag: i32,
    #[prost(bytes = "vec", tag = "6")]
    pub non_rp_vote_extension: Vec<u8>,
    #[prost(bytes = "vec", tag = "7")]
    pub non_rp_extension_signature: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WireExtendedCommitInfo {
    #[prost(int32, tag = "1")]
    pub round: i32,
    #[prost(message, repeated, tag = "2")]
    pub votes: Vec<WireExtendedVoteInfo>,
}

/// One validator's vote as recorded in the commit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoteRecord {
    pub validator_address: Vec<u8>,
    pub voting_power: i64,
    pub block_id_flag: BlockIdFlag,
    pub vote_extension: Vec<u8>,
    pub extension_signature: Vec<u8>,
    pub non_rp_vote_extension: Vec<u8>,
    pub non_rp_extension_signature: Vec<u8>,
}

impl From<WireExtendedVoteInfo> for VoteRecord {
    fn from(vote: WireExtendedVoteInfo) -> Self {
        // Read the flag before moving the byte fields out.
        let block_id_flag = vote.block_id_flag();
        let (validator_address, voting_power) = match vote.validator {
            Some(v) => (v.address, v.power),
            None => (Vec::new(), 0),
        };

        Self {
            validator_address,
            voting_power,
            block_id_flag,
            vote_extension: vote.vote_extension,
            extension_signature: vote.extension_signature,
            non_rp_vote_extension: vote.non_rp_vote_extension,
            non_rp_extension_signature: vote.non_rp_extension_signature,
        }
    }
}

/// Decoded commit for one height. Votes keep the order they were received in.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct CommitInfo {
    pub round: i32,
    pub votes: Vec<VoteRecord>,
}

impl From<WireExtendedCommitInfo> for CommitInfo {
    fn from(info: WireExtendedCommitInfo) -> Self {
        Self {
            round: info.round,
            votes: info.votes.into_iter().map(VoteRecord::from).collect(),
        }
    }
}
