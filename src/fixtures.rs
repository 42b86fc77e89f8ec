// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Builders for encoded commits and an in-memory chain, shared by the tests of
//! every crate in the workspace.

use std::cell::RefCell;
use std::collections::HashMap;

use base64::{engine::general_purpose::STANDARD as B64, Engine};
use prost::Message;

use crate::error::FetchError;
use crate::non_rp::{dummy_marker, encode_checkpoint_payload};
use crate::pipeline::{BlockSource, VotingPowerSource};
use crate::types::commit::{WireExtendedCommitInfo, WireExtendedVoteInfo, WireValidator};
use crate::types::{
    BlockData, BlockIdFlag, CheckpointMsg, MilestoneProposition, SideTxResponse, SideTxVote,
    VoteExtension,
};

pub const TEST_CHAIN_ID: &str = "heimdallv2-test";

/// Tag byte validators prepend to an encoded checkpoint.
pub const CHECKPOINT_TAG: u8 = 0x01;

/// Builds one `ExtendedVoteInfo` on the wire.
#[derive(Clone, Debug)]
pub struct VoteFixture {
    pub address: Vec<u8>,
    pub power: i64,
    pub flag: BlockIdFlag,
    pub extension: Vec<u8>,
    pub non_rp: Vec<u8>,
}

impl VoteFixture {
    pub fn new(address: u8, power: i64) -> Self {
        Self {
            address: vec![address; 20],
            power,
            flag: BlockIdFlag::Commit,
            extension: Vec::new(),
            non_rp: Vec::new(),
        }
    }

    pub fn extension(mut self, ext: &VoteExtension) -> Self {
        self.extension = ext.encode_to_vec();
        self
    }

    pub fn raw_extension(mut self, raw: Vec<u8>) -> Self {
        self.extension = raw;
        self
    }

    /// Use the placeholder expected at `height` on `chain_id`.
    pub fn dummy(mut self, height: i64, chain_id: &str) -> Self {
        self.non_rp = dummy_marker(height - 1, chain_id);
        self
    }

    pub fn checkpoint(mut self, msg: &CheckpointMsg) -> Self {
        self.non_rp = encode_checkpoint_payload(CHECKPOINT_TAG, msg);
        self
    }

    pub fn raw_non_rp(mut self, raw: Vec<u8>) -> Self {
        self.non_rp = raw;
        self
    }

    pub fn to_wire(&self) -> WireExtendedVoteInfo {
        WireExtendedVoteInfo {
            validator: Some(WireValidator {
                address: self.address.clone(),
                power: self.power,
            }),
            vote_extension: self.extension.clone(),
            extension_signature: vec![0xee; 64],
            block_id_flag: self.flag as i32,
            non_rp_vote_extension: self.non_rp.clone(),
            non_rp_extension_signature: vec![0xdd; 64],
        }
    }
}

/// Protobuf bytes of an extended commit info.
pub fn commit_info_bytes(round: i32, votes: &[VoteFixture]) -> Vec<u8> {
    WireExtendedCommitInfo {
        round,
        votes: votes.iter().map(VoteFixture::to_wire).collect(),
    }
    .encode_to_vec()
}

/// Base64 transaction carrying an extended commit info, as the block RPC returns it.
pub fn commit_info_tx(round: i32, votes: &[VoteFixture]) -> String {
    B64.encode(commit_info_bytes(round, votes))
}

pub fn milestone_extension(height: i64, hashes: Vec<Vec<u8>>) -> VoteExtension {
    VoteExtension {
        block_hash: vec![0xaa; 32],
        height,
        side_tx_responses: Vec::new(),
        milestone_proposition: Some(MilestoneProposition {
            block_hashes: hashes,
            start_block_number: 1_000,
            parent_hash: vec![0xbb; 32],
        }),
    }
}

pub fn side_tx_extension(height: i64, responses: Vec<(Vec<u8>, SideTxVote)>) -> VoteExtension {
    VoteExtension {
        block_hash: vec![0xaa; 32],
        height,
        side_tx_responses: responses
            .into_iter()
            .map(|(tx_hash, vote)| SideTxResponse {
                tx_hash,
                result: vote as i32,
            })
            .collect(),
        milestone_proposition: None,
    }
}

pub fn sample_checkpoint() -> CheckpointMsg {
    CheckpointMsg {
        proposer: "0x6ab3d36c46ecfb9b9c0bd51cb1c3da5a2c81cea6".to_string(),
        start_block: 256,
        end_block: 511,
        root_hash: vec![0x11; 32],
        account_root_hash: vec![0x22; 32],
        bor_chain_id: "80002".to_string(),
    }
}

/// In-memory chain serving blocks by height and a fixed total power.
///
/// Records every height requested so tests can check ordering and fail-fast.
#[derive(Debug, Default)]
pub struct MockChain {
    pub blocks: HashMap<i64, BlockData>,
    pub total_power: i64,
    pub requested: RefCell<Vec<i64>>,
}

impl MockChain {
    pub fn new(total_power: i64) -> Self {
        Self {
            total_power,
            ..Default::default()
        }
    }

    pub fn with_block(mut self, height: i64, txs: Vec<String>) -> Self {
        self.blocks.insert(
            height,
            BlockData {
                chain_id: TEST_CHAIN_ID.to_string(),
                txs,
            },
        );
        self
    }

    pub fn requested(&self) -> Vec<i64> {
        self.requested.borrow().clone()
    }
}

impl BlockSource for MockChain {
    fn block(&self, height: i64) -> Result<BlockData, FetchError> {
        self.requested.borrow_mut().push(height);
        self.blocks
            .get(&height)
            .cloned()
            .ok_or_else(|| FetchError::Status {
                status: 500,
                url: format!("mock://block?height={}", height),
            })
    }
}

impl VotingPowerSource for MockChain {
    fn total_voting_power(&self) -> Result<i64, FetchError> {
        Ok(self.total_power)
    }
}
