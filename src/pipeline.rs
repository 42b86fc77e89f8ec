// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Per-height inspection: fetch, decode, classify, tally.
//!
//! Nothing survives a height. Each call builds its records and buckets from
//! scratch and hands them to the caller.

use crate::config::FIRST_VOTE_EXTENSION_HEIGHT;
use crate::decode::{decode_commit_info, decode_vote_extensions};
use crate::error::{FetchError, InspectError, Result};
use crate::non_rp::{classify_with, CheckpointCodec, ProtoCheckpointCodec};
use crate::tally::{InspectedVote, Tally};
use crate::types::BlockData;

/// Source of per-height block data.
pub trait BlockSource {
    fn block(&self, height: i64) -> std::result::Result<BlockData, FetchError>;
}

/// Source of the network-wide voting power.
pub trait VotingPowerSource {
    fn total_voting_power(&self) -> std::result::Result<i64, FetchError>;
}

impl<T: BlockSource + ?Sized> BlockSource for &T {
    fn block(&self, height: i64) -> std::result::Result<BlockData, FetchError> {
        (**self).block(height)
    }
}

impl<T: VotingPowerSource + ?Sized> VotingPowerSource for &T {
    fn total_voting_power(&self) -> std::result::Result<i64, FetchError> {
        (**self).total_voting_power()
    }
}

/// Inclusive, validated height range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeightRange {
    start: i64,
    end: i64,
}

impl HeightRange {
    pub fn new(start: i64, end: i64) -> Result<Self> {
        let invalid = |reason: &str| InspectError::InvalidRange {
            start,
            end,
            reason: reason.to_string(),
        };

        if start < 0 || end < 0 {
            return Err(invalid("heights cannot be negative"));
        }
        if start > end {
            return Err(invalid("start height is greater than end height"));
        }
        let genesis_commit = FIRST_VOTE_EXTENSION_HEIGHT - 1;
        if start == genesis_commit || end == genesis_commit {
            return Err(invalid("vote extensions are not enabled at block height 1"));
        }

        Ok(Self { start, end })
    }

    pub fn single(height: i64) -> Result<Self> {
        Self::new(height, height)
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    pub fn height_count(&self) -> u64 {
        (self.end - self.start) as u64 + 1
    }

    pub fn iter(&self) -> impl Iterator<Item = i64> {
        self.start..=self.end
    }
}

/// Everything learned about one height.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeightReport {
    pub height: i64,
    pub chain_id: String,
    pub round: i32,
    pub votes: Vec<InspectedVote>,
    pub tally: Tally,
}

/// Outcome of one height in a range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeightOutcome {
    Report(HeightReport),
    /// The block had no transactions, hence no vote extension.
    NoVoteExtension(i64),
}

pub struct Inspector<B, P, C = ProtoCheckpointCodec> {
    blocks: B,
    power: P,
    codec: C,
}

impl<B: BlockSource, P: VotingPowerSource> Inspector<B, P> {
    pub fn new(blocks: B, power: P) -> Self {
        Self {
            blocks,
            power,
            codec: ProtoCheckpointCodec,
        }
    }
}

impl<B: BlockSource, P: VotingPowerSource, C: CheckpointCodec> Inspector<B, P, C> {
    pub fn with_codec(blocks: B, power: P, codec: C) -> Self {
        Self { blocks, power, codec }
    }

    /// Inspect one height. `Ok(None)` means the block carried no transactions.
    pub fn inspect_height(&self, height: i64) -> Result<Option<HeightReport>> {
        let block = self.blocks.block(height).map_err(|e| e.at(height))?;

        let Some(commit) = decode_commit_info(&block.txs).map_err(|e| e.at(height))? else {
            tracing::warn!("No vote extension at height {}", height);
            return Ok(None);
        };
        tracing::debug!(
            "Height {}: round {}, {} votes",
            height,
            commit.round,
            commit.votes.len()
        );

        let extensions = decode_vote_extensions(&commit).map_err(|e| e.at(height))?;

        let mut votes = Vec::with_capacity(commit.votes.len());
        for (index, (record, extension)) in commit.votes.into_iter().zip(extensions).enumerate() {
            let non_rp = classify_with(
                &self.codec,
                index,
                height,
                &block.chain_id,
                &record.non_rp_vote_extension,
            )
            .map_err(|e| e.at(height))?;
            tracing::trace!("Vote {} non-rp extension: {}", index + 1, non_rp.label());

            votes.push(InspectedVote {
                record,
                extension,
                non_rp,
            });
        }

        let total_power = self.power.total_voting_power().map_err(|e| e.at(height))?;
        let tally = Tally::compute(&votes, total_power).map_err(|e| e.at(height))?;

        Ok(Some(HeightReport {
            height,
            chain_id: block.chain_id,
            round: commit.round,
            votes,
            tally,
        }))
    }

    /// Inspect every height of `range` in increasing order.
    ///
    /// `visit` runs after each height completes. The first error stops the
    /// range; heights after it are never fetched.
    pub fn inspect_range<F>(&self, range: HeightRange, mut visit: F) -> Result<usize>
    where
        F: FnMut(&HeightOutcome),
    {
        tracing::info!(
            "Inspecting heights {} to {}",
            range.start(),
            range.end()
        );

        let mut reported = 0;
        for height in range.iter() {
            let outcome = match self.inspect_height(height)? {
                Some(report) => {
                    reported += 1;
                    HeightOutcome::Report(report)
                }
                None => HeightOutcome::NoVoteExtension(height),
            };
            visit(&outcome);
        }

        tracing::info!(
            "Inspected {} heights, {} with vote extensions",
            range.height_count(),
            reported
        );
        Ok(reported)
    }
}
