// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Voting power tally for a single height.
//!
//! Three independent dimensions are accumulated:
//! - milestone: power behind each proposed block hash. A validator proposing
//!   several hashes is credited to each of them.
//! - side-tx: power behind each `(tx hash, verdict)` pair.
//! - non-RP: power behind each exact non-RP payload. Buckets are keyed by the
//!   raw bytes, not by the classification, so only byte-identical payloads merge.

use std::collections::HashMap;

use crate::error::DataError;
use crate::types::{NonRpClassification, SideTxVote, VoteExtension, VoteRecord};

/// A vote together with everything decoded from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InspectedVote {
    pub record: VoteRecord,
    pub extension: VoteExtension,
    pub non_rp: NonRpClassification,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tally {
    pub total_power: i64,
    pub milestone: HashMap<String, i64>,
    pub side_tx: HashMap<String, HashMap<SideTxVote, i64>>,
    pub non_rp: HashMap<Vec<u8>, i64>,
}

/// Add `power` to a bucket, refusing to wrap.
fn credit(slot: &mut i64, power: i64, bucket: impl FnOnce() -> String) -> Result<(), DataError> {
    *slot = slot
        .checked_add(power)
        .ok_or_else(|| DataError::VotingPowerOverflow { bucket: bucket() })?;
    Ok(())
}

impl Tally {
    /// Fold `votes` into fresh buckets.
    ///
    /// Every record is checked before anything is accumulated, so a negative
    /// power yields no partial tally.
    pub fn compute(votes: &[InspectedVote], total_power: i64) -> Result<Self, DataError> {
        if total_power <= 0 {
            return Err(DataError::ZeroTotalVotingPower(total_power));
        }
        if let Some((index, vote)) = votes
            .iter()
            .enumerate()
            .find(|(_, v)| v.record.voting_power < 0)
        {
            return Err(DataError::NegativeVotingPower {
                index,
                power: vote.record.voting_power,
            });
        }

        let mut milestone: HashMap<String, i64> = HashMap::new();
        let mut side_tx: HashMap<String, HashMap<SideTxVote, i64>> = HashMap::new();
        let mut non_rp: HashMap<Vec<u8>, i64> = HashMap::new();

        for vote in votes {
            let power = vote.record.voting_power;

            if let Some(prop) = &vote.extension.milestone_proposition {
                for hash in &prop.block_hashes {
                    let key = hex::encode(hash);
                    let slot = milestone.entry(key.clone()).or_default();
                    credit(slot, power, || format!("milestone {}", key))?;
                }
            }

            for response in &vote.extension.side_tx_responses {
                let key = hex::encode(&response.tx_hash);
                let verdict = response.result();
                let slot = side_tx
                    .entry(key.clone())
                    .or_default()
                    .entry(verdict)
                    .or_default();
                credit(slot, power, || format!("side-tx {} {}", key, verdict.label()))?;
            }

            let payload = &vote.record.non_rp_vote_extension;
            let slot = non_rp.entry(payload.clone()).or_default();
            credit(slot, power, || format!("non-rp {}", hex::encode(payload)))?;
        }

        tracing::debug!(
            milestone_buckets = milestone.len(),
            side_tx_buckets = side_tx.len(),
            non_rp_buckets = non_rp.len(),
            "Tally computed"
        );

        Ok(Self {
            total_power,
            milestone,
            side_tx,
            non_rp,
        })
    }

    /// `100 * power / total`.
    pub fn percent(&self, power: i64) -> f64 {
        power as f64 / self.total_power as f64 * 100.0
    }

    /// `"<power> (<pct>%)"` with two decimals.
    pub fn share(&self, power: i64) -> String {
        format!("{} ({:.2}%)", power, self.percent(power))
    }

    pub fn side_tx_power(&self, tx_hash: &str, vote: SideTxVote) -> i64 {
        self.side_tx
            .get(tx_hash)
            .and_then(|results| results.get(&vote))
            .copied()
            .unwrap_or(0)
    }

    /// Milestone buckets ordered by hash.
    pub fn milestone_sorted(&self) -> Vec<(&str, i64)> {
        let mut out: Vec<_> = self.milestone.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        out.sort_unstable_by(|a, b| a.0.cmp(b.0));
        out
    }

    /// Side-tx hashes in order, each with its YES / NO / UNSPECIFIED power.
    pub fn side_tx_sorted(&self) -> Vec<(&str, [i64; 3])> {
        let mut out: Vec<_> = self
            .side_tx
            .keys()
            .map(|tx| {
                let powers = SideTxVote::ALL.map(|vote| self.side_tx_power(tx, vote));
                (tx.as_str(), powers)
            })
            .collect();
        out.sort_unstable_by(|a, b| a.0.cmp(b.0));
        out
    }

    /// Non-RP buckets ordered by payload bytes.
    pub fn non_rp_sorted(&self) -> Vec<(&[u8], i64)> {
        let mut out: Vec<_> = self.non_rp.iter().map(|(k, v)| (k.as_slice(), *v)).collect();
        out.sort_unstable_by(|a, b| a.0.cmp(b.0));
        out
    }
}
