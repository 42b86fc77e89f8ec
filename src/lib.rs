// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

//! heimdall-ve: decode and tally the vote extensions Heimdall v2 validators
//! attach to their precommits.

pub mod config;
pub mod decode;
pub mod error;
pub mod fixtures;
pub mod non_rp;
pub mod pipeline;
pub mod tally;
pub mod types;

pub use error::{DataError, DecodeError, FetchError, InspectError, Result};
pub use pipeline::{BlockSource, HeightOutcome, HeightRange, HeightReport, Inspector, VotingPowerSource};
pub use tally::{InspectedVote, Tally};

#[cfg(test)]
pub mod tests;
