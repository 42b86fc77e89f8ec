// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Configuration constants.

/// Literal prefix of the placeholder a validator signs when it has no checkpoint to propose.
pub const DUMMY_NON_RP_MARKER: &[u8] = b"\t\r\n#HEIMDALL-VOTE-EXTENSION#\r\n\t";

/// Separator between the fields of the placeholder.
pub const NON_RP_SEPARATOR: u8 = b'|';

/// Vote extensions are only produced from this height onwards.
pub const FIRST_VOTE_EXTENSION_HEIGHT: i64 = 2;

/// Default CometBFT RPC endpoint.
pub const DEFAULT_COMET_ENDPOINT: &str = "http://localhost:26657";

/// Default Heimdall REST endpoint.
pub const DEFAULT_HEIMDALL_ENDPOINT: &str = "http://localhost:1317";

/// Default HTTP timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 25;
