use std::io::Write;

use anyhow::{Context, Result};
use heimdall_ve::non_rp::CheckpointCodec;
use heimdall_ve::{BlockSource, HeightOutcome, HeightRange, Inspector, VotingPowerSource};
use heimdall_ve_rpc::{RpcClient, RpcConfig};

use crate::render::{render_report, RenderOptions};

pub fn connect(cfg: &RpcConfig) -> Result<RpcClient> {
    RpcClient::new(cfg).context("Failed to build RPC client")
}

/// Inspects every height in `range`, writing each outcome to `out` as soon as
/// it is available. Returns the number of heights that carried vote extensions.
pub fn run_range<B, P, C, W>(
    inspector: &Inspector<B, P, C>,
    range: HeightRange,
    opts: RenderOptions,
    out: &mut W,
) -> Result<usize>
where
    B: BlockSource,
    P: VotingPowerSource,
    C: CheckpointCodec,
    W: Write,
{
    let mut write_err: Option<std::io::Error> = None;

    let inspected = inspector.inspect_range(range, |outcome| {
        if write_err.is_some() {
            return;
        }
        let text = match outcome {
            HeightOutcome::Report(report) => render_report(report, opts),
            HeightOutcome::NoVoteExtension(height) => {
                format!("\nHeight {}: no transactions, no vote extension to decode.\n", height)
            }
        };
        if let Err(e) = out.write_all(text.as_bytes()) {
            write_err = Some(e);
        }
    });

    if let Some(e) = write_err {
        return Err(e).context("Failed to write output");
    }

    inspected.with_context(|| {
        format!(
            "Failed to inspect vote extensions for heights {} to {}",
            range.start(),
            range.end()
        )
    })
}
