use std::io::Write;

use heimdall_ve::{HeightRange, Inspector};
use heimdall_ve_rpc::RpcConfig;

use crate::engine;
use crate::render::RenderOptions;

pub fn run(cfg: &RpcConfig, start: i64, end: i64, opts: RenderOptions) -> anyhow::Result<()> {
    let range = HeightRange::new(start, end)?;
    let client = engine::connect(cfg)?;
    let inspector = Inspector::new(&client, &client);

    println!(
        "Fetching and decoding VEs for blocks from height {} to {}...",
        start, end
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let count = engine::run_range(&inspector, range, opts, &mut out)?;
    out.flush()?;

    println!(
        "\nSuccessfully fetched and decoded VEs for {} of {} blocks from height {} to {}.",
        count,
        range.height_count(),
        start,
        end
    );
    Ok(())
}
