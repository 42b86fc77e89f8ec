use std::io::Write;

use heimdall_ve::{HeightRange, Inspector};
use heimdall_ve_rpc::RpcConfig;

use crate::engine;
use crate::render::RenderOptions;

pub fn run(cfg: &RpcConfig, height: i64, opts: RenderOptions) -> anyhow::Result<()> {
    let range = HeightRange::single(height)?;
    let client = engine::connect(cfg)?;
    let inspector = Inspector::new(&client, &client);

    println!("Fetching and decoding VEs for block at height {}...", height);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    engine::run_range(&inspector, range, opts, &mut out)?;
    out.flush()?;

    Ok(())
}
