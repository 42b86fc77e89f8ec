use std::time::Duration;

use clap::{Parser, Subcommand};
use heimdall_ve::config::{DEFAULT_COMET_ENDPOINT, DEFAULT_HEIMDALL_ENDPOINT, DEFAULT_TIMEOUT_SECS};
use heimdall_ve_cli::commands::{block, blocks};
use heimdall_ve_cli::render::RenderOptions;
use heimdall_ve_cli::telemetry;
use heimdall_ve_rpc::RpcConfig;

#[derive(Parser, Debug)]
#[command(name = "ve-inspect")]
#[command(about = "Decode and tally Heimdall v2 vote extensions from CometBFT blocks", long_about = None)]
struct Cli {
    /// CometBFT RPC endpoint
    #[arg(long, short = 'c', global = true, default_value = DEFAULT_COMET_ENDPOINT)]
    comet_endpoint: String,

    /// Heimdall REST endpoint
    #[arg(long, short = 'H', global = true, default_value = DEFAULT_HEIMDALL_ENDPOINT)]
    heimdall_endpoint: String,

    /// HTTP request timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Print only the per-height summary tables
    #[arg(long, global = true)]
    summary_only: bool,

    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode the vote extensions committed in a single block
    Block {
        #[arg(allow_negative_numbers = true)]
        height: i64,
    },
    /// Decode the vote extensions of every block in an inclusive height range
    Blocks {
        #[arg(allow_negative_numbers = true)]
        start: i64,
        #[arg(allow_negative_numbers = true)]
        end: i64,
    },
}

impl Cli {
    fn rpc_config(&self) -> RpcConfig {
        RpcConfig {
            comet_endpoint: self.comet_endpoint.clone(),
            heimdall_endpoint: self.heimdall_endpoint.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }

    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            summary_only: self.summary_only,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    telemetry::init_tracing(cli.verbose);

    let cfg = cli.rpc_config();
    let opts = cli.render_options();

    match cli.command {
        Commands::Block { height } => block::run(&cfg, height, opts),
        Commands::Blocks { start, end } => blocks::run(&cfg, start, end, opts),
    }
}
