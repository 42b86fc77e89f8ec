use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "heimdall_ve=info,heimdall_ve_rpc=info,heimdall_ve_cli=info";
const VERBOSE_FILTER: &str = "heimdall_ve=debug,heimdall_ve_rpc=debug,heimdall_ve_cli=debug";

/// Logs go to stderr so stdout carries only the report.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new(VERBOSE_FILTER)
    } else {
        tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
