use anyhow::Result;
use clap::Parser;
use skyclock::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);
    skyclock::run(cli).await
}

// The dashboard owns the terminal, so logging stays off there unless RUST_LOG asks for it.
fn init_logging(cli: &Cli) {
    let default_filter = if cli.one_shot { "warn" } else { "off" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp_millis()
        .init();
}
