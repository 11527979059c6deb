use clap::Parser;
use scope_tour::{CliArgs, LoggingConfig, TourConfig, init_logging, run};

fn main() -> anyhow::Result<()> {
    let logging_config = LoggingConfig::from_env();
    let _guard = init_logging(logging_config)?;

    let cli = CliArgs::parse();
    let config = TourConfig::from_args(cli)?;

    // Validate configuration before running (fail-fast)
    config.validate()?;

    run(config)
}
