use clap::Parser;
use replygen::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    replygen::logging::init_tracing();

    let config = cli.resolve_config()?;
    replygen::logging::log_session_config(&config, &cli.config_file());
    replygen::ui::runtime::run(config)
}
