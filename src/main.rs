use clap::Parser;
use sequin::config::Cli;
use sequin::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Convert CLI args to Config - this loads and checks the config file
    let config = Config::try_from(cli)?;

    sequin::commands::sync::run(config)?;

    Ok(())
}
