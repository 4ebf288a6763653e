use crate::commands::Cli;
use crate::gpx::error::GpxResult;
use crate::gpx::fix_gpx_file;
use anyhow::Result;
use clap::Parser;
use log::info;

mod commands;
mod gpx;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .try_init()?;

    let cli = Cli::parse();

    run(cli).await?;

    Ok(())
}

async fn run(cli: Cli) -> GpxResult<()> {
    let delta = fix_gpx_file(&cli.input, &cli.output, cli.force, cli.dry_run).await?;

    if !cli.dry_run {
        info!(
            "Shifted track times by {}s, wrote {}",
            -delta,
            cli.output.display()
        );
    }

    Ok(())
}
