use clap::Parser;
use copydiff::config::Cli;
use copydiff::Config;

fn main() -> anyhow::Result<()> {
    println!("\n{}\n", copydiff::app_title());

    let cli = Cli::parse();

    // Convert CLI args to Config - this validates the log file immediately
    let config = Config::try_from(cli)?;

    copydiff::commands::copy::run(config)?;

    Ok(())
}
