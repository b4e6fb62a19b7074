use clap::Parser;
use genc::cli::Cli;
use genc::{commands, logging};

fn main() -> anyhow::Result<()> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    logging::init(&cli.log_config, cli.verbose)?;
    log::info!("#Start main() {:?}", cli.command);

    let out = commands::run(&cli.command, cli.format)?;
    println!("{out}");

    Ok(())
}
