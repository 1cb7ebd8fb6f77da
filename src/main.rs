use clap::Parser;
use quickjoint::{execute, init_logging, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging()?;

    let config = cli.command.args().resolve_config()?;
    let output = execute(&cli, &config)?;
    println!("{}", output);

    Ok(())
}
