use anyhow::{Context, Result};
use bikeshare::{run_session, utils, Args, Console};
use clap::Parser;
use std::io;
use tracing::{error, info};

fn main() -> Result<()> {
    let args = Args::parse();
    utils::setup_logging(args.verbose);
    utils::validate_args(&args)?;

    info!(action = "start", component = "main", data_dir = ?args.data_dir, "Starting bikeshare explorer");

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    match run_session(&mut console, &args.data_dir)
        .with_context(|| format!("Bikeshare session over {:?} failed", args.data_dir))
    {
        Ok(rounds) => {
            info!(action = "complete", component = "main", rounds, "Session finished");
            Ok(())
        }
        Err(e) => {
            error!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
