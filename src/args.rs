use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "bikeshare",
    about = "Explore US bikeshare trip data for Chicago, New York City and Washington",
    version,
    long_about = None
)]
pub struct Args {
    /// Directory containing chicago.csv, new_york_city.csv and washington.csv
    #[arg(short, long, default_value = ".")]
    pub data_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
