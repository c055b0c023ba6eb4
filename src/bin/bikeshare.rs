use anyhow::Result;
use bikeshare_explorer::Session;
use bikeshare_explorer::input::StdinPrompter;
use clap::Parser;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "bikeshare",
    version,
    about = "Explore US bikeshare trip data interactively"
)]
struct Cli {
    /// Directory holding chicago.csv, new_york_city.csv and washington.csv.
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut session = Session::new(StdinPrompter, stdout.lock(), cli.data_dir);
    session.run()
}
