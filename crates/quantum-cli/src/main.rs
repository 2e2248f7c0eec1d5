// crates/quantum-cli/src/main.rs

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "quantum-cli")]
#[command(about = "Inspect the quantum build and convert pixel samples", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print quantum depth, range and scale factors for this build
    Info(cmd::info::InfoArgs),

    /// Convert sample values of one kind into quantums
    Convert(cmd::convert::ConvertArgs),

    /// Scale quantum values back down to byte or short samples
    Scale(cmd::scale::ScaleArgs),

    /// Convert a raw sample file into a raw quantum file
    ConvertFile(cmd::convert_file::ConvertFileArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Info(args) => cmd::info::run(args),
        Commands::Convert(args) => cmd::convert::run(args),
        Commands::Scale(args) => cmd::scale::run(args),
        Commands::ConvertFile(args) => cmd::convert_file::run(args),
    }
}
