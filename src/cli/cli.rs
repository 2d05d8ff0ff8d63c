use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::application::data::LogLevel;

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Materialize an ASCII tree diagram as real directories and files")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[clap(long, short, default_value = "warn", value_enum, global = true)]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Parse a tree and create the corresponding directories and files
    Generate(GenerateArgs),
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Read the tree from a file instead of standard input
    #[clap(long, short)]
    pub file: Option<PathBuf>,

    /// The directory the tree is created under
    #[clap(long, short, default_value = ".")]
    pub output: PathBuf,

    /// Print what would be created without touching the filesystem
    #[clap(long)]
    pub dry_run: bool,

    /// Fail when a planned file already exists instead of skipping it
    #[clap(long)]
    pub strict: bool,
}
