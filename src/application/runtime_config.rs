use std::path::PathBuf;

use crate::application::data::Mode;
use crate::cli::{Cli, Command};

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Tree file to read; standard input when absent.
    pub file: Option<PathBuf>,
    /// Base directory the tree is created under.
    pub output: PathBuf,
    pub mode: Mode,
    /// Treat pre-existing files as conflicts instead of skipping them.
    pub strict: bool,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        match cli.command {
            Command::Generate(args) => Self {
                file: args.file,
                output: args.output,
                mode: if args.dry_run {
                    Mode::DryRun
                } else {
                    Mode::Create
                },
                strict: args.strict,
            },
        }
    }
}
