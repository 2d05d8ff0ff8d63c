use std::io::{Cursor, IsTerminal, Read};
use std::path::{Path, PathBuf};

use compio::{fs::File, io::AsyncReadExt, io::BufReader};
use snafu::{ResultExt, Snafu};
use tracing::debug;

use crate::ext::BestEffortPathExt;

/// Raw tree text, read either from a file or from standard input.
#[derive(Debug, Clone)]
pub struct TreeSource {
    pub text: String,
}

impl TreeSource {
    pub async fn from_path(path: &Path) -> Result<Self, SourceReadError> {
        debug!("Opening tree file: {}", path.best_effort_path_display());
        let file = File::open(path).await.context(ReadFileSnafu { path })?;

        debug!("Reading tree file");
        let cursor = Cursor::new(file);
        let mut reader = BufReader::new(cursor);
        let res = reader.read_to_string(String::new()).await;
        match res.0 {
            Ok(n) => debug!("Successfully read tree file: {n} bytes"),
            _ => {
                res.0.context(ReadFileSnafu { path })?;
            }
        }
        Ok(TreeSource { text: res.1 })
    }

    /// Reads until the input stream closes. The EOF keystroke hint only
    /// shows when stdin is an actual terminal, so piped input stays quiet.
    pub fn from_stdin() -> Result<Self, SourceReadError> {
        let mut stdin = std::io::stdin();
        if stdin.is_terminal() {
            eprintln!("Paste the tree, then finish with Ctrl-D (Ctrl-Z followed by Enter on Windows).");
        }

        let mut text = String::new();
        stdin.read_to_string(&mut text).context(ReadStdinSnafu)?;
        debug!("Read {} bytes from standard input", text.len());
        Ok(TreeSource { text })
    }
}

#[derive(Debug, Snafu)]
pub enum SourceReadError {
    #[snafu(display("Failed to read the tree file: {}", path.best_effort_path_display()))]
    ReadFileError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to read the tree from standard input"))]
    ReadStdinError { source: std::io::Error },
}
