use std::sync::Arc;

use snafu::Snafu;
use snafu::prelude::*;
use tracing::{debug, info};

use crate::application::RuntimeConfig;
use crate::application::data::Mode;
use crate::materializer::{MaterializationError, MaterializePlan, Materializer};
use crate::output;
use crate::parser::TreeParseError;
use crate::source::{SourceReadError, TreeSource};
use crate::tree::TreeForest;

pub struct Application;

impl Application {
    /// Runs the parse-then-materialize pipeline. Parsing happens entirely
    /// before any filesystem mutation, so a rejected input leaves the
    /// target untouched.
    pub async fn run(app_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let config: RuntimeConfig = app_config.into();

        let source = match &config.file {
            Some(path) => TreeSource::from_path(path).await,
            None => TreeSource::from_stdin(),
        }
        .context(SourceSnafu)?;

        let forest: TreeForest = source.text.as_str().try_into().context(ParseSnafu)?;
        debug!("Parsed forest with {} entries", forest.entry_count());

        let plan = MaterializePlan::from_forest(&forest, &config.output);
        match config.mode {
            Mode::DryRun => output::print_plan(&plan),
            Mode::Create => {
                let config = Arc::new(config);
                let report = Materializer::new(Arc::clone(&config))
                    .apply(&plan)
                    .await
                    .context(MaterializeSnafu)?;
                info!("Materialized tree under {}", config.output.display());
                output::print_report(&report);
            }
        }

        Ok(())
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Failed to read the tree input"))]
    SourceError { source: SourceReadError },
    #[snafu(display("The input is not a well-formed tree"))]
    ParseError { source: TreeParseError },
    #[snafu(display("Failed while creating directories and files"))]
    MaterializeError { source: MaterializationError },
}

impl ApplicationError {
    /// Process exit code: 1 for input and parse failures, 2 for filesystem
    /// failures during materialization.
    pub fn exit_code(&self) -> u8 {
        match self {
            ApplicationError::SourceError { .. } | ApplicationError::ParseError { .. } => 1,
            ApplicationError::MaterializeError { .. } => 2,
        }
    }
}
