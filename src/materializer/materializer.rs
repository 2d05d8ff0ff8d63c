use std::path::{Path, PathBuf};
use std::sync::Arc;

use compio::fs;
use snafu::{ResultExt, Snafu, ensure};
use tracing::{debug, info};

use crate::application::RuntimeConfig;
use crate::ext::BestEffortPathExt;
use crate::materializer::plan::MaterializePlan;
use crate::tree::NodeKind;

enum Outcome {
    Created,
    Skipped,
}

/// Which paths a Create run made and which already existed and were left
/// untouched.
#[derive(Debug, Default)]
pub struct MaterializeReport {
    created: Vec<PathBuf>,
    skipped: Vec<PathBuf>,
}

impl MaterializeReport {
    pub fn created(&self) -> &[PathBuf] {
        &self.created
    }

    pub fn skipped(&self) -> &[PathBuf] {
        &self.skipped
    }
}

pub struct Materializer {
    config: Arc<RuntimeConfig>,
}

impl Materializer {
    pub fn new(config: Arc<RuntimeConfig>) -> Self {
        Self { config }
    }

    /// Applies the plan in order. The first failure aborts the remaining
    /// entries; nothing already created is rolled back.
    pub async fn apply(
        &self,
        plan: &MaterializePlan,
    ) -> Result<MaterializeReport, MaterializationError> {
        fs::create_dir_all(plan.base())
            .await
            .context(CreateDirSnafu { path: plan.base() })?;

        let mut report = MaterializeReport::default();
        for entry in plan.entries() {
            let outcome = match entry.kind {
                NodeKind::Directory => self.create_directory(&entry.path).await?,
                NodeKind::File => self.create_file(&entry.path).await?,
            };
            match outcome {
                Outcome::Created => report.created.push(entry.path.clone()),
                Outcome::Skipped => report.skipped.push(entry.path.clone()),
            }
        }

        info!(
            "Materialized {} entries ({} already existed)",
            report.created.len(),
            report.skipped.len()
        );
        Ok(report)
    }

    async fn create_directory(&self, path: &Path) -> Result<Outcome, MaterializationError> {
        match fs::metadata(path).await {
            Ok(existing) if existing.is_dir() => {
                debug!("Directory already exists: {}", path.best_effort_path_display());
                Ok(Outcome::Skipped)
            }
            Ok(_) => {
                return PathConflictSnafu {
                    path,
                    kind: NodeKind::Directory,
                }
                .fail()
                .map_err(Into::into);
            }
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                fs::create_dir(path).await.context(CreateDirSnafu { path })?;
                debug!("Created directory: {}", path.best_effort_path_display());
                Ok(Outcome::Created)
            }
            Err(error) => Err(error).context(InspectSnafu { path }),
        }
    }

    /// Files are created with `create_new` semantics, so an existing file is
    /// never truncated; whether it is skipped or a conflict depends on the
    /// strict policy.
    async fn create_file(&self, path: &Path) -> Result<Outcome, MaterializationError> {
        let opened = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .await;

        match opened {
            Ok(file) => {
                file.close().await.context(CreateFileSnafu { path })?;
                debug!("Created file: {}", path.best_effort_path_display());
                Ok(Outcome::Created)
            }
            Err(error) if error.kind() == std::io::ErrorKind::AlreadyExists => {
                let existing = fs::metadata(path).await.context(InspectSnafu { path })?;
                ensure!(
                    !existing.is_dir(),
                    PathConflictSnafu {
                        path,
                        kind: NodeKind::File,
                    }
                );
                ensure!(
                    !self.config.strict,
                    PathConflictSnafu {
                        path,
                        kind: NodeKind::File,
                    }
                );
                debug!(
                    "File already exists, leaving untouched: {}",
                    path.best_effort_path_display()
                );
                Ok(Outcome::Skipped)
            }
            Err(error) => Err(error).context(CreateFileSnafu { path }),
        }
    }
}

/// The target path already exists and cannot take the planned entry.
#[derive(Debug, Snafu)]
#[snafu(display(
    "Refusing to touch existing path {} (planned as a {kind})",
    path.best_effort_path_display()
))]
pub struct PathConflictError {
    path: PathBuf,
    kind: NodeKind,
}

#[derive(Debug, Snafu)]
pub enum MaterializationError {
    #[snafu(display("Failed to create directory {}", path.best_effort_path_display()))]
    CreateDirError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to create file {}", path.best_effort_path_display()))]
    CreateFileError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to inspect {}", path.best_effort_path_display()))]
    InspectError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(context(false), display("A planned entry conflicts with an existing path"))]
    ConflictError { source: PathConflictError },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::data::Mode;
    use crate::tree::TreeForest;
    use tempfile::TempDir;

    const SAMPLE: &str = "a/\n├── b.txt\n└── c/\n    └── d.txt";

    fn config(output: &Path, strict: bool) -> Arc<RuntimeConfig> {
        Arc::new(RuntimeConfig {
            file: None,
            output: output.to_path_buf(),
            mode: Mode::Create,
            strict,
        })
    }

    fn plan_for(text: &str, base: &Path) -> MaterializePlan {
        let forest: TreeForest = text.try_into().expect("fixture tree must parse");
        MaterializePlan::from_forest(&forest, base)
    }

    #[compio::test]
    async fn creates_directories_and_empty_files() {
        let tmp = TempDir::new().expect("Failed to create temp directory");
        let base = tmp.path().join("out");
        let plan = plan_for(SAMPLE, &base);

        let report = Materializer::new(config(&base, false))
            .apply(&plan)
            .await
            .expect("apply failed");

        assert_eq!(report.created().len(), 4);
        assert!(base.join("a").is_dir());
        assert!(base.join("a/c").is_dir());
        assert!(base.join("a/b.txt").is_file());
        let metadata = std::fs::metadata(base.join("a/c/d.txt")).unwrap();
        assert!(metadata.is_file());
        assert_eq!(metadata.len(), 0);
    }

    #[compio::test]
    async fn missing_base_directory_is_created_with_intermediates() {
        let tmp = TempDir::new().expect("Failed to create temp directory");
        let base = tmp.path().join("deeply/nested/out");
        let plan = plan_for("a/\n└── b.txt", &base);

        Materializer::new(config(&base, false))
            .apply(&plan)
            .await
            .expect("apply failed");

        assert!(base.join("a/b.txt").is_file());
    }

    #[compio::test]
    async fn every_planned_path_exists_with_its_planned_kind() {
        let tmp = TempDir::new().expect("Failed to create temp directory");
        let base = tmp.path().join("out");
        let plan = plan_for(SAMPLE, &base);

        Materializer::new(config(&base, false))
            .apply(&plan)
            .await
            .expect("apply failed");

        for entry in plan.entries() {
            let metadata = std::fs::metadata(&entry.path).expect("planned path missing");
            match entry.kind {
                NodeKind::Directory => assert!(metadata.is_dir(), "{:?}", entry.path),
                NodeKind::File => assert!(metadata.is_file(), "{:?}", entry.path),
            }
        }
    }

    #[compio::test]
    async fn second_run_preserves_existing_content() {
        let tmp = TempDir::new().expect("Failed to create temp directory");
        let base = tmp.path().join("out");
        let plan = plan_for(SAMPLE, &base);
        let materializer = Materializer::new(config(&base, false));

        materializer.apply(&plan).await.expect("first run failed");
        std::fs::write(base.join("a/b.txt"), "hello").unwrap();

        let report = materializer.apply(&plan).await.expect("second run failed");
        assert!(report.created().is_empty());
        assert_eq!(report.skipped().len(), 4);
        assert_eq!(std::fs::read_to_string(base.join("a/b.txt")).unwrap(), "hello");
    }

    #[compio::test]
    async fn directory_in_place_of_a_file_is_a_conflict() {
        let tmp = TempDir::new().expect("Failed to create temp directory");
        let base = tmp.path().join("out");
        std::fs::create_dir_all(base.join("a/b.txt")).unwrap();
        let plan = plan_for(SAMPLE, &base);

        let result = Materializer::new(config(&base, false)).apply(&plan).await;
        assert!(matches!(
            result,
            Err(MaterializationError::ConflictError { .. })
        ));
    }

    #[compio::test]
    async fn file_in_place_of_a_directory_is_a_conflict() {
        let tmp = TempDir::new().expect("Failed to create temp directory");
        let base = tmp.path().join("out");
        std::fs::create_dir_all(&base).unwrap();
        std::fs::write(base.join("a"), "occupied").unwrap();
        let plan = plan_for(SAMPLE, &base);

        let result = Materializer::new(config(&base, false)).apply(&plan).await;
        assert!(matches!(
            result,
            Err(MaterializationError::ConflictError { .. })
        ));
        assert_eq!(std::fs::read_to_string(base.join("a")).unwrap(), "occupied");
    }

    #[compio::test]
    async fn strict_mode_rejects_existing_files() {
        let tmp = TempDir::new().expect("Failed to create temp directory");
        let base = tmp.path().join("out");
        let plan = plan_for(SAMPLE, &base);

        Materializer::new(config(&base, false))
            .apply(&plan)
            .await
            .expect("first run failed");

        let result = Materializer::new(config(&base, true)).apply(&plan).await;
        assert!(matches!(
            result,
            Err(MaterializationError::ConflictError { .. })
        ));
    }
}
