/// Whether materialization touches the filesystem or only prints a preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Create,
    DryRun,
}
