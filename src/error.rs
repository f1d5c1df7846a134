use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum RepocatError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("output file {} already exists", .0.display())]
    OutputExists(PathBuf),
}
impl RepocatError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RepocatError::Io {
            path: path.into(),
            source,
        }
    }
}
