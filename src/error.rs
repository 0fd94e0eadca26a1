use std::path::PathBuf;

use crate::io::ReadError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Read(#[from] ReadError),

    #[error("Error resolving absolute path for {path:?}")]
    Absolutize {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
}
