use std::{
    error::Error,
    fmt::Display,
    fs::File,
    io::{self, Read},
    path::{Path, PathBuf},
    string,
};

#[derive(Debug)]
#[non_exhaustive]
pub struct ReadError {
    path: PathBuf,
    kind: ReadErrorKind,
}

impl ReadError {
    pub(crate) fn new(path: PathBuf, kind: ReadErrorKind) -> Self {
        Self { path, kind }
    }

    /// Path of the source file that could not be read.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> &ReadErrorKind {
        &self.kind
    }
}

impl Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ReadErrorKind::Open(_) => write!(f, "unable to open file {:?}", self.path),
            ReadErrorKind::Read(_) => write!(f, "unable to read file {:?}", self.path),
            ReadErrorKind::InvalidUtf8(_) => {
                write!(f, "file {:?} contains invalid UTF-8", self.path)
            }
        }
    }
}

impl Error for ReadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            ReadErrorKind::Open(err) => Some(err),
            ReadErrorKind::Read(err) => Some(err),
            ReadErrorKind::InvalidUtf8(err) => Some(err),
        }
    }
}

#[derive(Debug)]
pub enum ReadErrorKind {
    #[non_exhaustive]
    Open(io::Error),
    #[non_exhaustive]
    Read(io::Error),
    #[non_exhaustive]
    InvalidUtf8(string::FromUtf8Error),
}

impl From<string::FromUtf8Error> for ReadErrorKind {
    fn from(err: string::FromUtf8Error) -> Self {
        Self::InvalidUtf8(err)
    }
}

pub(crate) fn read_bytes_from_file<P>(path: P) -> Result<Vec<u8>, ReadError>
where
    P: AsRef<Path>,
{
    fn inner(path: &Path) -> Result<Vec<u8>, ReadError> {
        // The handle is dropped before returning, on success and failure alike
        (|| {
            let mut bytes = Vec::new();
            File::open(path)
                .map_err(ReadErrorKind::Open)?
                .read_to_end(&mut bytes)
                .map_err(ReadErrorKind::Read)?;
            Ok(bytes)
        })()
        .map_err(|kind| ReadError {
            path: path.to_owned(),
            kind,
        })
    }
    inner(path.as_ref())
}
