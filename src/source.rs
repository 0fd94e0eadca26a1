use std::{
    env,
    path::{Path, PathBuf},
};

use crate::{
    error::{Error, Result},
    io::{read_bytes_from_file, ReadError},
    path::absolutize,
};

/// A single loadable chunk of shader source.
pub trait Source {
    /// Read the contents of the source. Nothing is cached, every call reads
    /// the backing store again.
    fn contents(&self) -> std::result::Result<Vec<u8>, ReadError>;

    /// Absolute directory that relative directives in this source are
    /// resolved against.
    fn dir(&self) -> Result<PathBuf>;
}

impl<T: Source + ?Sized> Source for &T {
    fn contents(&self) -> std::result::Result<Vec<u8>, ReadError> {
        (**self).contents()
    }

    fn dir(&self) -> Result<PathBuf> {
        (**self).dir()
    }
}

impl<T: Source + ?Sized> Source for Box<T> {
    fn contents(&self) -> std::result::Result<Vec<u8>, ReadError> {
        (**self).contents()
    }

    fn dir(&self) -> Result<PathBuf> {
        (**self).dir()
    }
}

/// Source kept in memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceBuf(pub String);

impl From<String> for SourceBuf {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SourceBuf {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl Source for SourceBuf {
    fn contents(&self) -> std::result::Result<Vec<u8>, ReadError> {
        Ok(self.0.as_bytes().to_vec())
    }

    /// A buffer has no location of its own, so this is the current working
    /// directory at the time of the call.
    fn dir(&self) -> Result<PathBuf> {
        env::current_dir().map_err(|source| Error::Absolutize {
            source,
            path: PathBuf::from("."),
        })
    }
}

/// Source backed by a file on disk.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceFile {
    filename: PathBuf,
}

impl SourceFile {
    pub fn as_path(&self) -> &Path {
        &self.filename
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.filename
    }
}

impl<P> From<P> for SourceFile
where
    P: AsRef<Path>,
{
    fn from(value: P) -> Self {
        Self {
            filename: value.as_ref().to_owned(),
        }
    }
}

impl Source for SourceFile {
    fn contents(&self) -> std::result::Result<Vec<u8>, ReadError> {
        read_bytes_from_file(&self.filename)
    }

    fn dir(&self) -> Result<PathBuf> {
        let filename = absolutize(&self.filename)?;
        Ok(filename
            .parent()
            .map(ToOwned::to_owned)
            // Only a bare root has no parent
            .unwrap_or(filename))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::io::ReadErrorKind;

    #[test]
    fn buffer_contents_are_its_bytes() {
        let source = SourceBuf::from("#pragma use \"a.glsl\"\n");
        assert_eq!(source.contents().unwrap(), b"#pragma use \"a.glsl\"\n");
    }

    #[test]
    fn buffer_directory_is_working_directory() {
        let source = SourceBuf::default();
        assert_eq!(source.dir().unwrap(), env::current_dir().unwrap());
    }

    #[test]
    fn file_directory_is_absolute_parent() {
        let source = SourceFile::from("shaders/post/bloom.glsl");
        assert_eq!(
            source.dir().unwrap(),
            env::current_dir().unwrap().join("shaders").join("post")
        );
        assert_eq!(
            SourceFile::from("/shaders/bloom.glsl").dir().unwrap(),
            PathBuf::from("/shaders")
        );
    }

    #[test]
    fn file_contents_are_read_on_every_call() {
        let dir = tempfile::tempdir().unwrap();
        let filename = dir.path().join("live.glsl");
        fs::write(&filename, "first").unwrap();
        let source = SourceFile::from(&filename);
        assert_eq!(source.contents().unwrap(), b"first");

        fs::write(&filename, "second").unwrap();
        assert_eq!(source.contents().unwrap(), b"second");
    }

    #[test]
    fn missing_file_fails_to_open() {
        let dir = tempfile::tempdir().unwrap();
        let filename = dir.path().join("missing.glsl");
        let err = SourceFile::from(&filename).contents().unwrap_err();
        assert_eq!(err.path(), filename);
        assert!(matches!(err.kind(), ReadErrorKind::Open(_)));
    }

    #[test]
    fn sources_work_behind_references_and_boxes() {
        let boxed: Box<dyn Source> = Box::new(SourceBuf::from("x"));
        assert_eq!((&boxed).contents().unwrap(), b"x");
    }
}
