use crate::errors::MinidumpError;
use std::{
    fs::File,
    io::ErrorKind,
    path::{Path, PathBuf},
};

/// A minidump that has been validated and opened for reading.
///
/// This is a transient reference: the path was an existing regular file at
/// the moment [`Minidump::open`] ran, and the handle stays readable even if
/// the file is unlinked afterwards.
#[derive(Debug)]
pub struct Minidump {
    path: PathBuf,
    file: File,
    len: u64,
}

impl Minidump {
    /// Validates `path` and opens it.
    ///
    /// Rejects an empty path, a path that does not resolve to anything, and
    /// a path that resolves to something other than a regular file.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, MinidumpError> {
        let path = path.into();

        if path.as_os_str().is_empty() {
            return Err(MinidumpError::EmptyPath);
        }

        let metadata = std::fs::metadata(&path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                MinidumpError::NotFound(path.clone())
            } else {
                MinidumpError::Open {
                    path: path.clone(),
                    source,
                }
            }
        })?;

        if !metadata.is_file() {
            return Err(MinidumpError::NotAFile(path));
        }

        let file = File::open(&path).map_err(|source| MinidumpError::Open {
            path: path.clone(),
            source,
        })?;

        Ok(Self {
            path,
            file,
            len: metadata.len(),
        })
    }

    /// The path the notification carried.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The open read handle.
    pub fn file(&self) -> &File {
        &self.file
    }

    /// Size of the file when it was validated, in bytes.
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Consumes the reference, keeping only the handle.
    pub fn into_file(self) -> File {
        self.file
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::{Read, Write};

    #[test]
    fn rejects_empty_path() {
        assert!(matches!(
            Minidump::open(""),
            Err(MinidumpError::EmptyPath)
        ));
    }

    #[test]
    fn rejects_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such.dmp");
        assert!(matches!(
            Minidump::open(&missing),
            Err(MinidumpError::NotFound(p)) if p == missing
        ));
    }

    #[test]
    fn rejects_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Minidump::open(dir.path()),
            Err(MinidumpError::NotAFile(_))
        ));
    }

    #[test]
    fn opens_regular_file() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(b"MDMP").unwrap();

        let minidump = Minidump::open(tmp.path()).unwrap();
        assert_eq!(minidump.path(), tmp.path());
        assert_eq!(minidump.len(), 4);

        let mut contents = Vec::new();
        minidump.into_file().read_to_end(&mut contents).unwrap();
        assert_eq!(contents, b"MDMP");
    }

    #[test]
    fn handle_survives_unlink() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(b"MDMP").unwrap();

        let minidump = Minidump::open(tmp.path()).unwrap();
        tmp.close().unwrap();

        let mut contents = Vec::new();
        minidump.into_file().read_to_end(&mut contents).unwrap();
        assert_eq!(contents, b"MDMP");
    }
}
