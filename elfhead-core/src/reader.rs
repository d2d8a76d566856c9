use std::fs::File;
use std::io::Read;
use std::path::Path;

use goblin::elf::header::SELFMAG;

use crate::error::{HeaderError, Result};
use crate::raw::{RawHeaderBytes, HEADER_SIZE};

/// How to treat a file shorter than a full header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReadMode {
    /// A short read is a [`HeaderError::Truncated`] error.
    #[default]
    Strict,
    /// A short read is zero-padded, as long as the magic was read.
    Lenient,
}

/// Reads the fixed-size header from the file at `path`.
pub fn read_header<P: AsRef<Path>>(path: P) -> Result<RawHeaderBytes> {
    read_header_with(path, ReadMode::Strict)
}

pub fn read_header_with<P: AsRef<Path>>(path: P, mode: ReadMode) -> Result<RawHeaderBytes> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|source| HeaderError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Opened {}", path.display());
    // `file` is dropped on every return below
    read_named(&mut file, path, mode)
}

/// Reads at most `HEADER_SIZE` bytes from `reader`, regardless of how much
/// more data follows.
///
/// A [`HeaderError::Read`] from here carries an empty path.
pub fn read_header_from<R: Read>(reader: &mut R, mode: ReadMode) -> Result<RawHeaderBytes> {
    read_named(reader, Path::new(""), mode)
}

fn read_named<R: Read>(reader: &mut R, path: &Path, mode: ReadMode) -> Result<RawHeaderBytes> {
    let mut buf = Vec::with_capacity(HEADER_SIZE);
    reader
        .take(HEADER_SIZE as u64)
        .read_to_end(&mut buf)
        .map_err(|source| HeaderError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    log::debug!("Read {} header bytes", buf.len());

    if buf.len() == HEADER_SIZE {
        return RawHeaderBytes::from_bytes(&buf);
    }

    let truncated = HeaderError::Truncated {
        expected: HEADER_SIZE,
        actual: buf.len(),
    };
    match mode {
        ReadMode::Lenient if buf.len() >= SELFMAG => {
            log::warn!(
                "Short header ({} of {} bytes), padding with zeroes",
                buf.len(),
                HEADER_SIZE
            );
            let mut bytes = [0u8; HEADER_SIZE];
            bytes[..buf.len()].copy_from_slice(&buf);
            Ok(RawHeaderBytes::from_array(bytes))
        }
        _ => Err(truncated),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }
    }

    #[test]
    fn reads_only_the_header() {
        let data: Vec<u8> = (0..200u8).collect();
        let raw = read_header_from(&mut Cursor::new(&data), ReadMode::Strict).unwrap();
        assert_eq!(raw.as_bytes(), &data[..HEADER_SIZE]);
    }

    #[test]
    fn strict_short_read_is_truncated() {
        let data = [0x7f, b'E', b'L', b'F', 2, 1, 1, 0, 0, 0];
        let err = read_header_from(&mut Cursor::new(&data), ReadMode::Strict).unwrap_err();
        assert!(matches!(
            err,
            HeaderError::Truncated {
                expected: HEADER_SIZE,
                actual: 10
            }
        ));
    }

    #[test]
    fn lenient_short_read_is_padded() {
        let data = [0x7f, b'E', b'L', b'F', 2, 1, 1, 0, 0, 0];
        let raw = read_header_from(&mut Cursor::new(&data), ReadMode::Lenient).unwrap();
        assert_eq!(&raw.as_bytes()[..10], &data);
        assert!(raw.as_bytes()[10..].iter().all(|&b| b == 0));
    }

    #[test]
    fn lenient_still_needs_the_magic() {
        let err =
            read_header_from(&mut Cursor::new(&[0x7f, b'E']), ReadMode::Lenient).unwrap_err();
        assert!(matches!(err, HeaderError::Truncated { actual: 2, .. }));
    }

    #[test]
    fn io_failure_is_a_read_error() {
        let err = read_header_from(&mut FailingReader, ReadMode::Strict).unwrap_err();
        assert!(matches!(
            err,
            HeaderError::Read { ref source, .. } if source.kind() == io::ErrorKind::PermissionDenied
        ));
    }

    #[cfg(unix)]
    #[test]
    fn directory_read_error_names_the_path() {
        let dir = std::env::temp_dir();
        let err = read_header(&dir).unwrap_err();
        assert!(err.to_string().contains(&dir.display().to_string()), "{err}");
        match err {
            HeaderError::Read { path, .. } => assert_eq!(path, dir),
            other => panic!("expected Read, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let path = std::env::temp_dir().join("elfhead-reader-does-not-exist");
        let err = read_header(&path).unwrap_err();
        match err {
            HeaderError::Open { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected Open, got {other:?}"),
        }
    }
}
