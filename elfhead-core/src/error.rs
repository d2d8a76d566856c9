use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HeaderError>;

/// Errors that stop the header pipeline. Unrecognized field codes are not
/// errors; they decode to an `Unknown`/`Invalid` variant instead.
#[derive(Error, Debug)]
pub enum HeaderError {
    #[error("Can't read file {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Can't read file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("file truncated: expected {expected} header bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },
    #[error("Not an ELF file")]
    NotElf,
    #[error("read of {len} bytes at offset {offset:#x} is outside the header")]
    OutOfBounds { offset: usize, len: usize },
}
