pub mod error;
pub mod header;
pub mod raw;
pub mod reader;
pub mod report;

use std::path::Path;

pub use error::{HeaderError, Result};
pub use header::{decode, validate_magic, Class, DataEncoding, DecodedHeader, ObjectType, OsAbi};
pub use raw::{Endian, RawHeaderBytes, HEADER_SIZE};
pub use reader::{read_header, read_header_from, read_header_with, ReadMode};
pub use report::{render, Report, ReportLine};

/// Reads and decodes the header of the file at `path`.
///
/// The file is closed before this returns, whether or not decoding succeeds.
pub fn inspect<P: AsRef<Path>>(path: P, mode: ReadMode) -> Result<DecodedHeader> {
    let raw = read_header_with(&path, mode)?;
    let header = decode(&raw)?;
    log::info!(
        "{}: {} {}",
        path.as_ref().display(),
        header.class(),
        header.object_type()
    );
    Ok(header)
}
