use byteorder::{ByteOrder, BE, LE};
use goblin::elf64::header::SIZEOF_EHDR;

use crate::error::{HeaderError, Result};

/// Number of bytes read from the start of every file.
pub const HEADER_SIZE: usize = SIZEOF_EHDR;

/// Byte order used to interpret a multi-byte field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    Little,
    Big,
}

/// The first `HEADER_SIZE` bytes of a file, as read from disk.
///
/// Every accessor is bounds-checked and returns [`HeaderError::OutOfBounds`]
/// instead of panicking, so decoding never indexes past the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawHeaderBytes {
    bytes: [u8; HEADER_SIZE],
}

impl RawHeaderBytes {
    /// Copies the leading `HEADER_SIZE` bytes of `data`.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let head = data.get(..HEADER_SIZE).ok_or(HeaderError::Truncated {
            expected: HEADER_SIZE,
            actual: data.len(),
        })?;
        let mut bytes = [0u8; HEADER_SIZE];
        bytes.copy_from_slice(head);
        Ok(Self { bytes })
    }

    pub(crate) fn from_array(bytes: [u8; HEADER_SIZE]) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The 16-byte identification block (`e_ident`).
    pub fn ident(&self) -> [u8; 16] {
        let mut ident = [0u8; 16];
        ident.copy_from_slice(&self.bytes[..16]);
        ident
    }

    fn field(&self, offset: usize, len: usize) -> Result<&[u8]> {
        offset
            .checked_add(len)
            .and_then(|end| self.bytes.get(offset..end))
            .ok_or(HeaderError::OutOfBounds { offset, len })
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8> {
        Ok(self.field(offset, 1)?[0])
    }

    pub fn read_u16(&self, offset: usize, endian: Endian) -> Result<u16> {
        let buf = self.field(offset, 2)?;
        Ok(match endian {
            Endian::Little => LE::read_u16(buf),
            Endian::Big => BE::read_u16(buf),
        })
    }

    pub fn read_u32(&self, offset: usize, endian: Endian) -> Result<u32> {
        let buf = self.field(offset, 4)?;
        Ok(match endian {
            Endian::Little => LE::read_u32(buf),
            Endian::Big => BE::read_u32(buf),
        })
    }

    pub fn read_u64(&self, offset: usize, endian: Endian) -> Result<u64> {
        let buf = self.field(offset, 8)?;
        Ok(match endian {
            Endian::Little => LE::read_u64(buf),
            Endian::Big => BE::read_u64(buf),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RawHeaderBytes {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[16..18].copy_from_slice(&[0x12, 0x34]);
        bytes[56..64].copy_from_slice(&[1, 2, 3, 4, 5, 6, 7, 8]);
        RawHeaderBytes::from_array(bytes)
    }

    #[test]
    fn reads_in_requested_order() {
        let raw = sample();
        assert_eq!(raw.read_u16(16, Endian::Little).unwrap(), 0x3412);
        assert_eq!(raw.read_u16(16, Endian::Big).unwrap(), 0x1234);
        assert_eq!(raw.read_u32(56, Endian::Big).unwrap(), 0x0102_0304);
        assert_eq!(
            raw.read_u64(56, Endian::Little).unwrap(),
            0x0807_0605_0403_0201
        );
    }

    #[test]
    fn rejects_reads_past_the_end() {
        let raw = sample();
        assert!(matches!(
            raw.read_u64(57, Endian::Little),
            Err(HeaderError::OutOfBounds { offset: 57, len: 8 })
        ));
        assert!(matches!(
            raw.read_u8(HEADER_SIZE),
            Err(HeaderError::OutOfBounds { .. })
        ));
        assert!(matches!(
            raw.read_u16(usize::MAX, Endian::Big),
            Err(HeaderError::OutOfBounds { .. })
        ));
        // last in-range byte still works
        assert_eq!(raw.read_u8(HEADER_SIZE - 1).unwrap(), 8);
    }

    #[test]
    fn from_bytes_needs_a_full_header() {
        assert!(matches!(
            RawHeaderBytes::from_bytes(&[0x7f, b'E', b'L', b'F']),
            Err(HeaderError::Truncated {
                expected: HEADER_SIZE,
                actual: 4
            })
        ));

        let long = vec![0xaa; HEADER_SIZE + 10];
        let raw = RawHeaderBytes::from_bytes(&long).unwrap();
        assert_eq!(raw.as_bytes().len(), HEADER_SIZE);
    }
}
