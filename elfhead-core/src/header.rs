pub mod ident;

use goblin::elf::header::{
    EI_ABIVERSION, EI_CLASS, EI_DATA, EI_OSABI, EI_VERSION, ELFMAG, SELFMAG, SIZEOF_IDENT,
};

use crate::error::{HeaderError, Result};
use crate::raw::RawHeaderBytes;
pub use ident::{Class, DataEncoding, ObjectType, OsAbi};

/// Offset of `e_type`, right after `e_ident` in both classes.
pub const E_TYPE: usize = SIZEOF_IDENT;
/// Offset of `e_entry`; `e_machine` and `e_version` sit in between.
pub const E_ENTRY: usize = 24;

/// Checks that `bytes` starts with `\x7fELF`, byte for byte.
pub fn validate_magic(bytes: &[u8]) -> Result<()> {
    match bytes.get(..SELFMAG) {
        Some(magic) if magic == ELFMAG => Ok(()),
        _ => Err(HeaderError::NotElf),
    }
}

/// The interpreted ELF file header.
///
/// Only [`decode`] builds one, and it checks the magic first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedHeader {
    ident: [u8; 16],
    class: Class,
    data: DataEncoding,
    version: u8,
    os_abi: OsAbi,
    abi_version: u8,
    object_type: ObjectType,
    entry: u64,
}

impl DecodedHeader {
    pub fn ident(&self) -> &[u8; 16] {
        &self.ident
    }

    pub fn class(&self) -> Class {
        self.class
    }

    pub fn data(&self) -> DataEncoding {
        self.data
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    pub fn os_abi(&self) -> OsAbi {
        self.os_abi
    }

    pub fn abi_version(&self) -> u8 {
        self.abi_version
    }

    pub fn object_type(&self) -> ObjectType {
        self.object_type
    }

    /// Virtual address of the entry point, widened to 64 bits for ELF32.
    pub fn entry_point(&self) -> u64 {
        self.entry
    }

    pub fn is_64(&self) -> bool {
        self.class != Class::Elf32
    }
}

/// Decodes the identification block, `e_type` and `e_entry`.
///
/// Fails only on a bad magic. Unrecognized codes decode to their
/// `Unknown`/`Invalid` variant.
pub fn decode(raw: &RawHeaderBytes) -> Result<DecodedHeader> {
    validate_magic(raw.as_bytes())?;

    let class = Class::from_code(raw.read_u8(EI_CLASS)?);
    let data = DataEncoding::from_code(raw.read_u8(EI_DATA)?);
    let version = raw.read_u8(EI_VERSION)?;
    let os_abi = OsAbi::from_code(raw.read_u8(EI_OSABI)?);
    let abi_version = raw.read_u8(EI_ABIVERSION)?;
    log::debug!(
        "ident: class={:#x} data={:#x} version={} osabi={:#x} abiversion={}",
        class.code(),
        data.code(),
        version,
        os_abi.code(),
        abi_version
    );

    let endian = data.endian();
    let object_type = ObjectType::from_code(raw.read_u16(E_TYPE, endian)?);
    let entry = match class {
        Class::Elf32 => u64::from(raw.read_u32(E_ENTRY, endian)?),
        Class::Elf64 | Class::Invalid(_) => raw.read_u64(E_ENTRY, endian)?,
    };
    log::debug!("e_type={:#x} e_entry={:#x}", object_type.code(), entry);

    if let Class::Invalid(code) = class {
        log::warn!("Unrecognized ELF class {code:#x}");
    }
    if let DataEncoding::Invalid(code) = data {
        log::warn!("Unrecognized data encoding {code:#x}, reading as little endian");
    }
    if let ObjectType::Unknown(code) = object_type {
        log::warn!("Unrecognized object type {code:#x}");
    }

    Ok(DecodedHeader {
        ident: raw.ident(),
        class,
        data,
        version,
        os_abi,
        abi_version,
        object_type,
        entry,
    })
}
