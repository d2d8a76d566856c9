use std::fmt;

use goblin::elf::header::{
    ELFCLASS32, ELFCLASS64, ELFCLASSNONE, ELFDATA2LSB, ELFDATA2MSB, ELFDATANONE, ELFOSABI_AIX,
    ELFOSABI_ARM, ELFOSABI_ARM_AEABI, ELFOSABI_FREEBSD, ELFOSABI_HPUX, ELFOSABI_IRIX,
    ELFOSABI_LINUX, ELFOSABI_MODESTO, ELFOSABI_NETBSD, ELFOSABI_NONE, ELFOSABI_OPENBSD,
    ELFOSABI_SOLARIS, ELFOSABI_TRU64, ET_CORE, ET_DYN, ET_EXEC, ET_NONE, ET_REL,
};

use crate::raw::Endian;

/// Address-space width of the object (`e_ident[EI_CLASS]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    Elf32,
    Elf64,
    Invalid(u8),
}

impl Class {
    pub fn from_code(code: u8) -> Self {
        match code {
            ELFCLASS32 => Class::Elf32,
            ELFCLASS64 => Class::Elf64,
            other => Class::Invalid(other),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Class::Elf32 => ELFCLASS32,
            Class::Elf64 => ELFCLASS64,
            Class::Invalid(code) => code,
        }
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Class::Elf32 => write!(f, "ELF32"),
            Class::Elf64 => write!(f, "ELF64"),
            Class::Invalid(ELFCLASSNONE) => write!(f, "none"),
            Class::Invalid(code) => write!(f, "<unknown: {code:#x}>"),
        }
    }
}

/// Byte order of every multi-byte field after `e_ident` (`e_ident[EI_DATA]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataEncoding {
    LittleEndian,
    BigEndian,
    Invalid(u8),
}

impl DataEncoding {
    pub fn from_code(code: u8) -> Self {
        match code {
            ELFDATA2LSB => DataEncoding::LittleEndian,
            ELFDATA2MSB => DataEncoding::BigEndian,
            other => DataEncoding::Invalid(other),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            DataEncoding::LittleEndian => ELFDATA2LSB,
            DataEncoding::BigEndian => ELFDATA2MSB,
            DataEncoding::Invalid(code) => code,
        }
    }

    /// Only a declared big-endian file is read most-significant byte first.
    pub fn endian(self) -> Endian {
        match self {
            DataEncoding::BigEndian => Endian::Big,
            DataEncoding::LittleEndian | DataEncoding::Invalid(_) => Endian::Little,
        }
    }
}

impl fmt::Display for DataEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataEncoding::LittleEndian => write!(f, "2's complement, little endian"),
            DataEncoding::BigEndian => write!(f, "2's complement, big endian"),
            DataEncoding::Invalid(ELFDATANONE) => write!(f, "none"),
            DataEncoding::Invalid(code) => write!(f, "<unknown: {code:#x}>"),
        }
    }
}

const ELFOSABI_HURD: u8 = 4;

/// Target operating system / ABI (`e_ident[EI_OSABI]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsAbi {
    SystemV,
    HpUx,
    NetBsd,
    Linux,
    Hurd,
    Solaris,
    Aix,
    Irix,
    FreeBsd,
    Tru64,
    Modesto,
    OpenBsd,
    ArmAeabi,
    Arm,
    Unknown(u8),
}

impl OsAbi {
    const TABLE: [(u8, OsAbi, &'static str); 14] = [
        (ELFOSABI_NONE, OsAbi::SystemV, "UNIX - System V"),
        (ELFOSABI_HPUX, OsAbi::HpUx, "UNIX - HP-UX"),
        (ELFOSABI_NETBSD, OsAbi::NetBsd, "UNIX - NetBSD"),
        (ELFOSABI_LINUX, OsAbi::Linux, "UNIX - Linux"),
        (ELFOSABI_HURD, OsAbi::Hurd, "GNU/Hurd"),
        (ELFOSABI_SOLARIS, OsAbi::Solaris, "UNIX - Solaris"),
        (ELFOSABI_AIX, OsAbi::Aix, "UNIX - AIX"),
        (ELFOSABI_IRIX, OsAbi::Irix, "UNIX - IRIX"),
        (ELFOSABI_FREEBSD, OsAbi::FreeBsd, "UNIX - FreeBSD"),
        (ELFOSABI_TRU64, OsAbi::Tru64, "UNIX - TRU64"),
        (ELFOSABI_MODESTO, OsAbi::Modesto, "Novell - Modesto"),
        (ELFOSABI_OPENBSD, OsAbi::OpenBsd, "UNIX - OpenBSD"),
        (ELFOSABI_ARM_AEABI, OsAbi::ArmAeabi, "ARM EABI"),
        (ELFOSABI_ARM, OsAbi::Arm, "ARM"),
    ];

    pub fn from_code(code: u8) -> Self {
        Self::TABLE
            .iter()
            .find(|(c, _, _)| *c == code)
            .map(|(_, abi, _)| *abi)
            .unwrap_or(OsAbi::Unknown(code))
    }

    pub fn code(self) -> u8 {
        match self {
            OsAbi::Unknown(code) => code,
            known => Self::TABLE
                .iter()
                .find(|(_, abi, _)| *abi == known)
                .map(|(c, _, _)| *c)
                .unwrap_or_default(),
        }
    }
}

impl fmt::Display for OsAbi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OsAbi::Unknown(code) => write!(f, "<unknown: {code:#x}>"),
            known => {
                let name = Self::TABLE
                    .iter()
                    .find(|(_, abi, _)| abi == known)
                    .map(|(_, _, name)| *name)
                    .unwrap_or_default();
                f.write_str(name)
            }
        }
    }
}

/// Object file type (`e_type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    None,
    Relocatable,
    Executable,
    SharedObject,
    Core,
    Unknown(u16),
}

impl ObjectType {
    pub fn from_code(code: u16) -> Self {
        match code {
            ET_NONE => ObjectType::None,
            ET_REL => ObjectType::Relocatable,
            ET_EXEC => ObjectType::Executable,
            ET_DYN => ObjectType::SharedObject,
            ET_CORE => ObjectType::Core,
            other => ObjectType::Unknown(other),
        }
    }

    pub fn code(self) -> u16 {
        match self {
            ObjectType::None => ET_NONE,
            ObjectType::Relocatable => ET_REL,
            ObjectType::Executable => ET_EXEC,
            ObjectType::SharedObject => ET_DYN,
            ObjectType::Core => ET_CORE,
            ObjectType::Unknown(code) => code,
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectType::None => write!(f, "NONE (None)"),
            ObjectType::Relocatable => write!(f, "REL (Relocatable file)"),
            ObjectType::Executable => write!(f, "EXEC (Executable file)"),
            ObjectType::SharedObject => write!(f, "DYN (Shared object file)"),
            ObjectType::Core => write!(f, "CORE (Core file)"),
            ObjectType::Unknown(code) => write!(f, "<unknown: {code:#x}>"),
        }
    }
}
