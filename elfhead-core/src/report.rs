use std::fmt;

use goblin::elf::header::EV_CURRENT;

use crate::header::{Class, DecodedHeader};

const MAGIC_WIDTH: usize = 9;
const LABEL_WIDTH: usize = 35;

pub const MAGIC: &str = "Magic";
pub const CLASS: &str = "Class";
pub const DATA: &str = "Data";
pub const VERSION: &str = "Version";
pub const OS_ABI: &str = "OS/ABI";
pub const ABI_VERSION: &str = "ABI Version";
pub const TYPE: &str = "Type";
pub const ENTRY: &str = "Entry point address";

/// One labeled field of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub label: &'static str,
    pub value: String,
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = if self.label == MAGIC {
            MAGIC_WIDTH
        } else {
            LABEL_WIDTH
        };
        let label = format!("{}:", self.label);
        write!(f, "  {label:<width$}{}", self.value)
    }
}

/// A readelf-style `ELF Header:` block, in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    lines: Vec<ReportLine>,
}

impl Report {
    pub fn lines(&self) -> &[ReportLine] {
        &self.lines
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|line| line.label == label)
            .map(|line| line.value.as_str())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ELF Header:")?;
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

pub fn render(header: &DecodedHeader) -> Report {
    let line = |label: &'static str, value: String| ReportLine { label, value };

    let lines = vec![
        line(MAGIC, format_magic(header.ident())),
        line(CLASS, header.class().to_string()),
        line(DATA, header.data().to_string()),
        line(VERSION, format_version(header.version())),
        line(OS_ABI, header.os_abi().to_string()),
        line(ABI_VERSION, header.abi_version().to_string()),
        line(TYPE, header.object_type().to_string()),
        line(ENTRY, format_entry(header)),
    ];
    Report { lines }
}

pub fn format_magic(ident: &[u8; 16]) -> String {
    ident
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_version(version: u8) -> String {
    if version == EV_CURRENT {
        format!("{version} (current)")
    } else {
        version.to_string()
    }
}

/// ELF32 entries are narrowed back to 32 bits before printing.
pub fn format_entry(header: &DecodedHeader) -> String {
    match header.class() {
        Class::Elf32 => format!("{:#x}", header.entry_point() as u32),
        Class::Elf64 | Class::Invalid(_) => format!("{:#x}", header.entry_point()),
    }
}
