use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use elfhead_core::report::{format_entry, format_magic};
use elfhead_core::{DecodedHeader, ReadMode};
use serde::Serialize;

/// Exit status for every open, read or magic failure.
const FAILURE_STATUS: u8 = 98;

/// Print the ELF file header of a binary
#[derive(Parser)]
#[command(
    name = "elfhead",
    about = "Display the information contained in an ELF file header",
    version,
    author
)]
struct Cli {
    /// Path to binary file
    #[arg(required = true)]
    path: PathBuf,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Zero-pad files shorter than a full header instead of failing
    #[arg(long, global = true)]
    lenient: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Clone, Copy)]
enum Command {
    /// Show the whole file header (default)
    Header,
    /// Show entry point of binary
    Entry,
}

#[derive(ValueEnum, Clone, Copy, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

#[derive(Serialize)]
struct Coded<T> {
    code: T,
    name: String,
}

#[derive(Serialize)]
struct HeaderJson<'a> {
    path: &'a Path,
    magic: String,
    class: Coded<u8>,
    data: Coded<u8>,
    version: u8,
    os_abi: Coded<u8>,
    abi_version: u8,
    object_type: Coded<u16>,
    entry: u64,
    entry_hex: String,
}

impl<'a> HeaderJson<'a> {
    fn new(path: &'a Path, hdr: &DecodedHeader) -> Self {
        HeaderJson {
            path,
            magic: format_magic(hdr.ident()),
            class: Coded {
                code: hdr.class().code(),
                name: hdr.class().to_string(),
            },
            data: Coded {
                code: hdr.data().code(),
                name: hdr.data().to_string(),
            },
            version: hdr.version(),
            os_abi: Coded {
                code: hdr.os_abi().code(),
                name: hdr.os_abi().to_string(),
            },
            abi_version: hdr.abi_version(),
            object_type: Coded {
                code: hdr.object_type().code(),
                name: hdr.object_type().to_string(),
            },
            entry: hdr.entry_point(),
            entry_hex: format_entry(hdr),
        }
    }
}

fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let mode = if cli.lenient {
        ReadMode::Lenient
    } else {
        ReadMode::Strict
    };
    let hdr = elfhead_core::inspect(&cli.path, mode)?;

    match (cli.command.unwrap_or(Command::Header), cli.format) {
        (Command::Header, Format::Text) => {
            write!(out, "{}", elfhead_core::render(&hdr))?;
        }
        (Command::Header, Format::Json) => {
            let json = HeaderJson::new(&cli.path, &hdr);
            writeln!(out, "{}", serde_json::to_string_pretty(&json)?)?;
        }
        (Command::Entry, Format::Text) => {
            writeln!(out, "Entry point: {}", format_entry(&hdr))?;
        }
        (Command::Entry, Format::Json) => {
            let json = serde_json::json!({
                "entry": hdr.entry_point(),
                "entry_hex": format_entry(&hdr),
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&json)?)?;
        }
    }

    Ok(())
}

/// Reports a failed run on `err_out` and picks the process exit status.
fn exit_status<W: Write>(result: Result<()>, err_out: &mut W) -> u8 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            log::debug!("{err:?}");
            let _ = writeln!(err_out, "Error: {err:#}");
            FAILURE_STATUS
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = run(&cli, &mut io::stdout().lock());
    ExitCode::from(exit_status(result, &mut io::stderr()))
}
