#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! Outputs one JSON object per command, one per line, in catalog order.

use crate::catalog::{Catalog, Command};
use serde::Serialize;
use std::io::{self, Write};

/// JSONL output formatter
pub struct JsonlFormatter;

impl JsonlFormatter {
    /// Creates a new JsonlFormatter
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Write one command as a single JSON line
    pub fn write_command<W: Write>(&self, out: &mut W, command: &Command) -> io::Result<()> {
        let record = CommandRecord {
            record_type: "command",
            command,
        };
        serde_json::to_writer(&mut *out, &record)?;
        writeln!(out)
    }

    /// Write every command, one per line
    pub fn write_catalog<W: Write>(&self, out: &mut W, catalog: &Catalog) -> io::Result<()> {
        for command in catalog.commands() {
            self.write_command(out, command)?;
        }
        Ok(())
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Command record, flattened so the fields sit next to `type`
#[derive(Debug, Serialize)]
struct CommandRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    #[serde(flatten)]
    command: &'a Command,
}
