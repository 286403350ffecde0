#![forbid(unsafe_code)]

//! Markdown output for pasting into notes or READMEs

use crate::catalog::{Catalog, Command};
use std::io::{self, Write};

/// Heading written above a full catalog listing
pub const CATALOG_HEADING: &str = "# Commands";

/// Markdown formatter
///
/// Each command becomes a level-three heading, its description and notes,
/// and a table of examples with the example text in inline code.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        MarkdownFormatter
    }

    /// Write a single command section
    pub fn write_command<W: Write>(&self, out: &mut W, command: &Command) -> io::Result<()> {
        if command.url.is_empty() {
            writeln!(out, "### {}", command.name)?;
        } else {
            writeln!(
                out,
                "### [{}]({})",
                link_text(&command.name),
                link_destination(&command.url)
            )?;
        }
        writeln!(out)?;
        writeln!(out, "{}", command.description)?;

        if !command.notes.is_empty() {
            writeln!(out)?;
            writeln!(out, "{}", command.notes)?;
        }

        if !command.examples.is_empty() {
            writeln!(out)?;
            writeln!(out, "| Example | Description |")?;
            writeln!(out, "| --- | --- |")?;
            for example in &command.examples {
                writeln!(
                    out,
                    "| {} | {} |",
                    inline_code(&example.command),
                    table_cell(&example.description)
                )?;
            }
        }

        Ok(())
    }

    /// Write the catalog heading followed by every command section
    pub fn write_catalog<W: Write>(&self, out: &mut W, catalog: &Catalog) -> io::Result<()> {
        writeln!(out, "{}", CATALOG_HEADING)?;
        for command in catalog.commands() {
            writeln!(out)?;
            self.write_command(out, command)?;
        }
        Ok(())
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Flatten text into a single table cell
fn table_cell(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace('|', "\\|")
}

/// Escape brackets so a name cannot close the link text early
fn link_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '[' | ']') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Use the angle-bracket form when the URL has spaces, parentheses or brackets
fn link_destination(url: &str) -> String {
    let url = url.trim();
    if !url.contains(|c: char| c.is_whitespace() || matches!(c, '(' | ')' | '<' | '>')) {
        return url.to_string();
    }

    let mut escaped = String::from("<");
    for c in url.chars() {
        match c {
            '\r' | '\n' => escaped.push_str("%20"),
            '<' | '>' | '\\' => {
                escaped.push('\\');
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    escaped.push('>');
    escaped
}

/// Wrap text in a code span whose fence is longer than any backtick run inside
fn inline_code(text: &str) -> String {
    let text = text
        .replace("\r\n", " ")
        .replace(['\r', '\n'], " ")
        .replace('|', "\\|");

    let mut longest = 0;
    let mut run = 0;
    for c in text.chars() {
        if c == '`' {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }

    let fence = "`".repeat(longest + 1);
    if text.starts_with('`') || text.ends_with('`') {
        format!("{fence} {text} {fence}")
    } else {
        format!("{fence}{text}{fence}")
    }
}
