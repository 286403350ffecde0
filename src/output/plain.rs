#![forbid(unsafe_code)]

//! Plain terminal output with optional colorization

use super::table::Table;
use crate::catalog::{Catalog, Command};
use std::io;
use termcolor::{Color, ColorSpec, WriteColor};

/// Plain-text formatter
///
/// Prints the description, notes and URL as paragraphs followed by an aligned
/// table of examples. Colors are only emitted if the writer supports them.
pub struct PlainFormatter;

impl PlainFormatter {
    pub fn new() -> Self {
        PlainFormatter
    }

    /// Write a single command
    pub fn write_command<W: WriteColor>(&self, out: &mut W, command: &Command) -> io::Result<()> {
        out.set_color(ColorSpec::new().set_bold(true))?;
        write!(out, "{}", command.description)?;
        out.reset()?;
        writeln!(out)?;
        writeln!(out)?;

        if !command.notes.is_empty() {
            writeln!(out, "{}", command.notes)?;
            writeln!(out)?;
        }

        if !command.url.is_empty() {
            out.set_color(ColorSpec::new().set_underline(true))?;
            write!(out, "{}", command.url)?;
            out.reset()?;
            writeln!(out)?;
            writeln!(out)?;
        }

        let mut table = Table::new();
        for example in &command.examples {
            table.push_row([example.command.as_str(), example.description.as_str()]);
        }

        if table.is_empty() {
            return Ok(());
        }

        let mut command_style = ColorSpec::new();
        command_style.set_fg(Some(Color::Cyan));
        table.write(out, &[command_style])
    }

    /// Write every command name with its description
    pub fn write_catalog<W: WriteColor>(&self, out: &mut W, catalog: &Catalog) -> io::Result<()> {
        let mut table = Table::new();
        for command in catalog.commands() {
            table.push_row([command.name.as_str(), command.description.as_str()]);
        }

        let mut name_style = ColorSpec::new();
        name_style.set_bold(true);
        table.write(out, &[name_style])
    }
}

impl Default for PlainFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::NoColor;

    fn command_output(command: &Command) -> String {
        let mut out = NoColor::new(Vec::new());
        PlainFormatter::new().write_command(&mut out, command).unwrap();
        String::from_utf8(out.into_inner()).unwrap()
    }

    fn grep_lines() -> Command {
        Command::new("grep-lines", "Search text").with_example("grep foo file.txt", "Find foo")
    }

    #[test]
    fn test_description_then_examples() {
        let output = command_output(&grep_lines());
        assert_eq!(output, "Search text\n\ngrep foo file.txt\t\tFind foo\n");
    }

    #[test]
    fn test_notes_and_url_paragraphs() {
        let command = grep_lines()
            .with_notes("Use -E for regex")
            .with_url("https://example.com/grep");

        let output = command_output(&command);
        assert_eq!(
            output,
            "Search text\n\nUse -E for regex\n\nhttps://example.com/grep\n\ngrep foo file.txt\t\tFind foo\n"
        );
    }

    #[test]
    fn test_empty_notes_and_url_are_omitted() {
        let output = command_output(&grep_lines());
        assert_eq!(output.matches("\n\n").count(), 1);
        assert!(!output.contains("https://"));
    }

    #[test]
    fn test_description_precedes_examples() {
        let command = Command::new("tar", "Archive")
            .with_example("tar -cf a.tar dir", "Create")
            .with_example("tar -xf a.tar", "Extract");

        let output = command_output(&command);
        let description_at = output.find("Archive").unwrap();
        let first_example_at = output.find("tar -cf").unwrap();
        assert!(description_at < first_example_at);

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[2], "tar -cf a.tar dir\t\tCreate");
        assert_eq!(lines[3], "tar -xf a.tar    \t\tExtract");
    }

    #[test]
    fn test_no_examples_leaves_only_description() {
        let output = command_output(&Command::new("du", "Disk usage"));
        assert_eq!(output, "Disk usage\n\n");
    }

    #[test]
    fn test_wide_example_text_stays_aligned() {
        let command = Command::new("echo", "Print")
            .with_example("echo 日本語", "Japanese")
            .with_example("echo abcdefgh", "ASCII");

        let output = command_output(&command);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[2], "echo 日本語  \t\tJapanese");
        assert_eq!(lines[3], "echo abcdefgh\t\tASCII");
    }

    #[test]
    fn test_catalog_lists_names() {
        let catalog = Catalog::from_commands(vec![
            Command::new("du", "Disk usage"),
            Command::new("grep-lines", "Search text"),
        ])
        .unwrap();

        let mut out = NoColor::new(Vec::new());
        PlainFormatter::new().write_catalog(&mut out, &catalog).unwrap();
        let output = String::from_utf8(out.into_inner()).unwrap();
        assert_eq!(output, "du        \t\tDisk usage\ngrep-lines\t\tSearch text\n");
    }

    #[test]
    fn test_empty_catalog_writes_nothing() {
        let mut out = NoColor::new(Vec::new());
        PlainFormatter::new()
            .write_catalog(&mut out, &Catalog::default())
            .unwrap();
        assert!(out.into_inner().is_empty());
    }
}
