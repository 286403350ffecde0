#![forbid(unsafe_code)]

//! Output formatters and the renderer that selects between them

pub mod jsonl;
pub mod markdown;
pub mod plain;
pub mod table;

pub use jsonl::JsonlFormatter;
pub use markdown::MarkdownFormatter;
pub use plain::PlainFormatter;
pub use table::Table;

use crate::catalog::{Catalog, Command};
use std::io::{self, Write};
use termcolor::{ColorChoice, StandardStream, WriteColor};

/// Rendering style, chosen once per invocation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputMode {
    /// Aligned plain text
    #[default]
    Cli,
    /// Markdown headings and tables
    Md,
    /// One JSON object per line
    Jsonl,
}

/// What to render
#[derive(Debug, Clone, Copy)]
pub enum Target<'a> {
    Command(&'a Command),
    Catalog(&'a Catalog),
}

/// Renders commands in the selected mode
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    mode: OutputMode,
    color: ColorChoice,
}

impl Renderer {
    pub fn new(mode: OutputMode, color: ColorChoice) -> Self {
        Renderer { mode, color }
    }

    /// Render `target` into `out`
    pub fn render<W: WriteColor>(&self, target: Target<'_>, out: &mut W) -> io::Result<()> {
        match (self.mode, target) {
            (OutputMode::Cli, Target::Command(c)) => PlainFormatter::new().write_command(out, c),
            (OutputMode::Cli, Target::Catalog(c)) => PlainFormatter::new().write_catalog(out, c),
            (OutputMode::Md, Target::Command(c)) => MarkdownFormatter::new().write_command(out, c),
            (OutputMode::Md, Target::Catalog(c)) => MarkdownFormatter::new().write_catalog(out, c),
            (OutputMode::Jsonl, Target::Command(c)) => JsonlFormatter::new().write_command(out, c),
            (OutputMode::Jsonl, Target::Catalog(c)) => JsonlFormatter::new().write_catalog(out, c),
        }
    }

    /// Render `target` as uncolored text
    #[cfg(test)]
    pub fn render_to_string(&self, target: Target<'_>) -> String {
        let mut out = termcolor::NoColor::new(Vec::new());
        self.render(target, &mut out).unwrap();
        String::from_utf8(out.into_inner()).unwrap()
    }

    /// Render `target` to stdout, colored according to the color choice
    pub fn render_to_stdout(&self, target: Target<'_>) -> io::Result<()> {
        let stdout = StandardStream::stdout(self.color);
        let mut lock = stdout.lock();
        self.render(target, &mut lock)?;
        lock.flush()
    }
}
