#![forbid(unsafe_code)]

//! Options shared by every subcommand

use crate::output::OutputMode;
use clap::{Args, ValueEnum};
use std::io::IsTerminal;

/// Flags accepted before or after any subcommand
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputMode::Cli)]
    pub output: OutputMode,

    /// When to use terminal colors in cli output
    #[arg(long, global = true, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
}

/// Color choice for CLI output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Color when stdout is a terminal
    #[default]
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

impl ColorMode {
    /// Resolve against whether stdout is a terminal
    pub fn to_color_choice(self, is_terminal: bool) -> termcolor::ColorChoice {
        match self {
            ColorMode::Always => termcolor::ColorChoice::Always,
            ColorMode::Never => termcolor::ColorChoice::Never,
            ColorMode::Auto if is_terminal => termcolor::ColorChoice::Auto,
            ColorMode::Auto => termcolor::ColorChoice::Never,
        }
    }

    /// Resolve against the process's stdout
    pub fn for_stdout(self) -> termcolor::ColorChoice {
        self.to_color_choice(std::io::stdout().is_terminal())
    }
}
