#![forbid(unsafe_code)]

//! Subcommands built from the loaded catalog
//!
//! Every catalog record becomes a `view <name>` target and, unless its name
//! collides with a built-in subcommand, a top-level `<name>` subcommand. The
//! set is fixed once the registry is built.

use super::args::GlobalArgs;
use crate::catalog::{Catalog, Command};
use crate::output::Target;
use clap::builder::PossibleValuesParser;
use clap::{Arg, ArgMatches, Args};
use tracing::debug;

/// Binary name shown in usage
pub const BIN_NAME: &str = "kex";

/// Subcommand listing the whole catalog
pub const LIST: &str = "list";

/// Subcommand showing one command by name
pub const VIEW: &str = "view";

/// Names a catalog record cannot take at the top level
pub const RESERVED_NAMES: &[&str] = &[LIST, VIEW, "help"];

const NAME_ARG: &str = "name";

/// What a parsed invocation asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action<'a> {
    /// Render the whole catalog
    List(&'a Catalog),
    /// Render a single command
    View(&'a Command),
}

impl<'a> Action<'a> {
    pub fn target(self) -> Target<'a> {
        match self {
            Action::List(catalog) => Target::Catalog(catalog),
            Action::View(command) => Target::Command(command),
        }
    }
}

/// One registered catalog entry
#[derive(Debug, Clone)]
struct Entry {
    /// Index into the catalog
    index: usize,
    /// Whether `<name>` is accepted directly at the top level
    top_level: bool,
}

/// Dispatch table from command names to catalog records
#[derive(Debug, Clone)]
pub struct Registry {
    catalog: Catalog,
    entries: Vec<Entry>,
}

impl Registry {
    /// Registers one entry per catalog record
    pub fn new(catalog: Catalog) -> Self {
        let entries = catalog
            .commands()
            .iter()
            .enumerate()
            .map(|(index, command)| {
                let top_level = !RESERVED_NAMES.contains(&command.name.as_str());
                if !top_level {
                    debug!(
                        name = %command.name,
                        "name is reserved; only reachable through `view`"
                    );
                }
                Entry { index, top_level }
            })
            .collect::<Vec<_>>();

        debug!(entries = entries.len(), "registered catalog commands");
        Registry { catalog, entries }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Number of registered catalog entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Commands registered as top-level subcommands, in catalog order
    pub fn top_level_commands(&self) -> impl Iterator<Item = &Command> {
        self.entries
            .iter()
            .filter(|e| e.top_level)
            .map(|e| &self.catalog.commands()[e.index])
    }

    /// Build the argument parser for this catalog
    pub fn command(&self) -> clap::Command {
        let names: Vec<String> = self.catalog.names().map(str::to_owned).collect();

        let mut cmd = clap::Command::new(BIN_NAME)
            .about("View command examples")
            .version(env!("CARGO_PKG_VERSION"))
            .subcommand_required(true)
            .arg_required_else_help(true)
            .subcommand(clap::Command::new(LIST).about("List every cataloged command"))
            .subcommand(
                clap::Command::new(VIEW)
                    .about("Show one cataloged command")
                    .arg(
                        Arg::new(NAME_ARG)
                            .help("Command name")
                            .required(true)
                            .value_parser(PossibleValuesParser::new(names))
                            .hide_possible_values(true),
                    ),
            );
        cmd = GlobalArgs::augment_args(cmd);

        for command in self.top_level_commands() {
            cmd = cmd.subcommand(
                clap::Command::new(command.name.clone()).about(command.description.clone()),
            );
        }

        cmd
    }

    /// Map parsed arguments to the action they select
    ///
    /// Returns `None` when no subcommand was given.
    pub fn resolve<'a>(&'a self, matches: &ArgMatches) -> Option<Action<'a>> {
        match matches.subcommand()? {
            (LIST, _) => Some(Action::List(&self.catalog)),
            (VIEW, sub) => sub
                .get_one::<String>(NAME_ARG)
                .and_then(|name| self.catalog.get(name))
                .map(Action::View),
            (name, _) => self.catalog.get(name).map(Action::View),
        }
    }
}
