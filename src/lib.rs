#![forbid(unsafe_code)]

//! Kex: a personal command reference
//!
//! Kex loads a catalog of commands and their example invocations from a YAML
//! file and exposes every cataloged command as a subcommand that prints its
//! documentation and examples.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod output;
