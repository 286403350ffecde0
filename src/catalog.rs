//! Command catalog model and YAML loading

pub mod loader;
pub mod model;

pub use loader::LoadError;
pub use model::{Catalog, Command, Example};
