#![forbid(unsafe_code)]

//! Catalog records as they appear in the commands file

use serde::{Deserialize, Deserializer, Serialize};

/// A named reference entry
///
/// `url`, `notes` and `examples` may be absent or `null` in the source file;
/// they deserialize to empty values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub name: String,
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub examples: Vec<Example>,
}

#[cfg(test)]
impl Command {
    /// Creates a command with a name and description and nothing else
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Command {
            name: name.into(),
            description: description.into(),
            url: String::new(),
            notes: String::new(),
            examples: Vec::new(),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn with_example(mut self, command: impl Into<String>, description: impl Into<String>) -> Self {
        self.examples.push(Example {
            command: command.into(),
            description: description.into(),
        });
        self
    }
}

/// One illustrative invocation of a [`Command`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub command: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

/// The ordered list of commands loaded from a commands file
///
/// Order matches the source file. Names are unique; see
/// [`Catalog::from_commands`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    commands: Vec<Command>,
}

impl Catalog {
    /// Wraps an already-validated list of commands
    ///
    /// Returns the first repeated name if two commands share one.
    pub fn from_commands(commands: Vec<Command>) -> Result<Self, String> {
        let mut seen = std::collections::HashSet::new();
        for command in &commands {
            if !seen.insert(command.name.as_str()) {
                return Err(command.name.clone());
            }
        }
        Ok(Catalog { commands })
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Exact, case-sensitive lookup by name
    pub fn get(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|c| c.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().map(|c| c.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
