#![forbid(unsafe_code)]

//! Reading and parsing the commands file
//!
//! The file is a YAML sequence of command records. An empty file is an empty
//! catalog; anything else that is not a sequence of records is a parse error.

use super::model::{Catalog, Command};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading a commands file
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read
    #[error("failed to read commands file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not a valid list of commands
    #[error("failed to parse commands file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Two records share a name
    #[error("commands file '{}' defines '{name}' more than once", path.display())]
    DuplicateName { path: PathBuf, name: String },
}

impl Catalog {
    /// Load the catalog at `path`
    ///
    /// # Errors
    ///
    /// - [`LoadError::Read`] if the file is missing or unreadable
    /// - [`LoadError::Parse`] if the contents are not a list of commands
    /// - [`LoadError::DuplicateName`] if a name appears twice
    pub fn load(path: &Path) -> Result<Catalog, LoadError> {
        debug!(path = %path.display(), "loading commands file");

        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::parse(&content, path)?;
        debug!(count = catalog.len(), "loaded commands");
        Ok(catalog)
    }

    /// Parse catalog text that did not come from a file
    ///
    /// Errors report the path as `<memory>`.
    #[cfg(test)]
    pub fn from_yaml_str(content: &str) -> Result<Catalog, LoadError> {
        Self::parse(content, Path::new("<memory>"))
    }

    fn parse(content: &str, path: &Path) -> Result<Catalog, LoadError> {
        if content.trim().is_empty() {
            return Ok(Catalog::default());
        }

        let commands: Vec<Command> =
            serde_yaml::from_str(content).map_err(|source| LoadError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        Catalog::from_commands(commands).map_err(|name| LoadError::DuplicateName {
            path: path.to_path_buf(),
            name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"
- name: grep-lines
  description: Search text
  url: https://www.gnu.org/software/grep/
  notes: Use -E for extended regex
  examples:
    - command: grep foo file.txt
      description: Find foo
    - command: grep -v foo file.txt
      description: Lines without foo
- name: du
  description: Disk usage
"#;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_sample() {
        let file = write_temp(SAMPLE);
        let catalog = Catalog::load(file.path()).unwrap();

        assert_eq!(catalog.len(), 2);
        let grep = catalog.get("grep-lines").unwrap();
        assert_eq!(grep.description, "Search text");
        assert_eq!(grep.url, "https://www.gnu.org/software/grep/");
        assert_eq!(grep.notes, "Use -E for extended regex");
        assert_eq!(grep.examples.len(), 2);
        assert_eq!(grep.examples[0].command, "grep foo file.txt");
        assert_eq!(grep.examples[1].description, "Lines without foo");
    }

    #[test]
    fn test_absent_optional_fields_are_empty() {
        let catalog = Catalog::from_yaml_str(SAMPLE).unwrap();
        let du = catalog.get("du").unwrap();
        assert_eq!(du.url, "");
        assert_eq!(du.notes, "");
        assert!(du.examples.is_empty());
    }

    #[test]
    fn test_null_optional_fields_are_empty() {
        let catalog = Catalog::from_yaml_str(
            "- name: ps\n  description: Processes\n  url:\n  notes: ~\n  examples:\n",
        )
        .unwrap();
        let ps = catalog.get("ps").unwrap();
        assert_eq!(ps.url, "");
        assert_eq!(ps.notes, "");
        assert!(ps.examples.is_empty());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let catalog =
            Catalog::from_yaml_str("- name: ps\n  description: Processes\n  tags: [unix]\n")
                .unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.yaml");

        let err = Catalog::load(&path).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }), "got {err:?}");
        assert!(err.to_string().contains("nope.yaml"));
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let file = write_temp("- name: [unclosed\n  description: x\n");
        let err = Catalog::load(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }), "got {err:?}");
    }

    #[test]
    fn test_wrong_shape_is_parse_error() {
        let err = Catalog::from_yaml_str("name: grep\ndescription: Search\n").unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }), "got {err:?}");
    }

    #[test]
    fn test_missing_description_is_parse_error() {
        let err = Catalog::from_yaml_str("- name: grep\n").unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }), "got {err:?}");
    }

    #[test]
    fn test_empty_file_is_empty_catalog() {
        let file = write_temp("\n  \n");
        let catalog = Catalog::load(file.path()).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let err = Catalog::from_yaml_str(
            "- name: ls\n  description: one\n- name: ls\n  description: two\n",
        )
        .unwrap_err();
        match err {
            LoadError::DuplicateName { name, .. } => assert_eq!(name, "ls"),
            other => panic!("expected DuplicateName, got {other:?}"),
        }
    }

    #[test]
    fn test_records_without_examples_all_load() {
        let yaml: String = (0..5)
            .map(|i| format!("- name: cmd{i}\n  description: d{i}\n"))
            .collect();
        let catalog = Catalog::from_yaml_str(&yaml).unwrap();
        assert_eq!(catalog.len(), 5);
        assert!(catalog.commands().iter().all(|c| c.examples.is_empty()));
    }
}
