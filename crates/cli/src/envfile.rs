// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `.env` merging with ambient-environment precedence.
//!
//! The file is a fallback source only: a key already present in the process
//! environment keeps its ambient value, and the process environment is
//! never written. This mirrors standard `.env`-loader semantics while
//! keeping the merge a pure read.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Merge source file expected at the project root.
pub const ENV_FILE_NAME: &str = ".env";

/// Errors that can occur when loading a `.env` file.
#[derive(Debug, Error)]
pub enum EnvFileError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

/// Key/value pairs loaded from a project-root `.env` file.
#[derive(Clone, Debug, Default)]
pub struct EnvFile {
    values: HashMap<String, String>,
}

impl EnvFile {
    /// Load `<root>/.env`. An absent file yields an empty merge source.
    pub fn load(root: &Path) -> Result<Self, EnvFileError> {
        Self::load_path(&root.join(ENV_FILE_NAME))
    }

    /// Load a specific `.env`-formatted file.
    ///
    /// A missing file is a no-op; unreadable or unparsable content is an
    /// error.
    pub fn load_path(path: &Path) -> Result<Self, EnvFileError> {
        let iter = match dotenvy::from_path_iter(path) {
            Ok(iter) => iter,
            Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(e) => return Err(Self::classify(path, e)),
        };

        let mut values = HashMap::new();
        for item in iter {
            let (key, value) = item.map_err(|e| Self::classify(path, e))?;
            values.insert(key, value);
        }
        Ok(Self { values })
    }

    fn classify(path: &Path, error: dotenvy::Error) -> EnvFileError {
        match error {
            dotenvy::Error::Io(source) => EnvFileError::Io {
                path: path.to_path_buf(),
                source,
            },
            other => EnvFileError::Parse {
                path: path.to_path_buf(),
                source: other,
            },
        }
    }

    /// Value for `key`: ambient process environment first, then the file.
    ///
    /// Presence decides precedence: an ambient value wins even when it is
    /// the empty string.
    pub fn lookup(&self, key: &str) -> Option<String> {
        std::env::var(key)
            .ok()
            .or_else(|| self.values.get(key).cloned())
    }

    /// Value from the file alone, ignoring the ambient environment.
    pub fn file_value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Number of keys the file defined.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// `true` when the file was absent or defined nothing.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
#[path = "envfile_tests.rs"]
mod tests;
