// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rendering and parsing of the generated `env-config.js` artifact.

use crate::record::EnvConfig;
use std::path::Path;
use thiserror::Error;

/// Fixed comment line at the top of every generated artifact.
pub const HEADER: &str =
    "// Auto-generated from .env - do not commit sensitive values if not intended";

/// Global slot the browser script assigns the record to.
pub const GLOBAL: &str = "window.__ENV";

/// Errors that can occur when reading an artifact back.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read artifact {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("artifact does not contain a `window.__ENV = ...` assignment")]
    MissingAssignment,

    #[error("artifact configuration is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Render `config` as the loadable browser script.
///
/// Deterministic: equal records render to byte-identical text. The body is
/// the record as pretty-printed JSON (2-space indent) assigned to
/// [`GLOBAL`], terminated by a semicolon.
pub fn render(config: &EnvConfig) -> String {
    // Serializing three string fields cannot fail in practice.
    let json = serde_json::to_string_pretty(config).unwrap_or_else(|_| String::from("{}"));
    format!("{HEADER}\n{GLOBAL} = {json};\n")
}

/// Parse artifact text back into a record.
///
/// Accepts any text containing the assignment statement: everything between
/// the `=` after [`GLOBAL`] and the trailing semicolon is deserialized as
/// the record's JSON body.
pub fn parse(text: &str) -> Result<EnvConfig, ArtifactError> {
    let start = text.find(GLOBAL).ok_or(ArtifactError::MissingAssignment)?;
    let rest = text[start + GLOBAL.len()..].trim_start();
    let body = rest
        .strip_prefix('=')
        .ok_or(ArtifactError::MissingAssignment)?
        .trim();
    let body = body.strip_suffix(';').unwrap_or(body).trim_end();
    Ok(serde_json::from_str(body)?)
}

/// Read and parse the artifact at `path`.
///
/// A missing file is `Ok(None)`; unreadable or unparsable content is an
/// error.
pub fn load(path: &Path) -> Result<Option<EnvConfig>, ArtifactError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(ArtifactError::Io {
                path: path.display().to_string(),
                source: e,
            })
        }
    };
    parse(&text).map(Some)
}

#[cfg(test)]
#[path = "artifact_tests.rs"]
mod tests;
