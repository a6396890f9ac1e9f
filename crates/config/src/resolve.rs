// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fallback resolution of the browser configuration slot.
//!
//! Replaces the load-order duality of a committed stub script versus a
//! generated artifact with an explicit resolution step: a record that
//! already exists is never overwritten, an absent one is replaced by the
//! all-empty default, and empty mandatory values produce a stderr warning
//! without ever failing the caller.

use crate::artifact;
use crate::diagnostic::write_warning;
use crate::record::EnvConfig;
use std::io::{self, IsTerminal, Write};
use std::path::Path;

/// Where the resolved record came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigSource {
    /// A generated record was supplied and used untouched.
    Generated,
    /// No record was available; the all-empty default was used.
    Fallback,
}

/// Outcome of a resolution pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub config: EnvConfig,
    pub source: ConfigSource,
}

/// Resolve the configuration slot from an optional pre-existing record.
///
/// An existing record is returned as-is. When none is supplied, the
/// all-empty default takes its place. Either way, a missing-configuration
/// warning is emitted to stderr when a required value is empty; resolution
/// itself never fails, so the caller always receives a usable record.
pub fn resolve(existing: Option<EnvConfig>) -> Resolution {
    let is_tty = io::stderr().is_terminal();
    resolve_with(&mut io::stderr(), existing, is_tty)
}

/// Resolve against a generated artifact on disk.
///
/// A present, parsable artifact wins; anything else (absent, unreadable,
/// malformed) silently degrades to the fallback default. The
/// missing-configuration warning still applies to whatever record results.
pub fn resolve_from_artifact(path: &Path) -> Resolution {
    resolve(artifact::load(path).ok().flatten())
}

/// `resolve` with an injected warning sink.
fn resolve_with<W: Write>(
    writer: &mut W,
    existing: Option<EnvConfig>,
    is_terminal: bool,
) -> Resolution {
    let resolution = match existing {
        Some(config) => Resolution {
            config,
            source: ConfigSource::Generated,
        },
        None => Resolution {
            config: EnvConfig::default(),
            source: ConfigSource::Fallback,
        },
    };
    if let Some(warning) = missing_warning(&resolution.config) {
        write_warning(writer, warning, is_terminal);
    }
    resolution
}

/// Warning text for a record with empty required values, or `None` when the
/// record is complete. `REDIRECT_URL` never contributes.
pub fn missing_warning(config: &EnvConfig) -> Option<String> {
    let missing = config.missing_required();
    if missing.is_empty() {
        return None;
    }
    Some(format!(
        "{} not set. Run `envgen` to generate env-config.js from .env",
        missing.join(" and ")
    ))
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
