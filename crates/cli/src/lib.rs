// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Build-time generator for the browser `env-config.js` artifact.
//!
//! Reads the three recognized configuration keys from the process
//! environment, merged over a project-root `.env` file, and writes them as
//! a loadable script that assigns `window.__ENV`. The companion
//! `envgen-config` crate owns the record type, the artifact format, and the
//! runtime fallback resolution.

pub mod cli;
pub mod envfile;
pub mod generate;

/// Re-exported configuration types from envgen-config.
pub mod record {
    pub use envgen_config::{
        resolve, resolve_from_artifact, ConfigSource, EnvConfig, Resolution, KEYS, REQUIRED_KEYS,
    };
}
