// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

//! Shared helpers for envgen integration tests.

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Variables whose ambient values must not leak into test runs.
pub const SCRUBBED_VARS: [&str; 5] = [
    "SUPABASE_URL",
    "SUPABASE_ANON_KEY",
    "REDIRECT_URL",
    "ENVGEN_ROOT",
    "ENVGEN_OUTPUT",
];

/// Path to the compiled envgen binary.
pub fn envgen_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_envgen"))
}

/// Command for the binary with ambient configuration scrubbed, without a
/// project root argument.
pub fn envgen_raw() -> Command {
    let mut cmd = Command::new(envgen_bin());
    for var in SCRUBBED_VARS {
        cmd.env_remove(var);
    }
    cmd
}

/// Command for the binary with the project root pointed at `root`.
pub fn envgen_cmd(root: &Path) -> Command {
    let mut cmd = envgen_raw();
    cmd.arg("--root").arg(root);
    cmd
}

/// Temporary project root with a `public/` output directory.
pub fn project() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("public")).unwrap();
    dir
}

/// Write `<root>/.env`.
pub fn write_env_file(root: &Path, content: &str) {
    std::fs::write(root.join(".env"), content).unwrap();
}

/// Default artifact path for `root`.
pub fn artifact_path(root: &Path) -> PathBuf {
    root.join("public/env-config.js")
}

/// Read the generated artifact at the default path.
pub fn read_artifact(root: &Path) -> String {
    std::fs::read_to_string(artifact_path(root)).unwrap()
}
