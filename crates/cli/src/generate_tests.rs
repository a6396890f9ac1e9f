// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use envgen_config::{artifact, KEYS};
use serial_test::serial;
use tempfile::TempDir;

fn clear_config_env() {
    for key in KEYS {
        std::env::remove_var(key);
    }
}

/// Project root with a `public/` directory and optional `.env` content.
fn project(env_content: Option<&str>) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("public")).unwrap();
    if let Some(content) = env_content {
        std::fs::write(dir.path().join(".env"), content).unwrap();
    }
    dir
}

#[test]
fn default_output_is_public_env_config() {
    let generator = Generator::new("/srv/site");
    assert_eq!(
        generator.output_path(),
        std::path::Path::new("/srv/site/public/env-config.js")
    );
}

#[test]
fn relative_output_override_resolves_under_root() {
    let generator = Generator::new("/srv/site").with_output("dist/env.js");
    assert_eq!(
        generator.output_path(),
        std::path::Path::new("/srv/site/dist/env.js")
    );
}

#[test]
fn absolute_output_override_is_used_verbatim() {
    let generator = Generator::new("/srv/site").with_output("/tmp/env.js");
    assert_eq!(generator.output_path(), std::path::Path::new("/tmp/env.js"));
}

#[test]
#[serial]
fn run_writes_rendered_artifact() {
    clear_config_env();
    let root = project(Some(
        "SUPABASE_URL=https://proj.supabase.co\nSUPABASE_ANON_KEY=anon-key\n",
    ));

    let path = Generator::new(root.path()).run().unwrap();
    let written = std::fs::read_to_string(&path).unwrap();

    let config = artifact::parse(&written).unwrap();
    assert_eq!(config.supabase_url, "https://proj.supabase.co");
    assert_eq!(config.supabase_anon_key, "anon-key");
    assert_eq!(config.redirect_url, "");
    assert!(written.starts_with(artifact::HEADER));
}

#[test]
#[serial]
fn run_defaults_all_keys_to_empty_without_sources() {
    clear_config_env();
    let root = project(None);

    let path = Generator::new(root.path()).run().unwrap();
    let config = artifact::load(&path).unwrap().unwrap();
    assert_eq!(config, envgen_config::EnvConfig::default());
}

#[test]
#[serial]
fn run_is_idempotent() {
    clear_config_env();
    let root = project(Some("SUPABASE_URL=https://x\n"));
    let generator = Generator::new(root.path());

    let first = std::fs::read(generator.run().unwrap()).unwrap();
    let second = std::fs::read(generator.run().unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
#[serial]
fn run_overwrites_an_existing_artifact() {
    clear_config_env();
    let root = project(None);
    let generator = Generator::new(root.path());
    std::fs::write(generator.output_path(), "stale contents").unwrap();

    generator.run().unwrap();
    let written = std::fs::read_to_string(generator.output_path()).unwrap();
    assert!(!written.contains("stale contents"));
    assert!(written.starts_with(artifact::HEADER));
}

#[test]
#[serial]
fn run_fails_when_output_directory_is_missing() {
    clear_config_env();
    let root = tempfile::tempdir().unwrap();

    let generator = Generator::new(root.path());
    let result = generator.run();
    assert!(matches!(result, Err(GenerateError::Write { .. })));
    assert!(!generator.output_path().exists());
}

#[test]
#[serial]
fn ambient_environment_beats_env_file() {
    clear_config_env();
    std::env::set_var("SUPABASE_URL", "https://from-env");
    let root = project(Some("SUPABASE_URL=https://from-file\n"));

    let config = Generator::new(root.path()).resolve().unwrap();
    std::env::remove_var("SUPABASE_URL");
    assert_eq!(config.supabase_url, "https://from-env");
}

#[test]
#[serial]
fn malformed_env_file_fails_resolution() {
    clear_config_env();
    let root = project(Some("NOT A VALID LINE\n"));
    let result = Generator::new(root.path()).resolve();
    assert!(matches!(result, Err(GenerateError::EnvFile(_))));
}

#[test]
fn check_report_lists_every_key_with_status() {
    let config = envgen_config::EnvConfig {
        supabase_url: "https://x".to_string(),
        supabase_anon_key: String::new(),
        redirect_url: String::new(),
    };
    assert_eq!(
        check_report(&config),
        "SUPABASE_URL: set\nSUPABASE_ANON_KEY: empty\nREDIRECT_URL: empty\n"
    );
}
