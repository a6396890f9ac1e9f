// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Browser environment configuration for envgen.
//!
//! This crate defines the configuration record written into the generated
//! `env-config.js` artifact, the artifact's on-disk format (render and
//! parse), and the runtime fallback resolution that guarantees a usable
//! record even when no artifact has been generated.

pub mod artifact;
mod diagnostic;
mod record;
mod resolve;

pub use diagnostic::{print_error, print_warning};
pub use record::{EnvConfig, KEYS, REDIRECT_URL, REQUIRED_KEYS, SUPABASE_ANON_KEY, SUPABASE_URL};
pub use resolve::{missing_warning, resolve, resolve_from_artifact, ConfigSource, Resolution};
