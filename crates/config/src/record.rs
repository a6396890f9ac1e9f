// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The browser configuration record and its key set.

use serde::{Deserialize, Serialize};

/// `SUPABASE_URL` — base URL of the backing service.
pub const SUPABASE_URL: &str = "SUPABASE_URL";

/// `SUPABASE_ANON_KEY` — public/anonymous access credential for the backing
/// service.
pub const SUPABASE_ANON_KEY: &str = "SUPABASE_ANON_KEY";

/// `REDIRECT_URL` — URL to redirect to after an external auth flow.
pub const REDIRECT_URL: &str = "REDIRECT_URL";

/// All recognized keys, in artifact serialization order. No other keys are
/// recognized anywhere in the pipeline.
pub const KEYS: [&str; 3] = [SUPABASE_URL, SUPABASE_ANON_KEY, REDIRECT_URL];

/// Keys whose empty values trigger the missing-configuration warning.
/// `REDIRECT_URL` is optional and never warned about.
pub const REQUIRED_KEYS: [&str; 2] = [SUPABASE_URL, SUPABASE_ANON_KEY];

/// Browser configuration record.
///
/// Always carries exactly the three recognized keys as string values; the
/// empty string stands in for anything unset. Producers build a fresh record
/// rather than mutating an existing one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvConfig {
    #[serde(rename = "SUPABASE_URL", default)]
    pub supabase_url: String,

    #[serde(rename = "SUPABASE_ANON_KEY", default)]
    pub supabase_anon_key: String,

    #[serde(rename = "REDIRECT_URL", default)]
    pub redirect_url: String,
}

impl EnvConfig {
    /// Build a record by resolving each recognized key through `lookup`.
    ///
    /// Keys the lookup cannot supply resolve to the empty string. Values are
    /// taken as-is; no URL or credential format validation is performed.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).unwrap_or_default();
        Self {
            supabase_url: get(SUPABASE_URL),
            supabase_anon_key: get(SUPABASE_ANON_KEY),
            redirect_url: get(REDIRECT_URL),
        }
    }

    /// Value for a recognized key, or `None` for anything else.
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            SUPABASE_URL => Some(&self.supabase_url),
            SUPABASE_ANON_KEY => Some(&self.supabase_anon_key),
            REDIRECT_URL => Some(&self.redirect_url),
            _ => None,
        }
    }

    /// Required keys whose values are currently empty.
    pub fn missing_required(&self) -> Vec<&'static str> {
        REQUIRED_KEYS
            .into_iter()
            .filter(|key| self.get(key).is_some_and(str::is_empty))
            .collect()
    }

    /// `true` when every required key has a non-empty value.
    pub fn is_complete(&self) -> bool {
        self.missing_required().is_empty()
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
