//! Task configuration, read once from the environment at startup.

use std::env;
use std::path::PathBuf;

pub const FORM_ID_VAR: &str = "NETLIFY_APPROVED_COMMENTS_FORM_ID";
pub const ACCESS_TOKEN_VAR: &str = "NETLIFY_API_AUTH";
pub const API_BASE_VAR: &str = "NETLIFY_API_BASE";

pub const DEFAULT_API_BASE: &str = "https://api.netlify.com/api/v1";
pub const DEFAULT_BUILD_DIR: &str = "build";

/// Everything the comment task needs. Required values stay optional here;
/// the task itself decides what a missing value means.
#[derive(Debug, Clone)]
pub struct Config {
    pub form_id: Option<String>,
    pub access_token: Option<String>,
    pub api_base: String,
    pub build_dir: PathBuf,
}

impl Config {
    /// Build from an arbitrary variable lookup (tests pass a closure over a map).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            form_id: lookup(FORM_ID_VAR),
            access_token: lookup(ACCESS_TOKEN_VAR),
            api_base: lookup(API_BASE_VAR).unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            build_dir: PathBuf::from(DEFAULT_BUILD_DIR),
        }
    }

    pub fn with_build_dir(mut self, build_dir: impl Into<PathBuf>) -> Self {
        self.build_dir = build_dir.into();
        self
    }
}

/// Load configuration from the process environment.
pub fn load() -> Config {
    Config::from_lookup(|key| env::var(key).ok())
}
