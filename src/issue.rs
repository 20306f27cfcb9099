use std::path::Path;

use serde::Deserialize;

use crate::error::{FormError, Result};

/// Issue payload as exported by the GitHub API. Only `body` is required.
#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    pub body: String,
    #[serde(default)]
    pub number: Option<u64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
}

pub fn load(path: &Path) -> Result<Issue> {
    let raw = std::fs::read_to_string(path).map_err(|source| FormError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| FormError::ParseInput {
        path: path.to_path_buf(),
        source,
    })
}

// ── Tests ──
