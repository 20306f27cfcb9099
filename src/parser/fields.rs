use regex::{Regex, RegexBuilder};
use serde::Deserialize;

use crate::error::{FormError, Result};

/// How a label is placed into its extraction pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LabelMode {
    /// Label is escaped and matched as plain text.
    #[default]
    Literal,
    /// Label is embedded as-is, so `?`, `.`, `(` etc. act as regex syntax.
    Pattern,
}

/// Compiled matcher for one `**Label**` marker.
#[derive(Debug, Clone)]
pub struct FieldPattern {
    label: String,
    re: Regex,
}

impl FieldPattern {
    pub fn compile(label: &str, mode: LabelMode) -> Result<Self> {
        let inner = match mode {
            LabelMode::Literal => regex::escape(label),
            LabelMode::Pattern => label.to_string(),
        };
        let re = RegexBuilder::new(&format!(r"\*\*{}\*\*\s*\n([^\n]+)", inner))
            .case_insensitive(true)
            .build()
            .map_err(|source| FormError::InvalidLabel {
                label: label.to_string(),
                source,
            })?;
        Ok(FieldPattern {
            label: label.to_string(),
            re,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Value on the line after the first marker, trimmed. Empty when absent.
    pub fn extract(&self, body: &str) -> String {
        self.re
            .captures(body)
            .map(|c| c[1].trim().to_string())
            .unwrap_or_default()
    }
}

/// Ordered matchers for a whole form, compiled once per run.
#[derive(Debug, Clone)]
pub struct FieldSet {
    patterns: Vec<FieldPattern>,
}

impl FieldSet {
    pub fn compile(labels: &[&str], mode: LabelMode) -> Result<Self> {
        let patterns = labels
            .iter()
            .map(|l| FieldPattern::compile(l, mode))
            .collect::<Result<Vec<_>>>()?;
        Ok(FieldSet { patterns })
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|p| p.label())
    }

    pub fn extract_all(&self, body: &str) -> Vec<String> {
        self.patterns
            .iter()
            .map(|p| {
                let value = p.extract(body);
                tracing::debug!(label = p.label(), found = !value.is_empty(), "extracted field");
                value
            })
            .collect()
    }
}

/// One-shot extraction of `label` from `body` with the label matched literally.
pub fn extract_field(body: &str, label: &str) -> String {
    FieldPattern::compile(label, LabelMode::Literal)
        .map(|p| p.extract(body))
        .unwrap_or_default()
}

// ── Tests ──
