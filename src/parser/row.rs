use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde::Deserialize;

use crate::error::Result;

/// How values are rendered into a line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quoting {
    /// Plain comma join. Commas or quotes inside a value are written as-is.
    #[default]
    Raw,
    /// Quote values containing a delimiter, quote or line break.
    Rfc4180,
}

/// One line of output: extracted values, or the labels themselves for the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub values: Vec<String>,
}

impl Record {
    pub fn new(values: Vec<String>) -> Self {
        Record { values }
    }

    pub fn header<'a>(labels: impl IntoIterator<Item = &'a str>) -> Self {
        Record {
            values: labels.into_iter().map(str::to_string).collect(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.values.iter().all(|v| v.is_empty())
    }

    /// Render without the trailing newline.
    pub fn to_line(&self, quoting: Quoting) -> Result<String> {
        match quoting {
            Quoting::Raw => Ok(self.values.join(",")),
            Quoting::Rfc4180 => {
                let mut wtr = WriterBuilder::new()
                    .quote_style(QuoteStyle::Necessary)
                    .terminator(Terminator::Any(b'\n'))
                    .from_writer(Vec::new());
                wtr.write_record(&self.values)?;
                let bytes = wtr
                    .into_inner()
                    .map_err(|e| csv::Error::from(e.into_error()))?;
                let line = String::from_utf8_lossy(&bytes);
                Ok(line.trim_end_matches('\n').to_string())
            }
        }
    }
}

/// Extract every label from `body` in order and join the values with commas.
pub fn build_row(body: &str, labels: &[&str]) -> String {
    labels
        .iter()
        .map(|l| super::fields::extract_field(body, l))
        .collect::<Vec<_>>()
        .join(",")
}

// ── Tests ──
