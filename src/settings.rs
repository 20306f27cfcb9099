use config::{Config, Environment};
use serde::Deserialize;

use crate::error::Result;
use crate::parser::fields::LabelMode;
use crate::parser::row::Quoting;

pub const ENV_PREFIX: &str = "FORM2CSV";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub quote: bool,
    #[serde(default)]
    pub label_mode: LabelMode,
}

impl Settings {
    /// Defaults overlaid with `FORM2CSV_*` environment variables.
    pub fn load() -> Result<Self> {
        Self::from_env(Environment::with_prefix(ENV_PREFIX))
    }

    fn from_env(env: Environment) -> Result<Self> {
        let settings = Config::builder()
            .set_default("quote", false)?
            .set_default("label_mode", "literal")?
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    pub fn quoting(&self) -> Quoting {
        if self.quote {
            Quoting::Rfc4180
        } else {
            Quoting::Raw
        }
    }
}

// ── Tests ──
