//! Environment-driven configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};

use playbill_billing::{Locale, OutputKind};
use playbill_observability::{LogConfig, LogFormat};

pub const PLAYS_VAR: &str = "PLAYBILL_PLAYS";
pub const INVOICES_VAR: &str = "PLAYBILL_INVOICES";
pub const OUTPUT_VAR: &str = "PLAYBILL_OUTPUT";
pub const LOCALE_VAR: &str = "PLAYBILL_LOCALE";
pub const LOG_FORMAT_VAR: &str = "PLAYBILL_LOG_FORMAT";

const DEFAULT_PLAYS: &str = "fixtures/plays.json";
const DEFAULT_INVOICES: &str = "fixtures/invoices.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub plays_path: PathBuf,
    pub invoices_path: PathBuf,
    pub output: OutputKind,
    pub locale: Locale,
    pub log: LogConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source; unset variables fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let plays_path = lookup(PLAYS_VAR).unwrap_or_else(|| DEFAULT_PLAYS.to_string());
        let invoices_path = lookup(INVOICES_VAR).unwrap_or_else(|| DEFAULT_INVOICES.to_string());

        let output = match lookup(OUTPUT_VAR) {
            Some(raw) => raw
                .parse::<OutputKind>()
                .with_context(|| format!("invalid {OUTPUT_VAR}"))?,
            None => OutputKind::default(),
        };
        let locale = match lookup(LOCALE_VAR) {
            Some(raw) => raw
                .parse::<Locale>()
                .with_context(|| format!("invalid {LOCALE_VAR}"))?,
            None => Locale::default(),
        };
        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(raw) => raw
                .parse::<LogFormat>()
                .with_context(|| format!("invalid {LOG_FORMAT_VAR}"))?,
            None => LogFormat::default(),
        };

        Ok(Self {
            plays_path: plays_path.into(),
            invoices_path: invoices_path.into(),
            output,
            locale,
            log: LogConfig {
                format: log_format,
                ..LogConfig::default()
            },
        })
    }
}
