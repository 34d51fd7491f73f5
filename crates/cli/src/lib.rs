//! `playbill` command-line front end.
//!
//! Loads a play catalog and a list of invoices from JSON, then renders one
//! statement per invoice. All pricing lives in `playbill-billing`.

pub mod config;

use std::path::Path;

use anyhow::{Context, Result};

use playbill_billing::{CurrencyFormat, Invoice, OutputKind, PlayCatalog, statement};

pub use config::Config;

pub fn load_plays(path: &Path) -> Result<PlayCatalog> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read plays from {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid plays JSON in {}", path.display()))
}

pub fn load_invoices(path: &Path) -> Result<Vec<Invoice>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read invoices from {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("invalid invoices JSON in {}", path.display()))
}

/// Render every invoice in order, separated by a blank line.
pub fn render_all(
    invoices: &[Invoice],
    catalog: &PlayCatalog,
    output: OutputKind,
    currency: &CurrencyFormat,
) -> Result<String> {
    let mut rendered = Vec::with_capacity(invoices.len());
    for invoice in invoices {
        let text = statement(invoice, catalog, output, currency)
            .with_context(|| format!("cannot bill customer {}", invoice.customer))?;
        rendered.push(text);
    }
    Ok(rendered.join("\n\n"))
}

pub fn run(config: &Config) -> Result<String> {
    let catalog = load_plays(&config.plays_path)?;
    let invoices = load_invoices(&config.invoices_path)?;
    tracing::info!(
        plays = catalog.len(),
        invoices = invoices.len(),
        output = ?config.output,
        "rendering statements"
    );
    render_all(&invoices, &catalog, config.output, &config.locale.currency_format())
}
