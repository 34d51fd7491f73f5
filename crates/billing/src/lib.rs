//! Theatrical billing statements.
//!
//! Pipeline: invoice + play catalog → enriched performances → statement data
//! → rendered text. Every stage is a pure function over immutable inputs.

pub mod currency;
pub mod invoice;
pub mod performance;
pub mod play;
pub mod pricing;
pub mod render;
pub mod statement;

pub use currency::{CurrencyFormat, Locale, UnknownLocale};
pub use invoice::{Customer, Invoice, PerformanceRequest};
pub use performance::{EnrichedPerformance, enrich};
pub use play::{Genre, GenreName, Play, PlayCatalog};
pub use pricing::{ComedyPricing, PricingRule, TragedyPricing, base_credits, rule_for};
pub use render::{OutputKind, UnknownOutputKind, render, render_html, render_plain};
pub use statement::{StatementData, create_statement_data};

pub use playbill_core::{Money, PlayId, StatementError, StatementResult};

/// Compute and render a statement in one call.
pub fn statement(
    invoice: &Invoice,
    catalog: &PlayCatalog,
    kind: OutputKind,
    currency: &CurrencyFormat,
) -> StatementResult<String> {
    let data = create_statement_data(invoice, catalog)?;
    Ok(render(&data, kind, currency))
}
