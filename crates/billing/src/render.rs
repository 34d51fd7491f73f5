//! Statement renderers.
//!
//! Renderers only read [`StatementData`]; they never price anything.

use core::str::FromStr;

use thiserror::Error;

use crate::currency::CurrencyFormat;
use crate::statement::StatementData;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported output kind: {0}")]
pub struct UnknownOutputKind(pub String);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputKind {
    #[default]
    Plain,
    Html,
}

impl FromStr for OutputKind {
    type Err = UnknownOutputKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" | "text" => Ok(OutputKind::Plain),
            "html" => Ok(OutputKind::Html),
            _ => Err(UnknownOutputKind(s.to_string())),
        }
    }
}

pub fn render(data: &StatementData, kind: OutputKind, currency: &CurrencyFormat) -> String {
    match kind {
        OutputKind::Plain => render_plain(data, currency),
        OutputKind::Html => render_html(data, currency),
    }
}

/// Plain-text statement; no trailing newline after the credits line.
pub fn render_plain(data: &StatementData, currency: &CurrencyFormat) -> String {
    let mut result = format!("Statement for {}\n", data.customer());
    for perf in data.performances() {
        result.push_str(&format!(
            "  {}: {} ({} seats)\n",
            perf.play().name,
            currency.format(perf.amount()),
            perf.audience()
        ));
    }
    result.push_str(&format!(
        "Amount owed is {}\n",
        currency.format(data.total_amount())
    ));
    result.push_str(&format!("You earned {} credits", data.total_volume_credits()));
    result
}

pub fn render_html(data: &StatementData, currency: &CurrencyFormat) -> String {
    let mut result = format!(
        "<h1>Statement for {}</h1>\n",
        escape_html(&data.customer().name)
    );
    result.push_str("<table>\n");
    result.push_str("<tr><th>play</th><th>seats</th><th>cost</th></tr>\n");
    for perf in data.performances() {
        result.push_str(&format!(
            "  <tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape_html(&perf.play().name),
            perf.audience(),
            currency.format(perf.amount())
        ));
    }
    result.push_str("</table>\n");
    result.push_str(&format!(
        "<p>Amount owed is <em>{}</em></p>\n",
        currency.format(data.total_amount())
    ));
    result.push_str(&format!(
        "<p>You earned <em>{}</em> credits</p>\n",
        data.total_volume_credits()
    ));
    result
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
