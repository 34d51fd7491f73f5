//! Currency display formats.
//!
//! Amounts arrive in minor units; formatting divides by 100 and applies the
//! locale's symbol and separators.

use core::str::FromStr;

use thiserror::Error;

use playbill_core::Money;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported locale: {0}")]
pub struct UnknownLocale(pub String);

/// Supported display locales.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    PtBr,
    EnUs,
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "pt-br" => Ok(Locale::PtBr),
            "en-us" => Ok(Locale::EnUs),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}

impl Locale {
    pub fn currency_format(self) -> CurrencyFormat {
        match self {
            Locale::PtBr => CurrencyFormat::pt_br(),
            Locale::EnUs => CurrencyFormat::en_us(),
        }
    }
}

/// Symbol placement and separators for a two-decimal currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: String,
    /// Inserted between the symbol and the number (may be empty).
    pub symbol_spacing: String,
    pub group_separator: char,
    pub decimal_separator: char,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::pt_br()
    }
}

impl CurrencyFormat {
    /// Brazilian real: `R$ 1.730,00`.
    pub fn pt_br() -> Self {
        Self {
            symbol: "R$".to_string(),
            symbol_spacing: " ".to_string(),
            group_separator: '.',
            decimal_separator: ',',
        }
    }

    /// US dollar: `$1,730.00`.
    pub fn en_us() -> Self {
        Self {
            symbol: "$".to_string(),
            symbol_spacing: String::new(),
            group_separator: ',',
            decimal_separator: '.',
        }
    }

    pub fn format(&self, amount: Money) -> String {
        format!(
            "{}{}{}{}{:02}",
            self.symbol,
            self.symbol_spacing,
            group_thousands(amount.major_units(), self.group_separator),
            self.decimal_separator,
            amount.cents()
        )
    }
}

fn group_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
