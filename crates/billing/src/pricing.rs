//! Genre pricing rules.
//!
//! Each genre with a price list implements [`PricingRule`]; [`rule_for`] is
//! the single place that maps a [`Genre`] to its rule. Adding a genre means a
//! new variant, a new rule type and one arm here. Callers never branch on
//! genre themselves.

use playbill_core::{Money, StatementError, StatementResult};

use crate::play::Genre;

/// Audience size above which every seat earns one volume credit.
pub const VOLUME_CREDIT_THRESHOLD: u32 = 30;

/// Amount and credits for a genre, as pure functions of the audience size.
pub trait PricingRule: Send + Sync {
    fn amount_for(&self, audience: u32) -> Money;

    /// Defaults to [`base_credits`]; genres with a bonus add to it.
    fn volume_credits_for(&self, audience: u32) -> u64 {
        base_credits(audience)
    }
}

/// Credits every genre earns: one per seat beyond [`VOLUME_CREDIT_THRESHOLD`].
pub fn base_credits(audience: u32) -> u64 {
    u64::from(audience.saturating_sub(VOLUME_CREDIT_THRESHOLD))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TragedyPricing;

impl TragedyPricing {
    const BASE: u64 = 40_000;
    const THRESHOLD: u32 = 30;
    const PER_EXTRA_SEAT: u64 = 1_000;
}

impl PricingRule for TragedyPricing {
    fn amount_for(&self, audience: u32) -> Money {
        let mut amount = Self::BASE;
        if audience > Self::THRESHOLD {
            amount += Self::PER_EXTRA_SEAT * u64::from(audience - Self::THRESHOLD);
        }
        Money::from_minor(amount)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ComedyPricing;

impl ComedyPricing {
    const BASE: u64 = 30_000;
    const THRESHOLD: u32 = 20;
    const LARGE_AUDIENCE_FEE: u64 = 10_000;
    const PER_EXTRA_SEAT: u64 = 500;
    const PER_SEAT: u64 = 300;
    /// One bonus credit per this many attendees.
    const BONUS_CREDIT_DIVISOR: u32 = 5;
}

impl PricingRule for ComedyPricing {
    fn amount_for(&self, audience: u32) -> Money {
        let mut amount = Self::BASE;
        if audience > Self::THRESHOLD {
            amount += Self::LARGE_AUDIENCE_FEE
                + Self::PER_EXTRA_SEAT * u64::from(audience - Self::THRESHOLD);
        }
        amount += Self::PER_SEAT * u64::from(audience);
        Money::from_minor(amount)
    }

    fn volume_credits_for(&self, audience: u32) -> u64 {
        base_credits(audience) + u64::from(audience / Self::BONUS_CREDIT_DIVISOR)
    }
}

/// Select the pricing rule for a genre.
pub fn rule_for(genre: &Genre) -> StatementResult<&'static dyn PricingRule> {
    match genre {
        Genre::Tragedy => Ok(&TragedyPricing),
        Genre::Comedy => Ok(&ComedyPricing),
        Genre::Other(name) => Err(StatementError::unknown_genre(name.as_str())),
    }
}

/// Price one performance: `(amount, volume credits)`.
pub fn price(genre: &Genre, audience: u32) -> StatementResult<(Money, u64)> {
    let rule = rule_for(genre)?;
    Ok((rule.amount_for(audience), rule.volume_credits_for(audience)))
}
