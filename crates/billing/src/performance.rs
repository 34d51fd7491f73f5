use serde::Serialize;

use playbill_core::{Money, StatementError, StatementResult};

use crate::invoice::{Invoice, PerformanceRequest};
use crate::play::{Play, PlayCatalog};
use crate::pricing;

/// A performance resolved against the catalog and priced.
///
/// Invariant: `amount` and `volume_credits` are the pricing rule's output for
/// `(play.genre, audience)`. The only way to obtain one is through pricing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedPerformance {
    play: Play,
    audience: u32,
    /// Price in smallest currency unit.
    amount: Money,
    volume_credits: u64,
}

impl EnrichedPerformance {
    /// Price a play for the given audience.
    pub fn priced(play: Play, audience: u32) -> StatementResult<Self> {
        let (amount, volume_credits) =
            pricing::price(&play.genre, audience).inspect_err(|_| {
                tracing::warn!(play = %play.name, genre = %play.genre, "no pricing rule for genre");
            })?;

        tracing::debug!(
            play = %play.name,
            audience,
            amount = amount.minor_units(),
            volume_credits,
            "priced performance"
        );

        Ok(Self {
            play,
            audience,
            amount,
            volume_credits,
        })
    }

    /// Resolve and price a single request.
    pub fn from_request(
        request: &PerformanceRequest,
        catalog: &PlayCatalog,
    ) -> StatementResult<Self> {
        let play = catalog.get(request.play_id.as_str()).ok_or_else(|| {
            tracing::warn!(play_id = %request.play_id, "performance references unknown play");
            StatementError::unknown_play(request.play_id.clone())
        })?;

        Self::priced(play.clone(), request.audience)
    }

    pub fn play(&self) -> &Play {
        &self.play
    }

    pub fn audience(&self) -> u32 {
        self.audience
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn volume_credits(&self) -> u64 {
        self.volume_credits
    }
}

/// Enrich every performance of an invoice, in input order.
///
/// The first failure aborts the whole invoice; no partial list is returned.
pub fn enrich(invoice: &Invoice, catalog: &PlayCatalog) -> StatementResult<Vec<EnrichedPerformance>> {
    invoice
        .performances
        .iter()
        .map(|request| EnrichedPerformance::from_request(request, catalog))
        .collect()
}
