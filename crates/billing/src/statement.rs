use serde::Serialize;

use playbill_core::{Money, StatementError, StatementResult};

use crate::invoice::{Customer, Invoice};
use crate::performance::{self, EnrichedPerformance};
use crate::play::PlayCatalog;

/// Fully computed statement, ready for any renderer.
///
/// Invariant: `total_amount` and `total_volume_credits` are the sums of the
/// per-performance values over `performances`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementData {
    customer: Customer,
    performances: Vec<EnrichedPerformance>,
    total_amount: Money,
    total_volume_credits: u64,
}

impl StatementData {
    /// Aggregate already-enriched performances.
    pub fn assemble(
        customer: Customer,
        performances: Vec<EnrichedPerformance>,
    ) -> StatementResult<Self> {
        let (total_amount, total_volume_credits) = performances
            .iter()
            .try_fold((Money::ZERO, 0u64), |totals, perf| {
                accumulate(totals, perf.amount(), perf.volume_credits())
            })?;

        Ok(Self {
            customer,
            performances,
            total_amount,
            total_volume_credits,
        })
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn performances(&self) -> &[EnrichedPerformance] {
        &self.performances
    }

    pub fn total_amount(&self) -> Money {
        self.total_amount
    }

    pub fn total_volume_credits(&self) -> u64 {
        self.total_volume_credits
    }
}

fn accumulate(
    (amount, credits): (Money, u64),
    add_amount: Money,
    add_credits: u64,
) -> StatementResult<(Money, u64)> {
    let amount = amount.checked_add(add_amount)?;
    let credits = credits
        .checked_add(add_credits)
        .ok_or_else(|| StatementError::overflow("volume credit total exceeds u64"))?;
    Ok((amount, credits))
}

/// Enrich an invoice against the catalog and aggregate its totals.
pub fn create_statement_data(
    invoice: &Invoice,
    catalog: &PlayCatalog,
) -> StatementResult<StatementData> {
    let performances = performance::enrich(invoice, catalog)?;
    let data = StatementData::assemble(invoice.customer.clone(), performances)?;

    tracing::debug!(
        customer = %data.customer,
        performances = data.performances.len(),
        total_amount = data.total_amount.minor_units(),
        total_volume_credits = data.total_volume_credits,
        "statement assembled"
    );

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::PerformanceRequest;
    use crate::play::{Genre, Play};

    fn catalog() -> PlayCatalog {
        PlayCatalog::new()
            .with_play("hamlet", Play::new("Hamlet", Genre::Tragedy))
            .with_play("as-like", Play::new("As You Like It", Genre::Comedy))
            .with_play("othello", Play::new("Othello", Genre::Tragedy))
    }

    #[test]
    fn reference_invoice_totals() {
        let invoice = Invoice::new(
            Customer::new("BigCo"),
            vec![
                PerformanceRequest::new("hamlet", 55),
                PerformanceRequest::new("as-like", 35),
                PerformanceRequest::new("othello", 40),
            ],
        );

        let data = create_statement_data(&invoice, &catalog()).unwrap();
        assert_eq!(data.total_amount(), Money::from_minor(173_000));
        assert_eq!(data.total_volume_credits(), 47);
        assert_eq!(data.performances().len(), 3);
        assert_eq!(data.customer(), &Customer::new("BigCo"));
    }

    #[test]
    fn assembled_totals_follow_priced_performances() {
        let performances = vec![
            EnrichedPerformance::priced(Play::new("Hamlet", Genre::Tragedy), 55).unwrap(),
            EnrichedPerformance::priced(Play::new("As You Like It", Genre::Comedy), 35).unwrap(),
        ];
        let data = StatementData::assemble(Customer::new("BigCo"), performances).unwrap();

        assert_eq!(data.total_amount(), Money::from_minor(65_000 + 58_000));
        assert_eq!(data.total_volume_credits(), 25 + 12);
    }

    #[test]
    fn serialized_statement_exposes_computed_totals() {
        let data = StatementData::assemble(
            Customer::new("BigCo"),
            vec![EnrichedPerformance::priced(Play::new("Hamlet", Genre::Tragedy), 55).unwrap()],
        )
        .unwrap();

        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["total_amount"], 65_000);
        assert_eq!(json["total_volume_credits"], 25);
        assert_eq!(json["performances"][0]["amount"], 65_000);
    }

    #[test]
    fn empty_invoice_has_zero_totals() {
        let data = StatementData::assemble(Customer::new("Nobody"), Vec::new()).unwrap();
        assert_eq!(data.total_amount(), Money::ZERO);
        assert_eq!(data.total_volume_credits(), 0);
    }

    #[test]
    fn overflowing_total_is_rejected() {
        let err = accumulate((Money::from_minor(u64::MAX), 0), Money::from_minor(1), 0).unwrap_err();
        assert!(matches!(err, StatementError::AmountOverflow(_)));

        let err = accumulate((Money::ZERO, u64::MAX), Money::ZERO, 1).unwrap_err();
        assert!(matches!(err, StatementError::AmountOverflow(_)));

        assert_eq!(
            accumulate((Money::from_minor(2), 3), Money::from_minor(4), 5).unwrap(),
            (Money::from_minor(6), 8)
        );
    }

    #[test]
    fn unknown_play_yields_no_statement() {
        let invoice = Invoice::new(
            Customer::new("BigCo"),
            vec![PerformanceRequest::new("lear", 10)],
        );
        assert_eq!(
            create_statement_data(&invoice, &catalog()).unwrap_err(),
            StatementError::UnknownPlay("lear".into())
        );
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn request() -> impl Strategy<Value = PerformanceRequest> {
            (prop_oneof![Just("hamlet"), Just("as-like"), Just("othello")], 0u32..10_000)
                .prop_map(|(id, audience)| PerformanceRequest::new(id, audience))
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Totals equal the sums over the enriched performances.
            #[test]
            fn totals_are_sums(requests in prop::collection::vec(request(), 0..20)) {
                let invoice = Invoice::new(Customer::new("BigCo"), requests);
                let data = create_statement_data(&invoice, &catalog()).unwrap();

                let amount: u64 = data.performances().iter().map(|p| p.amount().minor_units()).sum();
                let credits: u64 = data.performances().iter().map(|p| p.volume_credits()).sum();
                prop_assert_eq!(data.total_amount().minor_units(), amount);
                prop_assert_eq!(data.total_volume_credits(), credits);
            }

            /// Computing twice from the same input yields the same statement.
            #[test]
            fn computation_is_deterministic(requests in prop::collection::vec(request(), 0..20)) {
                let invoice = Invoice::new(Customer::new("BigCo"), requests);
                let catalog = catalog();
                let first = create_statement_data(&invoice, &catalog).unwrap();
                let second = create_statement_data(&invoice, &catalog).unwrap();
                prop_assert_eq!(first, second);
            }
        }
    }
}
