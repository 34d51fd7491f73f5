use serde::{Deserialize, Serialize};

use playbill_core::PlayId;

/// Billed customer; rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Customer {
    pub name: String,
}

impl Customer {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl core::fmt::Display for Customer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.name)
    }
}

/// One invoiced performance, before pricing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceRequest {
    #[serde(alias = "playID")]
    pub play_id: PlayId,
    /// Number of seats sold.
    pub audience: u32,
}

impl PerformanceRequest {
    pub fn new(play_id: impl Into<PlayId>, audience: u32) -> Self {
        Self {
            play_id: play_id.into(),
            audience,
        }
    }
}

/// Input root: a customer and the performances billed to them, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub customer: Customer,
    pub performances: Vec<PerformanceRequest>,
}

impl Invoice {
    pub fn new(customer: Customer, performances: Vec<PerformanceRequest>) -> Self {
        Self {
            customer,
            performances,
        }
    }
}
