//! Value objects: equality by value, not identity.

use serde::{Deserialize, Serialize};

use crate::error::{StatementError, StatementResult};

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**; two instances
/// with the same attributes are interchangeable.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// Monetary amount in the smallest currency unit (e.g. cents).
///
/// Display conversion (divide by 100, then format) happens only at the
/// rendering edge; all arithmetic stays in integers.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl ValueObject for Money {}

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_minor(minor: u64) -> Self {
        Self(minor)
    }

    pub const fn minor_units(self) -> u64 {
        self.0
    }

    /// Whole major units (minor / 100).
    pub const fn major_units(self) -> u64 {
        self.0 / 100
    }

    /// Remaining minor units after the major part (minor % 100).
    pub const fn cents(self) -> u64 {
        self.0 % 100
    }

    pub fn checked_add(self, other: Money) -> StatementResult<Money> {
        self.0
            .checked_add(other.0)
            .map(Money)
            .ok_or_else(|| StatementError::overflow("money sum exceeds u64"))
    }
}
