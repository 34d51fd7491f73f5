//! `playbill-core` — domain building blocks shared by the billing pipeline.
//!
//! This crate contains **pure domain** primitives (no IO, no formatting).

pub mod error;
pub mod id;
pub mod value_object;

pub use error::{StatementError, StatementResult};
pub use id::PlayId;
pub use value_object::{Money, ValueObject};
