//! Supported bike-share operators and their upstream endpoints.
//!
//! The operator set is fixed at compile time. Each operator carries a
//! namespace code for station ids and an [`AdapterKind`] that decides how
//! its upstream data is fetched and normalized.

mod operator;
mod registry;

pub use operator::{AdapterKind, InvalidOperator, Operator};
pub use registry::{Credentials, Registry};
