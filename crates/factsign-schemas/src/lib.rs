//! Record types for fact-signed operations.
//!
//! This crate provides the typed shape of an operation as it travels in JSON:
//! an opaque fact identified by its hash, the ordered list of fact signs that
//! endorse it, a memo and the derived operation hash.

#![deny(missing_docs)]

pub mod fact_sign;
pub mod operation;

pub use fact_sign::FactSign;
pub use operation::{Fact, Operation};
