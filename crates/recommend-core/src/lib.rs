//! Plumbing shared by the recommendations client crates.

pub mod error;
pub mod tracing;
