//! Wire types for the recommendations REST resource.
//!
//! This crate contains only pure types with no framework dependencies.
//! Both the form client and the test tooling speak in these types.

pub mod id;
pub mod recommendation;
pub mod search;
