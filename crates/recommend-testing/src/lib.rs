//! Test utilities for the recommendations client.
//!
//! Provides `MockServer`, an in-memory recommendations service on a random
//! port, and a seed-fixture loader. Use from tests only — never in
//! production code.

pub mod fixture;
pub mod server;
