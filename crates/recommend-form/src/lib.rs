//! Form controller for the recommendations resource.
//!
//! Maps user actions to REST calls and REST responses to form state. The
//! state lives in an explicit [`domain::state::FormState`] value; responses
//! are folded into it by the pure [`domain::state::FormState::apply`], so the
//! whole UI contract can be exercised without a network or a page.

pub mod controller;
pub mod domain;
pub mod error;
pub mod infra;
pub mod render;
pub mod usecase;
