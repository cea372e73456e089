pub mod record;
pub mod reset;
pub mod search;
