pub mod field;
pub mod input;
pub mod port;
pub mod state;
