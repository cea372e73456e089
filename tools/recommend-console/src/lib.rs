pub mod cli;
pub mod config;
pub mod reporter;
pub mod seed;
pub mod shell;
