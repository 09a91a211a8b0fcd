//! Command-line interface modules

pub mod args;
pub mod config;
pub mod runner;

pub use args::Args;
pub use config::DeleteConfig;
pub use runner::Runner;
