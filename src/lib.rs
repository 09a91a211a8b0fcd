//! Docker Tag Deleter Library
//!
//! This file serves as the library root for the docker-tag-deleter crate,
//! organizing and exposing the various modules that make up the application.

pub mod cli;
pub mod common;
pub mod error;
pub mod output;
pub mod registry;

pub use error::{DeleterError, Result};
pub use output::OutputManager;
pub use registry::{AuthConfig, RegistryClient, RegistryClientBuilder, TagDeletionOutcome};
