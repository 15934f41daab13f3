//! Application layer: sequence parsing and the rebuild service
//!
//! Orchestrates domain logic with loaded settings.

pub mod error;
pub mod parse;
pub mod service;

pub use error::{ApplicationError, ApplicationResult};
pub use parse::{parse_sequence, TokenMode};
pub use service::RebuildService;
