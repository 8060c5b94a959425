//! Error types.
//!
//! The rules themselves never fail; these only cover reading the string
//! identifiers shared with the orchestrator.

use thiserror::Error;

/// The string is not a known action identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown action")]
pub struct ParseActionError;

/// The string is not a known stage identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown stage")]
pub struct ParseStageError;
