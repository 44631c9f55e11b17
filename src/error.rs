// src/error.rs
//! Defines the unified error type for report generation.

use lading_layout::LayoutError;
use thiserror::Error;

/// The main error enum for all high-level operations within the engine.
///
/// Malformed booking data is never an error: records degrade field by
/// field to zero during deserialization. Errors surface only for caller
/// misuse (builder misconfiguration) or an unreadable payload.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
}
