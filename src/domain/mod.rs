//! Domain layer containing the extracted data model
//!
//! This module defines the market data map, the supported response shapes and
//! the extraction error taxonomy.

/// Core types and errors
pub mod types;

pub use types::*;
