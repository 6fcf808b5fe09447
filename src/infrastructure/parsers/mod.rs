//! JSON parsing utilities for exchange market data
//!
//! This module turns raw exchange responses into ordered column-to-value maps.

/// Extractors for the supported exchange response shapes
pub mod json_parser;
/// Path-aware accessors over `serde_json::Value`
pub mod navigation;

pub use json_parser::*;
pub use navigation::JsonNavigate;
