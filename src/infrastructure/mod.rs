//! Infrastructure layer providing response parsing
//!
//! This module contains the components that read exchange responses and shape
//! them into the domain's market data maps.

/// Data parsing utilities for exchange response formats
pub mod parsers;

pub use parsers::*;
