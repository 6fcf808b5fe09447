//! Shared helpers: logging setup and sequence zipping

/// Tracing subscriber initialisation
pub mod logger;
/// Column/value zipping into ordered maps
pub mod zip;

pub use zip::zip_to_map;
