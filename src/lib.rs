//! # Market Data Extractor
//!
//! Shapes exchange market-data JSON responses into ordered column-to-value maps:
//! - Current/last trading session data (`marketdata.columns` + `marketdata.data[0]`)
//! - Previous trading session data (`history.columns` + `history.data[0]`)
//! - Cryptocurrency pair ticker data (`result.list[0]`)
//!
//! ## Architecture
//!
//! - **Domain**: the extracted map type, response shapes and error taxonomy
//! - **Infrastructure**: JSON navigation and the per-shape extractors
//! - **Utils**: logging setup and the column/value zip helper
//!
//! ## Values
//!
//! Every value stays a string. Numbers keep their digits and decimal point as
//! written (`92.50` stays `92.50`) with any exponent normalised to `e+N`/`e-N`,
//! booleans become `true`/`false` and null becomes an empty string. Nothing is
//! parsed into a numeric type here.
//!
//! ## Thread Safety
//!
//! All extractors are pure functions over their input text with no shared
//! state, so they can be called from any number of threads at once.

pub mod domain;
pub mod infrastructure;

/// Utilities for logging and sequence zipping
pub mod utils;

// Re-export commonly used types for convenience
pub use domain::types::*;

pub use infrastructure::parsers::{
    load_crypto_pair_market_data, load_last_trading_day_data, load_previous_day_data,
    load_response, parse_crypto_pair_market_data, parse_last_trading_day_data,
    parse_previous_day_data, parse_response, JsonNavigate,
};

pub use utils::zip::zip_to_map;

/// Main result type for the extractor
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_every_shape_through_dispatch() {
        let _ = tracing_subscriber::fmt::try_init();

        let cases = [
            (
                ResponseShape::LastTradingDay,
                r#"{"marketdata":{"columns":["LAST"],"data":[["92.5"]]}}"#,
                ("LAST", "92.5"),
            ),
            (
                ResponseShape::PreviousTradingDay,
                r#"{"history":{"columns":["CLOSE"],"data":[["91.8"],["90.2"]]}}"#,
                ("CLOSE", "91.8"),
            ),
            (
                ResponseShape::CryptoPair,
                r#"{"result":{"list":[{"lastPrice":"0.0061"}]}}"#,
                ("lastPrice", "0.0061"),
            ),
        ];

        for (shape, json, (key, value)) in cases {
            let market_data = parse_response(shape, json).unwrap();
            assert_eq!(market_data.len(), 1, "shape {}", shape);
            assert_eq!(market_data[key], value, "shape {}", shape);
        }
    }

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
