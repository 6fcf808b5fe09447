use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Column name to value mapping extracted from an exchange response.
///
/// Iteration order is the order the columns appeared in the source document.
pub type MarketDataMap = IndexMap<String, String>;

/// Known exchange response layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResponseShape {
    /// Current or most recent trading session: `marketdata.columns` / `marketdata.data`
    LastTradingDay,
    /// Previous trading sessions, newest first: `history.columns` / `history.data`
    PreviousTradingDay,
    /// Cryptocurrency pair ticker: `result.list[0]`
    CryptoPair,
}

impl ResponseShape {
    /// All supported shapes
    pub const ALL: [ResponseShape; 3] = [
        ResponseShape::LastTradingDay,
        ResponseShape::PreviousTradingDay,
        ResponseShape::CryptoPair,
    ];

    /// Top-level property the extractor descends into
    pub fn root_field(&self) -> &'static str {
        match self {
            ResponseShape::LastTradingDay => "marketdata",
            ResponseShape::PreviousTradingDay => "history",
            ResponseShape::CryptoPair => "result",
        }
    }

    /// Kebab-case name used on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseShape::LastTradingDay => "last-trading-day",
            ResponseShape::PreviousTradingDay => "previous-trading-day",
            ResponseShape::CryptoPair => "crypto-pair",
        }
    }
}

impl fmt::Display for ResponseShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ResponseShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResponseShape::ALL
            .into_iter()
            .find(|shape| shape.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "unknown response shape '{}', expected one of: {}",
                    s,
                    ResponseShape::ALL.map(|shape| shape.as_str()).join(", ")
                )
            })
    }
}

/// Extraction errors
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// Input text is not valid JSON
    #[error("Malformed input: {0}")]
    MalformedInput(#[source] serde_json::Error),

    /// An expected object property is absent
    #[error("Missing field: {path}")]
    MissingField {
        /// Dotted path of the absent property
        path: String,
    },

    /// A value has the wrong JSON kind or the wrong length
    #[error("Shape mismatch at {path}: expected {expected}, found {found}")]
    ShapeMismatch {
        /// Dotted path of the offending value
        path: String,
        /// What the extractor required
        expected: String,
        /// What the document contained
        found: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ExtractError {
    pub(crate) fn missing(path: impl Into<String>) -> Self {
        ExtractError::MissingField { path: path.into() }
    }

    pub(crate) fn mismatch(
        path: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        ExtractError::ShapeMismatch {
            path: path.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Replace the location reported by a missing-field or shape error
    pub(crate) fn at(self, location: impl Into<String>) -> Self {
        match self {
            ExtractError::MissingField { .. } => ExtractError::MissingField {
                path: location.into(),
            },
            ExtractError::ShapeMismatch {
                expected, found, ..
            } => ExtractError::ShapeMismatch {
                path: location.into(),
                expected,
                found,
            },
            other => other,
        }
    }
}

/// Result type for extraction operations
pub type ExtractResult<T> = Result<T, ExtractError>;
