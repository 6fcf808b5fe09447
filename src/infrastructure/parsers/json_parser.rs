use super::navigation::*;
use crate::domain::types::*;
use crate::utils::zip::zip_to_map;
use serde_json::Value;
use std::path::Path;

/// Parse the current (or, once it has closed, the last) trading session from a
/// `marketdata` response.
///
/// Expected shape:
/// `{"marketdata": {"columns": ["SECID", ...], "data": [["USD000UTSTOM", ...]]}}`
pub fn parse_last_trading_day_data(json_str: &str) -> ExtractResult<MarketDataMap> {
    parse_columnar(json_str, ResponseShape::LastTradingDay)
}

/// Parse the previous trading session from a `history` response.
///
/// Only `history.data[0]` is read. The request that produced the response must
/// sort rows by trade date descending so the first row is the latest completed
/// session; rows are taken as given and never re-sorted here.
pub fn parse_previous_day_data(json_str: &str) -> ExtractResult<MarketDataMap> {
    parse_columnar(json_str, ResponseShape::PreviousTradingDay)
}

/// Parse a cryptocurrency pair ticker from a `result.list` response.
///
/// `result.list[0]` already maps field names to values, so its entries are
/// copied across in source order.
pub fn parse_crypto_pair_market_data(json_str: &str) -> ExtractResult<MarketDataMap> {
    let root = parse_document(json_str)?;
    let root_field = ResponseShape::CryptoPair.root_field();

    let result = field(root.expect_object("")?, "", root_field)?.expect_object(root_field)?;

    let list_path = join_path(root_field, "list");
    let list = field(result, root_field, "list")?.expect_array(&list_path)?;

    let entry_path = format!("{}[0]", list_path);
    let entry = first_element(list, &list_path)?.expect_object(&entry_path)?;

    let mut market_data = MarketDataMap::with_capacity(entry.len());
    for (name, value) in entry {
        let value = value.expect_scalar_string(&join_path(&entry_path, name))?;
        market_data.insert(name.clone(), value);
    }

    tracing::debug!(
        "Extracted {} fields from {} response",
        market_data.len(),
        ResponseShape::CryptoPair
    );
    Ok(market_data)
}

/// Parse a response of the given shape
pub fn parse_response(shape: ResponseShape, json_str: &str) -> ExtractResult<MarketDataMap> {
    match shape {
        ResponseShape::LastTradingDay => parse_last_trading_day_data(json_str),
        ResponseShape::PreviousTradingDay => parse_previous_day_data(json_str),
        ResponseShape::CryptoPair => parse_crypto_pair_market_data(json_str),
    }
}

/// Zip `<root>.columns` with `<root>.data[0]`
fn parse_columnar(json_str: &str, shape: ResponseShape) -> ExtractResult<MarketDataMap> {
    let root = parse_document(json_str)?;
    let root_field = shape.root_field();

    let section = field(root.expect_object("")?, "", root_field)?.expect_object(root_field)?;

    let columns_path = join_path(root_field, "columns");
    let columns = field(section, root_field, "columns")?.expect_array(&columns_path)?;
    let columns = column_names(columns, &columns_path)?;

    let data_path = join_path(root_field, "data");
    let data = field(section, root_field, "data")?.expect_array(&data_path)?;

    let row_path = format!("{}[0]", data_path);
    let row = first_element(data, &data_path)?.expect_array(&row_path)?;
    let values = scalar_strings(row, &row_path)?;

    tracing::trace!(
        "{} response: {} columns, {} rows, using row 0",
        shape,
        columns.len(),
        data.len()
    );

    let market_data = zip_to_map(columns, values)
        .map_err(|e| e.at(format!("{}/{}", columns_path, row_path)))?;
    tracing::debug!("Extracted {} fields from {} response", market_data.len(), shape);
    Ok(market_data)
}

/// Column names must be JSON strings
fn column_names(columns: &[Value], path: &str) -> ExtractResult<Vec<String>> {
    columns
        .iter()
        .enumerate()
        .map(|(i, column)| match column {
            Value::String(name) => Ok(name.clone()),
            other => Err(ExtractError::mismatch(
                format!("{}[{}]", path, i),
                "string",
                kind_name(other),
            )),
        })
        .collect()
}

/// Load and parse a `marketdata` response from file
pub fn load_last_trading_day_data(file_path: impl AsRef<Path>) -> ExtractResult<MarketDataMap> {
    let content = std::fs::read_to_string(file_path)?;
    parse_last_trading_day_data(&content)
}

/// Load and parse a `history` response from file
pub fn load_previous_day_data(file_path: impl AsRef<Path>) -> ExtractResult<MarketDataMap> {
    let content = std::fs::read_to_string(file_path)?;
    parse_previous_day_data(&content)
}

/// Load and parse a `result.list` response from file
pub fn load_crypto_pair_market_data(file_path: impl AsRef<Path>) -> ExtractResult<MarketDataMap> {
    let content = std::fs::read_to_string(file_path)?;
    parse_crypto_pair_market_data(&content)
}

/// Load and parse a response of the given shape from file
pub fn load_response(shape: ResponseShape, file_path: impl AsRef<Path>) -> ExtractResult<MarketDataMap> {
    let content = std::fs::read_to_string(file_path)?;
    parse_response(shape, &content)
}
