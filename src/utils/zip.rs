use crate::domain::types::*;

/// Zips two equal-length sequences into an ordered key-to-value map.
///
/// Insertion order follows `keys`. A repeated key keeps its first position and
/// takes the value of its last occurrence. Sequences of different lengths are
/// rejected before anything is inserted; the error is reported at `keys/values`
/// and callers that know the document location relabel it with `ExtractError::at`.
pub fn zip_to_map<K, V>(keys: Vec<K>, values: Vec<V>) -> ExtractResult<MarketDataMap>
where
    K: Into<String>,
    V: Into<String>,
{
    if keys.len() != values.len() {
        return Err(ExtractError::mismatch(
            "keys/values",
            format!("{} values", keys.len()),
            format!("{} values", values.len()),
        ));
    }

    let mut map = MarketDataMap::with_capacity(keys.len());
    for (key, value) in keys.into_iter().zip(values) {
        map.insert(key.into(), value.into());
    }
    Ok(map)
}
