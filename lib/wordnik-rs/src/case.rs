//! Conversion between the api's camelCase keys and snake_case keys.
//!
//! Everything in here is pure.
//! Inputs are never modified, a new value is always built.

use crate::{
    util::ISO_DATE_FORMAT,
    Error,
    Map,
    Value,
    WireValue,
};
use once_cell::sync::Lazy;
use regex::Regex;
use time::{
    format_description::well_known::Rfc3339,
    Date,
    OffsetDateTime,
};

static ACRONYM_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new("([A-Z]+)([A-Z][a-z])").expect("invalid regex"));
static WORD_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new("([a-z0-9])([A-Z])").expect("invalid regex"));

static DATE_TIME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}(\.[0-9]{2,4})?Z$")
        .expect("invalid regex")
});
static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("invalid regex"));

/// Convert a response body to snake_case keys, parsing timestamps along the way.
///
/// Arrays are converted element by element.
/// Every string, no matter how deeply nested, is checked with [`parse_timestamp`].
///
/// # Errors
/// Fails only if a string looks like a timestamp but is not a real date,
/// like `2023-13-45`.
pub fn to_host_case(value: &WireValue) -> Result<Value, Error> {
    match value {
        WireValue::Null => Ok(Value::Null),
        WireValue::Bool(value) => Ok(Value::Bool(*value)),
        WireValue::Number(value) => Ok(Value::Number(value.clone())),
        WireValue::String(value) => parse_timestamp(value),
        WireValue::Array(values) => values
            .iter()
            .map(to_host_case)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        WireValue::Object(wire_map) => {
            let mut map = Map::with_capacity(wire_map.len());
            for (key, value) in wire_map {
                map.insert(wire_key_to_host_key(key), to_host_case(value)?);
            }
            Ok(Value::Object(map))
        }
    }
}

/// Convert a value with snake_case keys to the api's camelCase keys.
///
/// Only keys change. Strings are not touched.
pub fn to_wire_case(value: &WireValue) -> WireValue {
    match value {
        WireValue::Array(values) => WireValue::Array(values.iter().map(to_wire_case).collect()),
        WireValue::Object(map) => WireValue::Object(
            map.iter()
                .map(|(key, value)| (host_key_to_wire_key(key), to_wire_case(value)))
                .collect(),
        ),
        value => value.clone(),
    }
}

/// Convert a camelCase key to snake_case.
///
/// `sourceDictionary` becomes `source_dictionary`,
/// `APIKey` becomes `api_key`,
/// and `Word::Nik` becomes `word/nik`.
pub fn wire_key_to_host_key(key: &str) -> String {
    let key = key.replace("::", "/");
    let key = ACRONYM_BOUNDARY.replace_all(&key, "${1}_${2}");
    let key = WORD_BOUNDARY.replace_all(&key, "${1}_${2}");
    key.replace('-', "_").to_lowercase()
}

/// Convert a snake_case key to camelCase.
///
/// This loses acronyms: `api_key` becomes `apiKey`, not `APIKey`.
/// The api does not care.
pub fn host_key_to_wire_key(key: &str) -> String {
    let mut camel = String::with_capacity(key.len());
    for part in key.split('_') {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            camel.extend(first.to_uppercase());
            camel.push_str(chars.as_str());
        }
    }

    let first_len = camel.chars().next().map_or(0, char::len_utf8);
    let (first, rest) = camel.split_at(first_len);
    format!("{}{rest}", first.to_lowercase())
}

/// Parse a string as a timestamp if it looks like one.
///
/// `YYYY-MM-DDTHH:MM:SSZ`, with an optional 2 to 4 digit fraction of a second,
/// becomes a [`Value::DateTime`] in UTC.
/// `YYYY-MM-DD` becomes a [`Value::Date`].
/// Anything else is returned as a [`Value::String`].
pub fn parse_timestamp(text: &str) -> Result<Value, Error> {
    if DATE_TIME_PATTERN.is_match(text) {
        let date_time = OffsetDateTime::parse(text, &Rfc3339)?;
        return Ok(Value::DateTime(date_time));
    }

    if DATE_PATTERN.is_match(text) {
        let date = Date::parse(text, ISO_DATE_FORMAT)?;
        return Ok(Value::Date(date));
    }

    Ok(Value::String(text.into()))
}
