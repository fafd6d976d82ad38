use indexmap::IndexMap;
use serde::{
    ser::{
        Error as _,
        SerializeMap,
        SerializeSeq,
    },
    Serialize as _,
};
use time::{
    format_description::well_known::Rfc3339,
    Date,
    OffsetDateTime,
};

/// A parsed json body, exactly as the api sent it.
///
/// Keys are in the api's camelCase convention.
pub type WireValue = serde_json::Value;

/// The key/value map of a [`Value::Object`].
///
/// Keys keep the order the api sent them in.
pub type Map = IndexMap<String, Value>;

/// A response value with snake_case keys and parsed timestamps.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A json null
    Null,

    /// A json bool
    Bool(bool),

    /// A json number
    Number(serde_json::Number),

    /// A string that did not look like a timestamp
    String(String),

    /// A string in the form `YYYY-MM-DDTHH:MM:SS[.fff]Z`
    DateTime(OffsetDateTime),

    /// A string in the form `YYYY-MM-DD`
    Date(Date),

    /// A json array
    Array(Vec<Value>),

    /// A json object
    Object(Map),
}

impl Value {
    /// Make an empty array.
    pub fn empty_array() -> Self {
        Self::Array(Vec::new())
    }

    /// Make an empty object.
    pub fn empty_object() -> Self {
        Self::Object(Map::new())
    }

    /// Returns true if this is [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Get the field of an object by key.
    ///
    /// Returns `None` if this is not an object or the key is missing.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(key))
    }

    /// Take the field of an object by key, discarding the rest of the object.
    pub fn into_field(self, key: &str) -> Option<Value> {
        match self {
            Self::Object(mut map) => map.shift_remove(key),
            _ => None,
        }
    }

    /// Get this as a str, if it is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    /// Get this as an i64, if it is an integer that fits.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(value) => value.as_i64(),
            _ => None,
        }
    }

    /// Get this as a slice, if it is an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(values) => Some(values),
            _ => None,
        }
    }

    /// Get this as a map, if it is an object.
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Get this as a date-time, if it was parsed as one.
    pub fn as_date_time(&self) -> Option<OffsetDateTime> {
        match self {
            Self::DateTime(value) => Some(*value),
            _ => None,
        }
    }

    /// Get this as a date, if it was parsed as one.
    pub fn as_date(&self) -> Option<Date> {
        match self {
            Self::Date(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Self::Array(values)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Self::Object(map)
    }
}

impl serde::Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::Number(value) => value.serialize(serializer),
            Self::String(value) => serializer.serialize_str(value),
            Self::DateTime(value) => {
                let value = value.format(&Rfc3339).map_err(S::Error::custom)?;
                serializer.serialize_str(&value)
            }
            Self::Date(value) => {
                let value = value
                    .format(crate::util::ISO_DATE_FORMAT)
                    .map_err(S::Error::custom)?;
                serializer.serialize_str(&value)
            }
            Self::Array(values) => {
                let mut seq = serializer.serialize_seq(Some(values.len()))?;
                for value in values {
                    seq.serialize_element(value)?;
                }
                seq.end()
            }
            Self::Object(map) => {
                let mut ser_map = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    ser_map.serialize_entry(key, value)?;
                }
                ser_map.end()
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use time::macros::{
        date,
        datetime,
    };

    #[test]
    fn serialize_timestamps() {
        let mut map = Map::new();
        map.insert("created_at".into(), Value::DateTime(datetime!(2023-10-01 12:34:56 UTC)));
        map.insert("publish_date".into(), Value::Date(date!(2023 - 10 - 01)));
        map.insert("word".into(), "cat".into());

        let json = serde_json::to_string(&Value::Object(map)).expect("failed to serialize");
        assert_eq!(
            json,
            r#"{"created_at":"2023-10-01T12:34:56Z","publish_date":"2023-10-01","word":"cat"}"#
        );
    }

    #[test]
    fn into_field() {
        let mut map = Map::new();
        map.insert("value".into(), 7_i64.into());
        map.insert("word".into(), "cat".into());

        let value = Value::Object(map);
        assert_eq!(value.get("word").and_then(Value::as_str), Some("cat"));
        assert_eq!(value.into_field("value"), Some(Value::from(7_i64)));
        assert_eq!(Value::empty_array().into_field("value"), None);
    }
}
