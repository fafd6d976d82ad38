use once_cell::sync::Lazy;
use regex::Regex;
use time::format_description::FormatItem;

pub(crate) const ISO_DATE_FORMAT: &[FormatItem<'_>] =
    time::macros::format_description!("[year]-[month]-[day]");

pub(crate) mod iso_date {
    time::serde::format_description!(iso_date_impl, Date, ISO_DATE_FORMAT);

    pub use self::iso_date_impl::*;
    use super::ISO_DATE_FORMAT;
}

static MARKUP_TAG: Lazy<Regex> = Lazy::new(|| Regex::new("<[^>]*>").expect("invalid regex"));

/// A list of values the api expects as a single comma-joined string.
///
/// Build it from a single string or from a sequence of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvList(Vec<String>);

impl CsvList {
    /// Make a new empty [`CsvList`].
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Add an entry.
    pub fn push(&mut self, value: impl Into<String>) -> &mut Self {
        self.0.push(value.into());
        self
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Join the entries with `,`.
    pub fn join(&self) -> String {
        self.0.join(",")
    }
}

impl From<&str> for CsvList {
    fn from(value: &str) -> Self {
        Self(vec![value.into()])
    }
}

impl From<String> for CsvList {
    fn from(value: String) -> Self {
        Self(vec![value])
    }
}

impl From<Vec<String>> for CsvList {
    fn from(values: Vec<String>) -> Self {
        Self(values)
    }
}

impl From<Vec<&str>> for CsvList {
    fn from(values: Vec<&str>) -> Self {
        values.into_iter().collect()
    }
}

impl From<&[&str]> for CsvList {
    fn from(values: &[&str]) -> Self {
        values.iter().copied().collect()
    }
}

impl<const N: usize> From<[&str; N]> for CsvList {
    fn from(values: [&str; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<S> FromIterator<S> for CsvList
where
    S: Into<String>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl serde::Serialize for CsvList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.join())
    }
}

/// Strip tags, newlines, and square brackets from a string, then trim it.
pub fn strip_markup(text: &str) -> String {
    MARKUP_TAG
        .replace_all(text, "")
        .chars()
        .filter(|&c| !matches!(c, '\n' | '\r' | '[' | ']'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Parse the leading integer of a string, like `"1987 (est.)"`.
///
/// Surrounding whitespace and a sign are allowed.
/// A string with no leading digits parses as 0.
pub fn parse_leading_int(text: &str) -> i64 {
    let text = text.trim();
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let value = digits[..end].parse::<i64>().unwrap_or(0);

    if negative {
        -value
    } else {
        value
    }
}
