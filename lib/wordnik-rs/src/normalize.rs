//! What each endpoint hands back to callers.
//!
//! The api signals errors and missing data with a json object holding a `statusCode`,
//! and the shape of a successful response differs per endpoint.
//! With clean up on, every endpoint returns one predictable shape.

use crate::{
    util::{
        parse_leading_int,
        strip_markup,
    },
    Error,
    Value,
};
use tracing::debug;

/// An api endpoint, and how its responses are cleaned up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    /// `word.json/{word}/audio`
    Audio,

    /// `word.json/{word}/definitions`
    Definitions,

    /// `word.json/{word}/etymologies`
    Etymologies,

    /// `word.json/{word}/examples`
    Examples,

    /// `word.json/{word}/frequency`
    Frequency,

    /// `word.json/{word}/hyphenation`
    Hyphenation,

    /// `word.json/{word}/phrases`
    Phrases,

    /// `word.json/{word}/pronunciations`
    Pronunciations {
        /// Only keep pronunciations with this `raw_type`.
        type_format: Option<&'a str>,
    },

    /// `word.json/{word}/relatedWords`
    RelatedWords,

    /// `word.json/{word}/scrabbleScore`
    ScrabbleScore,

    /// `word.json/{word}/topExample`
    TopExample,

    /// `words.json/randomWord`
    RandomWord,

    /// `words.json/randomWords`
    RandomWords,

    /// `words.json/wordOfTheDay`
    WordOfTheDay,
}

impl Endpoint<'_> {
    /// The resource this endpoint lives under.
    pub fn resource(&self) -> &'static str {
        match self {
            Self::RandomWord | Self::RandomWords | Self::WordOfTheDay => "words.json",
            _ => "word.json",
        }
    }

    /// Whether the path of this endpoint includes a word.
    pub fn takes_word(&self) -> bool {
        self.resource() == "word.json"
    }

    /// The last path segment of this endpoint.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Audio => "audio",
            Self::Definitions => "definitions",
            Self::Etymologies => "etymologies",
            Self::Examples => "examples",
            Self::Frequency => "frequency",
            Self::Hyphenation => "hyphenation",
            Self::Phrases => "phrases",
            Self::Pronunciations { .. } => "pronunciations",
            Self::RelatedWords => "relatedWords",
            Self::ScrabbleScore => "scrabbleScore",
            Self::TopExample => "topExample",
            Self::RandomWord => "randomWord",
            Self::RandomWords => "randomWords",
            Self::WordOfTheDay => "wordOfTheDay",
        }
    }

    /// The value returned with clean up on when the api has no data.
    pub fn not_found(&self) -> Value {
        match self {
            Self::ScrabbleScore => Value::from(0_i64),
            Self::TopExample => Value::empty_object(),
            Self::RandomWord | Self::WordOfTheDay => Value::Null,
            _ => Value::empty_array(),
        }
    }

    /// Whether a `status_code` means "no data" instead of an error.
    fn is_not_found_status(&self, status_code: i64) -> bool {
        match (self, status_code) {
            // The api reports missing etymologies with a broken 500 instead of a 404.
            (_, 404) | (Self::Etymologies, 500) => true,
            _ => false,
        }
    }

    /// Turn a snake_case response body into what callers get back.
    ///
    /// # Errors
    /// Returns [`Error::Api`] if the body carries a `status_code` that is not 200,
    /// and is not a not-found status for this endpoint.
    /// This happens whether or not clean up is on.
    pub fn normalize(&self, body: Value, clean_up: bool) -> Result<Value, Error> {
        if let Some(status_code) = status_code(&body) {
            if status_code != 200 {
                if !self.is_not_found_status(status_code) {
                    return Err(Error::Api {
                        status_code,
                        message: body
                            .get("message")
                            .and_then(Value::as_str)
                            .unwrap_or_default()
                            .to_string(),
                    });
                }

                if !clean_up {
                    return Ok(body);
                }

                debug!(
                    endpoint = self.path(),
                    status_code, "api has no data, using the empty default"
                );
                return Ok(self.not_found());
            }
        }

        if !clean_up {
            return Ok(body);
        }

        Ok(self.reshape(body))
    }

    /// Reshape a successful response.
    fn reshape(&self, body: Value) -> Value {
        match self {
            Self::Audio
            | Self::Hyphenation
            | Self::Phrases
            | Self::RelatedWords
            | Self::TopExample => body,
            Self::Definitions => retain(body, |definition| {
                definition
                    .get("text")
                    .and_then(Value::as_str)
                    .is_some_and(|text| !text.is_empty())
            }),
            Self::Etymologies => map_array(body, |etymology| match etymology {
                Value::String(text) => Value::String(strip_markup(&text)),
                etymology => etymology,
            }),
            Self::Examples => body
                .into_field("examples")
                .unwrap_or_else(Value::empty_array),
            Self::Frequency => map_array(
                body.into_field("frequency")
                    .unwrap_or_else(Value::empty_array),
                coerce_frequency_entry,
            ),
            Self::Pronunciations { type_format } => match type_format {
                Some(type_format) => retain(body, |pronunciation| {
                    pronunciation.get("raw_type").and_then(Value::as_str) == Some(*type_format)
                }),
                None => body,
            },
            Self::ScrabbleScore => body
                .into_field("value")
                .unwrap_or_else(|| Value::from(0_i64)),
            Self::RandomWord => body.into_field("word").unwrap_or(Value::Null),
            Self::RandomWords => match body {
                Value::Array(entries) => Value::Array(
                    entries
                        .into_iter()
                        .filter_map(|entry| entry.into_field("word"))
                        .collect(),
                ),
                body => body,
            },
            Self::WordOfTheDay => match body {
                Value::String(text) if text.is_empty() => Value::Null,
                body => body,
            },
        }
    }
}

/// Get the `status_code` of a body, if it has one.
///
/// The api sometimes sends the code as a string.
fn status_code(body: &Value) -> Option<i64> {
    match body.get("status_code")? {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn retain<F>(body: Value, mut keep: F) -> Value
where
    F: FnMut(&Value) -> bool,
{
    match body {
        Value::Array(mut entries) => {
            entries.retain(|entry| keep(entry));
            Value::Array(entries)
        }
        body => body,
    }
}

fn map_array<F>(body: Value, f: F) -> Value
where
    F: FnMut(Value) -> Value,
{
    match body {
        Value::Array(entries) => Value::Array(entries.into_iter().map(f).collect()),
        body => body,
    }
}

/// The api sends frequency years (and sometimes counts) as strings.
fn coerce_frequency_entry(entry: Value) -> Value {
    match entry {
        Value::Object(mut map) => {
            for key in ["year", "count"] {
                if let Some(Value::String(text)) = map.get(key) {
                    let value = parse_leading_int(text);
                    map.insert(key.into(), Value::from(value));
                }
            }
            Value::Object(map)
        }
        entry => entry,
    }
}

/// Collect the words of every relation of the given type from a cleaned `related_words` response.
pub fn related_words_of_type(relations: &Value, relationship_type: &str) -> Vec<String> {
    relations
        .as_array()
        .unwrap_or_default()
        .iter()
        .filter(|relation| {
            relation.get("relationship_type").and_then(Value::as_str) == Some(relationship_type)
        })
        .filter_map(|relation| relation.get("words").and_then(Value::as_array))
        .flatten()
        .filter_map(Value::as_str)
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::case::to_host_case;
    use serde_json::json;

    const ALL: &[Endpoint<'static>] = &[
        Endpoint::Audio,
        Endpoint::Definitions,
        Endpoint::Etymologies,
        Endpoint::Examples,
        Endpoint::Frequency,
        Endpoint::Hyphenation,
        Endpoint::Phrases,
        Endpoint::Pronunciations { type_format: None },
        Endpoint::RelatedWords,
        Endpoint::ScrabbleScore,
        Endpoint::TopExample,
        Endpoint::RandomWord,
        Endpoint::RandomWords,
        Endpoint::WordOfTheDay,
    ];

    fn host(value: serde_json::Value) -> Value {
        to_host_case(&value).expect("failed to convert")
    }

    #[test]
    fn not_found_uses_defaults() {
        for endpoint in ALL {
            let body = host(json!({ "statusCode": 404, "message": "Not found" }));
            let value = endpoint
                .normalize(body, true)
                .unwrap_or_else(|error| panic!("{endpoint:?} failed: {error}"));
            assert_eq!(value, endpoint.not_found(), "{endpoint:?}");
        }

        assert_eq!(Endpoint::ScrabbleScore.not_found(), Value::from(0_i64));
        assert_eq!(Endpoint::TopExample.not_found(), Value::empty_object());
        assert_eq!(Endpoint::WordOfTheDay.not_found(), Value::Null);
        assert_eq!(Endpoint::Audio.not_found(), Value::empty_array());
    }

    #[test]
    fn not_found_passes_through_without_clean_up() {
        for endpoint in ALL {
            let body = host(json!({ "statusCode": 404, "message": "Not found" }));
            let value = endpoint
                .normalize(body.clone(), false)
                .expect("not found is not an error");
            assert_eq!(value, body, "{endpoint:?}");
        }
    }

    #[test]
    fn etymologies_treat_500_as_not_found() {
        let body = host(json!({ "statusCode": 500, "message": "Internal error" }));
        let value = Endpoint::Etymologies
            .normalize(body.clone(), true)
            .expect("500 should be not found for etymologies");
        assert_eq!(value, Value::empty_array());

        let error = Endpoint::Definitions.normalize(body, true).unwrap_err();
        assert!(
            matches!(error, Error::Api { status_code: 500, .. }),
            "{error:?}"
        );
    }

    #[test]
    fn api_errors() {
        for endpoint in ALL {
            for clean_up in [true, false] {
                let body = host(json!({ "statusCode": 503, "message": "Service Unavailable" }));
                let error = endpoint.normalize(body, clean_up).unwrap_err();
                match error {
                    Error::Api {
                        status_code,
                        message,
                    } => {
                        assert_eq!(status_code, 503);
                        assert_eq!(message, "Service Unavailable");
                    }
                    error => panic!("unexpected error for {endpoint:?}: {error:?}"),
                }
            }
        }
    }

    #[test]
    fn status_200_is_success() {
        let body = host(json!({ "statusCode": 200, "value": 7 }));
        let value = Endpoint::ScrabbleScore
            .normalize(body, true)
            .expect("200 is a success");
        assert_eq!(value, Value::from(7_i64));

        let body = host(json!({ "statusCode": "503", "message": "down" }));
        assert!(Endpoint::TopExample.normalize(body, true).is_err());
    }

    #[test]
    fn scrabble_score() {
        let body = host(json!({ "value": 7 }));
        assert_eq!(
            Endpoint::ScrabbleScore
                .normalize(body.clone(), true)
                .expect("failed to normalize"),
            Value::from(7_i64)
        );
        assert_eq!(
            Endpoint::ScrabbleScore
                .normalize(body.clone(), false)
                .expect("failed to normalize"),
            body
        );
    }

    #[test]
    fn random_words() {
        let body = host(json!([{ "id": 1, "word": "a" }, { "id": 2, "word": "b" }]));
        assert_eq!(
            Endpoint::RandomWords
                .normalize(body.clone(), true)
                .expect("failed to normalize"),
            Value::Array(vec!["a".into(), "b".into()])
        );
        assert_eq!(
            Endpoint::RandomWords
                .normalize(body.clone(), false)
                .expect("failed to normalize"),
            body
        );
    }

    #[test]
    fn random_word() {
        let body = host(json!({ "id": 1, "word": "quixotic" }));
        assert_eq!(
            Endpoint::RandomWord
                .normalize(body, true)
                .expect("failed to normalize"),
            Value::from("quixotic")
        );
    }

    #[test]
    fn definitions_drop_empty_text() {
        let body = host(json!([
            { "text": "A small carnivorous mammal.", "partOfSpeech": "noun" },
            { "text": "", "partOfSpeech": "noun" },
            { "partOfSpeech": "verb" }
        ]));
        let value = Endpoint::Definitions
            .normalize(body.clone(), true)
            .expect("failed to normalize");
        let definitions = value.as_array().expect("not an array");
        assert_eq!(definitions.len(), 1);
        assert_eq!(
            definitions[0].get("part_of_speech").and_then(Value::as_str),
            Some("noun")
        );

        let raw = Endpoint::Definitions
            .normalize(body, false)
            .expect("failed to normalize");
        assert_eq!(raw.as_array().map(<[Value]>::len), Some(3));
    }

    #[test]
    fn etymologies_strip_markup() {
        let body = host(json!(["<ety>[Middle English, from <ets>Old English</ets>.]</ety>\n"]));
        assert_eq!(
            Endpoint::Etymologies
                .normalize(body.clone(), true)
                .expect("failed to normalize"),
            Value::Array(vec!["Middle English, from Old English.".into()])
        );
        assert_eq!(
            Endpoint::Etymologies
                .normalize(body.clone(), false)
                .expect("failed to normalize"),
            body
        );
    }

    #[test]
    fn examples_extract_the_list() {
        let body = host(json!({
            "examples": [{ "text": "The cat sat.", "year": 2001 }],
            "facets": []
        }));
        let examples = Endpoint::Examples
            .normalize(body, true)
            .expect("failed to normalize");
        assert_eq!(examples.as_array().map(<[Value]>::len), Some(1));

        let body = host(json!({ "facets": [] }));
        assert_eq!(
            Endpoint::Examples
                .normalize(body, true)
                .expect("failed to normalize"),
            Value::empty_array()
        );
    }

    #[test]
    fn frequency_coerces_years() {
        let body = host(json!({
            "totalCount": 30,
            "frequency": [
                { "year": "1987", "count": 10 },
                { "year": "2001", "count": "20" }
            ]
        }));
        let frequency = Endpoint::Frequency
            .normalize(body.clone(), true)
            .expect("failed to normalize");
        let entries = frequency.as_array().expect("not an array");
        assert_eq!(entries[0].get("year"), Some(&Value::from(1987_i64)));
        assert_eq!(entries[0].get("count"), Some(&Value::from(10_i64)));
        assert_eq!(entries[1].get("year"), Some(&Value::from(2001_i64)));
        assert_eq!(entries[1].get("count"), Some(&Value::from(20_i64)));

        let raw = Endpoint::Frequency
            .normalize(body, false)
            .expect("failed to normalize");
        assert_eq!(raw.get("total_count"), Some(&Value::from(30_i64)));
        let raw_entries = raw
            .get("frequency")
            .and_then(Value::as_array)
            .expect("missing frequency");
        assert_eq!(raw_entries[0].get("year"), Some(&Value::from("1987")));
    }

    #[test]
    fn pronunciations_filter_by_type() {
        let body = host(json!([
            { "raw": "(kăt)", "rawType": "ahd-5" },
            { "raw": "K AE1 T", "rawType": "arpabet" }
        ]));
        let filtered = Endpoint::Pronunciations {
            type_format: Some("arpabet"),
        }
        .normalize(body.clone(), true)
        .expect("failed to normalize");
        let entries = filtered.as_array().expect("not an array");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].get("raw").and_then(Value::as_str), Some("K AE1 T"));

        let unfiltered = Endpoint::Pronunciations {
            type_format: Some("arpabet"),
        }
        .normalize(body.clone(), false)
        .expect("failed to normalize");
        assert_eq!(unfiltered, body);
    }

    #[test]
    fn word_of_the_day_empty_body() {
        let body = Value::from("");
        assert_eq!(
            Endpoint::WordOfTheDay
                .normalize(body.clone(), true)
                .expect("failed to normalize"),
            Value::Null
        );
        assert_eq!(
            Endpoint::WordOfTheDay
                .normalize(body, false)
                .expect("failed to normalize"),
            Value::from("")
        );
    }

    #[test]
    fn related_words_by_type() {
        let relations = host(json!([
            { "relationshipType": "synonym", "words": ["feline", "kitty"] },
            { "relationshipType": "rhyme", "words": ["bat"] },
            { "relationshipType": "synonym", "words": ["puss"] }
        ]));

        assert_eq!(
            related_words_of_type(&relations, "synonym"),
            ["feline", "kitty", "puss"]
        );
        assert_eq!(related_words_of_type(&relations, "rhyme"), ["bat"]);
        assert!(related_words_of_type(&relations, "antonym").is_empty());
        assert!(related_words_of_type(&Value::empty_object(), "rhyme").is_empty());
    }

    #[test]
    fn paths() {
        assert_eq!(Endpoint::RelatedWords.path(), "relatedWords");
        assert_eq!(Endpoint::RelatedWords.resource(), "word.json");
        assert!(Endpoint::ScrabbleScore.takes_word());
        assert_eq!(Endpoint::WordOfTheDay.resource(), "words.json");
        assert!(!Endpoint::RandomWords.takes_word());
    }
}
