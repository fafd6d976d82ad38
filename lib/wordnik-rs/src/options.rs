//! Named options for each endpoint.
//!
//! Field names are snake_case.
//! They are turned into the api's camelCase query parameters when a request is sent.
//! Unset fields are not sent.

use crate::CsvList;
use serde::Serialize;
use time::Date;

/// Options for [`Client::audio`](crate::Client::audio).
#[derive(Debug, Clone, Default, Serialize)]
pub struct AudioOptions {
    /// Look up the canonical form of the word, like "cat" for "cats".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_canonical: Option<bool>,

    /// The max # of results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Options for [`Client::definitions`](crate::Client::definitions).
#[derive(Debug, Clone, Default, Serialize)]
pub struct DefinitionsOptions {
    /// The max # of results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Only include these parts of speech, like "noun" or "verb".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<CsvList>,

    /// Include related words
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_related: Option<bool>,

    /// Only include these dictionaries, like "ahd-5" or "wiktionary".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_dictionaries: Option<CsvList>,

    /// Look up the canonical form of the word
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_canonical: Option<bool>,

    /// Include tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_tags: Option<bool>,
}

/// Options for [`Client::etymologies`](crate::Client::etymologies).
#[derive(Debug, Clone, Default, Serialize)]
pub struct EtymologiesOptions {
    /// Look up the canonical form of the word
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_canonical: Option<bool>,
}

/// Options for [`Client::examples`](crate::Client::examples).
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExamplesOptions {
    /// Include duplicate examples
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_duplicates: Option<bool>,

    /// Look up the canonical form of the word
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_canonical: Option<bool>,

    /// The # of results to skip
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,

    /// The max # of results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Options for [`Client::frequency`](crate::Client::frequency).
#[derive(Debug, Clone, Default, Serialize)]
pub struct FrequencyOptions {
    /// Look up the canonical form of the word
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_canonical: Option<bool>,

    /// The first year to include
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_year: Option<i32>,

    /// The last year to include
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_year: Option<i32>,
}

/// Options for [`Client::hyphenation`](crate::Client::hyphenation).
#[derive(Debug, Clone, Default, Serialize)]
pub struct HyphenationOptions {
    /// Look up the canonical form of the word
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_canonical: Option<bool>,

    /// Only use this dictionary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_dictionary: Option<String>,

    /// The max # of results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Options for [`Client::phrases`](crate::Client::phrases).
#[derive(Debug, Clone, Default, Serialize)]
pub struct PhrasesOptions {
    /// The max # of results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// The minimum weighted mutual info
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wlmi: Option<u32>,

    /// Look up the canonical form of the word
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_canonical: Option<bool>,
}

/// Options for [`Client::pronunciations`](crate::Client::pronunciations).
#[derive(Debug, Clone, Default, Serialize)]
pub struct PronunciationsOptions {
    /// Look up the canonical form of the word
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_canonical: Option<bool>,

    /// Only use this dictionary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_dictionary: Option<String>,

    /// The pronunciation format, like "ahd-5" or "arpabet".
    ///
    /// With clean up on, results with any other `raw_type` are dropped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_format: Option<String>,

    /// The max # of results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Options for [`Client::related_words`](crate::Client::related_words).
#[derive(Debug, Clone, Default, Serialize)]
pub struct RelatedWordsOptions {
    /// Look up the canonical form of the word
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_canonical: Option<bool>,

    /// Only include these relationships, like "synonym" or "rhyme".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship_types: Option<CsvList>,

    /// The max # of words per relationship
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_per_relationship_type: Option<u32>,
}

/// Options for [`Client::top_example`](crate::Client::top_example).
#[derive(Debug, Clone, Default, Serialize)]
pub struct TopExampleOptions {
    /// Look up the canonical form of the word
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_canonical: Option<bool>,
}

/// Options for [`Client::random_word`](crate::Client::random_word).
#[derive(Debug, Clone, Default, Serialize)]
pub struct RandomWordOptions {
    /// Only return words with a dictionary definition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_dictionary_def: Option<bool>,

    /// Only return these parts of speech
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_part_of_speech: Option<CsvList>,

    /// Never return these parts of speech
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_part_of_speech: Option<CsvList>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_corpus_count: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_corpus_count: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_dictionary_count: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_dictionary_count: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,
}

/// Options for [`Client::random_words`](crate::Client::random_words).
#[derive(Debug, Clone, Default, Serialize)]
pub struct RandomWordsOptions {
    /// The word filters
    #[serde(flatten)]
    pub filter: RandomWordOptions,

    /// The field to sort by, like "alpha" or "count".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,

    /// "asc" or "desc"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,

    /// The max # of results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Options for [`Client::word_of_the_day`](crate::Client::word_of_the_day).
#[derive(Debug, Clone, Default, Serialize)]
pub struct WordOfTheDayOptions {
    /// The day to look up. Defaults to today.
    #[serde(
        with = "crate::util::iso_date::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<Date>,
}
