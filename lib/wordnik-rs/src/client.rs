use crate::{
    case::{
        to_host_case,
        to_wire_case,
    },
    normalize::related_words_of_type,
    options::{
        AudioOptions,
        DefinitionsOptions,
        EtymologiesOptions,
        ExamplesOptions,
        FrequencyOptions,
        HyphenationOptions,
        PhrasesOptions,
        PronunciationsOptions,
        RandomWordOptions,
        RandomWordsOptions,
        RelatedWordsOptions,
        TopExampleOptions,
        WordOfTheDayOptions,
    },
    Config,
    Endpoint,
    Error,
    Value,
    WireValue,
};
use serde::Serialize;
use std::{
    sync::Arc,
    time::Duration,
};
use tracing::debug;
use url::Url;

const DEFAULT_USER_AGENT: &str = "wordnik-rs";

/// The default # of words per relationship for the related word helpers.
pub const DEFAULT_RELATED_LIMIT: u32 = 10;

/// A Wordnik api client
#[derive(Debug, Clone)]
pub struct Client {
    /// The inner http client
    pub client: reqwest::Client,

    config: Arc<Config>,
    base_url: Url,
    clean_up: bool,
}

impl Client {
    /// Make a new client with clean up on.
    pub fn new(config: Config) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .user_agent(DEFAULT_USER_AGENT)
            .build()?;

        Self::with_http_client(client, config)
    }

    /// Make a new client using an existing http client.
    pub fn with_http_client(client: reqwest::Client, config: Config) -> Result<Self, Error> {
        let base_url = config.base_url()?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidBaseUrl);
        }

        Ok(Self {
            client,
            config: Arc::new(config),
            base_url,
            clean_up: true,
        })
    }

    /// Make a new client, loading the config from the env and config files.
    ///
    /// See [`Config::load`].
    pub fn from_env() -> Result<Self, Error> {
        Self::new(Config::load()?)
    }

    /// Set whether responses are cleaned up.
    ///
    /// With clean up off, callers get the whole snake_case response,
    /// including not-found markers.
    pub fn clean_up(mut self, clean_up: bool) -> Self {
        self.clean_up = clean_up;
        self
    }

    /// Returns true if responses are cleaned up.
    pub fn is_clean_up(&self) -> bool {
        self.clean_up
    }

    /// Get the config
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build the url for an endpoint.
    ///
    /// Options are converted to camelCase first, then the api key is added.
    fn endpoint_url<P>(
        &self,
        endpoint: Endpoint<'_>,
        word: Option<&str>,
        options: &P,
    ) -> Result<Url, Error>
    where
        P: Serialize,
    {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| Error::InvalidBaseUrl)?;
            segments.pop_if_empty().push(endpoint.resource());
            if let Some(word) = word {
                segments.push(word);
            }
            segments.push(endpoint.path());
        }

        let params = to_wire_case(&serde_json::to_value(options)?);
        {
            let mut query_pairs = url.query_pairs_mut();
            if let WireValue::Object(params) = &params {
                for (key, value) in params {
                    match value {
                        WireValue::Null => {}
                        WireValue::String(value) => {
                            query_pairs.append_pair(key, value);
                        }
                        value => {
                            query_pairs.append_pair(key, &value.to_string());
                        }
                    }
                }
            }
            query_pairs.append_pair("api_key", &self.config.api_key);
        }

        Ok(url)
    }

    /// Send a GET request to an endpoint and get the body with snake_case keys.
    ///
    /// Non-success statuses are left for the endpoint policy if the api sent a json object.
    async fn get_value<P>(
        &self,
        endpoint: Endpoint<'_>,
        word: Option<&str>,
        options: &P,
    ) -> Result<Value, Error>
    where
        P: Serialize,
    {
        let url = self.endpoint_url(endpoint, word, options)?;
        debug!(endpoint = endpoint.path(), word, "sending request");

        let response = self.client.get(url.as_str()).send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!(endpoint = endpoint.path(), %status, "got response");

        let body = parse_body(status, &text)?;
        to_host_case(&body)
    }

    /// Get an endpoint and apply its policy.
    async fn get_normalized<P>(
        &self,
        endpoint: Endpoint<'_>,
        word: Option<&str>,
        options: &P,
    ) -> Result<Value, Error>
    where
        P: Serialize,
    {
        let body = self.get_value(endpoint, word, options).await?;
        endpoint.normalize(body, self.clean_up)
    }

    /// Get audio metadata for a word.
    pub async fn audio(&self, word: &str, options: &AudioOptions) -> Result<Value, Error> {
        self.get_normalized(Endpoint::Audio, Some(word), options)
            .await
    }

    /// Get the definitions of a word.
    ///
    /// With clean up on, definitions with no text are dropped.
    pub async fn definitions(
        &self,
        word: &str,
        options: &DefinitionsOptions,
    ) -> Result<Value, Error> {
        self.get_normalized(Endpoint::Definitions, Some(word), options)
            .await
    }

    /// Get the etymologies of a word.
    ///
    /// With clean up on, these are plain strings with the markup removed.
    pub async fn etymologies(
        &self,
        word: &str,
        options: &EtymologiesOptions,
    ) -> Result<Value, Error> {
        self.get_normalized(Endpoint::Etymologies, Some(word), options)
            .await
    }

    /// Get example usages of a word.
    ///
    /// With clean up on, this is just the list of examples.
    pub async fn examples(&self, word: &str, options: &ExamplesOptions) -> Result<Value, Error> {
        self.get_normalized(Endpoint::Examples, Some(word), options)
            .await
    }

    /// Get the usage frequency of a word over time.
    ///
    /// With clean up on, this is just the list of `{year, count}` entries, with integer years.
    pub async fn frequency(&self, word: &str, options: &FrequencyOptions) -> Result<Value, Error> {
        self.get_normalized(Endpoint::Frequency, Some(word), options)
            .await
    }

    /// Get the syllables of a word.
    pub async fn hyphenation(
        &self,
        word: &str,
        options: &HyphenationOptions,
    ) -> Result<Value, Error> {
        self.get_normalized(Endpoint::Hyphenation, Some(word), options)
            .await
    }

    /// Get bi-gram phrases containing a word.
    pub async fn phrases(&self, word: &str, options: &PhrasesOptions) -> Result<Value, Error> {
        self.get_normalized(Endpoint::Phrases, Some(word), options)
            .await
    }

    /// Get the pronunciations of a word.
    ///
    /// With clean up on and a `type_format` set, only pronunciations of that type are kept.
    pub async fn pronunciations(
        &self,
        word: &str,
        options: &PronunciationsOptions,
    ) -> Result<Value, Error> {
        let endpoint = Endpoint::Pronunciations {
            type_format: options.type_format.as_deref(),
        };
        self.get_normalized(endpoint, Some(word), options).await
    }

    /// Get words related to a word, grouped by relationship.
    pub async fn related_words(
        &self,
        word: &str,
        options: &RelatedWordsOptions,
    ) -> Result<Value, Error> {
        self.get_normalized(Endpoint::RelatedWords, Some(word), options)
            .await
    }

    /// Get the scrabble score of a word.
    ///
    /// With clean up on, this is just the score, and 0 if the word is not playable.
    pub async fn scrabble_score(&self, word: &str) -> Result<Value, Error> {
        self.get_normalized(Endpoint::ScrabbleScore, Some(word), &())
            .await
    }

    /// Get the top example of a word.
    pub async fn top_example(
        &self,
        word: &str,
        options: &TopExampleOptions,
    ) -> Result<Value, Error> {
        self.get_normalized(Endpoint::TopExample, Some(word), options)
            .await
    }

    /// Get a random word.
    ///
    /// With clean up on, this is just the word.
    pub async fn random_word(&self, options: &RandomWordOptions) -> Result<Value, Error> {
        self.get_normalized(Endpoint::RandomWord, None, options)
            .await
    }

    /// Get a list of random words.
    ///
    /// With clean up on, this is just a list of words.
    pub async fn random_words(&self, options: &RandomWordsOptions) -> Result<Value, Error> {
        self.get_normalized(Endpoint::RandomWords, None, options)
            .await
    }

    /// Get the word of the day.
    ///
    /// With clean up on, `None` is returned if there is no word for that day.
    pub async fn word_of_the_day(
        &self,
        options: &WordOfTheDayOptions,
    ) -> Result<Option<Value>, Error> {
        let value = self
            .get_normalized(Endpoint::WordOfTheDay, None, options)
            .await?;

        if value.is_null() {
            return Ok(None);
        }

        Ok(Some(value))
    }

    /// Get the words with a single relationship to a word.
    ///
    /// This always uses the cleaned up `related_words` response, whatever the client setting.
    async fn related_words_of_type(
        &self,
        word: &str,
        relationship_type: &str,
        limit: Option<u32>,
    ) -> Result<Vec<String>, Error> {
        let options = related_words_of_type_options(relationship_type, limit);
        let body = self
            .get_value(Endpoint::RelatedWords, Some(word), &options)
            .await?;
        let relations = Endpoint::RelatedWords.normalize(body, true)?;

        Ok(related_words_of_type(&relations, relationship_type))
    }

    /// Get words that rhyme with a word.
    pub async fn rhymes(&self, word: &str, limit: Option<u32>) -> Result<Vec<String>, Error> {
        self.related_words_of_type(word, "rhyme", limit).await
    }

    /// Get antonyms of a word.
    pub async fn antonyms(&self, word: &str, limit: Option<u32>) -> Result<Vec<String>, Error> {
        self.related_words_of_type(word, "antonym", limit).await
    }

    /// Get synonyms of a word.
    pub async fn synonyms(&self, word: &str, limit: Option<u32>) -> Result<Vec<String>, Error> {
        self.related_words_of_type(word, "synonym", limit).await
    }

    /// Get hypernyms of a word.
    ///
    /// "animal" is a hypernym of "cat".
    pub async fn hypernyms(&self, word: &str, limit: Option<u32>) -> Result<Vec<String>, Error> {
        self.related_words_of_type(word, "hypernym", limit).await
    }

    /// Get hyponyms of a word.
    ///
    /// "cat" is a hyponym of "animal".
    pub async fn hyponyms(&self, word: &str, limit: Option<u32>) -> Result<Vec<String>, Error> {
        self.related_words_of_type(word, "hyponym", limit).await
    }

    /// Get equivalents of a word.
    pub async fn equivalents(&self, word: &str, limit: Option<u32>) -> Result<Vec<String>, Error> {
        self.related_words_of_type(word, "equivalent", limit).await
    }
}

/// The options sent for a single relationship type.
///
/// The limit is always sent, so the api default never applies.
fn related_words_of_type_options(
    relationship_type: &str,
    limit: Option<u32>,
) -> RelatedWordsOptions {
    RelatedWordsOptions {
        relationship_types: Some(relationship_type.into()),
        limit_per_relationship_type: Some(limit.unwrap_or(DEFAULT_RELATED_LIMIT)),
        ..Default::default()
    }
}

/// Parse a response body.
///
/// An empty body becomes an empty string.
/// For failed requests, the http status is copied into the body
/// so the endpoint policy can see it.
/// A 404 without a json object body is treated like one that has a `statusCode` of 404.
fn parse_body(status: reqwest::StatusCode, text: &str) -> Result<WireValue, Error> {
    if status.is_success() {
        if text.trim().is_empty() {
            return Ok(WireValue::String(String::new()));
        }
        return Ok(serde_json::from_str(text)?);
    }

    match serde_json::from_str(text) {
        Ok(WireValue::Object(mut map)) => {
            map.entry("statusCode")
                .or_insert_with(|| status.as_u16().into());
            Ok(WireValue::Object(map))
        }
        _ if status == reqwest::StatusCode::NOT_FOUND => {
            let mut map = serde_json::Map::new();
            map.insert("statusCode".into(), status.as_u16().into());
            Ok(WireValue::Object(map))
        }
        _ => Err(Error::InvalidStatus(status)),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use reqwest::StatusCode;
    use std::collections::HashMap;

    fn query(url: &Url) -> HashMap<String, String> {
        url.query_pairs()
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect()
    }

    #[test]
    fn definitions_url() {
        let client = Client::new(Config::new("secret")).expect("failed to make client");
        let options = DefinitionsOptions {
            limit: Some(3),
            part_of_speech: Some(["noun", "verb"].into()),
            include_related: Some(false),
            ..Default::default()
        };
        let url = client
            .endpoint_url(Endpoint::Definitions, Some("cat"), &options)
            .expect("failed to build url");

        assert_eq!(url.path(), "/v4/word.json/cat/definitions");
        let query = query(&url);
        assert_eq!(query.get("limit").map(String::as_str), Some("3"));
        assert_eq!(
            query.get("partOfSpeech").map(String::as_str),
            Some("noun,verb")
        );
        assert_eq!(
            query.get("includeRelated").map(String::as_str),
            Some("false")
        );
        assert_eq!(query.get("api_key").map(String::as_str), Some("secret"));
        assert_eq!(query.len(), 4);
    }

    #[test]
    fn word_is_one_segment() {
        let client = Client::new(Config::new("secret")).expect("failed to make client");
        let url = client
            .endpoint_url(Endpoint::TopExample, Some("ice cream/cone"), &())
            .expect("failed to build url");

        assert_eq!(url.path(), "/v4/word.json/ice%20cream%2Fcone/topExample");
    }

    #[test]
    fn words_url() {
        let mut config = Config::new("secret");
        config.api_host = "localhost".into();
        config.api_port = 8080;
        config.api_version = "v5".into();
        let client = Client::new(config)
            .expect("failed to make client")
            .clean_up(false);
        assert!(!client.is_clean_up());

        let url = client
            .endpoint_url(
                Endpoint::RandomWords,
                None,
                &RandomWordsOptions {
                    limit: Some(2),
                    ..Default::default()
                },
            )
            .expect("failed to build url");

        assert_eq!(
            url.as_str(),
            "http://localhost:8080/v5/words.json/randomWords?limit=2&api_key=secret"
        );
    }

    #[test]
    fn parse_bodies() {
        assert_eq!(
            parse_body(StatusCode::OK, "").expect("failed to parse"),
            WireValue::String(String::new())
        );
        assert_eq!(
            parse_body(StatusCode::OK, r#"{"value": 7}"#).expect("failed to parse"),
            serde_json::json!({ "value": 7 })
        );
        assert_eq!(
            parse_body(StatusCode::NOT_FOUND, r#"{"message": "Not found"}"#)
                .expect("failed to parse"),
            serde_json::json!({ "statusCode": 404, "message": "Not found" })
        );
        assert_eq!(
            parse_body(
                StatusCode::NOT_FOUND,
                r#"{"statusCode": 404, "message": "word not found"}"#
            )
            .expect("failed to parse"),
            serde_json::json!({ "statusCode": 404, "message": "word not found" })
        );

        let error = parse_body(StatusCode::BAD_GATEWAY, "<html>").unwrap_err();
        assert!(
            matches!(error, Error::InvalidStatus(StatusCode::BAD_GATEWAY)),
            "{error:?}"
        );

        let error = parse_body(StatusCode::OK, "{").unwrap_err();
        assert!(matches!(error, Error::Json(_)), "{error:?}");
    }

    #[test]
    fn related_word_helper_urls() {
        let client = Client::new(Config::new("secret")).expect("failed to make client");

        let url = client
            .endpoint_url(
                Endpoint::RelatedWords,
                Some("cat"),
                &related_words_of_type_options("synonym", None),
            )
            .expect("failed to build url");
        assert_eq!(url.path(), "/v4/word.json/cat/relatedWords");
        let params = query(&url);
        assert_eq!(
            params.get("relationshipTypes").map(String::as_str),
            Some("synonym")
        );
        assert_eq!(
            params.get("limitPerRelationshipType").map(String::as_str),
            Some("10")
        );

        let url = client
            .endpoint_url(
                Endpoint::RelatedWords,
                Some("cat"),
                &related_words_of_type_options("rhyme", Some(3)),
            )
            .expect("failed to build url");
        let params = query(&url);
        assert_eq!(
            params.get("relationshipTypes").map(String::as_str),
            Some("rhyme")
        );
        assert_eq!(
            params.get("limitPerRelationshipType").map(String::as_str),
            Some("3")
        );
    }

    #[test]
    fn bare_not_found_gets_default() {
        for text in ["", "<html>Not Found</html>", "[]"] {
            let body = parse_body(StatusCode::NOT_FOUND, text).expect("failed to parse");
            assert_eq!(body, serde_json::json!({ "statusCode": 404 }));

            let body = to_host_case(&body).expect("failed to convert");
            assert_eq!(
                Endpoint::Definitions
                    .normalize(body, true)
                    .expect("failed to normalize"),
                Value::empty_array()
            );
        }

        let error = parse_body(StatusCode::INTERNAL_SERVER_ERROR, "").unwrap_err();
        assert!(
            matches!(error, Error::InvalidStatus(StatusCode::INTERNAL_SERVER_ERROR)),
            "{error:?}"
        );
    }

    #[test]
    fn not_found_body_gets_default() {
        let body = parse_body(StatusCode::NOT_FOUND, r#"{"message": "Not found"}"#)
            .expect("failed to parse");
        let body = to_host_case(&body).expect("failed to convert");
        assert_eq!(
            Endpoint::ScrabbleScore
                .normalize(body, true)
                .expect("failed to normalize"),
            Value::from(0_i64)
        );
    }
}
