//! A client for the Wordnik dictionary api.
//!
//! Responses come back as [`Value`]s with snake_case keys and parsed timestamps.
//! By default, responses are cleaned up into the simplest useful shape for each endpoint,
//! and "not found" responses become empty defaults instead of errors.
//! See [`Endpoint`] for the exact behavior of each endpoint.

pub mod case;
mod client;
mod config;
mod normalize;
pub mod options;
mod util;
mod value;

pub use crate::{
    client::{
        Client,
        DEFAULT_RELATED_LIMIT,
    },
    config::{
        Config,
        ConfigFile,
        API_KEY_ENV_VAR,
        CONFIG_FILE_NAME,
        DEFAULT_API_HOST,
        DEFAULT_API_PORT,
        DEFAULT_API_VERSION,
    },
    normalize::{
        related_words_of_type,
        Endpoint,
    },
    util::{
        parse_leading_int,
        strip_markup,
        CsvList,
    },
    value::{
        Map,
        Value,
        WireValue,
    },
};
pub use reqwest::StatusCode;
pub use url::Url;
use std::path::PathBuf;

/// Library Error Type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A reqwest http error
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    /// A url parse error
    #[error(transparent)]
    Url(#[from] url::ParseError),

    /// A json error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The request failed and the api did not send a json error object
    #[error("invalid http status {0}")]
    InvalidStatus(StatusCode),

    /// The api sent an error
    #[error("api error {status_code}: {message}")]
    Api {
        /// The status code from the api
        status_code: i64,

        /// The error message from the api
        message: String,
    },

    /// No api key was found
    #[error(
        "missing api key, set `{}` or add `api_key` to a `{}` file",
        API_KEY_ENV_VAR,
        CONFIG_FILE_NAME
    )]
    MissingApiKey,

    /// Failed to read a config file
    #[error("failed to read config from '{}'", path.display())]
    ConfigRead {
        /// The config path
        path: PathBuf,

        /// The io error
        #[source]
        error: std::io::Error,
    },

    /// Failed to parse a config file
    #[error("failed to parse config")]
    ConfigParse(#[from] toml::de::Error),

    /// A string looked like a timestamp but was not a valid one
    #[error("invalid timestamp")]
    Timestamp(#[from] time::error::Parse),

    /// The configured api url cannot have paths added to it
    #[error("invalid base url")]
    InvalidBaseUrl,
}
