use crate::Error;
use serde::Deserialize;
use std::{
    collections::HashMap,
    path::{
        Path,
        PathBuf,
    },
};
use url::Url;

/// The env var checked for an api key.
pub const API_KEY_ENV_VAR: &str = "WORDNIK_API_KEY";

/// The name of the config file looked for in the current and home directories.
pub const CONFIG_FILE_NAME: &str = ".wordnik.toml";

/// The default api host
pub const DEFAULT_API_HOST: &str = "api.wordnik.com";

/// The default api port
pub const DEFAULT_API_PORT: u16 = 443;

/// The default api version
pub const DEFAULT_API_VERSION: &str = "v4";

/// The contents of a config file.
///
/// Every field is optional, the api key may come from the environment instead.
#[derive(Deserialize, Debug, Default)]
pub struct ConfigFile {
    /// The api key
    pub api_key: Option<String>,

    /// The api host
    pub api_host: Option<String>,

    /// The api port
    pub api_port: Option<u16>,

    /// The api version
    pub api_version: Option<String>,

    /// Unknown k/vs
    #[serde(flatten)]
    pub extra: HashMap<String, toml::Value>,
}

impl ConfigFile {
    /// Load a config file from a path
    pub fn load_from_path(path: &Path) -> Result<Self, Error> {
        let bytes = std::fs::read(path).map_err(|error| Error::ConfigRead {
            path: path.into(),
            error,
        })?;
        Self::load_from_bytes(&bytes)
    }

    /// Load a config file from bytes
    pub fn load_from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let text = String::from_utf8_lossy(bytes);
        Ok(toml::from_str(&text)?)
    }
}

/// Client configuration.
///
/// This is fixed once a client is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The api key
    pub api_key: String,

    /// The api host
    pub api_host: String,

    /// The api port
    pub api_port: u16,

    /// The api version
    pub api_version: String,
}

impl Config {
    /// Make a config with the given key and the default host, port, and version.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_host: DEFAULT_API_HOST.into(),
            api_port: DEFAULT_API_PORT,
            api_version: DEFAULT_API_VERSION.into(),
        }
    }

    /// Load the config from the environment and the first config file found.
    ///
    /// `./.wordnik.toml` is checked first, then `~/.wordnik.toml`.
    /// An api key in the `WORDNIK_API_KEY` env var overrides the one in the file.
    ///
    /// # Errors
    /// Fails if a found config file is invalid,
    /// or if there is no api key in either the env or the file.
    pub fn load() -> Result<Self, Error> {
        let file = match find_config_file() {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config file");
                ConfigFile::load_from_path(&path)?
            }
            None => ConfigFile::default(),
        };

        Self::resolve(file, env_api_key())
    }

    /// Load the config from a specific file, still allowing the env to supply the api key.
    pub fn load_from_path(path: &Path) -> Result<Self, Error> {
        let file = ConfigFile::load_from_path(path)?;
        Self::resolve(file, env_api_key())
    }

    /// Merge a config file and an api key from the env.
    pub fn resolve(file: ConfigFile, env_api_key: Option<String>) -> Result<Self, Error> {
        let non_blank = |key: &String| !key.trim().is_empty();
        let api_key = env_api_key
            .filter(non_blank)
            .or_else(|| file.api_key.filter(non_blank))
            .ok_or(Error::MissingApiKey)?;

        Ok(Self {
            api_key,
            api_host: file.api_host.unwrap_or_else(|| DEFAULT_API_HOST.into()),
            api_port: file.api_port.unwrap_or(DEFAULT_API_PORT),
            api_version: file
                .api_version
                .unwrap_or_else(|| DEFAULT_API_VERSION.into()),
        })
    }

    /// Get the url every endpoint path is appended to.
    ///
    /// Port 443 uses https, anything else uses http.
    pub fn base_url(&self) -> Result<Url, Error> {
        let scheme = if self.api_port == 443 { "https" } else { "http" };
        Ok(Url::parse(&format!(
            "{scheme}://{}:{}/{}",
            self.api_host, self.api_port, self.api_version
        ))?)
    }
}

fn env_api_key() -> Option<String> {
    std::env::var(API_KEY_ENV_VAR).ok()
}

fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    let home = dirs::home_dir().map(|home| home.join(CONFIG_FILE_NAME));

    std::iter::once(local)
        .chain(home)
        .find(|path| path.is_file())
}
