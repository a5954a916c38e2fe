use pokedex_types::LookupKey;
use std::fmt;

/// Result type for pokedex-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Underlying cause of a transport failure
pub type TransportCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error types that can occur while resolving selectors and fetching records
#[derive(Debug)]
pub enum Error {
    /// No name, number, or random flag was supplied
    NoSelector,

    /// The catalog confirmed there is no entry for the key
    NotFound { key: LookupKey },

    /// The catalog could not be reached, timed out, or answered with an
    /// unexpected status
    Transport { url: String, source: TransportCause },

    /// The catalog answered successfully but the payload is unusable
    MalformedResponse(String),

    /// Configuration error
    Config(String),

    /// IO operation failed
    Io(std::io::Error),
}

impl Error {
    pub fn transport(url: impl Into<String>, source: impl Into<TransportCause>) -> Self {
        Error::Transport {
            url: url.into(),
            source: source.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoSelector => write!(f, "No Pokémon selector given"),
            Error::NotFound { key } => write!(f, "Could not find Pokémon '{}'", key),
            Error::Transport { url, source } => {
                write!(f, "Could not connect to the PokéAPI ({}): {}", url, source)
            }
            Error::MalformedResponse(msg) => {
                write!(f, "Could not parse the response from the API: {}", msg)
            }
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Transport { source, .. } => Some(source.as_ref()),
            Error::Io(err) => Some(err),
            Error::NoSelector
            | Error::NotFound { .. }
            | Error::MalformedResponse(_)
            | Error::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::MalformedResponse(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}
