use std::fmt;

/// Broad classification of client failures.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Kind {
    /// Input failed local validation before any request was sent.
    Validation,
    /// The request produced no HTTP response at all (DNS, connect, read).
    Transport,
    /// A request URL could not be built from the configured host.
    Url,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Validation => write!(f, "validation"),
            Kind::Transport => write!(f, "transport"),
            Kind::Url => write!(f, "url"),
        }
    }
}

/// Error returned by all fallible operations in this crate.
///
/// HTTP error *statuses* are deliberately not represented here: the exchange
/// answers invalid requests with a JSON error payload, which callers receive
/// as the ordinary body text.
#[derive(Debug)]
pub struct Error {
    kind: Kind,
    message: String,
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl Error {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: Kind::Validation,
            message: message.into(),
            source: None,
        }
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn std::error::Error + 'static))
    }
}

impl From<reqwest::Error> for Error {
    fn from(source: reqwest::Error) -> Self {
        Self {
            kind: Kind::Transport,
            message: "request failed without an HTTP response".into(),
            source: Some(Box::new(source)),
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(source: url::ParseError) -> Self {
        Self {
            kind: Kind::Url,
            message: "unable to build request URL".into(),
            source: Some(Box::new(source)),
        }
    }
}
