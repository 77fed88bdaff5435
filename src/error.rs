use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid pattern {pattern:?}: {reason}")]
    Pattern { pattern: String, reason: String },

    #[error("invalid locale {0:?}")]
    Locale(String),

    #[error("no {what} data for locale {locale}")]
    Data { what: &'static str, locale: String },

    #[error("not a decimal number: {0:?}")]
    Quantity(String),

    #[error("unsupported unit {0:?}")]
    Unit(String),

    #[error("malformed currency code {0:?}")]
    Currency(String),
}

impl Error {
    pub(crate) fn pattern(pattern: &str, reason: impl Into<String>) -> Self {
        Error::Pattern {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }
}
