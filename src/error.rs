use crate::attributes::AttributeKind;
use thiserror::Error;

/// The error returned by [Registry::fetch](crate::Registry::fetch) when no cookie has the requested name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("No cookie named {name:?} is registered")]
pub struct UnknownCookieError {
    name: String,
}

impl UnknownCookieError {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        UnknownCookieError { name: name.into() }
    }

    /// The name that was looked up
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The error returned by the fallible operations of this crate
#[derive(Error, Debug, PartialEq)]
pub enum CookieError {
    #[error("Failed to decode `{0}`")]
    Decoding(String),
    #[error("Failed to serialize type `{0}`")]
    Serialization(String),
    #[error("Failed to deserialize `{0}` to type `{1}`")]
    Deserialization(String, String),
    #[error("`{0}` is not a cookie attribute")]
    UnknownAttribute(String),
    #[error("Invalid value for the `{kind}` attribute: {reason}")]
    InvalidAttribute { kind: AttributeKind, reason: String },
}
