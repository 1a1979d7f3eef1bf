//! Attribute presets, built in code or read from configuration
use crate::attributes::{Attribute, AttributeSet};
use biscotti::time::{SignedDuration, Timestamp};
use serde::{Deserialize, Deserializer};

/// A preset of optional cookie attributes.
///
/// Deserializes from a map such as
/// `{"path": "/", "max_age": 3600, "expires": "2024-01-15T00:00:00Z", "secure": true}`,
/// where `max_age` is in seconds and `expires` is an RFC 3339 timestamp.
/// Missing keys stay unset, unlike [Attributes::default].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Attributes {
    #[serde(default)]
    domain: Option<String>,
    #[serde(default)]
    path: Option<String>,
    #[serde(default, deserialize_with = "seconds")]
    max_age: Option<SignedDuration>,
    #[serde(default, deserialize_with = "timestamp")]
    expires: Option<Timestamp>,
    #[serde(default)]
    secure: Option<bool>,
    #[serde(default)]
    http_only: Option<bool>,
}

impl Attributes {
    pub fn new() -> Self {
        Attributes {
            domain: None,
            path: None,
            max_age: None,
            expires: None,
            secure: None,
            http_only: None,
        }
    }
    #[inline]
    pub fn domain<T: Into<String>>(mut self, domain: T) -> Self {
        self.domain = Some(domain.into());
        self
    }
    #[inline]
    pub fn path<T: Into<String>>(mut self, path: T) -> Self {
        self.path = Some(path.into());
        self
    }
    #[inline]
    pub fn max_age<T: Into<Option<SignedDuration>>>(mut self, value: T) -> Self {
        self.max_age = value.into();
        self
    }
    #[inline]
    pub fn expires<T: Into<Option<Timestamp>>>(mut self, value: T) -> Self {
        self.expires = value.into();
        self
    }
    #[inline]
    pub fn secure<T: Into<Option<bool>>>(mut self, value: T) -> Self {
        self.secure = value.into();
        self
    }
    #[inline]
    pub fn http_only<T: Into<Option<bool>>>(mut self, value: T) -> Self {
        self.http_only = value.into();
        self
    }

    /// Convert to an [AttributeSet] ordered Domain, Path, Expires, MaxAge, Secure, HttpOnly.
    ///
    /// Flags set to `false` are left out and `max_age` is truncated to whole seconds.
    pub fn to_set(&self) -> AttributeSet {
        let mut attributes = AttributeSet::empty();
        if let Some(domain) = &self.domain {
            attributes = attributes.merge(Attribute::Domain(domain.clone()));
        }
        if let Some(path) = &self.path {
            attributes = attributes.merge(Attribute::Path(path.clone()));
        }
        if let Some(expires) = self.expires {
            attributes = attributes.merge(Attribute::Expires(expires));
        }
        if let Some(max_age) = self.max_age {
            attributes = attributes.merge(Attribute::MaxAge(max_age.as_secs()));
        }
        if self.secure == Some(true) {
            attributes = attributes.merge(Attribute::Secure);
        }
        if self.http_only == Some(true) {
            attributes = attributes.merge(Attribute::HttpOnly);
        }
        attributes
    }
}

impl Default for Attributes {
    fn default() -> Self {
        Attributes::new().path("/").http_only(true)
    }
}

impl From<&Attributes> for AttributeSet {
    fn from(attributes: &Attributes) -> Self {
        attributes.to_set()
    }
}

fn seconds<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<SignedDuration>, D::Error> {
    let seconds = Option::<i64>::deserialize(deserializer)?;
    Ok(seconds.map(SignedDuration::from_secs))
}

fn timestamp<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Timestamp>, D::Error> {
    Option::<String>::deserialize(deserializer)?
        .map(|text| text.parse::<Timestamp>().map_err(<D::Error as serde::de::Error>::custom))
        .transpose()
}
