//! `Set-Cookie` attributes and the ordered set that holds them
use crate::cookie::COOKIE_SEPARATOR;
use crate::error::CookieError;
use biscotti::time::Timestamp;
use std::fmt;
use std::str::FromStr;

/// RFC 2822 date in GMT, e.g. `Thu, 01 Jan 1970 00:00:42 -0000`
const EXPIRES_FORMAT: &str = "%a, %d %b %Y %H:%M:%S -0000";

/// The closed set of attribute kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    Domain,
    Path,
    MaxAge,
    Expires,
    Secure,
    HttpOnly,
}

impl AttributeKind {
    /// Lookup table for the symbolic keys accepted by [AttributeKind::from_str]
    const KEYS: [(&'static str, AttributeKind); 6] = [
        ("domain", AttributeKind::Domain),
        ("path", AttributeKind::Path),
        ("max_age", AttributeKind::MaxAge),
        ("expires", AttributeKind::Expires),
        ("secure", AttributeKind::Secure),
        ("http_only", AttributeKind::HttpOnly),
    ];

    /// The name written in the `Set-Cookie` header
    pub const fn name(self) -> &'static str {
        match self {
            AttributeKind::Domain => "Domain",
            AttributeKind::Path => "Path",
            AttributeKind::MaxAge => "MaxAge",
            AttributeKind::Expires => "Expires",
            AttributeKind::Secure => "Secure",
            AttributeKind::HttpOnly => "HttpOnly",
        }
    }

    /// Build the attribute of this kind from an untyped value.
    ///
    /// A flag kind given `Flag(false)` builds nothing. A value of the wrong
    /// shape for the kind is an error.
    pub fn build(self, value: AttributeValue) -> Result<Option<Attribute>, CookieError> {
        let attribute = match (self, value) {
            (AttributeKind::Domain, AttributeValue::Text(domain)) => Attribute::Domain(domain),
            (AttributeKind::Path, AttributeValue::Text(path)) => Attribute::Path(path),
            (AttributeKind::MaxAge, AttributeValue::Integer(seconds)) => Attribute::MaxAge(seconds),
            (AttributeKind::Expires, AttributeValue::Time(time)) => Attribute::Expires(time),
            (AttributeKind::Secure, AttributeValue::Flag(enabled)) => {
                return Ok(enabled.then_some(Attribute::Secure));
            }
            (AttributeKind::HttpOnly, AttributeValue::Flag(enabled)) => {
                return Ok(enabled.then_some(Attribute::HttpOnly));
            }
            (kind, value) => {
                return Err(CookieError::InvalidAttribute {
                    kind,
                    reason: format!("unexpected {} value", value.shape()),
                });
            }
        };
        Ok(Some(attribute))
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AttributeKind {
    type Err = CookieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AttributeKind::KEYS
            .iter()
            .find(|(key, _)| *key == s)
            .map(|(_, kind)| *kind)
            .ok_or_else(|| CookieError::UnknownAttribute(s.to_string()))
    }
}

/// An untyped attribute value, see [AttributeKind::build]
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Text(String),
    Integer(i64),
    Time(Timestamp),
    Flag(bool),
}

impl AttributeValue {
    fn shape(&self) -> &'static str {
        match self {
            AttributeValue::Text(_) => "text",
            AttributeValue::Integer(_) => "integer",
            AttributeValue::Time(_) => "timestamp",
            AttributeValue::Flag(_) => "flag",
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Integer(value)
    }
}

impl From<Timestamp> for AttributeValue {
    fn from(value: Timestamp) -> Self {
        AttributeValue::Time(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Flag(value)
    }
}

/// A single `Set-Cookie` attribute
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Attribute {
    Domain(String),
    Path(String),
    /// Lifetime in seconds
    MaxAge(i64),
    Expires(Timestamp),
    Secure,
    HttpOnly,
}

impl Attribute {
    /// An `Expires` attribute at the Unix epoch, it tells the client to drop the cookie
    pub const EXPIRED: Attribute = Attribute::Expires(Timestamp::UNIX_EPOCH);

    pub fn kind(&self) -> AttributeKind {
        match self {
            Attribute::Domain(_) => AttributeKind::Domain,
            Attribute::Path(_) => AttributeKind::Path,
            Attribute::MaxAge(_) => AttributeKind::MaxAge,
            Attribute::Expires(_) => AttributeKind::Expires,
            Attribute::Secure => AttributeKind::Secure,
            Attribute::HttpOnly => AttributeKind::HttpOnly,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    pub fn to_s(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name();
        match self {
            Attribute::Domain(value) | Attribute::Path(value) => write!(f, "{name}={value}"),
            Attribute::MaxAge(seconds) => write!(f, "{name}={seconds}"),
            Attribute::Expires(time) => write!(f, "{name}={}", time.strftime(EXPIRES_FORMAT)),
            Attribute::Secure | Attribute::HttpOnly => f.write_str(name),
        }
    }
}

/// An ordered collection holding at most one [Attribute] per kind.
///
/// Attributes keep the position at which their kind was first merged, so
/// overriding `MaxAge` leaves it where it was.
/// ```
/// use crumbs::{Attribute, AttributeSet};
///
/// let attributes = AttributeSet::empty()
///     .merge(Attribute::MaxAge(0))
///     .merge(Attribute::Secure)
///     .merge(Attribute::MaxAge(42));
///
/// assert_eq!(attributes.to_string(), "MaxAge=42; Secure");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AttributeSet {
    attributes: Vec<Attribute>,
}

impl AttributeSet {
    pub fn empty() -> Self {
        AttributeSet::default()
    }

    /// Build a set from `(kind, value)` pairs, see [AttributeKind::build]
    pub fn coerce<I, V>(pairs: I) -> Result<Self, CookieError>
    where
        I: IntoIterator<Item = (AttributeKind, V)>,
        V: Into<AttributeValue>,
    {
        let mut set = AttributeSet::empty();
        for (kind, value) in pairs {
            match kind.build(value.into())? {
                Some(attribute) => set.insert(attribute),
                None => log::trace!("Skipping disabled `{kind}` flag"),
            }
        }
        Ok(set)
    }

    /// Returns a new set with `attribute` added, replacing any attribute of the same kind
    pub fn merge(&self, attribute: Attribute) -> Self {
        let mut set = self.clone();
        set.insert(attribute);
        set
    }

    pub fn get(&self, kind: AttributeKind) -> Option<&Attribute> {
        self.attributes.iter().find(|attribute| attribute.kind() == kind)
    }

    pub fn contains(&self, kind: AttributeKind) -> bool {
        self.get(kind).is_some()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.attributes.iter()
    }

    /// The attributes joined by `"; "`, without a leading separator
    pub fn to_s(&self) -> String {
        self.to_string()
    }

    fn insert(&mut self, attribute: Attribute) {
        let kind = attribute.kind();
        match self.attributes.iter_mut().find(|current| current.kind() == kind) {
            Some(current) => *current = attribute,
            None => self.attributes.push(attribute),
        }
    }
}

impl fmt::Display for AttributeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, attribute) in self.attributes.iter().enumerate() {
            if index > 0 {
                f.write_str(COOKIE_SEPARATOR)?;
            }
            write!(f, "{attribute}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a AttributeSet {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.iter()
    }
}

impl FromIterator<Attribute> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        let mut set = AttributeSet::empty();
        for attribute in iter {
            set.insert(attribute);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::{Attribute, AttributeKind, AttributeSet, AttributeValue};
    use crate::error::CookieError;
    use biscotti::time::Timestamp;

    #[test]
    fn flag_attributes_render_their_name() {
        assert_eq!(Attribute::Secure.to_s(), "Secure");
        assert_eq!(Attribute::HttpOnly.to_s(), "HttpOnly");
    }
    #[test]
    fn value_attributes_render_name_and_value() {
        assert_eq!(Attribute::Domain(".foo.bar".into()).to_s(), "Domain=.foo.bar");
        assert_eq!(Attribute::Path("/foo".into()).to_s(), "Path=/foo");
        assert_eq!(Attribute::MaxAge(42).to_s(), "MaxAge=42");
    }
    #[test]
    fn expires_renders_gmt_date() {
        let time = Timestamp::from_second(42).unwrap();

        assert_eq!(
            Attribute::Expires(time).to_s(),
            "Expires=Thu, 01 Jan 1970 00:00:42 -0000"
        );
        assert_eq!(
            Attribute::EXPIRED.to_s(),
            "Expires=Thu, 01 Jan 1970 00:00:00 -0000"
        );
    }
    #[test]
    fn expires_renders_two_digit_day() {
        // 2024-01-05T13:07:09Z
        let time = Timestamp::from_second(1_704_460_029).unwrap();

        assert_eq!(
            Attribute::Expires(time).to_s(),
            "Expires=Fri, 05 Jan 2024 13:07:09 -0000"
        );
    }
    #[test]
    fn empty_set_renders_empty_string() {
        assert_eq!(AttributeSet::empty().to_s(), "");
        assert!(AttributeSet::empty().is_empty());
    }
    #[test]
    fn merge_does_not_change_the_receiver() {
        let empty = AttributeSet::empty();
        let merged = empty.merge(Attribute::Secure);

        assert!(empty.is_empty());
        assert_eq!(merged.len(), 1);
        assert_eq!(merged.to_s(), "Secure");
    }
    #[test]
    fn merge_overrides_in_place() {
        let attributes = AttributeSet::empty()
            .merge(Attribute::MaxAge(0))
            .merge(Attribute::Path("/".into()))
            .merge(Attribute::MaxAge(42));

        assert_eq!(attributes.to_s(), "MaxAge=42; Path=/");
        assert_eq!(attributes.get(AttributeKind::MaxAge), Some(&Attribute::MaxAge(42)));
    }
    #[test]
    fn merge_is_idempotent() {
        let once = AttributeSet::empty().merge(Attribute::Domain(".foo.bar".into()));
        let twice = once.merge(Attribute::Domain(".foo.bar".into()));

        assert_eq!(once, twice);
    }
    #[test]
    fn iterates_in_first_insertion_order() {
        let attributes = AttributeSet::empty()
            .merge(Attribute::HttpOnly)
            .merge(Attribute::Secure)
            .merge(Attribute::HttpOnly);

        let kinds: Vec<_> = attributes.iter().map(Attribute::kind).collect();
        assert_eq!(kinds, vec![AttributeKind::HttpOnly, AttributeKind::Secure]);
    }
    #[test]
    fn kind_from_symbolic_key() {
        assert_eq!("max_age".parse::<AttributeKind>(), Ok(AttributeKind::MaxAge));
        assert_eq!("http_only".parse::<AttributeKind>(), Ok(AttributeKind::HttpOnly));
        assert_eq!(
            "same_site".parse::<AttributeKind>(),
            Err(CookieError::UnknownAttribute("same_site".to_string()))
        );
    }
    #[test]
    fn coerce_builds_attributes_and_skips_disabled_flags() {
        let attributes = AttributeSet::coerce([
            (AttributeKind::Domain, AttributeValue::from(".foo.bar")),
            (AttributeKind::Secure, AttributeValue::from(false)),
            (AttributeKind::MaxAge, AttributeValue::from(42_i64)),
            (AttributeKind::HttpOnly, AttributeValue::from(true)),
        ])
        .unwrap();

        assert_eq!(attributes.to_s(), "Domain=.foo.bar; MaxAge=42; HttpOnly");
    }
    #[test]
    fn coerce_rejects_mismatched_values() {
        let result = AttributeSet::coerce([(AttributeKind::MaxAge, "ten")]);

        assert_eq!(
            result,
            Err(CookieError::InvalidAttribute {
                kind: AttributeKind::MaxAge,
                reason: "unexpected text value".to_string(),
            })
        );
    }
}
