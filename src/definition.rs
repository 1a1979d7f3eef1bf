//! Outgoing cookies, rendered into a `Set-Cookie` header value
use crate::attributes::{Attribute, AttributeKind, AttributeSet};
use crate::cookie::{COOKIE_SEPARATOR, Cookie};
use crate::typed::CookieName;
use biscotti::time::Timestamp;
use std::fmt;
use std::sync::OnceLock;

/// A cookie and the attributes it is sent with.
///
/// Every builder method leaves `self` untouched and returns a new definition.
/// Setting an attribute that is already present replaces it.
/// ```
/// use crumbs::{Cookie, Definition};
///
/// let definition = Definition::new(Cookie::new("SID", "abc"))
///     .with_path("/")
///     .with_max_age(0)
///     .with_max_age(3600)
///     .secure();
///
/// assert_eq!(definition.to_string(), "SID=abc; Path=/; MaxAge=3600; Secure");
/// ```
#[derive(Debug, Clone)]
pub struct Definition {
    cookie: Cookie,
    attributes: AttributeSet,
    rendered: OnceLock<String>,
}

impl Definition {
    pub fn new(cookie: Cookie) -> Self {
        Definition::with_attributes(cookie, AttributeSet::empty())
    }

    pub fn with_attributes(cookie: Cookie, attributes: AttributeSet) -> Self {
        Definition {
            cookie,
            attributes,
            rendered: OnceLock::new(),
        }
    }

    pub fn build(name: impl Into<String>, value: impl Into<String>, attributes: AttributeSet) -> Self {
        Definition::with_attributes(Cookie::new(name, value), attributes)
    }

    /// Use the name and preset attributes of a typed cookie
    pub fn typed<T: CookieName>(value: impl Into<String>) -> Self {
        Definition::build(T::COOKIE_NAME, value, T::attributes())
    }

    pub fn cookie(&self) -> &Cookie {
        &self.cookie
    }

    pub fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    pub fn with_domain(&self, domain: impl Into<String>) -> Self {
        self.with_attribute(Attribute::Domain(domain.into()))
    }

    pub fn with_path(&self, path: impl Into<String>) -> Self {
        self.with_attribute(Attribute::Path(path.into()))
    }

    pub fn with_max_age(&self, seconds: i64) -> Self {
        self.with_attribute(Attribute::MaxAge(seconds))
    }

    pub fn with_expires(&self, time: impl Into<Timestamp>) -> Self {
        self.with_attribute(Attribute::Expires(time.into()))
    }

    pub fn secure(&self) -> Self {
        self.with_attribute(Attribute::Secure)
    }

    pub fn http_only(&self) -> Self {
        self.with_attribute(Attribute::HttpOnly)
    }

    pub fn with_attribute(&self, attribute: Attribute) -> Self {
        Definition::with_attributes(self.cookie.clone(), self.attributes.merge(attribute))
    }

    /// A definition telling the client to drop this cookie.
    ///
    /// The value is emptied and `Expires` is forced to the epoch. Domain and Path are
    /// kept since the client only removes the cookie with the matching scope.
    pub fn delete(&self) -> Self {
        Definition::with_attributes(
            Cookie::empty(self.cookie.name()),
            self.attributes.merge(Attribute::EXPIRED),
        )
    }

    /// Whether this definition was produced by [Definition::delete]
    pub fn is_deletion(&self) -> bool {
        self.cookie.value().is_empty()
            && self.attributes.get(AttributeKind::Expires) == Some(&Attribute::EXPIRED)
    }

    /// The `Set-Cookie` header value, computed once
    pub fn to_s(&self) -> &str {
        self.rendered.get_or_init(|| {
            if self.attributes.is_empty() {
                self.cookie.to_s().to_string()
            } else {
                format!("{}{COOKIE_SEPARATOR}{}", self.cookie, self.attributes)
            }
        })
    }
}

impl PartialEq for Definition {
    fn eq(&self, other: &Self) -> bool {
        self.cookie == other.cookie && self.attributes == other.attributes
    }
}

impl Eq for Definition {}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_s())
    }
}

impl From<Cookie> for Definition {
    fn from(cookie: Cookie) -> Self {
        Definition::new(cookie)
    }
}
