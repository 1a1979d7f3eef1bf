//! The cookies sent by a client in a `Cookie` header
use crate::cookie::{COOKIE_SEPARATOR, Cookie};
use crate::error::UnknownCookieError;
use crate::typed::CookieName;
use std::slice;

/// A read-only, name keyed collection of request cookies.
///
/// When a name appears more than once the last value wins and the cookie keeps
/// the position of its first appearance. Iteration follows header order.
/// ```
/// use crumbs::Registry;
///
/// let registry = Registry::coerce("SID=abc; theme=dark; SID=def");
///
/// assert_eq!(registry.len(), 2);
/// assert_eq!(registry.get("SID").map(|cookie| cookie.value()), Some("def"));
/// assert!(registry.fetch("missing").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    entries: Vec<Cookie>,
}

impl Registry {
    pub fn empty() -> Self {
        Registry::default()
    }

    /// Parse a `Cookie` header value.
    ///
    /// Segments are separated by `"; "`. A segment without `=` becomes a cookie with
    /// an empty value and empty segments are skipped.
    pub fn coerce(header: &str) -> Self {
        let mut registry = Registry::empty();

        for segment in header.split(COOKIE_SEPARATOR) {
            if segment.is_empty() {
                continue;
            }
            if !segment.contains('=') {
                log::trace!("Cookie segment `{segment}` has no value");
            }

            if let Some(previous) = registry.insert(Cookie::coerce(segment)) {
                log::trace!("Cookie `{}` appears more than once, keeping the last one", previous.name());
            }
        }

        log::debug!("Parsed {} request cookie(s)", registry.len());
        registry
    }

    /// Add `cookie`, replacing in place an entry with the same name.
    ///
    /// Returns the replaced cookie.
    fn insert(&mut self, cookie: Cookie) -> Option<Cookie> {
        match self.position(cookie.name()) {
            Some(index) => Some(std::mem::replace(&mut self.entries[index], cookie)),
            None => {
                self.entries.push(cookie);
                None
            }
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|cookie| cookie.name() == name)
    }

    /// Non-failing lookup
    pub fn get(&self, name: &str) -> Option<&Cookie> {
        self.entries.iter().find(|cookie| cookie.name() == name)
    }

    /// Lookup failing with [UnknownCookieError] when `name` is absent
    pub fn fetch(&self, name: &str) -> Result<&Cookie, UnknownCookieError> {
        self.get(name).ok_or_else(|| UnknownCookieError::new(name))
    }

    pub fn get_typed<T: CookieName>(&self) -> Option<&Cookie> {
        self.get(T::COOKIE_NAME)
    }

    pub fn fetch_typed<T: CookieName>(&self) -> Result<&Cookie, UnknownCookieError> {
        self.fetch(T::COOKIE_NAME)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> RegistryIter<'_> {
        RegistryIter {
            inner: self.entries.iter(),
        }
    }
}

/// Iterator over the `(name, cookie)` pairs of a [Registry]
#[derive(Debug, Clone)]
pub struct RegistryIter<'r> {
    inner: slice::Iter<'r, Cookie>,
}

impl<'r> Iterator for RegistryIter<'r> {
    type Item = (&'r str, &'r Cookie);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|cookie| (cookie.name(), cookie))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for RegistryIter<'_> {}

impl<'r> IntoIterator for &'r Registry {
    type Item = (&'r str, &'r Cookie);
    type IntoIter = RegistryIter<'r>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Cookie> for Registry {
    fn from_iter<I: IntoIterator<Item = Cookie>>(iter: I) -> Self {
        let mut registry = Registry::empty();
        for cookie in iter {
            registry.insert(cookie);
        }
        registry
    }
}

impl From<&str> for Registry {
    fn from(header: &str) -> Self {
        Registry::coerce(header)
    }
}
