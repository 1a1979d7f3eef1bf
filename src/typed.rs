//! Typed cookie declarations
use crate::attributes::AttributeSet;

/// Ties a Rust type to a cookie name and its preset attributes.
///
/// This is either implemented manually or with the macro `#[cookie(name = "...")]`
/// ```
/// use crumbs::crumbs_macros::cookie;
/// use crumbs::{CookieName, Definition};
///
/// #[cookie(name = "SID", path = "/", secure, http_only)]
/// pub struct Session;
///
/// assert_eq!(Session::COOKIE_NAME, "SID");
/// assert_eq!(
///     Definition::typed::<Session>("abc").to_string(),
///     "SID=abc; Path=/; Secure; HttpOnly"
/// );
/// ```
pub trait CookieName {
    const COOKIE_NAME: &'static str;

    /// Attributes every definition of this cookie starts from
    fn attributes() -> AttributeSet {
        AttributeSet::empty()
    }
}
