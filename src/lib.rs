//! Immutable, typed HTTP cookies.
//!
//! crumbs parses the `Cookie` header a client sends into a [Registry], and builds the
//! `Set-Cookie` header values a server sends back from a [Definition].
//!
//! # Features
//! - Cookies, attribute sets and definitions are immutable values; every builder call returns a new one.
//! - Attributes are a closed, typed set: Domain, Path, MaxAge, Expires, Secure and HttpOnly.
//! - Setting an attribute twice keeps the last value, in the position it was first set.
//! - Deleting a cookie keeps its Domain and Path so the client clears the right one.
//! - Values can be base64 encoded, run through any [CryptoBox], or stored as JSON.
//! - [Registry] is an actix-web extractor and [Definition] converts into a `Set-Cookie` header.
//!
//! # Usage
//! ```
//! use crumbs::time::Timestamp;
//! use crumbs::{Cookie, Definition, Registry};
//!
//! let registry = Registry::coerce("SID=abc; theme=dark");
//! let session = registry.fetch("SID").unwrap();
//!
//! let definition = Definition::new(session.clone())
//!     .with_domain(".foo.bar")
//!     .with_path("/foo")
//!     .with_expires(Timestamp::from_second(42).unwrap())
//!     .with_max_age(42)
//!     .secure()
//!     .http_only();
//!
//! assert_eq!(
//!     definition.to_string(),
//!     "SID=abc; Domain=.foo.bar; Path=/foo; Expires=Thu, 01 Jan 1970 00:00:42 -0000; MaxAge=42; Secure; HttpOnly"
//! );
//! assert_eq!(
//!     definition.delete().to_string(),
//!     "SID=; Domain=.foo.bar; Path=/foo; Expires=Thu, 01 Jan 1970 00:00:00 -0000; MaxAge=42; Secure; HttpOnly"
//! );
//! ```
//! With actix-web, extract the [Registry] in a handler and append definitions to the response
//! ```no_run
//! use actix_web::{web, App, HttpResponse, HttpServer};
//! use crumbs::{Cookie, Definition, Registry};
//!
//! async fn visit(cookies: Registry) -> HttpResponse {
//!     let visits = cookies
//!         .get("visits")
//!         .and_then(|cookie| cookie.value().parse::<u32>().ok())
//!         .unwrap_or(0);
//!
//!     HttpResponse::Ok()
//!         .append_header(Definition::new(Cookie::new("visits", (visits + 1).to_string())).with_path("/"))
//!         .finish()
//! }
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     HttpServer::new(|| App::new().default_service(web::to(visit)))
//!         .bind(("127.0.0.1", 8080))?
//!         .run()
//!         .await
//! }
//! ```
mod attributes;
mod config;
mod cookie;
mod crypto;
mod definition;
pub mod encoding;
mod error;
mod extract;
mod registry;
mod typed;

pub use attributes::{Attribute, AttributeKind, AttributeSet, AttributeValue};
pub use biscotti::time;
pub use config::Attributes;
pub use cookie::{Cookie, CryptoBox};
pub use crumbs_macros;
pub use crypto::ProcessorBox;
pub use definition::Definition;
pub use error::{CookieError, UnknownCookieError};
pub use registry::{Registry, RegistryIter};
pub use typed::CookieName;
