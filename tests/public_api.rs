use crumbs::crumbs_macros::cookie;
use crumbs::time::Timestamp;
use crumbs::{
    Attribute, AttributeKind, AttributeSet, Attributes, Cookie, CookieName, CryptoBox, Definition,
    Registry,
};
use serde_json::json;
use std::convert::Infallible;

// Identity box
pub struct CryptoBoxNoop;

impl CryptoBox for CryptoBoxNoop {
    type Error = Infallible;

    fn encrypt(&self, plaintext: &str) -> Result<String, Self::Error> {
        Ok(plaintext.to_string())
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String, Self::Error> {
        Ok(ciphertext.to_string())
    }
}

#[cookie(name = "SID", path = "/", max_age = 3600, secure, http_only)]
pub struct Session;

#[cookie(name = "theme")]
pub struct Theme;

fn noop(value: &str) -> Result<String, Infallible> {
    Ok(value.to_string())
}

// The value triggers a padding char `=` when base64 encoded
fn cookie() -> Cookie {
    Cookie::new("SID", r#"{"id": 11}"#)
}

fn definition() -> Definition {
    Definition::new(cookie())
}

#[test]
fn coercion_from_string() {
    let c = cookie();
    assert_eq!(Cookie::coerce(c.to_s()), cookie());

    let c = cookie().encode();
    assert_eq!(Cookie::coerce(c.to_s()), cookie().encode());

    let c = c.decode().unwrap();
    assert_eq!(Cookie::coerce(c.to_s()), cookie());
}
#[test]
fn round_trip_for_plain_values() {
    for (name, value) in [("a", "b"), ("session", "0123456789abcdef"), ("empty", ""), ("json", "[1,2]")] {
        let c = Cookie::new(name, value);
        assert_eq!(Cookie::coerce(c.to_s()), c);
    }
}
#[test]
fn custom_encoder_and_decoder() {
    let encoded = cookie().encode_with(noop).unwrap();
    assert_eq!(encoded, Cookie::new("SID", noop(cookie().value()).unwrap()));

    let decoded = encoded.decode_with(noop).unwrap();
    assert_eq!(decoded, cookie());
}
#[test]
fn crypto_box() {
    let encrypted = cookie().encrypt(&CryptoBoxNoop).unwrap();
    assert_eq!(encrypted, Cookie::new("SID", r#"{"id": 11}"#));

    let decrypted = encrypted.decrypt(&CryptoBoxNoop).unwrap();
    assert_eq!(decrypted, cookie());
}
#[test]
fn full_attribute_chain() {
    let d = definition()
        .with_domain(".foo.bar")
        .with_path("/foo")
        .with_expires(Timestamp::from_second(42).unwrap())
        .with_max_age(42)
        .secure()
        .http_only();

    assert_eq!(
        d.to_s(),
        r#"SID={"id": 11}; Domain=.foo.bar; Path=/foo; Expires=Thu, 01 Jan 1970 00:00:42 -0000; MaxAge=42; Secure; HttpOnly"#
    );
}
#[test]
fn attribute_override() {
    let rendered = definition().with_max_age(0).with_max_age(42).to_string();

    assert!(rendered.ends_with("MaxAge=42"));
    assert!(!rendered.contains("MaxAge=0"));
}
#[test]
fn deletion_preserves_scope() {
    let d = definition().with_domain(".foo.bar").with_path("/foo").delete();

    assert_eq!(
        d.to_s(),
        "SID=; Domain=.foo.bar; Path=/foo; Expires=Thu, 01 Jan 1970 00:00:00 -0000"
    );
}
#[test]
fn registry() {
    assert_eq!(Registry::empty().iter().count(), 0);
    assert_eq!(
        Registry::coerce("SID=abc").get("SID").map(Cookie::value),
        Some("abc")
    );

    let error = Registry::coerce("SID=abc").fetch("missing").unwrap_err();
    assert_eq!(error.name(), "missing");
}
#[test]
fn registry_yields_all_cookies() {
    let registry = Registry::coerce(cookie().to_s());

    let entries: Vec<_> = registry.iter().collect();
    assert_eq!(entries, vec![("SID", &cookie())]);
}
#[test]
fn idempotent_merge() {
    let once = AttributeSet::empty().merge(Attribute::Secure);

    assert_eq!(once.merge(Attribute::Secure), once);
}
#[test]
fn typed_cookies_from_macro() {
    assert_eq!(Session::COOKIE_NAME, "SID");
    assert_eq!(
        Definition::typed::<Session>("abc").to_s(),
        "SID=abc; Path=/; MaxAge=3600; Secure; HttpOnly"
    );
    assert!(Theme::attributes().is_empty());

    let registry = Registry::coerce("SID=abc; theme=dark");
    assert_eq!(registry.fetch_typed::<Theme>().map(Cookie::value), Ok("dark"));
}
#[test]
fn typed_deletion_keeps_preset_scope() {
    let d = Definition::typed::<Session>("abc").delete();

    assert_eq!(
        d.to_s(),
        "SID=; Path=/; MaxAge=3600; Secure; HttpOnly; Expires=Thu, 01 Jan 1970 00:00:00 -0000"
    );
    assert!(d.is_deletion());
}
#[test]
fn definition_from_json_config() {
    let preset: Attributes = serde_json::from_value(json!({
        "domain": ".foo.bar",
        "path": "/foo",
        "http_only": true
    }))
    .unwrap();

    let value = Cookie::json("SID", &json!({ "id": 11 })).unwrap();
    let d = Definition::with_attributes(value, preset.to_set());

    assert_eq!(d.to_s(), r#"SID={"id":11}; Domain=.foo.bar; Path=/foo; HttpOnly"#);
    assert_eq!(
        d.attributes().get(AttributeKind::Path),
        Some(&Attribute::Path("/foo".to_string()))
    );
}
