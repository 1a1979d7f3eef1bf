extern crate proc_macro;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::{parse_macro_input, Expr, ItemStruct, Lit, Meta, Token};

/// Implements `crumbs::CookieName` for a struct.
///
/// `#[cookie(name = "SID", domain = ".example.com", path = "/", max_age = 3600, secure, http_only)]`
///
/// `name` is required, every other key adds a preset attribute.
#[proc_macro_attribute]
pub fn cookie(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);

    let parsed_attr =
        parse_macro_input!(attr with Punctuated::<Meta, Token![,]>::parse_terminated);

    let mut cookie_name = None;
    let mut attributes = Vec::new();

    for meta in &parsed_attr {
        match expand_meta(meta) {
            Ok(Setting::Name(name)) => cookie_name = Some(name),
            Ok(Setting::Attribute(attribute)) => attributes.push(attribute),
            Err(error) => return error.into_compile_error().into(),
        }
    }

    let Some(cookie_name) = cookie_name else {
        return syn::Error::new_spanned(
            &input.ident,
            "Expected `name` parameter: #[cookie(name = \"...\")]",
        )
        .into_compile_error()
        .into();
    };

    let cookie_struct = &input.ident;

    let expanded = quote! {
        #input

        impl ::crumbs::CookieName for #cookie_struct {
            const COOKIE_NAME: &'static str = #cookie_name;

            fn attributes() -> ::crumbs::AttributeSet {
                ::crumbs::AttributeSet::empty()
                    #(.merge(#attributes))*
            }
        }
    };

    expanded.into()
}

enum Setting {
    Name(String),
    Attribute(TokenStream2),
}

fn expand_meta(meta: &Meta) -> syn::Result<Setting> {
    let key = meta
        .path()
        .get_ident()
        .map(ToString::to_string)
        .unwrap_or_default();

    match (key.as_str(), meta) {
        ("name", Meta::NameValue(_)) => Ok(Setting::Name(string_value(meta)?)),
        ("domain", Meta::NameValue(_)) => {
            let domain = string_value(meta)?;
            Ok(Setting::Attribute(
                quote!(::crumbs::Attribute::Domain(#domain.to_string())),
            ))
        }
        ("path", Meta::NameValue(_)) => {
            let path = string_value(meta)?;
            Ok(Setting::Attribute(
                quote!(::crumbs::Attribute::Path(#path.to_string())),
            ))
        }
        ("max_age", Meta::NameValue(_)) => {
            let seconds = integer_value(meta)?;
            Ok(Setting::Attribute(quote!(::crumbs::Attribute::MaxAge(#seconds))))
        }
        ("secure", Meta::Path(_)) => Ok(Setting::Attribute(quote!(::crumbs::Attribute::Secure))),
        ("http_only", Meta::Path(_)) => {
            Ok(Setting::Attribute(quote!(::crumbs::Attribute::HttpOnly)))
        }
        _ => Err(syn::Error::new_spanned(
            meta,
            "Expected one of `name = \"...\"`, `domain = \"...\"`, `path = \"...\"`, `max_age = <seconds>`, `secure`, `http_only`",
        )),
    }
}

fn literal(meta: &Meta) -> Option<&Lit> {
    match meta {
        Meta::NameValue(nv) => match &nv.value {
            Expr::Lit(expr) => Some(&expr.lit),
            _ => None,
        },
        _ => None,
    }
}

fn string_value(meta: &Meta) -> syn::Result<String> {
    match literal(meta) {
        Some(Lit::Str(lit_str)) => Ok(lit_str.value()),
        _ => Err(syn::Error::new_spanned(meta, "Expected a string literal")),
    }
}

fn integer_value(meta: &Meta) -> syn::Result<i64> {
    match literal(meta) {
        Some(Lit::Int(lit_int)) => lit_int.base10_parse(),
        _ => Err(syn::Error::new_spanned(meta, "Expected an integer literal")),
    }
}
