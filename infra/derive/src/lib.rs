#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the workspace crates.
//!
//! * [`macro@dialecta_error`] turns a plain enum into a `thiserror` error with
//!   context helpers and upstream conversions.
//! * [`macro@shared_state`] wraps an immutable state struct into a cheap-to-clone
//!   `Arc` handle.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! dialecta-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod expand;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemStruct, parse_macro_input};

/// Attribute macro for crate-level error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `<Name>Ext` trait that adds `.context(...)`
///   to `Result<T, Name>` and to `Result<T, Source>` for every variant wrapping a source error.
/// * **Standard Conversions**: Implements `From<Source>` for variants with a `source` field
///   (or a field marked `#[source]`/`#[from]`), so `?` works on upstream errors.
/// * **Internal Fallback**: `From<&'static str>` and `From<String>` when an `Internal`
///   variant with a `message` field exists.
/// * **Formatting Helper**: a module-level `format_context(&context)` usable inside
///   `#[error(...)]` strings.
///
/// # Requirements
///
/// 1. Only enums with named-field variants are accepted.
/// 2. A context field must be typed `Option<Cow<'static, str>>`.
/// 3. Variants carrying a source must also carry a context field.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[dialecta_derive::dialecta_error]
/// pub enum AtlasError {
///     #[error("Malformed document{}: {source}", format_context(.context))]
///     Parse { source: serde_json::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal atlas error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn parse(raw: &str) -> Result<serde_json::Value, AtlasError> {
///     serde_json::from_str(raw).context("Reading the data document")
/// }
/// ```
#[proc_macro_attribute]
pub fn dialecta_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    expand::error::expand(&input).into()
}

/// Attribute macro that turns a struct into a shared, read-only state handle.
///
/// The annotated struct becomes `<Name>Inner`; `<Name>` is generated as a
/// `Clone` wrapper over `Arc<<Name>Inner>` with `new` and a `Deref` to the inner
/// state. Clones share the same allocation.
///
/// # Example
/// ```rust,ignore
/// #[dialecta_derive::shared_state]
/// pub struct Catalog {
///     pub zones: Vec<String>,
/// }
///
/// let catalog = Catalog::new(CatalogInner { zones: vec![] });
/// let other = catalog.clone();
/// assert!(Catalog::ptr_eq(&catalog, &other));
/// ```
#[proc_macro_attribute]
pub fn shared_state(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    expand::shared::expand(input).into()
}
