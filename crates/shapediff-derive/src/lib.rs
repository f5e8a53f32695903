//! `#[derive(Diffable)]` for shapediff.
//!
//! Structs become nested objects: every field is read through a
//! `FieldAccessor` and compared under `{path}.{field}`. Enums, and structs
//! marked `#[diff(scalar)]`, become scalars compared by value.
//!
//! Container attributes:
//! - `#[diff(scalar)]` — treat a struct as a single value
//! - `#[diff(debug)]` — report scalar values through `Debug` instead of `Display`
//! - `#[diff(crate = "path")]` — path to the `shapediff` crate when re-exported
//!
//! Field attributes:
//! - `#[diff(skip)]` — leave the field out of the comparison
//! - `#[diff(rename = "Name")]` — path segment to use instead of the field name

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod attrs;
mod expand;

#[proc_macro_derive(Diffable, attributes(diff))]
pub fn derive_diffable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand::derive(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
