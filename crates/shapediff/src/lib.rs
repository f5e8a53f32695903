//! Structural field-level diff of typed object graphs.
//!
//! Derive [`Diffable`] on your record types, then compare two instances to
//! get every changed field as a path-addressed [`ChangeRecord`]:
//!
//! ```
//! use shapediff::Diffable;
//!
//! #[derive(Diffable)]
//! struct Inner {
//!     value: i32,
//! }
//!
//! #[derive(Diffable)]
//! struct Outer {
//!     inner: Inner,
//!     tags: Vec<String>,
//! }
//!
//! let old = Outer { inner: Inner { value: 1 }, tags: vec!["b".into(), "a".into()] };
//! let new = Outer { inner: Inner { value: 2 }, tags: vec!["a".into(), "c".into()] };
//!
//! let changes = shapediff::diff(&old, &new).unwrap();
//! assert_eq!(changes.get("inner.value").unwrap().new_value(), "2");
//! assert_eq!(changes.get("tags").unwrap().old_value(), "a,b");
//! ```
//!
//! This crate re-exports `shapediff-types`, `shapediff-core`, and the derive
//! macro from `shapediff-derive`.

extern crate self as shapediff;

pub mod audit;

pub use audit::{audit, AuditEntry};
pub use shapediff_core::{
    diff, diff_nested, diff_optional, diff_scalar, diff_sequence, partial_order, DiffContext,
    Differ, Diffable, FieldAccessor,
};
pub use shapediff_derive::Diffable;
pub use shapediff_types::{
    ChangeRecord, DiffConfig, DiffError, DiffResult, FieldShape, Path, Result,
};
