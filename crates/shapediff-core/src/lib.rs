//! Structural differ for shapediff.
//!
//! Walks two instances of the same shape in parallel and reports every
//! field-level change as a path-keyed [`ChangeRecord`]. Each declared type
//! carries a [`FieldShape`] that selects its comparison policy:
//!
//! - Scalars compare by value equality and report display strings.
//! - Nested objects recurse field by field, extending the path with `.name`.
//! - Sequences compare index by index (`name[i]`), except that a sequence of
//!   scalars collapses into one sorted, joined string compared as a whole.
//!
//! # Key Types
//!
//! - [`Diffable`] — Per-type traversal, usually generated by `#[derive(Diffable)]`
//! - [`FieldAccessor`] — Total field read: absent instance yields absent value
//! - [`Differ`] — Entry point holding a [`DiffConfig`]
//! - [`DiffContext`] — Per-call accumulator threaded through the traversal

pub mod accessor;
pub mod context;
pub mod diffable;
pub mod differ;
pub mod impls;
pub mod policy;

#[cfg(test)]
mod fixtures;

pub use accessor::FieldAccessor;
pub use context::DiffContext;
pub use diffable::Diffable;
pub use differ::{diff, diff_optional, Differ};
pub use policy::{diff_nested, diff_scalar, diff_sequence, partial_order};

pub use shapediff_types::{
    ChangeRecord, DiffConfig, DiffError, DiffResult, FieldShape, Path, Result,
};
