//! Foundation types for shapediff.
//!
//! This crate holds the data model shared by the differ and the derive
//! macro. It performs no traversal itself; `shapediff-core` populates these
//! types while walking two instances of the same shape.
//!
//! # Key Types
//!
//! - [`ChangeRecord`] — One detected difference, as display strings
//! - [`DiffResult`] — Path-keyed set of change records with unique keys
//! - [`Path`] — Dotted/bracketed address into an instance graph
//! - [`FieldShape`] — Classification of a declared type (scalar, nested, sequence)
//! - [`DiffConfig`] — Rendering and depth-guard settings
//! - [`DiffError`] — Fatal conditions that abort a diff

pub mod config;
pub mod error;
pub mod path;
pub mod record;
pub mod shape;

pub use config::DiffConfig;
pub use error::{DiffError, Result};
pub use path::Path;
pub use record::{ChangeRecord, DiffResult};
pub use shape::FieldShape;
