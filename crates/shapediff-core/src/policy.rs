//! Comparison policies, one per [`FieldShape`](shapediff_types::FieldShape).
//!
//! [`Diffable`] implementations dispatch to one of these. They are public so
//! that hand-written implementations and the derive macro share exactly the
//! same behaviour.

use std::cmp::Ordering;

use shapediff_types::{DiffConfig, Path, Result};

use crate::context::DiffContext;
use crate::diffable::Diffable;

/// Scalar policy: record one change at `path` unless `old == new`.
///
/// Absent versus present counts as a change.
pub fn diff_scalar<T>(
    old: Option<&T>,
    new: Option<&T>,
    path: &Path,
    cx: &mut DiffContext<'_>,
) -> Result<()>
where
    T: Diffable + PartialEq,
{
    if old == new {
        return Ok(());
    }
    cx.record(path, old.map(T::display), new.map(T::display))
}

/// Nested-object policy: run `walk` over the fields of `old`/`new` with
/// `path` as the prefix.
///
/// When both sides are absent no field can differ and `walk` is skipped.
/// Otherwise entering counts against the configured depth limit.
pub fn diff_nested<'a, S: ?Sized>(
    old: Option<&S>,
    new: Option<&S>,
    path: &Path,
    cx: &mut DiffContext<'a>,
    walk: impl FnOnce(&mut DiffContext<'a>) -> Result<()>,
) -> Result<()> {
    if old.is_none() && new.is_none() {
        return Ok(());
    }
    cx.enter(path)?;
    let outcome = walk(cx);
    cx.leave();
    outcome
}

/// Sequence policy.
///
/// Absent sequences are treated as empty and elements are aligned by index
/// up to the longer length. Elements of scalar shape are not compared index
/// by index: both sequences are sorted by their natural ordering, joined with
/// the configured separator, and compared once as a single scalar at `path`.
/// Other elements are compared at `path[i]`.
pub fn diff_sequence<'v, T, O, N>(
    old: Option<O>,
    new: Option<N>,
    path: &Path,
    cx: &mut DiffContext<'_>,
) -> Result<()>
where
    T: Diffable + 'v,
    O: IntoIterator<Item = &'v T>,
    N: IntoIterator<Item = &'v T>,
{
    let old: Vec<&T> = old.into_iter().flatten().collect();
    let new: Vec<&T> = new.into_iter().flatten().collect();
    let len = old.len().max(new.len());

    for i in 0..len {
        if T::SHAPE.is_scalar() {
            return diff_joined(&old, &new, path, cx);
        }
        T::diff(old.get(i).copied(), new.get(i).copied(), &path.index(i), cx)?;
    }
    Ok(())
}

fn diff_joined<T: Diffable>(
    old: &[&T],
    new: &[&T],
    path: &Path,
    cx: &mut DiffContext<'_>,
) -> Result<()> {
    let config = cx.config();
    let old = join_sorted(old, config);
    let new = join_sorted(new, config);
    diff_scalar(Some(&old), Some(&new), path, cx)
}

fn join_sorted<T: Diffable>(items: &[&T], config: &DiffConfig) -> String {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| a.natural_cmp(b));
    sorted
        .iter()
        .map(|item| item.display_or(&config.absent_placeholder))
        .collect::<Vec<_>>()
        .join(&config.sequence_separator)
}

/// Natural ordering for scalar types that are only `PartialOrd`.
/// Incomparable pairs are treated as equal.
pub fn partial_order<T: PartialOrd + ?Sized>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}
