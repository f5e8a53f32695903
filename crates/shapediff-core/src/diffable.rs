use std::cmp::Ordering;

use shapediff_types::{FieldShape, Path, Result};

use crate::context::DiffContext;

/// A type that can appear as a field in a diffed shape.
///
/// Implementations exist for the std scalars, wrappers, and sequences in
/// [`crate::impls`]. Record types get one from `#[derive(Diffable)]`, which
/// emits a [`FieldAccessor`](crate::FieldAccessor) walk over every field.
///
/// All comparisons go through [`Diffable::diff`]; `display` and
/// `natural_cmp` are only consulted for [`FieldShape::Scalar`] types, when a
/// value is reported or when a sequence of them is collapsed.
pub trait Diffable {
    /// Classification of this declared type.
    const SHAPE: FieldShape;

    /// Compare `old` and `new` at `path`, recording changes into `cx`.
    ///
    /// `None` on either side is the absent sentinel.
    fn diff(
        old: Option<&Self>,
        new: Option<&Self>,
        path: &Path,
        cx: &mut DiffContext<'_>,
    ) -> Result<()>;

    /// Display string reported in change records.
    fn display(&self) -> String {
        std::any::type_name::<Self>().to_owned()
    }

    /// Display string for an element of a collapsed sequence. Types that can
    /// hold the absent sentinel render it as `placeholder`.
    fn display_or(&self, _placeholder: &str) -> String {
        self.display()
    }

    /// Natural ordering used to sort scalar sequences before joining.
    fn natural_cmp(&self, _other: &Self) -> Ordering {
        Ordering::Equal
    }
}
