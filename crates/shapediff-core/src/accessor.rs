//! Total field reads.
//!
//! A [`FieldAccessor`] pairs a field name with a getter. Reading never fails:
//! an absent instance, or a getter that has nothing to return, yields the
//! absent sentinel, which then takes part in ordinary comparison.

use std::fmt;
use std::marker::PhantomData;

use shapediff_types::{Path, Result};

use crate::context::DiffContext;
use crate::diffable::Diffable;

/// Named read of one field of `S`, yielding a `T`.
pub struct FieldAccessor<S: ?Sized, T: ?Sized, F> {
    name: &'static str,
    getter: F,
    _marker: PhantomData<fn(&S) -> Option<&T>>,
}

impl<S: ?Sized, T: ?Sized, F> FieldAccessor<S, T, F>
where
    F: Fn(&S) -> Option<&T>,
{
    /// Describe a field by its path segment and getter.
    ///
    /// ```
    /// use shapediff_core::FieldAccessor;
    ///
    /// struct Order { total: u32 }
    ///
    /// let total = FieldAccessor::new("Total", |o: &Order| Some(&o.total));
    /// assert_eq!(total.read(Some(&Order { total: 7 })), Some(&7));
    /// assert_eq!(total.read(None), None);
    /// ```
    pub fn new(name: &'static str, getter: F) -> Self {
        Self {
            name,
            getter,
            _marker: PhantomData,
        }
    }

    /// The path segment for this field.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Read the field off `instance`, or `None` if it cannot be read.
    pub fn read<'s>(&self, instance: Option<&'s S>) -> Option<&'s T> {
        instance.and_then(|s| (self.getter)(s))
    }

    /// Read the field from both instances and compare under
    /// `{parent}.{name}`.
    pub fn diff(
        &self,
        old: Option<&S>,
        new: Option<&S>,
        parent: &Path,
        cx: &mut DiffContext<'_>,
    ) -> Result<()>
    where
        T: Diffable,
    {
        T::diff(self.read(old), self.read(new), &parent.field(self.name), cx)
    }
}

impl<S: ?Sized, T: ?Sized, F> fmt::Debug for FieldAccessor<S, T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldAccessor")
            .field("name", &self.name)
            .finish()
    }
}
