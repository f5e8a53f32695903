//! [`Diffable`] implementations for std types.
//!
//! - Scalars: primitives, strings, IP addresses, paths, and with the
//!   `chrono` / `uuid` features their timestamp and identifier types.
//! - Transparent wrappers: `Option`, `Box`, `Rc`, `Arc`. `None` is the
//!   absent sentinel; the other wrappers compare their contents.
//! - Sequences: `Vec`, `VecDeque`, arrays, `BTreeSet`.

use std::cmp::Ordering;
use std::collections::{BTreeSet, VecDeque};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;

use shapediff_types::{FieldShape, Path, Result};

use crate::context::DiffContext;
use crate::diffable::Diffable;
use crate::policy::{diff_scalar, diff_sequence};

macro_rules! ordered_scalar {
    ($($ty:ty),* $(,)?) => {$(
        impl Diffable for $ty {
            const SHAPE: FieldShape = FieldShape::Scalar;

            fn diff(
                old: Option<&Self>,
                new: Option<&Self>,
                path: &Path,
                cx: &mut DiffContext<'_>,
            ) -> Result<()> {
                diff_scalar(old, new, path, cx)
            }

            fn display(&self) -> String {
                self.to_string()
            }

            fn natural_cmp(&self, other: &Self) -> Ordering {
                Ord::cmp(self, other)
            }
        }
    )*};
}

ordered_scalar!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
    String, &'static str, IpAddr, Ipv4Addr, Ipv6Addr,
);

macro_rules! float_scalar {
    ($($ty:ty),* $(,)?) => {$(
        impl Diffable for $ty {
            const SHAPE: FieldShape = FieldShape::Scalar;

            fn diff(
                old: Option<&Self>,
                new: Option<&Self>,
                path: &Path,
                cx: &mut DiffContext<'_>,
            ) -> Result<()> {
                diff_scalar(old, new, path, cx)
            }

            fn display(&self) -> String {
                self.to_string()
            }

            fn natural_cmp(&self, other: &Self) -> Ordering {
                self.total_cmp(other)
            }
        }
    )*};
}

float_scalar!(f32, f64);

impl Diffable for PathBuf {
    const SHAPE: FieldShape = FieldShape::Scalar;

    fn diff(
        old: Option<&Self>,
        new: Option<&Self>,
        path: &Path,
        cx: &mut DiffContext<'_>,
    ) -> Result<()> {
        diff_scalar(old, new, path, cx)
    }

    fn display(&self) -> String {
        self.as_path().display().to_string()
    }

    fn natural_cmp(&self, other: &Self) -> Ordering {
        Ord::cmp(self, other)
    }
}

#[cfg(feature = "chrono")]
ordered_scalar!(
    chrono::DateTime<chrono::Utc>,
    chrono::NaiveDate,
    chrono::NaiveDateTime,
);

#[cfg(feature = "uuid")]
ordered_scalar!(uuid::Uuid);

impl<T: Diffable> Diffable for Option<T> {
    const SHAPE: FieldShape = T::SHAPE;

    fn diff(
        old: Option<&Self>,
        new: Option<&Self>,
        path: &Path,
        cx: &mut DiffContext<'_>,
    ) -> Result<()> {
        T::diff(
            old.and_then(Option::as_ref),
            new.and_then(Option::as_ref),
            path,
            cx,
        )
    }

    fn display(&self) -> String {
        self.as_ref().map(T::display).unwrap_or_default()
    }

    fn display_or(&self, placeholder: &str) -> String {
        match self {
            Some(v) => v.display_or(placeholder),
            None => placeholder.to_owned(),
        }
    }

    fn natural_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Some(a), Some(b)) => a.natural_cmp(b),
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
        }
    }
}

macro_rules! transparent {
    ($($wrapper:ident),* $(,)?) => {$(
        impl<T: Diffable> Diffable for $wrapper<T> {
            const SHAPE: FieldShape = T::SHAPE;

            fn diff(
                old: Option<&Self>,
                new: Option<&Self>,
                path: &Path,
                cx: &mut DiffContext<'_>,
            ) -> Result<()> {
                T::diff(old.map(|v| &**v), new.map(|v| &**v), path, cx)
            }

            fn display(&self) -> String {
                T::display(self)
            }

            fn display_or(&self, placeholder: &str) -> String {
                T::display_or(self, placeholder)
            }

            fn natural_cmp(&self, other: &Self) -> Ordering {
                T::natural_cmp(self, other)
            }
        }
    )*};
}

transparent!(Box, Rc, Arc);

macro_rules! sequence {
    ($($ty:ty => [$($generics:tt)*]),* $(,)?) => {$(
        impl<$($generics)*> Diffable for $ty {
            const SHAPE: FieldShape = FieldShape::Sequence;

            fn diff(
                old: Option<&Self>,
                new: Option<&Self>,
                path: &Path,
                cx: &mut DiffContext<'_>,
            ) -> Result<()> {
                diff_sequence(old.map(|s| s.iter()), new.map(|s| s.iter()), path, cx)
            }
        }
    )*};
}

sequence!(
    Vec<T> => [T: Diffable],
    VecDeque<T> => [T: Diffable],
    BTreeSet<T> => [T: Diffable],
    [T; N] => [T: Diffable, const N: usize],
);
