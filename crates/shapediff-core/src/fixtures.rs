//! Hand-written shapes for tests, implemented the way the derive macro
//! expands them.

use shapediff_types::{FieldShape, Path, Result};

use crate::accessor::FieldAccessor;
use crate::context::DiffContext;
use crate::diffable::Diffable;
use crate::policy::diff_nested;

#[derive(Clone, Debug, PartialEq)]
pub struct Inner {
    pub value: i32,
}

impl Diffable for Inner {
    const SHAPE: FieldShape = FieldShape::NestedObject;

    fn diff(
        old: Option<&Self>,
        new: Option<&Self>,
        path: &Path,
        cx: &mut DiffContext<'_>,
    ) -> Result<()> {
        diff_nested(old, new, path, cx, |cx| {
            FieldAccessor::new("Value", |s: &Self| Some(&s.value)).diff(old, new, path, cx)
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Outer {
    pub name: String,
    pub inner: Option<Inner>,
}

impl Outer {
    pub fn new(name: &str, value: i32) -> Self {
        Self {
            name: name.to_owned(),
            inner: Some(Inner { value }),
        }
    }
}

impl Diffable for Outer {
    const SHAPE: FieldShape = FieldShape::NestedObject;

    fn diff(
        old: Option<&Self>,
        new: Option<&Self>,
        path: &Path,
        cx: &mut DiffContext<'_>,
    ) -> Result<()> {
        diff_nested(old, new, path, cx, |cx| {
            FieldAccessor::new("Name", |s: &Self| Some(&s.name)).diff(old, new, path, cx)?;
            FieldAccessor::new("Inner", |s: &Self| Some(&s.inner)).diff(old, new, path, cx)?;
            Ok(())
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub v: i32,
}

impl Item {
    pub fn new(v: i32) -> Self {
        Self { v }
    }
}

impl Diffable for Item {
    const SHAPE: FieldShape = FieldShape::NestedObject;

    fn diff(
        old: Option<&Self>,
        new: Option<&Self>,
        path: &Path,
        cx: &mut DiffContext<'_>,
    ) -> Result<()> {
        diff_nested(old, new, path, cx, |cx| {
            FieldAccessor::new("V", |s: &Self| Some(&s.v)).diff(old, new, path, cx)
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    pub name: String,
    pub tags: Vec<String>,
}

impl Line {
    pub fn new(name: &str, tags: &[&str]) -> Self {
        Self {
            name: name.to_owned(),
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
        }
    }
}

impl Diffable for Line {
    const SHAPE: FieldShape = FieldShape::NestedObject;

    fn diff(
        old: Option<&Self>,
        new: Option<&Self>,
        path: &Path,
        cx: &mut DiffContext<'_>,
    ) -> Result<()> {
        diff_nested(old, new, path, cx, |cx| {
            FieldAccessor::new("Name", |s: &Self| Some(&s.name)).diff(old, new, path, cx)?;
            FieldAccessor::new("Tags", |s: &Self| Some(&s.tags)).diff(old, new, path, cx)?;
            Ok(())
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Holder {
    pub tags: Vec<String>,
    pub items: Vec<Item>,
    pub inner: Option<Inner>,
}

impl Holder {
    pub fn sample() -> Self {
        Self {
            tags: vec!["b".into(), "a".into()],
            items: vec![Item::new(1), Item::new(2)],
            inner: Some(Inner { value: 0 }),
        }
    }
}

impl Diffable for Holder {
    const SHAPE: FieldShape = FieldShape::NestedObject;

    fn diff(
        old: Option<&Self>,
        new: Option<&Self>,
        path: &Path,
        cx: &mut DiffContext<'_>,
    ) -> Result<()> {
        diff_nested(old, new, path, cx, |cx| {
            FieldAccessor::new("Tags", |s: &Self| Some(&s.tags)).diff(old, new, path, cx)?;
            FieldAccessor::new("Items", |s: &Self| Some(&s.items)).diff(old, new, path, cx)?;
            FieldAccessor::new("Inner", |s: &Self| Some(&s.inner)).diff(old, new, path, cx)?;
            Ok(())
        })
    }
}

/// Two fields reported under the same segment.
#[derive(Clone, Debug, PartialEq)]
pub struct Clash {
    pub first: u8,
    pub second: u8,
}

impl Diffable for Clash {
    const SHAPE: FieldShape = FieldShape::NestedObject;

    fn diff(
        old: Option<&Self>,
        new: Option<&Self>,
        path: &Path,
        cx: &mut DiffContext<'_>,
    ) -> Result<()> {
        diff_nested(old, new, path, cx, |cx| {
            FieldAccessor::new("Value", |s: &Self| Some(&s.first)).diff(old, new, path, cx)?;
            FieldAccessor::new("Value", |s: &Self| Some(&s.second)).diff(old, new, path, cx)?;
            Ok(())
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub value: i32,
    pub next: Option<Box<Node>>,
}

impl Node {
    pub fn chain(values: &[i32]) -> Self {
        let mut iter = values.iter().rev();
        let last = iter.next().copied().unwrap_or_default();
        let mut node = Node {
            value: last,
            next: None,
        };
        for &value in iter {
            node = Node {
                value,
                next: Some(Box::new(node)),
            };
        }
        node
    }
}

impl Diffable for Node {
    const SHAPE: FieldShape = FieldShape::NestedObject;

    fn diff(
        old: Option<&Self>,
        new: Option<&Self>,
        path: &Path,
        cx: &mut DiffContext<'_>,
    ) -> Result<()> {
        diff_nested(old, new, path, cx, |cx| {
            FieldAccessor::new("Value", |s: &Self| Some(&s.value)).diff(old, new, path, cx)?;
            FieldAccessor::new("Next", |s: &Self| Some(&s.next)).diff(old, new, path, cx)?;
            Ok(())
        })
    }
}
