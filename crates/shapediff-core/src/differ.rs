//! Top-level entry points.

use std::any::{type_name, Any};

use shapediff_types::{DiffConfig, DiffError, DiffResult, Path, Result};
use tracing::debug;

use crate::context::DiffContext;
use crate::diffable::Diffable;

/// Computes structural differences under a fixed [`DiffConfig`].
///
/// A `Differ` holds no per-call state; one instance can serve any number of
/// concurrent calls.
#[derive(Clone, Debug, Default)]
pub struct Differ {
    config: DiffConfig,
}

impl Differ {
    /// Create a differ with the given configuration.
    pub fn new(config: DiffConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &DiffConfig {
        &self.config
    }

    /// Diff two instances of `T`. `None` on either side is the absent
    /// sentinel: every field of an absent instance reads as absent.
    pub fn diff<T: Diffable>(&self, old: Option<&T>, new: Option<&T>) -> Result<DiffResult> {
        self.diff_from(Path::root(), old, new)
    }

    /// Diff two instances with every path prefixed by `base`.
    pub fn diff_from<T: Diffable>(
        &self,
        base: impl Into<Path>,
        old: Option<&T>,
        new: Option<&T>,
    ) -> Result<DiffResult> {
        let base = base.into();
        debug!(shape = type_name::<T>(), base = %base, "diff started");

        let mut cx = DiffContext::new(&self.config);
        T::diff(old, new, &base, &mut cx)?;
        let result = cx.finish();

        debug!(
            shape = type_name::<T>(),
            changes = result.len(),
            "diff complete"
        );
        Ok(result)
    }

    /// Diff two type-erased values as instances of `T`.
    ///
    /// Fails with [`DiffError::ShapeMismatch`] before any comparison if a
    /// present side is not a `T`.
    pub fn diff_any<T: Diffable + Any>(
        &self,
        old: Option<&dyn Any>,
        new: Option<&dyn Any>,
    ) -> Result<DiffResult> {
        let old = downcast::<T>(old)?;
        let new = downcast::<T>(new)?;
        self.diff(old, new)
    }
}

fn downcast<T: Any>(value: Option<&dyn Any>) -> Result<Option<&T>> {
    match value {
        None => Ok(None),
        Some(v) => v
            .downcast_ref::<T>()
            .map(Some)
            .ok_or_else(|| DiffError::ShapeMismatch {
                expected: type_name::<T>(),
                found: "a value of another type".to_owned(),
            }),
    }
}

/// Diff two present instances with the default configuration.
///
/// ```
/// use shapediff_core::diff;
///
/// let result = diff(&vec!["b", "a"], &vec!["a", "c"]).unwrap();
/// assert_eq!(result.len(), 1);
/// assert_eq!(result.get("").unwrap().new_value(), "a,c");
/// ```
pub fn diff<T: Diffable>(old: &T, new: &T) -> Result<DiffResult> {
    Differ::default().diff(Some(old), Some(new))
}

/// Diff two possibly-absent instances with the default configuration.
pub fn diff_optional<T: Diffable>(old: Option<&T>, new: Option<&T>) -> Result<DiffResult> {
    Differ::default().diff(old, new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{Clash, Holder, Inner, Item, Node, Outer};
    use proptest::prelude::*;

    #[test]
    fn identical_instances_no_diff() {
        let x = Holder::sample();
        assert!(diff(&x, &x).unwrap().is_empty());
    }

    #[test]
    fn nested_path_construction() {
        let old = Outer::new("o", 1);
        let new = Outer::new("o", 2);

        let result = diff(&old, &new).unwrap();
        assert_eq!(result.len(), 1);
        let record = result.get("Inner.Value").unwrap();
        assert_eq!(record.old_value(), "1");
        assert_eq!(record.new_value(), "2");
    }

    #[test]
    fn absent_old_instance() {
        let new = Outer::new("v", 3);
        let result = diff_optional(None, Some(&new)).unwrap();

        assert_eq!(result.len(), 2);
        let name = result.get("Name").unwrap();
        assert_eq!((name.old_value(), name.new_value()), ("", "v"));
        let value = result.get("Inner.Value").unwrap();
        assert_eq!((value.old_value(), value.new_value()), ("", "3"));
    }

    #[test]
    fn both_absent_is_empty() {
        assert!(diff_optional::<Outer>(None, None).unwrap().is_empty());
    }

    #[test]
    fn absent_nested_object_on_one_side() {
        let old = Outer {
            name: "o".into(),
            inner: None,
        };
        let new = Outer::new("o", 5);

        let result = diff(&old, &new).unwrap();
        assert_eq!(result.paths().collect::<Vec<_>>(), vec!["Inner.Value"]);
        assert_eq!(result.get("Inner.Value").unwrap().old_value(), "");
    }

    #[test]
    fn base_path_prefixes_every_record() {
        let result = Differ::default()
            .diff_from("order", Some(&Outer::new("a", 1)), Some(&Outer::new("b", 1)))
            .unwrap();
        assert!(result.contains_path("order.Name"));
    }

    #[test]
    fn holder_mixes_all_three_policies() {
        let old = Holder::sample();
        let mut new = Holder::sample();
        new.tags = vec!["a".into(), "c".into()];
        new.items.push(Item::new(9));
        new.items[1].v = 3;

        let result = diff(&old, &new).unwrap();
        assert_eq!(
            result.paths().collect::<Vec<_>>(),
            vec!["Items[1].V", "Items[2].V", "Tags"]
        );
        assert_eq!(result.get("Tags").unwrap().old_value(), "a,b");
        assert_eq!(result.get("Tags").unwrap().new_value(), "a,c");
        assert_eq!(result.get("Items[2].V").unwrap().old_value(), "");
    }

    #[test]
    fn colliding_field_names_are_fatal() {
        let old = Clash {
            first: 1,
            second: 1,
        };
        let new = Clash {
            first: 2,
            second: 3,
        };
        let err = diff(&old, &new).unwrap_err();
        assert_eq!(
            err,
            DiffError::DuplicatePath {
                path: "Value".into()
            }
        );
    }

    #[test]
    fn recursive_type_with_finite_instances() {
        let old = Node::chain(&[1, 2, 3]);
        let new = Node::chain(&[1, 2, 4]);

        let result = diff(&old, &new).unwrap();
        let record = result.get("Next.Next.Value").unwrap();
        assert_eq!((record.old_value(), record.new_value()), ("3", "4"));
    }

    #[test]
    fn depth_guard_stops_deep_chains() {
        let differ = Differ::new(DiffConfig::default().with_max_depth(2));
        let old = Node::chain(&[1, 2, 3]);
        let new = Node::chain(&[1, 2, 3]);

        let err = differ.diff(Some(&old), Some(&new)).unwrap_err();
        assert_eq!(
            err,
            DiffError::DepthExceeded {
                path: "Next.Next".into(),
                limit: 2
            }
        );
        assert!(differ
            .diff(Some(&Node::chain(&[1, 2])), Some(&Node::chain(&[1, 5])))
            .is_ok());
    }

    #[test]
    fn diff_any_accepts_matching_types() {
        let old = Inner { value: 1 };
        let new = Inner { value: 2 };
        let result = Differ::default()
            .diff_any::<Inner>(Some(&old as &dyn Any), Some(&new as &dyn Any))
            .unwrap();
        assert!(result.contains_path("Value"));
    }

    #[test]
    fn diff_any_rejects_other_shapes() {
        let old = Inner { value: 1 };
        let new = Item::new(1);
        let err = Differ::default()
            .diff_any::<Inner>(Some(&old as &dyn Any), Some(&new as &dyn Any))
            .unwrap_err();
        assert!(matches!(
            &err,
            DiffError::ShapeMismatch { expected, .. } if expected.ends_with("Inner")
        ));
        assert!(err.to_string().ends_with("found a value of another type"));
    }

    #[test]
    fn diff_any_with_absent_side() {
        let new = Inner { value: 7 };
        let result = Differ::default()
            .diff_any::<Inner>(None, Some(&new as &dyn Any))
            .unwrap();
        assert_eq!(result.get("Value").unwrap().new_value(), "7");
    }

    fn holder_strategy() -> impl Strategy<Value = Holder> {
        (
            proptest::collection::vec("[a-d]{0,3}", 0..5),
            proptest::collection::vec(any::<i32>(), 0..5),
            proptest::option::of(any::<i32>()),
        )
            .prop_map(|(tags, vs, inner)| Holder {
                tags,
                items: vs.into_iter().map(Item::new).collect(),
                inner: inner.map(|value| Inner { value }),
            })
    }

    proptest! {
        #[test]
        fn reflexive(x in holder_strategy()) {
            prop_assert!(diff(&x, &x).unwrap().is_empty());
        }

        #[test]
        fn symmetric_paths_with_swapped_values(a in holder_strategy(), b in holder_strategy()) {
            let forward = diff(&a, &b).unwrap();
            let backward = diff(&b, &a).unwrap();
            prop_assert_eq!(forward.is_empty(), backward.is_empty());
            prop_assert_eq!(forward.inverted(), backward);
        }

        #[test]
        fn symmetric_against_absent(x in holder_strategy()) {
            let created = diff_optional(None, Some(&x)).unwrap();
            let removed = diff_optional(Some(&x), None).unwrap();
            prop_assert_eq!(created.inverted(), removed);
        }
    }
}
