use std::fmt;

use serde::{Deserialize, Serialize};

/// Structural address of a field or sequence element, e.g. `Orders[2].Total`.
///
/// Paths are built incrementally while walking a shape. Field segments are
/// joined with `.`, with no leading dot at the root; sequence positions are
/// appended as `[i]` directly onto the owning segment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(String);

impl Path {
    /// The empty path.
    pub const fn root() -> Self {
        Self(String::new())
    }

    /// Returns `true` if no segment has been appended.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Append a field segment.
    ///
    /// ```
    /// use shapediff_types::Path;
    ///
    /// assert_eq!(Path::root().field("Inner").as_str(), "Inner");
    /// assert_eq!(Path::from("Inner").field("Value").as_str(), "Inner.Value");
    /// ```
    pub fn field(&self, name: &str) -> Self {
        if self.is_root() {
            return Self(name.to_owned());
        }
        let mut s = String::with_capacity(self.0.len() + 1 + name.len());
        s.push_str(&self.0);
        s.push('.');
        s.push_str(name);
        Self(s)
    }

    /// Append a sequence position.
    ///
    /// ```
    /// use shapediff_types::Path;
    ///
    /// assert_eq!(Path::from("Items").index(2).as_str(), "Items[2]");
    /// ```
    pub fn index(&self, i: usize) -> Self {
        Self(format!("{}[{i}]", self.0))
    }

    /// The path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the path, returning the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Path {
    fn from(base: &str) -> Self {
        Self(base.to_owned())
    }
}

impl From<String> for Path {
    fn from(base: String) -> Self {
        Self(base)
    }
}

impl From<Path> for String {
    fn from(path: Path) -> Self {
        path.0
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_has_no_leading_dot() {
        let p = Path::root().field("Name");
        assert_eq!(p.as_str(), "Name");
        assert!(!p.is_root());
    }

    #[test]
    fn nested_fields_are_dot_joined() {
        let p = Path::root().field("Outer").field("Inner").field("Value");
        assert_eq!(p.to_string(), "Outer.Inner.Value");
    }

    #[test]
    fn index_attaches_without_dot() {
        let p = Path::root().field("Orders").index(2).field("Total");
        assert_eq!(p.as_str(), "Orders[2].Total");
    }

    #[test]
    fn index_on_root() {
        assert_eq!(Path::root().index(0).as_str(), "[0]");
    }

    #[test]
    fn base_path_prefixes_fields() {
        let p = Path::from("audit").field("Name");
        assert_eq!(p.as_str(), "audit.Name");
    }

    #[test]
    fn appending_does_not_mutate_parent() {
        let parent = Path::from("a");
        let _child = parent.field("b");
        assert_eq!(parent.as_str(), "a");
    }

    #[test]
    fn serializes_as_plain_string() {
        let p = Path::from("x.y[1]");
        assert_eq!(serde_json::to_string(&p).unwrap(), "\"x.y[1]\"");
    }
}
