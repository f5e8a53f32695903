//! Change records and the path-keyed result of a diff.
//!
//! Values are stored as display strings rather than typed values: a result
//! reports *that* and *where* something changed, not a typed delta.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DiffError, Result};

/// One detected difference between two instances.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChangeRecord {
    path: String,
    old_value: String,
    new_value: String,
}

impl ChangeRecord {
    /// Create a record for `path`.
    pub fn new(
        path: impl Into<String>,
        old_value: impl Into<String>,
        new_value: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            old_value: old_value.into(),
            new_value: new_value.into(),
        }
    }

    /// The structural address of the changed field.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Display string of the value before the change.
    pub fn old_value(&self) -> &str {
        &self.old_value
    }

    /// Display string of the value after the change.
    pub fn new_value(&self) -> &str {
        &self.new_value
    }

    /// The same change seen from the other direction.
    pub fn swapped(&self) -> Self {
        Self {
            path: self.path.clone(),
            old_value: self.new_value.clone(),
            new_value: self.old_value.clone(),
        }
    }
}

impl fmt::Display for ChangeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:?} -> {:?}", self.path, self.old_value, self.new_value)
    }
}

/// The full set of changes produced by one diff call, keyed by path.
///
/// Keys are unique. [`DiffResult::insert`] refuses a second record under an
/// existing path instead of overwriting it. Iteration follows path order, but
/// callers should treat the result as an unordered map.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DiffResult {
    records: BTreeMap<String, ChangeRecord>,
}

impl DiffResult {
    /// Create an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record.
    ///
    /// Returns [`DiffError::DuplicatePath`] if a record already exists under
    /// the same path; the existing record is left untouched.
    pub fn insert(&mut self, record: ChangeRecord) -> Result<()> {
        match self.records.entry(record.path.clone()) {
            btree_map::Entry::Occupied(entry) => Err(DiffError::DuplicatePath {
                path: entry.key().clone(),
            }),
            btree_map::Entry::Vacant(entry) => {
                entry.insert(record);
                Ok(())
            }
        }
    }

    /// Look up the record for `path`.
    pub fn get(&self, path: impl AsRef<str>) -> Option<&ChangeRecord> {
        self.records.get(path.as_ref())
    }

    /// Returns `true` if a change was recorded under `path`.
    pub fn contains_path(&self, path: impl AsRef<str>) -> bool {
        self.records.contains_key(path.as_ref())
    }

    /// Returns `true` if there are no changes.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of changes.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Iterate over `(path, record)` pairs.
    pub fn iter(&self) -> btree_map::Iter<'_, String, ChangeRecord> {
        self.records.iter()
    }

    /// Iterate over the changed paths.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// Iterate over the records.
    pub fn records(&self) -> impl Iterator<Item = &ChangeRecord> {
        self.records.values()
    }

    /// Consume the result, returning the records.
    pub fn into_records(self) -> Vec<ChangeRecord> {
        self.records.into_values().collect()
    }

    /// The same result with every record swapped, as if the diff had been
    /// computed in the opposite direction.
    pub fn inverted(&self) -> Self {
        Self {
            records: self
                .records
                .iter()
                .map(|(path, record)| (path.clone(), record.swapped()))
                .collect(),
        }
    }

    /// Merge every record from `other`, failing on the first colliding path.
    pub fn extend_from(&mut self, other: DiffResult) -> Result<()> {
        for record in other.records.into_values() {
            self.insert(record)?;
        }
        Ok(())
    }
}

impl fmt::Display for DiffResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in self.records.values() {
            writeln!(f, "{record}")?;
        }
        Ok(())
    }
}

impl IntoIterator for DiffResult {
    type Item = (String, ChangeRecord);
    type IntoIter = btree_map::IntoIter<String, ChangeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a DiffResult {
    type Item = (&'a String, &'a ChangeRecord);
    type IntoIter = btree_map::Iter<'a, String, ChangeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
