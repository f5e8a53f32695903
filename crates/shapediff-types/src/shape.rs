use std::fmt;

use serde::{Deserialize, Serialize};

/// How a declared type is compared when it appears as a field.
///
/// The classification is a property of the declared type, not of any
/// particular value: an absent `Option<Address>` is still a
/// [`FieldShape::NestedObject`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldShape {
    /// Compared by value equality and reported through its display string.
    Scalar,
    /// Walked field by field, with the field name appended to the path.
    NestedObject,
    /// Compared index by index, or collapsed into one joined string when the
    /// elements are scalars.
    Sequence,
}

impl FieldShape {
    /// Returns `true` for [`FieldShape::Scalar`].
    pub const fn is_scalar(self) -> bool {
        matches!(self, FieldShape::Scalar)
    }
}

impl fmt::Display for FieldShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldShape::Scalar => write!(f, "scalar"),
            FieldShape::NestedObject => write!(f, "nested object"),
            FieldShape::Sequence => write!(f, "sequence"),
        }
    }
}
