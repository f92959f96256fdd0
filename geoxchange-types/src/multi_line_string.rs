use serde::{Deserialize, Serialize};

use crate::LineString;

/// A set of line strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiLineString(Vec<LineString>);

impl MultiLineString {
    /// Creates a new multi line string.
    pub fn new(line_strings: Vec<LineString>) -> Self {
        Self(line_strings)
    }

    /// Member line strings.
    pub fn line_strings(&self) -> &[LineString] {
        &self.0
    }

    /// Whether the set has no non-empty line strings.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(LineString::is_empty)
    }

    /// Consumes the set returning its members.
    pub fn into_line_strings(self) -> Vec<LineString> {
        self.0
    }
}

impl From<Vec<LineString>> for MultiLineString {
    fn from(value: Vec<LineString>) -> Self {
        Self(value)
    }
}

impl FromIterator<LineString> for MultiLineString {
    fn from_iter<T: IntoIterator<Item = LineString>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
