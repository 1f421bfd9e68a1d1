//! Where a new record goes when it is added to the registry.

use std::fmt;

/// Insertion strategy for [`RecordRegistry::insert`](crate::registry::RecordRegistry::insert).
///
/// `Before` and `After` carry the unique key of the anchor record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Placement {
    /// Sorted by the configured ordering key
    #[default]
    Sorted,
    /// At the head of the roster
    Head,
    /// At the tail of the roster
    Tail,
    /// Immediately before the anchor record
    Before(String),
    /// Immediately after the anchor record
    After(String),
}

impl Placement {
    /// Anchor key for relative placements
    pub fn anchor(&self) -> Option<&str> {
        match self {
            Placement::Before(anchor) | Placement::After(anchor) => Some(anchor),
            _ => None,
        }
    }

    /// Short label used in log fields
    pub fn label(&self) -> &'static str {
        match self {
            Placement::Sorted => "sorted",
            Placement::Head => "head",
            Placement::Tail => "tail",
            Placement::Before(_) => "before",
            Placement::After(_) => "after",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.anchor() {
            Some(anchor) => write!(f, "{} {}", self.label(), anchor),
            None => f.write_str(self.label()),
        }
    }
}
