//! Name-based selection of directory entries.

use std::collections::BTreeSet;

/// Which directory entries are upload candidates, expressed as the glob they mimic.
///
/// Both variants skip hidden names (leading `.`), as a shell glob does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameFilter {
    /// `*.*`: the name must contain a dot. Extensionless files are skipped.
    #[default]
    Dotted,
    /// `*`: every non-hidden name.
    All,
}

impl NameFilter {
    pub fn matches(self, name: &str) -> bool {
        if name.is_empty() || name.starts_with('.') {
            return false;
        }
        match self {
            NameFilter::Dotted => name.contains('.'),
            NameFilter::All => true,
        }
    }
}

/// Basenames that are never uploaded, to any host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet(BTreeSet<String>);

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<S: Into<String>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
