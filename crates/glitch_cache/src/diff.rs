//! Names added and removed by a run.

use std::fmt;

/// One line of the change summary printed after a refreshed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffEvent {
    /// The artifact is gone.
    Removed(String),
    /// A new artifact appeared.
    Added(String),
    /// An artifact was removed and a new one with the same name added, e.g.
    /// after its document was edited or moved.
    Replaced(String),
}

impl DiffEvent {
    /// The artifact name.
    pub fn name(&self) -> &str {
        match self {
            DiffEvent::Removed(name) | DiffEvent::Added(name) | DiffEvent::Replaced(name) => name,
        }
    }

    fn glyph(&self) -> &'static str {
        match self {
            DiffEvent::Removed(_) => "🧹",
            DiffEvent::Added(_) => "✨",
            DiffEvent::Replaced(_) => "💫",
        }
    }
}

impl fmt::Display for DiffEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "📋 {} {}", self.name(), self.glyph())
    }
}

/// Artifact names removed and added by one run, in the order they happened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactDiff {
    /// Names of artifacts whose documents disappeared or changed.
    pub removed: Vec<String>,
    /// Names of artifacts parsed from new or changed documents.
    pub added: Vec<String>,
}

impl ArtifactDiff {
    /// Returns `true` if nothing was added or removed.
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.added.is_empty()
    }

    /// The change summary: pure removals first, then additions, with names
    /// that were both removed and added reported once as replaced.
    pub fn events(&self) -> Vec<DiffEvent> {
        let removed = self
            .removed
            .iter()
            .filter(|name| !self.added.contains(*name))
            .map(|name| DiffEvent::Removed(name.clone()));
        let added = self.added.iter().map(|name| {
            if self.removed.contains(name) {
                DiffEvent::Replaced(name.clone())
            } else {
                DiffEvent::Added(name.clone())
            }
        });
        removed.chain(added).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_diff() {
        let diff = ArtifactDiff::default();
        assert!(diff.is_empty());
        assert!(diff.events().is_empty());
    }

    #[test]
    fn classifies_events() {
        let diff = ArtifactDiff {
            removed: names(&["Old", "Me"]),
            added: names(&["Me", "New"]),
        };
        assert_eq!(
            diff.events(),
            vec![
                DiffEvent::Removed("Old".into()),
                DiffEvent::Replaced("Me".into()),
                DiffEvent::Added("New".into()),
            ]
        );
    }

    #[test]
    fn display_lines() {
        assert_eq!(DiffEvent::Removed("A".into()).to_string(), "📋 A 🧹");
        assert_eq!(DiffEvent::Added("A".into()).to_string(), "📋 A ✨");
        assert_eq!(DiffEvent::Replaced("A".into()).to_string(), "📋 A 💫");
    }
}
