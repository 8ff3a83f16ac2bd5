//! Content hashing for cache invalidation and change detection.

use serde::{Deserialize, Serialize};
use std::fmt;
use xxhash_rust::xxh3::Xxh3;

/// A 128-bit content hash computed using XXH3.
///
/// Two inputs with the same `ContentHash` are assumed to be identical. The
/// codegen cache compares these hashes across runs, so the value must only
/// depend on the input bytes. Hashes are totally ordered, which lets callers
/// sort hash lists into a canonical order before aggregating them.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ContentHash([u8; 16]);

impl ContentHash {
    /// Computes a content hash from a byte slice using XXH3-128.
    pub fn from_bytes(data: &[u8]) -> Self {
        let hash = xxhash_rust::xxh3::xxh3_128(data);
        Self(hash.to_be_bytes())
    }

    /// Hashes an ordered sequence of string parts.
    ///
    /// Equivalent to feeding each part into a [`ContentHasher`] in turn.
    pub fn from_parts<'a>(parts: impl IntoIterator<Item = &'a str>) -> Self {
        let mut hasher = ContentHasher::new();
        for part in parts {
            hasher.update(part);
        }
        hasher.finish()
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentHash({:02x}{:02x}..)", self.0[0], self.0[1])
    }
}

/// Streaming hasher over several string parts.
///
/// Each part is length-prefixed before it is fed to XXH3, so `["ab", "c"]`
/// and `["a", "bc"]` hash differently.
pub struct ContentHasher {
    state: Xxh3,
}

impl ContentHasher {
    /// Creates a hasher with no input.
    pub fn new() -> Self {
        Self { state: Xxh3::new() }
    }

    /// Appends one part.
    pub fn update(&mut self, part: &str) {
        self.state.update(&(part.len() as u64).to_le_bytes());
        self.state.update(part.as_bytes());
    }

    /// Appends the display form of another hash.
    pub fn update_hash(&mut self, hash: &ContentHash) {
        self.update(&hash.to_string());
    }

    /// Returns the hash of everything appended so far.
    pub fn finish(&self) -> ContentHash {
        ContentHash(self.state.digest128().to_be_bytes())
    }
}

impl Default for ContentHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic() {
        let a = ContentHash::from_bytes(b"query A { id }");
        let b = ContentHash::from_bytes(b"query A { id }");
        assert_eq!(a, b);
    }

    #[test]
    fn different_inputs_differ() {
        let a = ContentHash::from_bytes(b"query A { id }");
        let b = ContentHash::from_bytes(b"query B { id }");
        assert_ne!(a, b);
    }

    #[test]
    fn display_format() {
        let h = ContentHash::from_bytes(b"type Query { id: ID }");
        let s = format!("{h}");
        assert_eq!(s.len(), 32, "Display should be 32 hex chars");
        assert!(s.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn debug_abbreviated() {
        let h = ContentHash::from_bytes(b"test");
        let s = format!("{h:?}");
        assert!(s.starts_with("ContentHash("));
        assert!(s.ends_with(")"));
    }

    #[test]
    fn parts_are_length_prefixed() {
        let a = ContentHash::from_parts(["ab", "c"]);
        let b = ContentHash::from_parts(["a", "bc"]);
        assert_ne!(a, b);
    }

    #[test]
    fn parts_deterministic() {
        let a = ContentHash::from_parts(["src/a.graphql", "query A { id }"]);
        let b = ContentHash::from_parts(["src/a.graphql", "query A { id }"]);
        assert_eq!(a, b);
    }

    #[test]
    fn same_source_different_path_differs() {
        let a = ContentHash::from_parts(["src/a.graphql", "query A { id }"]);
        let b = ContentHash::from_parts(["src/b.graphql", "query A { id }"]);
        assert_ne!(a, b);
    }

    #[test]
    fn update_hash_uses_display_form() {
        let inner = ContentHash::from_bytes(b"schema");
        let mut hasher = ContentHasher::new();
        hasher.update_hash(&inner);
        assert_eq!(hasher.finish(), ContentHash::from_parts([inner.to_string().as_str()]));
    }

    #[test]
    fn ordering_is_total() {
        let mut hashes = vec![
            ContentHash::from_bytes(b"c"),
            ContentHash::from_bytes(b"a"),
            ContentHash::from_bytes(b"b"),
        ];
        let mut reversed = hashes.clone();
        reversed.reverse();
        hashes.sort();
        reversed.sort();
        assert_eq!(hashes, reversed);
    }

    #[test]
    fn serde_roundtrip() {
        let h = ContentHash::from_bytes(b"serde test");
        let json = serde_json::to_string(&h).unwrap();
        let back: ContentHash = serde_json::from_str(&json).unwrap();
        assert_eq!(h, back);
    }
}
