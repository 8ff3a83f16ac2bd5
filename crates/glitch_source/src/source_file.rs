//! A single loaded source with line-start indexing for line/column lookup.

use crate::file_id::FileId;
use glitch_common::ContentHash;
use std::path::PathBuf;

/// A schema or document source loaded into a [`SourceDb`](crate::SourceDb).
///
/// Besides the text itself, a source carries two hashes: `content_hash`
/// covers the text only, while `identity_hash` covers the logical path and
/// the text. The codegen cache keys documents by their identity hash, so
/// moving a file to a new path counts as a change.
pub struct SourceFile {
    /// The unique identifier for this file within its database.
    pub id: FileId,
    /// The logical path of this file (project-relative for collected files).
    pub path: PathBuf,
    /// The full text content of the file.
    pub content: String,
    /// Byte offsets of each line start (the first entry is always 0).
    line_starts: Vec<u32>,
    /// Hash of the text content.
    pub content_hash: ContentHash,
    /// Hash of the logical path followed by the text content.
    pub identity_hash: ContentHash,
}

impl SourceFile {
    /// Creates a new `SourceFile` with precomputed line starts and hashes.
    pub fn new(id: FileId, path: PathBuf, content: String) -> Self {
        let line_starts = compute_line_starts(&content);
        let content_hash = ContentHash::from_bytes(content.as_bytes());
        let identity_hash =
            ContentHash::from_parts([path.to_string_lossy().as_ref(), content.as_str()]);
        Self {
            id,
            path,
            content,
            line_starts,
            content_hash,
            identity_hash,
        }
    }

    /// Converts a byte offset into 1-indexed (line, column) coordinates.
    pub fn line_col(&self, byte_offset: u32) -> (u32, u32) {
        let line_idx = match self.line_starts.binary_search(&byte_offset) {
            Ok(idx) => idx,
            Err(idx) => idx - 1,
        };
        let line = (line_idx as u32) + 1;
        let col = byte_offset - self.line_starts[line_idx] + 1;
        (line, col)
    }

    /// Returns the text between two byte offsets, clamped to the content.
    pub fn snippet(&self, start: u32, end: u32) -> &str {
        let len = self.content.len();
        let start = (start as usize).min(len);
        let end = (end as usize).clamp(start, len);
        self.content.get(start..end).unwrap_or("")
    }

    /// Returns the length of the content in bytes.
    pub fn len(&self) -> u32 {
        self.content.len() as u32
    }

    /// Returns `true` if the file has no content.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Computes the byte offsets of each line start in the given content.
fn compute_line_starts(content: &str) -> Vec<u32> {
    let mut starts = vec![0u32];
    for (i, byte) in content.bytes().enumerate() {
        if byte == b'\n' {
            starts.push((i + 1) as u32);
        }
    }
    starts
}
