//! Shared foundational types used across the glitch codegen toolchain.
//!
//! Currently this is the content hash that every cache decision is built on.

#![warn(missing_docs)]

pub mod hash;

pub use hash::{ContentHash, ContentHasher};
