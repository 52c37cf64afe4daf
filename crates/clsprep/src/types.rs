//! # Common Types

/// Dense vocabulary / sub-word token id.
pub type TokenId = u32;

/// Class label parsed from a corpus line.
pub type Label = i64;

/// Type Alias for hash maps in this crate.
pub type CommonHashMap<K, V> = ahash::AHashMap<K, V>;
