//! # Hashed N-gram Features
//!
//! Bucketed context hashes for the hashed-ngram model family.
//! `buckets` must be in ``1..=MAX_NGRAM_BUCKETS``; config validation
//! enforces that.

use crate::types::TokenId;

/// Bigram hash multiplier.
pub const BIGRAM_PRIME: u128 = 14_918_087;

/// Trigram hash multiplier (applied on top of [`BIGRAM_PRIME`]).
pub const TRIGRAM_PRIME: u128 = 18_408_749;

/// The largest bucket count whose bucket ids all fit in a [`TokenId`].
pub const MAX_NGRAM_BUCKETS: u64 = 1 << TokenId::BITS;

fn bucket(
    hash: u128,
    buckets: usize,
) -> TokenId {
    debug_assert!(
        buckets > 0 && buckets as u64 <= MAX_NGRAM_BUCKETS,
        "buckets out of range: {buckets}"
    );
    (hash % buckets as u128) as TokenId
}

fn lookback(
    seq: &[TokenId],
    pos: usize,
    back: usize,
) -> u128 {
    pos.checked_sub(back)
        .and_then(|i| seq.get(i))
        .map_or(0, |&t| t as u128)
}

/// The bigram bucket at `pos`: ``(seq[pos-1] * 14918087) % buckets``.
///
/// Positions before the start read as token 0.
pub fn bigram_hash(
    seq: &[TokenId],
    pos: usize,
    buckets: usize,
) -> TokenId {
    let t1 = lookback(seq, pos, 1);
    bucket(t1 * BIGRAM_PRIME, buckets)
}

/// The trigram bucket at `pos`:
/// ``(seq[pos-2] * 14918087 * 18408749 + seq[pos-1] * 14918087) % buckets``.
///
/// Positions before the start read as token 0.
pub fn trigram_hash(
    seq: &[TokenId],
    pos: usize,
    buckets: usize,
) -> TokenId {
    let t1 = lookback(seq, pos, 1);
    let t2 = lookback(seq, pos, 2);
    bucket(t2 * BIGRAM_PRIME * TRIGRAM_PRIME + t1 * BIGRAM_PRIME, buckets)
}
