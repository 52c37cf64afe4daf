//! # Batching
//!
//! [`BatchIter`] walks an encoded split in fixed-size batches, stacking
//! each into a [`ClsBatch`] of `burn` integer tensors. The tensor layout
//! follows the [`crate::config::ModelFamily`]:
//! * `Generic` - `ids`, `seq_len`, `labels`.
//! * `HashedNgram` - plus `bigram` and `trigram`.
//! * `Subword` - plus `mask`.
pub mod batcher;
pub mod cursor;
pub mod dataset;
pub mod iterator;
pub mod tensors;

#[doc(inline)]
pub use batcher::ClsBatcher;
#[doc(inline)]
pub use cursor::BatchCursor;
#[doc(inline)]
pub use dataset::EncodedDataset;
#[doc(inline)]
pub use iterator::BatchIter;
#[doc(inline)]
pub use tensors::{BatchFeatures, ClsBatch, check_records};
