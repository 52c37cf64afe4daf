//! # Line Encoding
//!
//! Corpus lines become [`EncodedRecord`]s by one of two paths:
//! * [`LineEncoder`] - vocabulary ids, optionally with hashed n-gram features.
//! * [`SubwordEncoder`] - sub-word ids from a [`SubwordTokenizer`], with an
//!   attention mask.
pub mod corpus;
pub mod line_encoder;
pub mod ngram;
pub mod record;
pub mod subword;

#[cfg(feature = "hf-tokenizers")]
pub mod hf;

#[doc(inline)]
pub use line_encoder::{LineEncoder, encode_dataset};
#[doc(inline)]
pub use ngram::{bigram_hash, trigram_hash};
#[doc(inline)]
pub use record::{EncodedRecord, RecordFeatures};
#[doc(inline)]
pub use subword::{SubwordEncoder, SubwordTokenizer, encode_dataset_subword};
