//! # `clsprep` Text Classification Data Pipeline
//!
//! `clsprep` turns labeled, line-delimited text corpora into batches of
//! integer tensors for a classification model.
//!
//! See:
//! * [`tokenize`] to select a word-level or char-level splitter.
//! * [`vocab`] to build, save, and load a [`vocab::Vocabulary`].
//! * [`encoding`] to encode corpus lines into fixed-length records.
//! * [`batching`] to iterate records as `burn` tensor batches.
//! * [`pipeline`] for the end-to-end train/dev/test flows.
//!
//! Corpus lines are ``{TEXT}\t{LABEL}``; blank lines are skipped.
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
//!
//! ## Example
//!
//! ```rust,ignore
//! use burn::backend::NdArray;
//! use clsprep::config::PipelineConfig;
//! use clsprep::pipeline::{build_dataset, build_iterator};
//!
//! let config = PipelineConfig::new(
//!     "data/train.txt".to_string(),
//!     "data/dev.txt".to_string(),
//!     "data/test.txt".to_string(),
//!     "data/vocab.txt".to_string(),
//! )
//! .with_model_name("FastText".to_string());
//!
//! let dataset = build_dataset(&config)?;
//! let device = Default::default();
//! let mut train_iter = build_iterator::<NdArray>(dataset.splits.train, &config, device)?;
//!
//! for epoch in 0..3 {
//!     for batch in &mut train_iter {
//!         // batch.ids: [batch, pad_size]
//!     }
//! }
//! ```
#![warn(missing_docs, unused)]

pub mod batching;
pub mod config;
pub mod encoding;
pub mod errors;
pub mod pipeline;
pub mod tokenize;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use config::{ModelFamily, PipelineConfig, SpecialTokens};
#[doc(inline)]
pub use errors::{ClsprepError, Result};
#[doc(inline)]
pub use vocab::Vocabulary;
