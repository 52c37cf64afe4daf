//! # Vocabulary Line Encoder

use std::path::Path;

use crate::encoding::corpus::{for_each_record_line, split_labeled};
use crate::encoding::ngram::{bigram_hash, trigram_hash};
use crate::encoding::record::{EncodedRecord, RecordFeatures};
use crate::tokenize::TextSplitter;
use crate::types::TokenId;
use crate::vocab::Vocabulary;

/// Encodes text into fixed-length vocabulary id sequences.
#[derive(Debug, Clone)]
pub struct LineEncoder<'a> {
    /// The vocabulary.
    pub vocab: &'a Vocabulary,

    /// The token splitter; must match the one the vocabulary was built with.
    pub splitter: TextSplitter,

    /// Target sequence length; 0 disables padding and truncation.
    pub pad_size: usize,

    /// Hashed n-gram bucket count; `None` skips n-gram features.
    pub ngram_buckets: Option<usize>,
}

impl<'a> LineEncoder<'a> {
    /// Create a new encoder without n-gram features.
    pub fn new(
        vocab: &'a Vocabulary,
        splitter: TextSplitter,
        pad_size: usize,
    ) -> Self {
        Self {
            vocab,
            splitter,
            pad_size,
            ngram_buckets: None,
        }
    }

    /// Sets the n-gram bucket count.
    pub fn with_ngram_buckets(
        self,
        ngram_buckets: Option<usize>,
    ) -> Self {
        Self {
            ngram_buckets,
            ..self
        }
    }

    /// Encode the text portion of a record.
    ///
    /// ## Returns
    /// ``(ids, seq_len, features)``.
    pub fn encode_text(
        &self,
        text: &str,
    ) -> (Vec<TokenId>, usize, RecordFeatures) {
        let mut tokens = self.splitter.split(text);
        let mut seq_len = tokens.len();

        if self.pad_size > 0 {
            if tokens.len() < self.pad_size {
                let pad = self.vocab.pad_token().to_string();
                tokens.resize(self.pad_size, pad);
            } else {
                tokens.truncate(self.pad_size);
                seq_len = self.pad_size;
            }
        }

        let ids: Vec<TokenId> = tokens.iter().map(|t| self.vocab.id_or_unk(t)).collect();

        let features = match self.ngram_buckets {
            Some(buckets) => {
                let positions = 0..self.pad_size;
                RecordFeatures::Ngrams {
                    bigram: positions
                        .clone()
                        .map(|pos| bigram_hash(&ids, pos, buckets))
                        .collect(),
                    trigram: positions
                        .map(|pos| trigram_hash(&ids, pos, buckets))
                        .collect(),
                }
            }
            None => RecordFeatures::None,
        };

        (ids, seq_len, features)
    }

    /// Encode one trimmed, non-blank ``{TEXT}\t{LABEL}`` line.
    ///
    /// ## Errors
    /// [`crate::errors::ClsprepError::MalformedLine`] if the tab is missing
    /// or the label is not an integer.
    pub fn encode_line(
        &self,
        line: &str,
    ) -> crate::errors::Result<EncodedRecord> {
        let (text, label) = split_labeled(line)?;
        let (ids, seq_len, features) = self.encode_text(text);
        Ok(EncodedRecord {
            ids,
            label,
            seq_len,
            features,
        })
    }
}

/// Encode every record of a corpus file.
///
/// Blank lines are skipped; a malformed line fails the whole pass.
pub fn encode_dataset<P: AsRef<Path>>(
    path: P,
    encoder: &LineEncoder,
) -> crate::errors::Result<Vec<EncodedRecord>> {
    let path = path.as_ref();
    let mut records = Vec::new();
    for_each_record_line(path, |line| {
        records.push(encoder.encode_line(line)?);
        Ok(())
    })?;

    log::info!("encoded {}: {} records", path.display(), records.len());
    Ok(records)
}
