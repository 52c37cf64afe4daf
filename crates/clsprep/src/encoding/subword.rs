//! # Sub-word Line Encoder
//!
//! Encoding for transformer-style consumers: the classification marker is
//! prepended, ids come from an external [`SubwordTokenizer`], and an
//! attention mask marks the real positions.

use std::path::Path;

use crate::encoding::corpus::{for_each_record_line, split_labeled};
use crate::encoding::record::{EncodedRecord, RecordFeatures};
use crate::errors::{ClsprepError, Result};
use crate::types::TokenId;

/// External sub-word tokenizer seam.
pub trait SubwordTokenizer {
    /// Split text into sub-word tokens.
    fn tokenize(
        &self,
        text: &str,
    ) -> Result<Vec<String>>;

    /// Map tokens to ids, in order.
    fn convert_tokens_to_ids(
        &self,
        tokens: &[String],
    ) -> Result<Vec<TokenId>>;
}

/// Id used to pad sub-word sequences.
pub const SUBWORD_PAD_ID: TokenId = 0;

/// Encodes text into sub-word ids with an attention mask.
#[derive(Debug, Clone)]
pub struct SubwordEncoder<'a, T: SubwordTokenizer> {
    /// The tokenizer.
    pub tokenizer: &'a T,

    /// The classification marker token.
    pub cls_token: String,

    /// Target sequence length; 0 disables padding and truncation.
    pub pad_size: usize,
}

impl<'a, T: SubwordTokenizer> SubwordEncoder<'a, T> {
    /// Create a new encoder.
    pub fn new<S: Into<String>>(
        tokenizer: &'a T,
        cls_token: S,
        pad_size: usize,
    ) -> Self {
        Self {
            tokenizer,
            cls_token: cls_token.into(),
            pad_size,
        }
    }

    /// Encode the text portion of a record.
    ///
    /// `seq_len` counts the marker and is not clamped to `pad_size` when
    /// the sequence is truncated.
    ///
    /// ## Returns
    /// ``(ids, seq_len, mask)``.
    pub fn encode_text(
        &self,
        text: &str,
    ) -> Result<(Vec<TokenId>, usize, Vec<TokenId>)> {
        let mut tokens = Vec::with_capacity(self.pad_size.max(1));
        tokens.push(self.cls_token.clone());
        tokens.extend(self.tokenizer.tokenize(text)?);

        let seq_len = tokens.len();
        let mut ids = self.tokenizer.convert_tokens_to_ids(&tokens)?;
        if ids.len() != tokens.len() {
            return Err(ClsprepError::External(format!(
                "tokenizer returned {} ids for {} tokens",
                ids.len(),
                tokens.len()
            )));
        }

        let mask = if self.pad_size == 0 {
            vec![1; ids.len()]
        } else if ids.len() < self.pad_size {
            let mut mask = vec![1; ids.len()];
            mask.resize(self.pad_size, 0);
            ids.resize(self.pad_size, SUBWORD_PAD_ID);
            mask
        } else {
            ids.truncate(self.pad_size);
            vec![1; self.pad_size]
        };

        Ok((ids, seq_len, mask))
    }

    /// Encode one trimmed, non-blank ``{TEXT}\t{LABEL}`` line.
    ///
    /// ## Errors
    /// [`ClsprepError::MalformedLine`] for a malformed line;
    /// [`ClsprepError::External`] for tokenizer failures.
    pub fn encode_line(
        &self,
        line: &str,
    ) -> Result<EncodedRecord> {
        let (text, label) = split_labeled(line)?;
        let (ids, seq_len, mask) = self.encode_text(text)?;
        Ok(EncodedRecord {
            ids,
            label,
            seq_len,
            features: RecordFeatures::Mask(mask),
        })
    }
}

/// Encode every record of a corpus file on the sub-word path.
///
/// Blank lines are skipped; a malformed line fails the whole pass.
pub fn encode_dataset_subword<P, T>(
    path: P,
    encoder: &SubwordEncoder<T>,
) -> Result<Vec<EncodedRecord>>
where
    P: AsRef<Path>,
    T: SubwordTokenizer,
{
    let path = path.as_ref();
    let mut records = Vec::new();
    for_each_record_line(path, |line| {
        records.push(encoder.encode_line(line)?);
        Ok(())
    })?;

    log::info!("encoded {}: {} records", path.display(), records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CommonHashMap;

    /// Whitespace tokenizer over a fixed table; `[UNK]` is 1.
    struct TableTokenizer {
        ids: CommonHashMap<String, TokenId>,
    }

    impl TableTokenizer {
        fn new() -> Self {
            let ids = [("[PAD]", 0), ("[UNK]", 1), ("[CLS]", 101), ("hello", 7), ("world", 8)]
                .into_iter()
                .map(|(t, id)| (t.to_string(), id))
                .collect();
            Self { ids }
        }
    }

    impl SubwordTokenizer for TableTokenizer {
        fn tokenize(
            &self,
            text: &str,
        ) -> Result<Vec<String>> {
            Ok(text.split_whitespace().map(str::to_string).collect())
        }

        fn convert_tokens_to_ids(
            &self,
            tokens: &[String],
        ) -> Result<Vec<TokenId>> {
            Ok(tokens
                .iter()
                .map(|t| self.ids.get(t).copied().unwrap_or(1))
                .collect())
        }
    }

    #[test]
    fn test_pad_and_mask() {
        let tokenizer = TableTokenizer::new();
        let encoder = SubwordEncoder::new(&tokenizer, "[CLS]", 5);

        let record = encoder.encode_line("hello world\t3").unwrap();
        assert_eq!(record.ids, vec![101, 7, 8, 0, 0]);
        assert_eq!(record.label, 3);
        assert_eq!(record.seq_len, 3);
        assert_eq!(record.mask(), Some(&[1, 1, 1, 0, 0][..]));
    }

    #[test]
    fn test_truncation_keeps_unclamped_seq_len() {
        let tokenizer = TableTokenizer::new();
        let encoder = SubwordEncoder::new(&tokenizer, "[CLS]", 3);

        let record = encoder.encode_line("hello world hello mystery\t0").unwrap();
        assert_eq!(record.ids, vec![101, 7, 8]);
        assert_eq!(record.mask(), Some(&[1, 1, 1][..]));

        // Documented quirk: unlike the vocabulary encoder, seq_len is the
        // pre-truncation count (marker included), not pad_size.
        assert_eq!(record.seq_len, 5);
    }

    #[test]
    fn test_exact_fit() {
        let tokenizer = TableTokenizer::new();
        let encoder = SubwordEncoder::new(&tokenizer, "[CLS]", 3);

        let (ids, seq_len, mask) = encoder.encode_text("hello world").unwrap();
        assert_eq!(ids, vec![101, 7, 8]);
        assert_eq!(seq_len, 3);
        assert_eq!(mask, vec![1, 1, 1]);
    }

    #[test]
    fn test_no_padding() {
        let tokenizer = TableTokenizer::new();
        let encoder = SubwordEncoder::new(&tokenizer, "[CLS]", 0);

        let (ids, seq_len, mask) = encoder.encode_text("world").unwrap();
        assert_eq!(ids, vec![101, 8]);
        assert_eq!(seq_len, 2);
        assert_eq!(mask, vec![1, 1]);
    }

    #[test]
    fn test_malformed_line() {
        let tokenizer = TableTokenizer::new();
        let encoder = SubwordEncoder::new(&tokenizer, "[CLS]", 4);

        assert!(matches!(
            encoder.encode_line("hello"),
            Err(ClsprepError::MalformedLine(_))
        ));
    }

    #[test]
    fn test_encode_dataset_subword() -> anyhow::Result<()> {
        let tmpdir = tempdir::TempDir::new("clsprep-subword")?;
        let path = tmpdir.path().join("train.txt");
        std::fs::write(&path, "hello\t0\n\nworld hello\t1\n")?;

        let tokenizer = TableTokenizer::new();
        let encoder = SubwordEncoder::new(&tokenizer, "[CLS]", 4);

        let records = encode_dataset_subword(&path, &encoder)?;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].ids, vec![101, 7, 0, 0]);
        assert_eq!(records[1].ids, vec![101, 8, 7, 0]);
        assert_eq!(records[1].mask(), Some(&[1, 1, 1, 0][..]));

        std::fs::write(&path, "hello\t0\nworld\tx\n")?;
        let err = encode_dataset_subword(&path, &encoder).unwrap_err();
        assert!(matches!(err, ClsprepError::Format { line: 2, .. }));

        Ok(())
    }
}
