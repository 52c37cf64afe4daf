//! # Encoded Records

use crate::config::ModelFamily;
use crate::types::{Label, TokenId};

/// Per-record model features beyond the id sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordFeatures {
    /// No extra features.
    None,

    /// Hashed n-gram ids, one per position.
    Ngrams {
        /// Bigram bucket ids.
        bigram: Vec<TokenId>,

        /// Trigram bucket ids.
        trigram: Vec<TokenId>,
    },

    /// Attention mask; 1 for real positions, 0 for padding.
    Mask(Vec<TokenId>),
}

impl RecordFeatures {
    /// The model family these features feed.
    pub fn family(&self) -> ModelFamily {
        match self {
            Self::None => ModelFamily::Generic,
            Self::Ngrams { .. } => ModelFamily::HashedNgram,
            Self::Mask(_) => ModelFamily::Subword,
        }
    }
}

/// One encoded corpus line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedRecord {
    /// Token ids; `pad_size` long when padding is enabled.
    pub ids: Vec<TokenId>,

    /// The class label.
    pub label: Label,

    /// The token count before padding.
    pub seq_len: usize,

    /// Family-specific features.
    pub features: RecordFeatures,
}

impl EncodedRecord {
    /// The attention mask, if any.
    pub fn mask(&self) -> Option<&[TokenId]> {
        match &self.features {
            RecordFeatures::Mask(mask) => Some(mask),
            _ => None,
        }
    }

    /// The ``(bigram, trigram)`` features, if any.
    pub fn ngrams(&self) -> Option<(&[TokenId], &[TokenId])> {
        match &self.features {
            RecordFeatures::Ngrams { bigram, trigram } => Some((bigram, trigram)),
            _ => None,
        }
    }
}
