//! # Pipeline Configuration

use burn::config::Config;

use crate::encoding::ngram::MAX_NGRAM_BUCKETS;
use crate::errors::ClsprepError;
use crate::tokenize::TextSplitter;

/// Default vocabulary size cap (reserved tokens excluded).
pub const DEFAULT_MAX_VOCAB_SIZE: usize = 10_000;

/// Default hashed n-gram bucket count.
pub const DEFAULT_NGRAM_VOCAB: usize = 250_499;

/// Model name which selects [`ModelFamily::HashedNgram`].
pub const HASHED_NGRAM_MODEL_NAME: &str = "FastText";

/// Lowercase model-name marker which selects [`ModelFamily::Subword`].
pub const SUBWORD_MODEL_MARKER: &str = "bert";

/// Reserved marker tokens.
#[derive(Config, Debug, PartialEq)]
pub struct SpecialTokens {
    /// Unknown-token marker.
    #[config(default = "\"<UNK>\".to_string()")]
    pub unk: String,

    /// Padding marker.
    #[config(default = "\"<PAD>\".to_string()")]
    pub pad: String,

    /// Classification marker, prepended on the sub-word path.
    #[config(default = "\"[CLS]\".to_string()")]
    pub cls: String,
}

impl Default for SpecialTokens {
    fn default() -> Self {
        Self::new()
    }
}

/// The batch layout a model consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFamily {
    /// `(ids, seq_len)`.
    Generic,

    /// `(ids, seq_len, bigram, trigram)`.
    HashedNgram,

    /// `(ids, seq_len, mask)`.
    Subword,
}

impl ModelFamily {
    /// Resolve a model name.
    ///
    /// `"FastText"` is [`ModelFamily::HashedNgram`]; any name containing
    /// `"bert"` (case-insensitive) is [`ModelFamily::Subword`].
    pub fn from_model_name(name: &str) -> Self {
        if name == HASHED_NGRAM_MODEL_NAME {
            Self::HashedNgram
        } else if name.to_lowercase().contains(SUBWORD_MODEL_MARKER) {
            Self::Subword
        } else {
            Self::Generic
        }
    }

    /// Does this family consume hashed bigram/trigram features?
    pub fn needs_ngrams(&self) -> bool {
        matches!(self, Self::HashedNgram)
    }
}

/// Config for the dataset pipeline.
#[derive(Config, Debug)]
pub struct PipelineConfig {
    /// Train split corpus path.
    pub train_path: String,

    /// Dev split corpus path.
    pub dev_path: String,

    /// Test split corpus path.
    pub test_path: String,

    /// Vocabulary cache path.
    pub vocab_path: String,

    /// Model name; see [`ModelFamily::from_model_name`].
    #[config(default = "\"TextCNN\".to_string()")]
    pub model_name: String,

    /// Fixed sequence length; 0 disables padding and truncation.
    #[config(default = "32")]
    pub pad_size: usize,

    /// Records per batch.
    #[config(default = "128")]
    pub batch_size: usize,

    /// Compute device identifier.
    #[config(default = "\"cpu\".to_string()")]
    pub device: String,

    /// Hashed n-gram bucket count.
    #[config(default = "DEFAULT_NGRAM_VOCAB")]
    pub n_gram_vocab: usize,

    /// Vocabulary size cap (reserved tokens excluded).
    #[config(default = "DEFAULT_MAX_VOCAB_SIZE")]
    pub max_vocab_size: usize,

    /// Minimum token frequency kept in the vocabulary.
    #[config(default = "1")]
    pub min_freq: usize,

    /// Word-level (`true`) or char-level (`false`) splitting.
    #[config(default = "false")]
    pub use_word: bool,

    /// Reserved marker tokens.
    #[config(default = "Default::default()")]
    pub special_tokens: SpecialTokens,
}

impl PipelineConfig {
    /// The resolved model family.
    pub fn model_family(&self) -> ModelFamily {
        ModelFamily::from_model_name(&self.model_name)
    }

    /// The configured text splitter.
    pub fn splitter(&self) -> TextSplitter {
        TextSplitter::from_use_word(self.use_word)
    }

    /// The n-gram bucket count, if the model family needs n-grams.
    pub fn ngram_buckets(&self) -> Option<usize> {
        self.model_family()
            .needs_ngrams()
            .then_some(self.n_gram_vocab)
    }

    /// Check the config for values the pipeline can not run with.
    pub fn validate(&self) -> crate::errors::Result<()> {
        if self.batch_size == 0 {
            return Err(ClsprepError::Config("batch_size must be > 0".to_string()));
        }
        if self.model_family().needs_ngrams() && self.n_gram_vocab == 0 {
            return Err(ClsprepError::Config(format!(
                "n_gram_vocab must be > 0 for {}",
                self.model_name
            )));
        }
        if self.model_family().needs_ngrams() && self.n_gram_vocab as u64 > MAX_NGRAM_BUCKETS {
            return Err(ClsprepError::Config(format!(
                "n_gram_vocab must be <= {MAX_NGRAM_BUCKETS}; got {}",
                self.n_gram_vocab
            )));
        }
        let tokens = &self.special_tokens;
        if tokens.unk == tokens.pad {
            return Err(ClsprepError::Config(format!(
                "unk and pad markers must differ: {:?}",
                tokens.unk
            )));
        }
        Ok(())
    }
}
