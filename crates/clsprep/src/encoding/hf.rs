//! # HuggingFace `tokenizers` Adapter

use std::path::Path;

use tokenizers::{Tokenizer, models::ModelWrapper};

use crate::encoding::subword::SubwordTokenizer;
use crate::errors::{ClsprepError, Result};
use crate::types::TokenId;

/// Load a `tokenizer.json` file.
pub fn load_hf_tokenizer<P: AsRef<Path>>(path: P) -> Result<Tokenizer> {
    Tokenizer::from_file(path.as_ref()).map_err(|e| {
        ClsprepError::External(format!(
            "cannot load tokenizer from {}: {e}",
            path.as_ref().display()
        ))
    })
}

/// The id of the model's unknown token, if it has one in the vocab.
///
/// Unigram models keep their unknown id private, so they have none here.
pub fn unk_token_id(tokenizer: &Tokenizer) -> Option<TokenId> {
    let unk = match tokenizer.get_model() {
        ModelWrapper::BPE(model) => model.unk_token.as_deref(),
        ModelWrapper::WordPiece(model) => Some(model.unk_token.as_str()),
        ModelWrapper::WordLevel(model) => Some(model.unk_token.as_str()),
        ModelWrapper::Unigram(_) => None,
    }?;
    tokenizer.token_to_id(unk)
}

/// Tokens missing from the vocab map to the model's unknown token.
impl SubwordTokenizer for Tokenizer {
    fn tokenize(
        &self,
        text: &str,
    ) -> Result<Vec<String>> {
        let encoding = self
            .encode(text, false)
            .map_err(|e| ClsprepError::External(e.to_string()))?;
        Ok(encoding.get_tokens().to_vec())
    }

    fn convert_tokens_to_ids(
        &self,
        tokens: &[String],
    ) -> Result<Vec<TokenId>> {
        let unk_id = unk_token_id(self);
        tokens
            .iter()
            .map(|token| {
                self.token_to_id(token).or(unk_id).ok_or_else(|| {
                    ClsprepError::External(format!(
                        "token {token:?} is not in the tokenizer vocab, and there is no unknown token"
                    ))
                })
            })
            .collect()
    }
}
