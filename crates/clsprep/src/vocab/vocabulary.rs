//! # Token Vocabulary ``{ String -> TokenId }``

use crate::config::SpecialTokens;
use crate::errors::{ClsprepError, Result};
use crate::types::{CommonHashMap, TokenId};

/// Dense token vocabulary.
///
/// Ids are contiguous in ``0..len()``; the unknown marker is ``len() - 2``
/// and the padding marker is ``len() - 1``.
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary {
    token_to_id: CommonHashMap<String, TokenId>,
    id_to_token: Vec<String>,
    unk_id: TokenId,
    pad_id: TokenId,
}

impl Vocabulary {
    /// Build a vocabulary from tokens in rank order.
    ///
    /// Token `i` gets id `i`; the `unk` and `pad` markers are appended.
    /// Marker strings appearing in `ranked` are skipped, so the markers
    /// always hold the two highest ids.
    ///
    /// ## Arguments
    /// * `ranked` - distinct tokens, most frequent first.
    /// * `specials` - the reserved markers.
    pub fn from_ranked_tokens<I>(
        ranked: I,
        specials: &SpecialTokens,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut id_to_token: Vec<String> = ranked
            .into_iter()
            .filter(|t| t != &specials.unk && t != &specials.pad)
            .collect();
        id_to_token.push(specials.unk.clone());
        id_to_token.push(specials.pad.clone());

        Self::from_id_order(id_to_token, specials)
    }

    /// Build a vocabulary from a ``{ token -> id }`` map.
    ///
    /// ## Errors
    /// [`ClsprepError::Parse`] if the ids are not a dense ``0..n`` range,
    /// or the markers are not the two highest ids.
    pub fn from_token_map(
        token_to_id: CommonHashMap<String, TokenId>,
        specials: &SpecialTokens,
    ) -> Result<Self> {
        let n = token_to_id.len();
        let mut slots: Vec<Option<String>> = vec![None; n];
        for (token, &id) in token_to_id.iter() {
            let slot = slots.get_mut(id as usize).ok_or_else(|| {
                ClsprepError::Parse(format!("token id {id} out of range for {n} tokens"))
            })?;
            if slot.is_some() {
                return Err(ClsprepError::Parse(format!("duplicate token id {id}")));
            }
            *slot = Some(token.clone());
        }

        // Every slot is filled: n distinct ids in 0..n.
        let id_to_token: Vec<String> = slots.into_iter().flatten().collect();

        Self::from_id_order(id_to_token, specials)
    }

    fn from_id_order(
        id_to_token: Vec<String>,
        specials: &SpecialTokens,
    ) -> Result<Self> {
        let n = id_to_token.len();
        if n < 2 {
            return Err(ClsprepError::Parse(format!(
                "vocabulary needs unk and pad markers; found {n} tokens"
            )));
        }
        if id_to_token[n - 2] != specials.unk || id_to_token[n - 1] != specials.pad {
            return Err(ClsprepError::Parse(format!(
                "expected markers {:?} and {:?} at ids {} and {}",
                specials.unk,
                specials.pad,
                n - 2,
                n - 1
            )));
        }

        let token_to_id: CommonHashMap<String, TokenId> = id_to_token
            .iter()
            .enumerate()
            .map(|(id, token)| (token.clone(), id as TokenId))
            .collect();
        if token_to_id.len() != n {
            return Err(ClsprepError::Parse("duplicate tokens".to_string()));
        }

        Ok(Self {
            token_to_id,
            id_to_token,
            unk_id: (n - 2) as TokenId,
            pad_id: (n - 1) as TokenId,
        })
    }

    /// The number of tokens, markers included.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.id_to_token.len()
    }

    /// The unknown-token id.
    pub fn unk_id(&self) -> TokenId {
        self.unk_id
    }

    /// The padding-token id.
    pub fn pad_id(&self) -> TokenId {
        self.pad_id
    }

    /// The padding marker string.
    pub fn pad_token(&self) -> &str {
        &self.id_to_token[self.pad_id as usize]
    }

    /// Return the id for the token, if any.
    pub fn get(
        &self,
        token: &str,
    ) -> Option<TokenId> {
        self.token_to_id.get(token).copied()
    }

    /// Return the id for the token, or the unknown-token id.
    pub fn id_or_unk(
        &self,
        token: &str,
    ) -> TokenId {
        self.get(token).unwrap_or(self.unk_id)
    }

    /// Return the token for an id, if any.
    pub fn token(
        &self,
        id: TokenId,
    ) -> Option<&str> {
        self.id_to_token.get(id as usize).map(String::as_str)
    }

    /// Iterate over ``(token, id)`` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, TokenId)> + '_ {
        self.id_to_token
            .iter()
            .enumerate()
            .map(|(id, token)| (token.as_str(), id as TokenId))
    }

    /// The ``{ token -> id }`` map.
    pub fn token_map(&self) -> &CommonHashMap<String, TokenId> {
        &self.token_to_id
    }
}
