//! # Vocabulary Builder

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::config::SpecialTokens;
use crate::encoding::corpus::text_field;
use crate::errors::Result;
use crate::tokenize::TextSplitter;
use crate::types::CommonHashMap;
use crate::vocab::Vocabulary;

/// Token frequency counter.
///
/// Remembers the order in which tokens were first seen, which breaks
/// frequency ties when ranking.
#[derive(Debug, Default, Clone)]
pub struct TokenCounter {
    index: CommonHashMap<String, usize>,
    counts: Vec<(String, usize)>,
}

impl TokenCounter {
    /// Create a new empty counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `token`.
    pub fn add(
        &mut self,
        token: String,
    ) {
        match self.index.get(&token) {
            Some(&idx) => self.counts[idx].1 += 1,
            None => {
                self.index.insert(token.clone(), self.counts.len());
                self.counts.push((token, 1));
            }
        }
    }

    /// Count every token in `tokens`.
    pub fn update<I>(
        &mut self,
        tokens: I,
    ) where
        I: IntoIterator<Item = String>,
    {
        for token in tokens {
            self.add(token);
        }
    }

    /// The count for `token`.
    pub fn count(
        &self,
        token: &str,
    ) -> usize {
        self.index.get(token).map_or(0, |&idx| self.counts[idx].1)
    }

    /// The number of distinct tokens seen.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Has nothing been counted?
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Rank tokens for vocabulary assignment.
    ///
    /// Keeps tokens with ``count >= min_freq``, sorted by descending count
    /// (ties in first-seen order), truncated to `max_size`.
    pub fn ranked(
        self,
        max_size: usize,
        min_freq: usize,
    ) -> Vec<String> {
        let mut kept: Vec<(String, usize)> = self
            .counts
            .into_iter()
            .filter(|(_, count)| *count >= min_freq)
            .collect();

        // Stable: equal counts stay in first-seen order.
        kept.sort_by(|a, b| b.1.cmp(&a.1));
        kept.truncate(max_size);

        kept.into_iter().map(|(token, _)| token).collect()
    }
}

/// Build a [`Vocabulary`] from a training corpus file.
///
/// ## Arguments
/// * `path` - the corpus; ``{TEXT}\t{LABEL}`` lines (the label is ignored).
/// * `splitter` - the token splitter.
/// * `max_size` - the cap on non-reserved tokens.
/// * `min_freq` - the minimum count for a token to be kept.
/// * `specials` - the reserved markers appended after the ranked tokens;
///   marker strings in the corpus are not counted.
pub fn build_vocab<P: AsRef<Path>>(
    path: P,
    splitter: TextSplitter,
    max_size: usize,
    min_freq: usize,
    specials: &SpecialTokens,
) -> Result<Vocabulary> {
    let reader = BufReader::new(File::open(path.as_ref())?);
    let vocab = build_vocab_from_reader(reader, splitter, max_size, min_freq, specials)?;

    log::debug!(
        "built vocab from {}: {} tokens",
        path.as_ref().display(),
        vocab.len()
    );
    Ok(vocab)
}

/// Build a [`Vocabulary`] from a corpus line reader.
///
/// See [`build_vocab`].
pub fn build_vocab_from_reader<R: BufRead>(
    reader: R,
    splitter: TextSplitter,
    max_size: usize,
    min_freq: usize,
    specials: &SpecialTokens,
) -> Result<Vocabulary> {
    let mut counter = TokenCounter::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        counter.update(
            splitter
                .split(text_field(line))
                .into_iter()
                .filter(|t| t != &specials.unk && t != &specials.pad),
        );
    }

    Vocabulary::from_ranked_tokens(counter.ranked(max_size, min_freq), specials)
}
