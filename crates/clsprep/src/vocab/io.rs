//! # Vocabulary IO
//!
//! Lines are:
//! ```terminaloutput
//! {BASE64 TOKEN} {ID}
//! ```
//!
//! Tokens are base64 encoded because char-level vocabularies contain
//! whitespace tokens.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use base64::{Engine, prelude::BASE64_STANDARD};

use crate::config::SpecialTokens;
use crate::errors::{ClsprepError, Result};
use crate::types::{CommonHashMap, TokenId};
use crate::vocab::Vocabulary;

/// Load a [`Vocabulary`] from a base64 vocab file.
///
/// # Arguments
/// * `path` - the path to the vocabulary file.
/// * `specials` - the reserved markers the vocabulary was built with.
pub fn load_vocab_path<P: AsRef<Path>>(
    path: P,
    specials: &SpecialTokens,
) -> Result<Vocabulary> {
    let reader = BufReader::new(File::open(path)?);
    read_vocab(reader, specials)
}

/// Read a [`Vocabulary`] from a base64 vocab line reader.
///
/// # Arguments
/// * `reader` - the line reader.
/// * `specials` - the reserved markers the vocabulary was built with.
pub fn read_vocab<R: BufRead>(
    reader: R,
    specials: &SpecialTokens,
) -> Result<Vocabulary> {
    let mut token_map: CommonHashMap<String, TokenId> = CommonHashMap::new();

    for line in reader.lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }

        let (encoded, id) = line
            .split_once(' ')
            .ok_or_else(|| ClsprepError::Parse(format!("malformed vocab line {line:?}")))?;

        let token = BASE64_STANDARD
            .decode(encoded)
            .map_err(|e| ClsprepError::Parse(e.to_string()))?;
        let token = String::from_utf8(token).map_err(|e| ClsprepError::Parse(e.to_string()))?;

        let id: TokenId = id
            .parse()
            .map_err(|e: core::num::ParseIntError| ClsprepError::Parse(e.to_string()))?;

        if token_map.insert(token, id).is_some() {
            return Err(ClsprepError::Parse(format!("duplicate vocab entry at id {id}")));
        }
    }

    Vocabulary::from_token_map(token_map, specials)
}

/// Save a [`Vocabulary`] to a base64 vocab file.
///
/// # Arguments
/// * `vocab` - the vocabulary to save.
/// * `path` - the path to save the vocabulary to.
pub fn save_vocab_path<P: AsRef<Path>>(
    vocab: &Vocabulary,
    path: P,
) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_vocab(vocab, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a [`Vocabulary`] to a [`Write`] writer, in id order.
///
/// # Arguments
/// * `vocab` - the vocabulary to save.
/// * `writer` - the writer to target.
pub fn write_vocab<W: Write>(
    vocab: &Vocabulary,
    writer: &mut W,
) -> Result<()> {
    for (token, id) in vocab.iter() {
        writeln!(writer, "{} {}", BASE64_STANDARD.encode(token), id)?;
    }
    Ok(())
}
