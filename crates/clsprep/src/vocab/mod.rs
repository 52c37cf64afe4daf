//! # Vocabulary
//!
//! This module provides the token vocabulary, its builder, and io.
//!
//! A [`Vocabulary`] is a dense ``{ String -> TokenId }`` map; the unknown
//! and padding markers always hold the two highest ids.
pub mod builder;
pub mod io;
pub mod vocabulary;

#[doc(inline)]
pub use builder::{TokenCounter, build_vocab, build_vocab_from_reader};
#[doc(inline)]
pub use io::{load_vocab_path, read_vocab, save_vocab_path, write_vocab};
#[doc(inline)]
pub use vocabulary::Vocabulary;
