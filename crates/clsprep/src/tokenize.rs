//! # Text Splitting
//!
//! The vocabulary and the generic line encoder share one splitting rule,
//! selected by the ``use_word`` config flag.

/// Word-level or char-level text splitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSplitter {
    /// Split on literal `' '`; empty tokens are kept.
    Word,

    /// One token per Unicode code point, whitespace included.
    Char,
}

impl TextSplitter {
    /// Select the splitter for the ``use_word`` flag.
    pub fn from_use_word(use_word: bool) -> Self {
        if use_word { Self::Word } else { Self::Char }
    }

    /// Split `text` into ordered tokens.
    pub fn split(
        &self,
        text: &str,
    ) -> Vec<String> {
        match self {
            Self::Word => text.split(' ').map(str::to_string).collect(),
            Self::Char => text.chars().map(String::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_use_word() {
        assert_eq!(TextSplitter::from_use_word(true), TextSplitter::Word);
        assert_eq!(TextSplitter::from_use_word(false), TextSplitter::Char);
    }

    #[test]
    fn test_word_split_keeps_empty_tokens() {
        assert_eq!(
            TextSplitter::Word.split("the  cat"),
            vec!["the".to_string(), "".to_string(), "cat".to_string()]
        );
        assert_eq!(TextSplitter::Word.split(""), vec!["".to_string()]);
    }

    #[test]
    fn test_char_split() {
        assert_eq!(
            TextSplitter::Char.split("a b"),
            vec!["a".to_string(), " ".to_string(), "b".to_string()]
        );
        assert_eq!(
            TextSplitter::Char.split("caf\u{00e9}\u{4f60}"),
            vec!["c", "a", "f", "\u{00e9}", "\u{4f60}"]
        );
    }
}
