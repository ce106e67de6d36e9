//! Text chunking: markup stripping, base segmentation and the merge pass
//! that turns fine-grained tokens into phrase-sized display units.

pub mod lexicon;
pub mod markup;
pub mod merge;
pub mod tokenizer;
pub mod unit;

pub use lexicon::{default_lexicon, Lexicon};
pub use markup::strip_markup;
pub use merge::merge_tokens;
pub use tokenizer::{JiebaTokenizer, Tokenizer, WordBoundTokenizer};
pub use unit::UnitSequence;

/// Splits text into display units.
///
/// Holds no mutable state: the same text always yields the same units.
pub struct Chunker<T> {
    tokenizer: T,
    lexicon: &'static Lexicon,
}

impl<T: Tokenizer> Chunker<T> {
    /// Chunker over the built-in lexicon.
    pub fn new(tokenizer: T) -> Self {
        Self::with_lexicon(tokenizer, default_lexicon())
    }

    pub fn with_lexicon(tokenizer: T, lexicon: &'static Lexicon) -> Self {
        Self { tokenizer, lexicon }
    }

    pub fn chunk(&self, text: &str) -> UnitSequence {
        let normalized = strip_markup(text);
        let tokens = self.tokenizer.tokenize(&normalized);
        let units = merge_tokens(&tokens, self.lexicon);
        log::debug!(
            "chunked {} chars into {} tokens, {} units",
            normalized.chars().count(),
            tokens.len(),
            units.len()
        );
        UnitSequence::new(units)
    }
}

impl Default for Chunker<JiebaTokenizer> {
    fn default() -> Self {
        Self::new(JiebaTokenizer::new())
    }
}
