//! Base word segmentation consumed by the merge pass.
//!
//! The merge pass treats segmentation as a black box: any ordered list of
//! substrings that covers the input works. Two implementations ship with
//! the crate, and any `fn(&str) -> Vec<&str>` can be used as well.

use jieba_rs::Jieba;
use unicode_segmentation::UnicodeSegmentation;

pub trait Tokenizer {
    /// Splits `text` into raw tokens in original order.
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

impl<F> Tokenizer for F
where
    F: for<'a> Fn(&'a str) -> Vec<&'a str>,
{
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self(text)
    }
}

/// Dictionary + HMM segmentation for Chinese text.
pub struct JiebaTokenizer {
    jieba: Jieba,
    hmm: bool,
}

impl JiebaTokenizer {
    /// Loads the bundled dictionary. This takes a noticeable moment, so
    /// build one tokenizer and reuse it.
    pub fn new() -> Self {
        log::debug!("loading jieba dictionary");
        Self {
            jieba: Jieba::new(),
            hmm: true,
        }
    }

    /// Disables the HMM pass for out-of-vocabulary words.
    pub fn without_hmm(mut self) -> Self {
        self.hmm = false;
        self
    }
}

impl Default for JiebaTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for JiebaTokenizer {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.jieba.cut(text, self.hmm)
    }
}

/// UAX #29 word boundaries. Needs no dictionary; CJK text comes out one
/// character per token.
#[derive(Debug, Default, Clone, Copy)]
pub struct WordBoundTokenizer;

impl Tokenizer for WordBoundTokenizer {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split_word_bounds().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_spaces(text: &str) -> Vec<&str> {
        text.split(' ').collect()
    }

    #[test]
    fn test_fn_items_are_tokenizers() {
        assert_eq!(on_spaces.tokenize("a b c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_word_bound_tokenizer_keeps_whitespace_tokens() {
        let tokens = WordBoundTokenizer.tokenize("hello world");
        assert_eq!(tokens, vec!["hello", " ", "world"]);
    }

    #[test]
    fn test_word_bound_tokenizer_splits_cjk_per_character() {
        let tokens = WordBoundTokenizer.tokenize("美丽的花");
        assert_eq!(tokens, vec!["美", "丽", "的", "花"]);
    }

    #[test]
    fn test_jieba_tokenizer_covers_input() {
        let tokenizer = JiebaTokenizer::new();
        let text = "我们中出了一个叛徒";
        let tokens = tokenizer.tokenize(text);
        assert!(!tokens.is_empty());
        assert_eq!(tokens.concat(), text);
    }
}
