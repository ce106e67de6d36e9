//! Word lists consulted by the merge pass.
//!
//! A [`Lexicon`] is built once and shared read-only. [`default_lexicon`]
//! returns the process-wide instance used by [`Chunker::new`](super::Chunker::new).

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

/// Function words that read better attached to the preceding content.
const PARTICLES: &[&str] = &[
    // 助词
    "的", "地", "得", "了", "着", "过", "吗", "呢", "啊", "吧", "么",
    // classifiers
    "个", "只", "条", "张", "位", "块", "支", "本", "件", "双", "群", "对", "番",
    // prepositions and conjunctions
    "和", "与", "及", "跟", "把", "被", "让", "给", "对", "向", "从", "由",
    // adverbs and modals
    "也", "都", "就", "才", "会", "要", "可", "能", "将", "在", "很", "更", "最",
    // demonstratives
    "这", "那", "些", "此", "该", "每", "某", "任",
    // other function words
    "之", "所", "以", "为", "而", "却", "且", "并", "或", "但",
    // numerals
    "一", "两", "几", "多", "些",
    // locatives
    "里", "上", "下", "中", "内", "外", "前", "后", "左", "右",
    // time units
    "年", "月", "日", "时", "分", "秒",
];

const PUNCTUATION: &[char] = &[
    '，', '。', '！', '？', ',', '.', '!', '?', '、', '：', ':', '；', ';',
];

const BRACKETS: &[char] = &[
    '（', '）', '(', ')', '[', ']', '{', '}', '【', '】', '「', '」', '『', '』',
];

lazy_static! {
    static ref DEFAULT_LEXICON: Lexicon = Lexicon::default();
    static ref NUMERAL_RUN: Regex =
        Regex::new(r"^[一二三四五六七八九十百千万亿\d]+$").expect("numeral pattern is valid");
}

/// Shared handle to the built-in lexicon.
pub fn default_lexicon() -> &'static Lexicon {
    &DEFAULT_LEXICON
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    particles: HashSet<String>,
    punctuation: HashSet<char>,
    brackets: HashSet<char>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new(
            PARTICLES.iter().copied(),
            PUNCTUATION.iter().copied(),
            BRACKETS.iter().copied(),
        )
    }
}

impl Lexicon {
    pub fn new<'a>(
        particles: impl IntoIterator<Item = &'a str>,
        punctuation: impl IntoIterator<Item = char>,
        brackets: impl IntoIterator<Item = char>,
    ) -> Self {
        Self {
            particles: particles.into_iter().map(str::to_string).collect(),
            punctuation: punctuation.into_iter().collect(),
            brackets: brackets.into_iter().collect(),
        }
    }

    pub fn is_particle(&self, token: &str) -> bool {
        self.particles.contains(token)
    }

    /// True when `token` is exactly one punctuation character.
    pub fn is_punctuation(&self, token: &str) -> bool {
        single_char(token).is_some_and(|c| self.punctuation.contains(&c))
    }

    /// True when `token` is exactly one bracket character.
    pub fn is_bracket(&self, token: &str) -> bool {
        single_char(token).is_some_and(|c| self.brackets.contains(&c))
    }
}

/// CJK numerals or decimal digits, one or more.
pub fn is_numeral_run(token: &str) -> bool {
    NUMERAL_RUN.is_match(token)
}

fn single_char(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
