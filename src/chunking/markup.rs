//! Lightweight markup removal applied before tokenization.
//!
//! This is lossy on purpose: headings, link targets and emphasis markers
//! are presentation syntax, and flashing them at the reader is noise.

use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;

lazy_static! {
    // `.` does not cross newlines, so a heading on the last line without a
    // trailing newline survives.
    static ref HEADING: Regex = Regex::new(r"#.*?\n").expect("heading pattern is valid");
    static ref LINK_OR_REFERENCE: Regex =
        Regex::new(r"\[.*?\]|\(.*?\)").expect("link pattern is valid");
    static ref EMPHASIS: Regex = Regex::new(r"[*_~`]").expect("emphasis pattern is valid");
}

/// Strips heading runs, bracketed/parenthetical spans and emphasis markers.
pub fn strip_markup(text: &str) -> String {
    let text = HEADING.replace_all(text, "");
    let text = replace(text, &LINK_OR_REFERENCE);
    replace(text, &EMPHASIS).into_owned()
}

fn replace<'a>(text: Cow<'a, str>, pattern: &Regex) -> Cow<'a, str> {
    match text {
        Cow::Borrowed(s) => pattern.replace_all(s, ""),
        Cow::Owned(s) => Cow::Owned(pattern.replace_all(&s, "").into_owned()),
    }
}
