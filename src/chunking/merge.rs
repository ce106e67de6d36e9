use super::lexicon::{is_numeral_run, Lexicon};

/// Regroups raw tokens into display units.
///
/// Blank tokens are dropped up front, so look-ahead and "last token" checks
/// only ever see content. Each remaining token is resolved by the first
/// matching rule:
///
/// 1. brackets join the open unit, or open one so they attach forward;
/// 2. punctuation joins the open unit;
/// 3. particles join the open unit (they never start a forward merge);
/// 4. otherwise look at the next token and either keep growing the open
///    unit or close it and start a new one.
pub fn merge_tokens<S: AsRef<str>>(tokens: &[S], lexicon: &Lexicon) -> Vec<String> {
    let tokens: Vec<&str> = tokens
        .iter()
        .map(AsRef::as_ref)
        .filter(|t| !t.trim().is_empty())
        .collect();

    let mut units = Vec::new();
    let mut buffer = String::new();

    for (i, &token) in tokens.iter().enumerate() {
        let next = tokens.get(i + 1).copied();

        if lexicon.is_bracket(token) {
            if !buffer.is_empty() || next.is_some() {
                buffer.push_str(token);
            } else {
                units.push(token.to_string());
            }
            continue;
        }

        if lexicon.is_punctuation(token) {
            if buffer.is_empty() {
                units.push(token.to_string());
            } else {
                buffer.push_str(token);
            }
            continue;
        }

        if lexicon.is_particle(token) && !buffer.is_empty() {
            buffer.push_str(token);
            continue;
        }

        if !joins_next(token, next, lexicon) && !buffer.is_empty() {
            units.push(std::mem::take(&mut buffer));
        }
        buffer.push_str(token);
    }

    if !buffer.is_empty() {
        units.push(buffer);
    }

    units
}

fn joins_next(current: &str, next: Option<&str>, lexicon: &Lexicon) -> bool {
    let Some(next) = next else {
        return false;
    };

    if is_numeral_run(current) {
        // 3 + 个, 三 + 十
        return lexicon.is_particle(next) || is_numeral_run(next);
    }

    // The single-character adjacency rule over-merges unrelated characters
    // that happen to be segmented alone; kept for output stability.
    let single = current.chars().count() == 1;
    if single && lexicon.is_particle(next) {
        return true;
    }
    if single && next.chars().count() == 1 {
        return true;
    }

    lexicon.is_bracket(next)
}
