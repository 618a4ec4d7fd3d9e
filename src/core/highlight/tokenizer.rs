//! Capturing split over a single alternation pattern.

use regex::Regex;

use super::{KEYWORDS, Token};

static TOKEN_PATTERN: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();

/// Branches are tried left to right at each position, so their order is the
/// match priority: strings, comments, punctuation, keywords.
///
/// Line comments and escapes stop at any line terminator (`\r`, `\n`, U+2028,
/// U+2029). Keyword boundaries are ASCII-only, so a keyword glued to a
/// non-ASCII letter still matches.
fn token_pattern() -> &'static Regex {
    TOKEN_PATTERN.get_or_init(|| {
        let pattern = format!(
            r#""(?:[^"\\]|\\{eol})*"|'(?:[^'\\]|\\{eol})*'|`[^`]*`|//{eol}*|#{eol}*|[(){{}}\[\].,:;]|(?-u:\b)(?:{kw})(?-u:\b)"#,
            eol = r"[^\r\n\x{2028}\x{2029}]",
            kw = KEYWORDS.join("|")
        );
        Regex::new(&pattern).expect("token pattern is a valid regex")
    })
}

/// Split `source` into classified tokens.
///
/// Matched spans and the unmatched runs between them each become one token,
/// so concatenating the token texts reproduces `source` exactly. Never fails:
/// anything the pattern does not recognize (including an unterminated string)
/// is carried as gap text and classified like any other token.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut last = 0;
    for m in token_pattern().find_iter(source) {
        if m.start() > last {
            tokens.push(Token::classify(&source[last..m.start()]));
        }
        // No branch can match the empty string.
        tokens.push(Token::classify(m.as_str()));
        last = m.end();
    }
    if last < source.len() {
        tokens.push(Token::classify(&source[last..]));
    }
    tokens
}
