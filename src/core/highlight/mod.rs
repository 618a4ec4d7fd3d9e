//! Lexical classification of example source code for syntax-highlighted display.
//!
//! The tokenizer is deliberately language-agnostic: it only knows the handful of
//! constructs shared by the Python, JavaScript and shell snippets we display
//! (quoted strings, `//` and `#` comments, punctuation, a small keyword set).

mod tokenizer;

pub use tokenizer::tokenize;

use serde::Serialize;

/// Keywords matched as whole words by the split pattern.
pub const KEYWORDS: &[&str] = &[
    "import", "from", "const", "let", "var", "async", "await", "function", "return", "if",
    "else", "new", "try", "catch", "class", "def",
];

/// Identifiers styled as built-ins when a plain run matches one exactly.
pub const BUILTINS: &[&str] = &[
    "console", "log", "print", "requests", "axios", "fetch", "json", "JSON", "require",
];

/// Display category of a token. Exactly one applies to every token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Comment,
    String,
    Keyword,
    Builtin,
    Plain,
}

impl Category {
    /// Classify a token's text. First matching rule wins.
    pub fn of(text: &str) -> Self {
        let trimmed = text.trim_start();
        if trimmed.starts_with("//") || trimmed.starts_with('#') {
            Category::Comment
        } else if text.starts_with(['"', '\'', '`']) {
            Category::String
        } else if KEYWORDS.contains(&text) {
            Category::Keyword
        } else if BUILTINS.contains(&text) {
            Category::Builtin
        } else {
            Category::Plain
        }
    }
}

/// A classified, non-empty slice of the tokenized source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    pub text: &'a str,
    pub category: Category,
}

impl<'a> Token<'a> {
    pub(crate) fn classify(text: &'a str) -> Self {
        Self {
            text,
            category: Category::of(text),
        }
    }
}
