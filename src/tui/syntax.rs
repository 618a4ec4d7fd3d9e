//! Token styling: one ratatui style per token category.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::highlight::{Category, Token};

use super::constants::{BUILTIN_FG, COMMENT_FG, KEYWORD_FG, STRING_FG};

pub(super) fn category_style(category: Category) -> Style {
    match category {
        Category::Comment => Style::default()
            .fg(COMMENT_FG)
            .add_modifier(Modifier::ITALIC),
        Category::String => Style::default().fg(STRING_FG),
        Category::Keyword => Style::default()
            .fg(KEYWORD_FG)
            .add_modifier(Modifier::BOLD),
        Category::Builtin => Style::default().fg(BUILTIN_FG),
        Category::Plain => Style::default(),
    }
}

/// Lay tokens out as display lines. Tokens may span newlines (template
/// strings, gap runs); each piece keeps its token's style.
pub(super) fn highlight_lines(tokens: &[Token<'_>]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    for token in tokens {
        let style = category_style(token.category);
        let mut pieces = token.text.split('\n');
        if let Some(first) = pieces.next() {
            push_piece(&mut current, first, style);
        }
        for piece in pieces {
            lines.push(Line::from(std::mem::take(&mut current)));
            push_piece(&mut current, piece, style);
        }
    }
    lines.push(Line::from(current));
    lines
}

fn push_piece(spans: &mut Vec<Span<'static>>, piece: &str, style: Style) {
    let piece = piece.trim_end_matches('\r');
    if !piece.is_empty() {
        spans.push(Span::styled(piece.to_string(), style));
    }
}
