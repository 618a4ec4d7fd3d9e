//! Keyboard handling for the snippet viewer.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::runtime::Handle;

use crate::core::clipboard;
use crate::core::snippets::SnippetLang;

use super::app::App;
use super::constants::SCROLL_LINES_PAGE;

/// Result of handling an event: continue the loop or exit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandleResult {
    Continue,
    Break,
}

pub(super) fn handle_key(key: KeyEvent, app: &mut App, rt: &Handle) -> HandleResult {
    if key.kind != KeyEventKind::Press {
        return HandleResult::Continue;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return HandleResult::Break,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return HandleResult::Break;
        }
        KeyCode::Char('c') | KeyCode::Char('y') => {
            clipboard::copy_with_ack(&app.code, &app.copy_ack, rt);
        }
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => app.next_tab(),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => app.prev_tab(),
        KeyCode::Char('1') => app.select(SnippetLang::Python),
        KeyCode::Char('2') => app.select(SnippetLang::Node),
        KeyCode::Char('3') => app.select(SnippetLang::Curl),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_by(1),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_by(-1),
        KeyCode::PageDown => app.scroll_by(i32::from(SCROLL_LINES_PAGE)),
        KeyCode::PageUp => app.scroll_by(-i32::from(SCROLL_LINES_PAGE)),
        KeyCode::Home => app.scroll = 0,
        KeyCode::End => app.scroll = app.max_scroll,
        _ => {}
    }
    HandleResult::Continue
}
