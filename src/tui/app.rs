//! TUI application state: selected snippet, scroll, copy acknowledgement.

use crate::core::clipboard::CopyAck;
use crate::core::snippets::{self, SnippetLang};

pub struct App {
    pub(super) lang: SnippetLang,
    pub(super) base_url: String,
    /// Source of the selected snippet.
    pub(super) code: String,
    pub(super) scroll: u16,
    /// Highest scroll offset from the last draw.
    pub(super) max_scroll: u16,
    pub(super) copy_ack: CopyAck,
}

impl App {
    pub fn new(base_url: String, lang: SnippetLang) -> Self {
        let code = snippets::snippet(lang, &base_url);
        Self {
            lang,
            base_url,
            code,
            scroll: 0,
            max_scroll: 0,
            copy_ack: CopyAck::default(),
        }
    }

    pub(super) fn select(&mut self, lang: SnippetLang) {
        if lang == self.lang {
            return;
        }
        self.lang = lang;
        self.code = snippets::snippet(lang, &self.base_url);
        self.scroll = 0;
    }

    pub(super) fn next_tab(&mut self) {
        self.select(self.lang.next());
    }

    pub(super) fn prev_tab(&mut self) {
        self.select(self.lang.prev());
    }

    pub(super) fn scroll_by(&mut self, delta: i32) {
        let target = (i32::from(self.scroll) + delta).clamp(0, i32::from(self.max_scroll));
        self.scroll = target as u16;
    }
}
