//! TUI constants: colors and timing.

use ratatui::style::Color;

/// Accent indigo (#818CF8), used for the title and active tab.
pub(super) const ACCENT: Color = Color::Rgb(129, 140, 248);

/// Acknowledgement green (#34D399).
pub(super) const ACK: Color = Color::Rgb(52, 211, 153);

/// Dimmed chrome and hints (#A8A29E).
pub(super) const MUTED: Color = Color::Rgb(168, 162, 158);

/// Token colors.
pub(super) const COMMENT_FG: Color = Color::Rgb(168, 162, 158);
pub(super) const STRING_FG: Color = Color::Rgb(16, 185, 129);
pub(super) const KEYWORD_FG: Color = Color::Rgb(129, 140, 248);
pub(super) const BUILTIN_FG: Color = Color::Rgb(96, 165, 250);

/// Event poll timeout in milliseconds (main loop).
pub(crate) const EVENT_POLL_TIMEOUT_MS: u64 = 100;

/// Scroll amount for PageUp/PageDown.
pub(crate) const SCROLL_LINES_PAGE: u16 = 10;
