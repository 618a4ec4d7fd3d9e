//! TUI rendering: header with snippet tabs, highlighted code, footer.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};

use crate::core::highlight;
use crate::core::snippets::SnippetLang;

use super::app::App;
use super::constants::{ACCENT, ACK, MUTED};
use super::syntax::highlight_lines;

const HINTS: &str = " ←/→ switch · ↑/↓ scroll · c copy · q quit ";

pub(super) fn draw(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);
    draw_header(f, app, chunks[0]);
    draw_code(f, app, chunks[1]);
    draw_footer(f, app, chunks[2]);
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(16), Constraint::Min(0)])
        .split(area);
    let title = Paragraph::new(Line::from(vec![
        Span::styled(" ◆ ", Style::default().fg(ACCENT)),
        Span::styled(
            crate::core::app::NAME,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
    ]));
    f.render_widget(title, cols[0]);

    let selected = SnippetLang::ALL
        .iter()
        .position(|l| *l == app.lang)
        .unwrap_or(0);
    let tabs = Tabs::new(SnippetLang::ALL.iter().map(|l| l.label()))
        .select(selected)
        .style(Style::default().fg(MUTED))
        .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));
    f.render_widget(tabs, cols[1]);
}

fn draw_code(f: &mut Frame, app: &mut App, area: Rect) {
    let tokens = highlight::tokenize(&app.code);
    let lines = highlight_lines(&tokens);
    let inner_height = area.height.saturating_sub(2);
    app.max_scroll = u16::try_from(lines.len())
        .unwrap_or(u16::MAX)
        .saturating_sub(inner_height);
    app.scroll = app.scroll.min(app.max_scroll);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(MUTED))
        .title(Span::styled(
            format!(" {} ", app.lang.label()),
            Style::default().fg(MUTED).add_modifier(Modifier::BOLD),
        ));
    let para = Paragraph::new(lines).block(block).scroll((app.scroll, 0));
    f.render_widget(para, area);
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let line = if app.copy_ack.is_copied() {
        Line::from(Span::styled(
            " ✓ Copied ",
            Style::default().fg(ACK).add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(HINTS, Style::default().fg(MUTED)))
    };
    f.render_widget(Paragraph::new(line), area);
}
