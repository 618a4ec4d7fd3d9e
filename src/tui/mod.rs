//! TUI snippet viewer: browse the integration snippets with highlighting and copy them.

mod app;
mod constants;
mod draw;
mod handlers;
mod syntax;

use crossterm::event::{self, Event};
use crossterm::execute;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;

use crate::core::config::Config;
use crate::core::snippets::SnippetLang;

use app::App;
use draw::draw;
use handlers::HandleResult;

/// Guard that restores terminal state on drop (including on panic).
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        use crossterm::terminal::{LeaveAlternateScreen, disable_raw_mode};
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
    }
}

/// Run the TUI loop. `rt` drives the copy acknowledgement timers.
pub fn run(config: Arc<Config>, lang: SnippetLang, rt: Handle) -> io::Result<()> {
    use crossterm::terminal::{Clear, ClearType, EnterAlternateScreen, enable_raw_mode};
    use ratatui::Terminal;
    use ratatui::backend::CrosstermBackend;

    let _guard = TerminalGuard;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    execute!(stdout, Clear(ClearType::All))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config.base_url.clone(), lang);
    log::info!("Snippet viewer started ({})", app.lang.label());

    loop {
        terminal.draw(|f| draw(f, &mut app, f.area()))?;

        if event::poll(Duration::from_millis(constants::EVENT_POLL_TIMEOUT_MS))?
            && let Event::Key(key) = event::read()?
            && handlers::handle_key(key, &mut app, &rt) == HandleResult::Break
        {
            break;
        }
    }

    terminal.show_cursor()?;
    Ok(())
}
