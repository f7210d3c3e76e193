use std::io::Stdout;
use std::io::stdout;

use crossterm::event::Event;
use crossterm::event::EventStream;
use crossterm::event::KeyEvent;
use crossterm::execute;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio_stream::Stream;
use tokio_stream::StreamExt;

pub(crate) type Backend = CrosstermBackend<Stdout>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TuiEvent {
    Key(KeyEvent),
    Draw,
}

pub(crate) struct Tui {
    pub(crate) terminal: Terminal<Backend>,
}

impl Tui {
    pub(crate) fn event_stream(&self) -> impl Stream<Item = TuiEvent> + use<> {
        EventStream::new().filter_map(|event| match event {
            Ok(Event::Key(key)) => Some(TuiEvent::Key(key)),
            Ok(Event::Resize(_, _)) | Ok(Event::FocusGained) => Some(TuiEvent::Draw),
            Ok(_) => None,
            Err(err) => {
                tracing::warn!("terminal event error: {err}");
                None
            }
        })
    }
}

/// Enters raw mode and the alternate screen.
pub(crate) fn init() -> std::io::Result<Tui> {
    set_panic_hook();
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;
    Ok(Tui { terminal })
}

/// Leaves the alternate screen and raw mode.
pub(crate) fn restore() -> std::io::Result<()> {
    execute!(stdout(), LeaveAlternateScreen)?;
    disable_raw_mode()
}

fn set_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        hook(panic_info);
    }));
}
