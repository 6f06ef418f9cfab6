//! Terminal viewer for proofs with hover highlighting.

pub mod app;
mod status_bar;
mod theme;
mod ui;

use std::{io::stdout, time::Duration};

pub use app::App;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use futures::StreamExt;
use ratatui::prelude::*;
use tokio::time::sleep;

use crate::{document::Document, error::Result, highlight::HighlightMode};

pub async fn run(document: Document, mode: HighlightMode) -> Result<()> {
    enable_raw_mode()?;
    stdout()
        .execute(EnterAlternateScreen)?
        .execute(EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Content is ready once the document is loaded; handlers attach here.
    let mut app = App::new(document, mode);
    let mut event_stream = EventStream::new();

    while !app.should_exit {
        terminal.draw(|frame| app.render(frame))?;

        tokio::select! {
            Some(Ok(event)) = event_stream.next() => {
                app.handle_event(&event);
            }
            () = sleep(Duration::from_millis(250)) => {}
        }
    }

    disable_raw_mode()?;
    stdout()
        .execute(DisableMouseCapture)?
        .execute(LeaveAlternateScreen)?;

    Ok(())
}
