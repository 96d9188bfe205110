// src/tui/mod.rs
//! Interactive terminal list. Arrow keys (or j/k) move, Enter opens the
//! highlighted torrent, q / Esc quits.

pub mod app;
pub mod render;

use crossterm::event::{self, Event, KeyEventKind};
use tracing::debug;

use crate::{
    data::TorrentRecord,
    error::PresentError,
    present::{LinkOpener, Presenter},
};

pub use app::{Action, ListApp};

#[derive(Default)]
pub struct TuiPresenter {
    notice: Option<String>,
}

impl TuiPresenter {
    /// Message shown in the status line until the first key press.
    pub fn with_notice(mut self, notice: impl Into<String>) -> Self {
        self.notice = Some(notice.into());
        self
    }
}

impl Presenter for TuiPresenter {
    fn present(
        &mut self,
        title: &str,
        records: &[TorrentRecord],
        opener: &dyn LinkOpener,
    ) -> Result<(), PresentError> {
        let mut app = ListApp::new(records);
        if let Some(notice) = self.notice.take() {
            app.set_status(notice);
        }

        let mut terminal = ratatui::try_init()?;
        let result = event_loop(&mut terminal, &mut app, title, opener);
        ratatui::try_restore()?;
        result
    }
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut ListApp<'_>,
    title: &str,
    opener: &dyn LinkOpener,
) -> Result<(), PresentError> {
    while !app.should_quit() {
        terminal.draw(|frame| render::draw(frame, app, title))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Some(action) = Action::from_key(key) {
                debug!(?action, "key");
                app.apply(action, opener);
            }
        }
    }
    Ok(())
}
