// src/tui/app.rs
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::ListState;
use tracing::warn;

use crate::{config::consts::PAGE_STEP, data::TorrentRecord, present::LinkOpener};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Up,
    Down,
    PageUp,
    PageDown,
    First,
    Last,
    Open,
    Quit,
}

impl Action {
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return matches!(key.code, KeyCode::Char('c')).then_some(Self::Quit);
        }
        let action = match key.code {
            KeyCode::Up | KeyCode::Char('k') => Self::Up,
            KeyCode::Down | KeyCode::Char('j') => Self::Down,
            KeyCode::PageUp => Self::PageUp,
            KeyCode::PageDown => Self::PageDown,
            KeyCode::Home | KeyCode::Char('g') => Self::First,
            KeyCode::End | KeyCode::Char('G') => Self::Last,
            KeyCode::Enter => Self::Open,
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => Self::Quit,
            _ => return None,
        };
        Some(action)
    }
}

/// State behind the list: which record is highlighted, the status line,
/// and whether the user asked to leave.
pub struct ListApp<'a> {
    records: &'a [TorrentRecord],
    state: ListState,
    status: String,
    quit: bool,
}

impl<'a> ListApp<'a> {
    pub fn new(records: &'a [TorrentRecord]) -> Self {
        let selected = (!records.is_empty()).then_some(0);
        Self {
            records,
            state: ListState::default().with_selected(selected),
            status: String::new(),
            quit: false,
        }
    }

    pub fn records(&self) -> &'a [TorrentRecord] {
        self.records
    }

    pub fn selected(&self) -> Option<&'a TorrentRecord> {
        let records = self.records;
        self.state.selected().and_then(|i| records.get(i))
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn list_state_mut(&mut self) -> &mut ListState {
        &mut self.state
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = msg.into();
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn apply(&mut self, action: Action, opener: &dyn LinkOpener) {
        match action {
            Action::Up => self.step_back(1),
            Action::Down => self.step_forward(1),
            Action::PageUp => self.step_back(PAGE_STEP),
            Action::PageDown => self.step_forward(PAGE_STEP),
            Action::First => self.select_clamped(0),
            Action::Last => self.select_clamped(usize::MAX),
            Action::Open => self.open_selected(opener),
            Action::Quit => self.quit = true,
        }
    }

    fn step_forward(&mut self, n: usize) {
        let at = self.state.selected().unwrap_or(0);
        self.select_clamped(at.saturating_add(n));
    }

    fn step_back(&mut self, n: usize) {
        let at = self.state.selected().unwrap_or(0);
        self.select_clamped(at.saturating_sub(n));
    }

    fn select_clamped(&mut self, i: usize) {
        let Some(last) = self.records.len().checked_sub(1) else {
            return;
        };
        self.state.select(Some(i.min(last)));
    }

    fn open_selected(&mut self, opener: &dyn LinkOpener) {
        let Some(record) = self.selected() else {
            return;
        };
        match opener.open_link(record.detail_uri()) {
            Ok(()) => self.status = format!("Opened {}", record.detail_uri()),
            Err(e) => {
                warn!(error = %e, uri = record.detail_uri(), "open failed");
                self.status = format!("Error: {e}");
            }
        }
    }
}
