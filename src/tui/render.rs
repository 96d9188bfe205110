// src/tui/render.rs
// Centered list over a shaded backdrop, 60% of the screen, never smaller
// than 20x9 (or the screen, whichever is smaller).

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Clear, List, ListItem, Paragraph, Widget},
};

use super::app::ListApp;

const SCREEN_SHARE_PCT: u32 = 60;
const MIN_WIDTH: u16 = 20;
const MIN_HEIGHT: u16 = 9;
const KEY_HINTS: &str = "↑/↓ move · Enter open · q quit";

pub fn draw(frame: &mut Frame<'_>, app: &mut ListApp<'_>, title: &str) {
    let area = frame.area();
    frame.render_widget(Shade, area);

    let window = centered(area);
    frame.render_widget(Clear, window);

    let block = Block::bordered().title(Line::from(title).centered());
    let inner = block.inner(window);
    frame.render_widget(block, window);

    let [list_area, status_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

    if app.records().is_empty() {
        frame.render_widget(Paragraph::new("No results"), list_area);
    } else {
        let items: Vec<ListItem<'_>> = app
            .records()
            .iter()
            .map(|r| ListItem::new(r.to_string()))
            .collect();
        let list = List::new(items)
            .highlight_style(Style::new().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        frame.render_stateful_widget(list, list_area, app.list_state_mut());
    }

    let status = if app.status().is_empty() { KEY_HINTS } else { app.status() };
    frame.render_widget(
        Paragraph::new(status).style(Style::new().add_modifier(Modifier::DIM)),
        status_area,
    );
}

pub fn centered(area: Rect) -> Rect {
    let share = |total: u16, min: u16| -> u16 {
        let pct = (u32::from(total) * SCREEN_SHARE_PCT / 100) as u16;
        pct.max(min).min(total)
    };
    let width = share(area.width, MIN_WIDTH);
    let height = share(area.height, MIN_HEIGHT);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Fills its area with `▒`.
struct Shade;

impl Widget for Shade {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol("▒");
                }
            }
        }
    }
}
