use super::directory::directory;
use super::footer::footer;
use super::log::log;
use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    widgets::{Block, Borders, Paragraph},
};

/// Render the whole application surface according to state.
///
pub fn root(frame: &mut Frame, state: &mut State) {
    let size = frame.size();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Form and contacts table
            Constraint::Length(2), // Footer
        ])
        .split(size);

    let theme = state.get_theme().clone();
    let title_block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(&theme));
    let title = Paragraph::new("Phone Directory")
        .style(styling::banner_style(&theme).add_modifier(Modifier::BOLD))
        .block(title_block)
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    directory(frame, chunks[1], state);
    footer(frame, chunks[2], state);

    // Log overlay renders on top of everything
    if state.is_debug_mode() {
        let popup_area = centered_rect(70, 60, size);
        log(frame, popup_area, state);
    }
}

/// Helper function to create a centered rectangle (ratatui modal pattern)
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
