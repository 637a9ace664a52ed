use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear},
};
use tui_logger::TuiLoggerWidget;

/// Render the log overlay according to state.
///
pub fn log(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();

    // Clear the area first (ratatui modal pattern)
    frame.render_widget(Clear, size);

    let block = Block::default()
        .title("Log (Ctrl+D or Esc to close)")
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(theme.warning.to_color())
                .add_modifier(Modifier::BOLD),
        );

    let widget = TuiLoggerWidget::default()
        .block(block)
        .style_error(Style::default().fg(theme.error.to_color()))
        .style_warn(Style::default().fg(theme.warning.to_color()))
        .style_info(Style::default().fg(theme.info.to_color()))
        .style_debug(styling::muted_text_style(theme))
        .style_trace(styling::muted_text_style(theme))
        .style(styling::normal_text_style(theme));

    frame.render_widget(widget, size);
}
