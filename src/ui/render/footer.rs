use super::Frame;
use crate::state::{FormFocus, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    widgets::Paragraph,
};

/// Render the footer hint line for the current focus position.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let hints = if state.is_debug_mode() {
        " Ctrl+D or Esc: close log".to_string()
    } else if state.current_focus() == FormFocus::Submit {
        " Enter: add contact, Tab: back to form, Ctrl+D: log, Esc: quit".to_string()
    } else {
        " Type to edit, Enter/Tab: next field, Shift+Tab: previous, Ctrl+D: log, Esc: quit"
            .to_string()
    };

    let paragraph = Paragraph::new(hints).style(styling::muted_text_style(theme));
    frame.render_widget(paragraph, size);
}
