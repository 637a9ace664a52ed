use super::Frame;
use crate::directory::Field;
use crate::state::{FormFocus, State};
use crate::ui::theme::Theme;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

/// Render the directory: the entry form with per-field errors, the submit
/// control, and the contacts table.
///
pub fn directory(frame: &mut Frame, size: Rect, state: &mut State) {
    // Field rows grow to fit their error message, so the email explanation
    // has room for all of its lines
    let constraints: Vec<Constraint> = Field::all()
        .iter()
        .map(|field| Constraint::Length(field_height(state, *field)))
        .chain([
            Constraint::Length(3), // Submit control
            Constraint::Min(3),    // Contacts table
        ])
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    for (idx, field) in Field::all().into_iter().enumerate() {
        render_field(frame, chunks[idx], state, field);
    }
    render_submit(frame, chunks[3], state);
    render_contacts(frame, chunks[4], state);
}

/// Return the total height of a field row: the bordered input plus one line
/// per line of its visible error, if any.
///
fn field_height(state: &State, field: Field) -> u16 {
    let error_lines = state
        .visible_error(field)
        .map(|error| error.lines().count() as u16)
        .unwrap_or(0);
    3 + error_lines
}

fn render_field(frame: &mut Frame, size: Rect, state: &State, field: Field) {
    let theme = state.get_theme();
    let is_focused = state.current_focus().field() == Some(field);
    let value = state.field_state(field).value();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(size);

    let border_style = if is_focused {
        styling::active_block_border_style(theme)
    } else {
        styling::normal_block_border_style(theme)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(field.label())
        .border_style(border_style);

    let text = if is_focused {
        Line::from(vec![
            Span::styled(
                value.to_string(),
                Style::default()
                    .fg(theme.primary.to_color())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("█", Style::default().fg(theme.primary.to_color())),
        ])
    } else if value.is_empty() {
        Line::from(Span::styled("Empty", styling::muted_text_style(theme)))
    } else {
        Line::from(Span::styled(
            value.to_string(),
            styling::normal_text_style(theme),
        ))
    };
    frame.render_widget(Paragraph::new(text).block(block), chunks[0]);

    // One error line block beneath the field, present only while the field
    // is touched and invalid
    if let Some(error) = state.visible_error(field) {
        let lines: Vec<Line> = error
            .lines()
            .map(|line| Line::from(Span::styled(line.to_string(), styling::error_text_style(theme))))
            .collect();
        frame.render_widget(Paragraph::new(lines), chunks[1]);
    }
}

fn render_submit(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let is_focused = state.current_focus() == FormFocus::Submit;

    let border_style = if is_focused {
        styling::active_block_border_style(theme)
    } else {
        styling::normal_block_border_style(theme)
    };
    let label_style = if is_focused {
        Style::default()
            .fg(theme.highlight_fg.to_color())
            .bg(theme.highlight_bg.to_color())
            .add_modifier(Modifier::BOLD)
    } else if state.is_form_valid() {
        Style::default()
            .fg(theme.success.to_color())
            .add_modifier(Modifier::BOLD)
    } else {
        styling::muted_text_style(theme)
    };

    let submit = Paragraph::new(Span::styled(" Submit ", label_style))
        .block(Block::default().borders(Borders::ALL).border_style(border_style))
        .alignment(Alignment::Center);
    frame.render_widget(submit, size);
}

fn render_contacts(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let contacts = state.contacts();

    let header = Row::new(vec![
        header_cell("Name", theme),
        header_cell("Mobile", theme),
        header_cell("Email", theme),
    ]);
    let rows: Vec<Row> = contacts
        .iter()
        .map(|contact| {
            Row::new(vec![
                Cell::from(contact.name.clone()),
                Cell::from(contact.mobile.clone()),
                Cell::from(contact.email.clone()),
            ])
            .style(styling::normal_text_style(theme))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!("Contacts ({})", contacts.len()),
            Style::default()
                .fg(theme.accent.to_color())
                .add_modifier(Modifier::BOLD),
        ))
        .border_style(styling::normal_block_border_style(theme));

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(35),
            Constraint::Percentage(20),
            Constraint::Percentage(45),
        ],
    )
    .header(header)
    .block(block);
    frame.render_widget(table, size);
}

fn header_cell(label: &str, theme: &Theme) -> Cell<'static> {
    Cell::from(Span::styled(
        label.to_string(),
        Style::default()
            .fg(theme.info.to_color())
            .add_modifier(Modifier::BOLD),
    ))
}
