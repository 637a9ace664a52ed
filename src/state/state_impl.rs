use crate::directory::{validate, Contact, Field};
use log::*;
use std::collections::HashMap;

use super::form::{FieldState, FormFocus};

/// Houses data representative of application state.
///
/// All mutation happens on the main thread in response to terminal events,
/// so the state carries no locking.
pub struct State {
    name: FieldState,
    mobile: FieldState,
    email: FieldState,
    current_focus: FormFocus,
    errors: HashMap<Field, String>, // Field -> visible error message
    contacts: Vec<Contact>,         // Accepted contacts, insertion-ordered
    debug_mode: bool,               // Whether the log overlay is shown
    theme: crate::ui::Theme,        // Current theme
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            name: FieldState::default(),
            mobile: FieldState::default(),
            email: FieldState::default(),
            current_focus: FormFocus::Name,
            errors: HashMap::new(),
            contacts: vec![],
            debug_mode: false,
            theme: crate::ui::Theme::default(),
        }
    }
}

impl State {
    pub fn new(theme: crate::ui::Theme) -> Self {
        State {
            theme,
            ..State::default()
        }
    }

    /// Return the current focus position.
    ///
    pub fn current_focus(&self) -> FormFocus {
        self.current_focus
    }

    /// Return the edit state for the given field.
    ///
    pub fn field_state(&self, field: Field) -> &FieldState {
        match field {
            Field::Name => &self.name,
            Field::Mobile => &self.mobile,
            Field::Email => &self.email,
        }
    }

    fn field_state_mut(&mut self, field: Field) -> &mut FieldState {
        match field {
            Field::Name => &mut self.name,
            Field::Mobile => &mut self.mobile,
            Field::Email => &mut self.email,
        }
    }

    /// Append a typed character to the focused field. Typing does not
    /// re-validate; validation only runs when the field commits.
    ///
    pub fn add_field_char(&mut self, c: char) {
        if let Some(field) = self.current_focus.field() {
            self.field_state_mut(field).push_char(c);
        }
    }

    /// Remove the last character from the focused field.
    ///
    pub fn remove_field_char(&mut self) {
        if let Some(field) = self.current_focus.field() {
            self.field_state_mut(field).pop_char();
        }
    }

    /// Move focus to the next control, committing the field being left.
    ///
    pub fn focus_next_field(&mut self) {
        self.commit_focused_field();
        self.current_focus = self.current_focus.next();
    }

    /// Move focus to the previous control, committing the field being left.
    ///
    pub fn focus_previous_field(&mut self) {
        self.commit_focused_field();
        self.current_focus = self.current_focus.previous();
    }

    /// Commit the focused field: mark it touched and refresh its entry in
    /// the error map. Leaving the submit control commits nothing.
    ///
    fn commit_focused_field(&mut self) {
        if let Some(field) = self.current_focus.field() {
            self.field_state_mut(field).mark_touched();
            self.revalidate_field(field);
        }
    }

    /// Re-evaluate a committed field and set or delete its error map entry,
    /// so the map is never left stale.
    ///
    fn revalidate_field(&mut self, field: Field) {
        let value = self.field_state(field).value().to_string();
        match validate(field, &value) {
            Some(message) => {
                debug!("Field {:?} invalid after commit: {}", field, message);
                self.errors.insert(field, message);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    /// Return the visible error for a field, present only while the field is
    /// touched and invalid.
    ///
    pub fn visible_error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Return whether every field passes its rules on its current value.
    /// Touched flags are irrelevant here.
    ///
    pub fn is_form_valid(&self) -> bool {
        Field::all()
            .iter()
            .all(|field| validate(*field, self.field_state(*field).value()).is_none())
    }

    /// Submit the form. A valid form appends a snapshot of the current
    /// values to the contact list and resets the form; an invalid form is
    /// silently ignored, leaving the list and any visible errors untouched.
    ///
    pub fn submit_form(&mut self) {
        if !self.is_form_valid() {
            debug!("Ignoring submission of invalid form");
            return;
        }
        let contact = Contact::new(
            self.name.value().to_string(),
            self.mobile.value().to_string(),
            self.email.value().to_string(),
        );
        info!("Adding contact '{}' to the directory", contact.name);
        self.contacts.push(contact);
        self.reset_form();
    }

    /// Reset all fields to empty/pristine, clear every error, and return
    /// focus to the first field.
    ///
    fn reset_form(&mut self) {
        self.name.reset();
        self.mobile.reset();
        self.email.reset();
        self.errors.clear();
        self.current_focus = FormFocus::Name;
    }

    /// Return the accepted contacts in insertion order.
    ///
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn is_debug_mode(&self) -> bool {
        self.debug_mode
    }

    pub fn toggle_debug_mode(&mut self) {
        self.debug_mode = !self.debug_mode;
    }

    pub fn exit_debug_mode(&mut self) {
        self.debug_mode = false;
    }

    /// Return the current theme.
    ///
    pub fn get_theme(&self) -> &crate::ui::Theme {
        &self.theme
    }
}
