//! Form editing state types.
//!
//! This module contains types related to the entry form, including per-field
//! edit state and the focus cycle across the form controls.

use crate::directory::Field;

/// Edit state for a single form field: the candidate value plus whether the
/// user has committed the field at least once. Errors are suppressed until
/// the field has been touched.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    value: String,
    touched: bool,
}

impl FieldState {
    /// Return the current candidate value.
    ///
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Return whether the field has been committed at least once.
    ///
    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// Append a typed character to the value.
    ///
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the value.
    ///
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Mark the field as committed.
    ///
    pub fn mark_touched(&mut self) {
        self.touched = true;
    }

    /// Reset the field to empty and pristine.
    ///
    pub fn reset(&mut self) {
        self.value.clear();
        self.touched = false;
    }
}

/// Specifying form focus position, cycling through the three input fields
/// and the submit control.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormFocus {
    Name,
    Mobile,
    Email,
    Submit,
}

impl FormFocus {
    /// Return the next focus position in the cycle.
    ///
    pub fn next(&self) -> FormFocus {
        match self {
            FormFocus::Name => FormFocus::Mobile,
            FormFocus::Mobile => FormFocus::Email,
            FormFocus::Email => FormFocus::Submit,
            FormFocus::Submit => FormFocus::Name,
        }
    }

    /// Return the previous focus position in the cycle.
    ///
    pub fn previous(&self) -> FormFocus {
        match self {
            FormFocus::Name => FormFocus::Submit,
            FormFocus::Mobile => FormFocus::Name,
            FormFocus::Email => FormFocus::Mobile,
            FormFocus::Submit => FormFocus::Email,
        }
    }

    /// Return the input field under this focus position, or `None` for the
    /// submit control.
    ///
    pub fn field(&self) -> Option<Field> {
        match self {
            FormFocus::Name => Some(Field::Name),
            FormFocus::Mobile => Some(Field::Mobile),
            FormFocus::Email => Some(Field::Email),
            FormFocus::Submit => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_state_default_is_pristine() {
        let field = FieldState::default();
        assert_eq!(field.value(), "");
        assert!(!field.is_touched());
    }

    #[test]
    fn test_field_state_editing() {
        let mut field = FieldState::default();
        field.push_char('J');
        field.push_char('o');
        assert_eq!(field.value(), "Jo");
        field.pop_char();
        assert_eq!(field.value(), "J");
        field.pop_char();
        field.pop_char(); // popping empty is a no-op
        assert_eq!(field.value(), "");
    }

    #[test]
    fn test_field_state_reset_clears_touched() {
        let mut field = FieldState::default();
        field.push_char('x');
        field.mark_touched();
        field.reset();
        assert_eq!(field.value(), "");
        assert!(!field.is_touched());
    }

    #[test]
    fn test_form_focus_cycle() {
        let mut focus = FormFocus::Name;
        let mut seen = vec![focus];
        for _ in 0..3 {
            focus = focus.next();
            seen.push(focus);
        }
        assert_eq!(
            seen,
            vec![
                FormFocus::Name,
                FormFocus::Mobile,
                FormFocus::Email,
                FormFocus::Submit
            ]
        );
        assert_eq!(focus.next(), FormFocus::Name);
        assert_eq!(FormFocus::Name.previous(), FormFocus::Submit);
    }

    #[test]
    fn test_form_focus_field_mapping() {
        assert_eq!(FormFocus::Name.field(), Some(Field::Name));
        assert_eq!(FormFocus::Mobile.field(), Some(Field::Mobile));
        assert_eq!(FormFocus::Email.field(), Some(Field::Email));
        assert_eq!(FormFocus::Submit.field(), None);
    }
}
