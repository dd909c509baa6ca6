//! Application state definitions

use crate::state::form::LoanForm;

/// Focusable controls on the loan form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusField {
    #[default]
    PersonType,
    Document,
    Name,
    CurrentDebt,
    RequestedLoan,
    Submit,
}

impl FocusField {
    pub fn next(&self) -> Self {
        match self {
            Self::PersonType => Self::Document,
            Self::Document => Self::Name,
            Self::Name => Self::CurrentDebt,
            Self::CurrentDebt => Self::RequestedLoan,
            Self::RequestedLoan => Self::Submit,
            Self::Submit => Self::PersonType,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::PersonType => Self::Submit,
            Self::Document => Self::PersonType,
            Self::Name => Self::Document,
            Self::CurrentDebt => Self::Name,
            Self::RequestedLoan => Self::CurrentDebt,
            Self::Submit => Self::RequestedLoan,
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub form: LoanForm,
    pub focus: FocusField,
}

impl AppState {
    /// Move focus to the next control
    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    /// Move focus to the previous control
    pub fn prev_field(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Toggle the person type selector. Clears the document via the form.
    pub fn toggle_person_type(&mut self) {
        self.form.set_person_type(self.form.person_type.toggle());
    }

    /// Route one typed character to the focused field
    pub fn input_char(&mut self, c: char) {
        match self.focus {
            FocusField::PersonType => {
                if c == ' ' {
                    self.toggle_person_type();
                }
            }
            FocusField::Document => self.form.push_document_char(c),
            FocusField::Name => self.form.name.push(c),
            FocusField::CurrentDebt => self.form.current_debt.push(c),
            FocusField::RequestedLoan => self.form.requested_loan.push(c),
            FocusField::Submit => {}
        }
    }

    /// Backspace on the focused field
    pub fn backspace(&mut self) {
        match self.focus {
            FocusField::Document => self.form.pop_document_char(),
            FocusField::Name => {
                self.form.name.pop();
            }
            FocusField::CurrentDebt => {
                self.form.current_debt.pop();
            }
            FocusField::RequestedLoan => {
                self.form.requested_loan.pop();
            }
            FocusField::PersonType | FocusField::Submit => {}
        }
    }
}
