//! Keyboard focus over the lead form rows

use super::field::FieldId;

/// Trait for common form focus operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Focus position on the lead form: one row per field, then the submit button
#[derive(Debug, Clone, Default)]
pub struct LeadFormFocus {
    pub active_field_index: usize,
}

impl LeadFormFocus {
    /// Index of the submit button row
    pub const SUBMIT_ROW: usize = FieldId::ALL.len();

    /// Field under focus, or None when the submit button is focused
    pub fn active_field_id(&self) -> Option<FieldId> {
        FieldId::ALL.get(self.active_field_index).copied()
    }

    /// Returns true if the submit button row is currently active
    pub fn is_submit_active(&self) -> bool {
        self.active_field_index == Self::SUBMIT_ROW
    }

    pub fn is_field_active(&self, field: FieldId) -> bool {
        self.active_field_id() == Some(field)
    }

    /// Move focus straight to a field (e.g. the first invalid one)
    pub fn focus_field(&mut self, field: FieldId) {
        if let Some(idx) = FieldId::ALL.iter().position(|f| *f == field) {
            self.active_field_index = idx;
        }
    }
}

impl Form for LeadFormFocus {
    fn field_count(&self) -> usize {
        Self::SUBMIT_ROW + 1 // six fields + submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::SUBMIT_ROW);
    }
}
