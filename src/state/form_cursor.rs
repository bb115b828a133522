//! Focus tracking for the ad form

/// Which row of the form has focus.
///
/// Rows `0..field_count` are schema fields in order; the last row is the
/// submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormCursor {
    field_count: usize,
    active: usize,
}

impl FormCursor {
    pub fn new(field_count: usize) -> Self {
        Self {
            field_count,
            active: 0,
        }
    }

    /// Number of focusable rows (fields plus the submit button)
    pub fn row_count(&self) -> usize {
        self.field_count + 1
    }

    pub fn active_row(&self) -> usize {
        self.active
    }

    /// Index of the focused field, `None` when the submit button has focus
    pub fn active_field(&self) -> Option<usize> {
        (self.active < self.field_count).then_some(self.active)
    }

    pub fn is_submit_active(&self) -> bool {
        self.active == self.field_count
    }

    pub fn set_active_row(&mut self, index: usize) {
        self.active = index.min(self.field_count);
    }

    pub fn next(&mut self) {
        self.active = (self.active + 1) % self.row_count();
    }

    pub fn prev(&mut self) {
        if self.active == 0 {
            self.active = self.row_count() - 1;
        } else {
            self.active -= 1;
        }
    }
}
