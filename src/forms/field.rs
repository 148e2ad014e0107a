use super::validation::{Constraint, FieldErrors, error_message};

/// A single bound text control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    value: String,
    constraints: &'static [Constraint],
    touched: bool,
}

impl TextField {
    pub fn new(value: impl Into<String>, constraints: &'static [Constraint]) -> Self {
        Self {
            value: value.into(),
            constraints,
            touched: false,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn errors(&self) -> FieldErrors {
        FieldErrors::evaluate(&self.value, self.constraints)
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_valid()
    }

    pub fn touched(&self) -> bool {
        self.touched
    }

    pub fn mark_touched(&mut self) {
        self.touched = true;
    }

    pub fn message(&self) -> String {
        error_message(&self.errors())
    }

    /// Message to render next to the control: empty until touched.
    pub fn visible_message(&self) -> String {
        if self.touched {
            self.message()
        } else {
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::validation::COURSE_NAME;

    #[test]
    fn message_tracks_current_value() {
        let mut field = TextField::new("", COURSE_NAME);
        assert_eq!(field.message(), "Field is required.");
        field.set("Rust");
        assert_eq!(field.message(), "Field cannot be less than 5 characters long.");
        field.set("Rust 101");
        assert!(field.is_valid());
        assert_eq!(field.message(), "");
    }

    #[test]
    fn visible_message_waits_for_touch() {
        let mut field = TextField::new("", COURSE_NAME);
        assert_eq!(field.visible_message(), "");
        field.mark_touched();
        assert!(field.touched());
        assert_eq!(field.visible_message(), "Field is required.");
    }
}
