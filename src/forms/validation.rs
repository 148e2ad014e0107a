//! Field constraints and the user-facing message for whichever one failed.

/// One rule a text field must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    Required,
    MinLength(usize),
    MaxLength(usize),
}

impl Constraint {
    fn check(self, value: &str, errors: &mut FieldErrors) {
        // Length rules leave empty values to `Required`.
        match self {
            Constraint::Required => {
                if value.is_empty() {
                    errors.required = true;
                }
            }
            Constraint::MinLength(min) => {
                let len = value.chars().count();
                if len > 0 && len < min {
                    errors.min_length = Some(min);
                }
            }
            Constraint::MaxLength(max) => {
                if value.chars().count() > max {
                    errors.max_length = Some(max);
                }
            }
        }
    }
}

pub const COURSE_NAME: &[Constraint] = &[
    Constraint::Required,
    Constraint::MinLength(5),
    Constraint::MaxLength(100),
];

pub const CATEGORY: &[Constraint] = &[Constraint::Required];

pub const LESSON_NAME: &[Constraint] = COURSE_NAME;

pub const LESSON_VIDEO: &[Constraint] = &[
    Constraint::Required,
    Constraint::MinLength(10),
    Constraint::MaxLength(11),
];

/// Every failure currently reported by a control. Several may hold at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    /// Any failure without a dedicated message.
    pub invalid: bool,
}

impl FieldErrors {
    pub fn evaluate(value: &str, constraints: &[Constraint]) -> Self {
        let mut errors = FieldErrors::default();
        for constraint in constraints {
            constraint.check(value, &mut errors);
        }
        errors
    }

    pub fn required() -> Self {
        FieldErrors {
            required: true,
            ..FieldErrors::default()
        }
    }

    pub fn is_valid(&self) -> bool {
        *self == FieldErrors::default()
    }
}

/// Message for the highest-priority failure, or an empty string when valid.
///
/// Priority: required, too long, too short, anything else.
pub fn error_message(errors: &FieldErrors) -> String {
    if errors.required {
        return "Field is required.".to_string();
    }
    if let Some(max) = errors.max_length {
        return format!("Field cannot be more than {} characters long.", max);
    }
    if let Some(min) = errors.min_length {
        return format!("Field cannot be less than {} characters long.", min);
    }
    if errors.is_valid() {
        String::new()
    } else {
        "Error".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_value_is_only_required() {
        let errors = FieldErrors::evaluate("", COURSE_NAME);
        assert_eq!(errors, FieldErrors::required());
        assert_eq!(error_message(&errors), "Field is required.");
    }

    #[test]
    fn short_and_long_names() {
        let short = FieldErrors::evaluate("abcd", LESSON_NAME);
        assert_eq!(error_message(&short), "Field cannot be less than 5 characters long.");

        let long = FieldErrors::evaluate(&"x".repeat(101), COURSE_NAME);
        assert_eq!(error_message(&long), "Field cannot be more than 100 characters long.");

        assert!(FieldErrors::evaluate("abcde", COURSE_NAME).is_valid());
        assert!(FieldErrors::evaluate(&"x".repeat(100), COURSE_NAME).is_valid());
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        assert!(FieldErrors::evaluate("ação!", COURSE_NAME).is_valid());
    }

    #[test]
    fn required_wins_over_everything() {
        let errors = FieldErrors {
            required: true,
            min_length: Some(5),
            max_length: Some(100),
            invalid: true,
        };
        assert_eq!(error_message(&errors), "Field is required.");
    }

    #[test]
    fn too_long_wins_over_too_short() {
        let errors = FieldErrors {
            min_length: Some(5),
            max_length: Some(100),
            ..FieldErrors::default()
        };
        assert_eq!(error_message(&errors), "Field cannot be more than 100 characters long.");
    }

    #[test]
    fn other_failures_fall_back_to_generic_message() {
        let errors = FieldErrors {
            invalid: true,
            ..FieldErrors::default()
        };
        assert_eq!(error_message(&errors), "Error");
    }

    #[test]
    fn video_reference_only_checks_length() {
        assert!(FieldErrors::evaluate("abc.def.ghi", LESSON_VIDEO).is_valid());
        assert!(FieldErrors::evaluate("abc def gh", LESSON_VIDEO).is_valid());
    }

    #[test]
    fn video_reference_bounds() {
        assert!(FieldErrors::evaluate("dQw4w9WgXcQ", LESSON_VIDEO).is_valid());
        assert!(FieldErrors::evaluate("dQw4w9WgXc", LESSON_VIDEO).is_valid());
        assert_eq!(
            error_message(&FieldErrors::evaluate("dQw4w9Wg", LESSON_VIDEO)),
            "Field cannot be less than 10 characters long."
        );
        assert_eq!(
            error_message(&FieldErrors::evaluate("dQw4w9WgXcQQ", LESSON_VIDEO)),
            "Field cannot be more than 11 characters long."
        );
    }

    #[test]
    fn valid_field_has_empty_message() {
        assert_eq!(error_message(&FieldErrors::default()), "");
    }
}
