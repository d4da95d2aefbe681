//! Client-side checks run before a lead is handed to the transport

use super::field::{FieldId, LeadFormFields};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Local part, a single `@`, and a dotted domain with no whitespace.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("email pattern is valid")
});

/// Why a single field failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationErrorKind {
    #[error("This field is required")]
    Missing,
    #[error("Enter a valid email address")]
    InvalidEmail,
    #[error("Choose one of the listed options")]
    UnknownOption,
}

/// A validation failure attached to the field that caused it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: FieldId,
    pub kind: ValidationErrorKind,
}

/// Every field error found in one validation pass, in form order
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", summarize(.errors))]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn for_field(&self, field: FieldId) -> Option<ValidationErrorKind> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.kind)
    }

    /// Drop the error for a field the visitor has since edited.
    /// Returns true when nothing is left.
    pub fn clear_field(&mut self, field: FieldId) -> bool {
        self.errors.retain(|e| e.field != field);
        self.errors.is_empty()
    }

    /// One-line message for the error dialog
    pub fn summary(&self) -> String {
        summarize(&self.errors)
    }
}

/// Missing fields are listed by label; filled but malformed ones also say why
fn summarize(errors: &[FieldError]) -> String {
    let missing: Vec<&str> = errors
        .iter()
        .filter(|e| e.kind == ValidationErrorKind::Missing)
        .map(|e| e.field.label())
        .collect();
    let malformed: Vec<String> = errors
        .iter()
        .filter(|e| e.kind != ValidationErrorKind::Missing)
        .map(|e| format!("{} ({})", e.field.label(), e.kind))
        .collect();

    let mut parts = Vec::new();
    if !missing.is_empty() {
        parts.push(format!(
            "Please complete the required fields: {}",
            missing.join(", ")
        ));
    }
    if !malformed.is_empty() {
        parts.push(format!("Please check: {}", malformed.join(", ")));
    }
    parts.join(". ")
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email.trim())
}

fn check_field(fields: &LeadFormFields, field: FieldId) -> Option<ValidationErrorKind> {
    let value = fields.get(field).trim();
    if value.is_empty() {
        return field.is_required().then_some(ValidationErrorKind::Missing);
    }

    match field {
        FieldId::Email if !is_valid_email(value) => Some(ValidationErrorKind::InvalidEmail),
        FieldId::InterestLevel if fields.interest_level().is_none() => {
            Some(ValidationErrorKind::UnknownOption)
        }
        FieldId::ProjectType if fields.project_type().is_none() => {
            Some(ValidationErrorKind::UnknownOption)
        }
        _ => None,
    }
}

/// Validate a snapshot before submission
pub fn validate(fields: &LeadFormFields) -> Result<(), ValidationErrors> {
    let errors: Vec<FieldError> = FieldId::ALL
        .into_iter()
        .filter_map(|field| check_field(fields, field).map(|kind| FieldError { field, kind }))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors { errors })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_lead() -> LeadFormFields {
        LeadFormFields {
            name: "Jane Doe".to_string(),
            email: "jane@acme.com".to_string(),
            company: "Acme Corp".to_string(),
            interest_level: "planning".to_string(),
            project_type: "utility".to_string(),
            message: String::new(),
        }
    }

    mod email {
        use super::*;

        #[test]
        fn test_accepts_common_addresses() {
            assert!(is_valid_email("jane@acme.com"));
            assert!(is_valid_email("a@b.com"));
            assert!(is_valid_email("first.last+bess@grid.energy.co"));
            assert!(is_valid_email("  padded@acme.com  "));
        }

        #[test]
        fn test_rejects_malformed_addresses() {
            assert!(!is_valid_email(""));
            assert!(!is_valid_email("jane"));
            assert!(!is_valid_email("jane@"));
            assert!(!is_valid_email("@acme.com"));
            assert!(!is_valid_email("jane@acme"));
            assert!(!is_valid_email("jane@@acme.com"));
            assert!(!is_valid_email("jane doe@acme.com"));
            assert!(!is_valid_email("jane@acme..com"));
        }
    }

    mod validate_fields {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_complete_lead_passes() {
            assert!(validate(&complete_lead()).is_ok());
        }

        #[test]
        fn test_optional_fields_may_be_empty() {
            let lead = LeadFormFields {
                project_type: String::new(),
                message: String::new(),
                ..complete_lead()
            };
            assert!(validate(&lead).is_ok());
        }

        #[test]
        fn test_empty_form_reports_every_required_field() {
            let errors = validate(&LeadFormFields::default()).unwrap_err();
            let fields: Vec<FieldId> = errors.errors().iter().map(|e| e.field).collect();
            assert_eq!(
                fields,
                vec![
                    FieldId::Name,
                    FieldId::Email,
                    FieldId::Company,
                    FieldId::InterestLevel
                ]
            );
            assert!(errors
                .errors()
                .iter()
                .all(|e| e.kind == ValidationErrorKind::Missing));
        }

        #[test]
        fn test_whitespace_only_counts_as_missing() {
            let lead = LeadFormFields {
                company: "   ".to_string(),
                ..complete_lead()
            };
            let errors = validate(&lead).unwrap_err();
            assert_eq!(
                errors.for_field(FieldId::Company),
                Some(ValidationErrorKind::Missing)
            );
        }

        #[test]
        fn test_bad_email_is_reported() {
            let lead = LeadFormFields {
                email: "jane-at-acme".to_string(),
                ..complete_lead()
            };
            let errors = validate(&lead).unwrap_err();
            assert_eq!(errors.errors().len(), 1);
            assert_eq!(
                errors.for_field(FieldId::Email),
                Some(ValidationErrorKind::InvalidEmail)
            );
        }

        #[test]
        fn test_unknown_options_are_reported() {
            let lead = LeadFormFields {
                interest_level: "someday".to_string(),
                project_type: "nuclear".to_string(),
                ..complete_lead()
            };
            let errors = validate(&lead).unwrap_err();
            assert_eq!(
                errors.for_field(FieldId::InterestLevel),
                Some(ValidationErrorKind::UnknownOption)
            );
            assert_eq!(
                errors.for_field(FieldId::ProjectType),
                Some(ValidationErrorKind::UnknownOption)
            );
        }
    }

    mod validation_errors {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_summary_lists_missing_labels() {
            let lead = LeadFormFields {
                name: String::new(),
                company: "  ".to_string(),
                ..complete_lead()
            };
            let errors = validate(&lead).unwrap_err();
            assert_eq!(
                errors.summary(),
                "Please complete the required fields: Full Name, Company"
            );
            assert_eq!(errors.to_string(), errors.summary());
        }

        #[test]
        fn test_summary_explains_malformed_values() {
            let lead = LeadFormFields {
                email: "nope".to_string(),
                ..complete_lead()
            };
            let errors = validate(&lead).unwrap_err();
            assert_eq!(
                errors.summary(),
                "Please check: Work Email (Enter a valid email address)"
            );
        }

        #[test]
        fn test_summary_mixes_missing_and_malformed() {
            let lead = LeadFormFields {
                name: String::new(),
                project_type: "hydro".to_string(),
                ..complete_lead()
            };
            let errors = validate(&lead).unwrap_err();
            assert_eq!(
                errors.to_string(),
                "Please complete the required fields: Full Name. \
                 Please check: Project Type (Choose one of the listed options)"
            );
        }

        #[test]
        fn test_clear_field_removes_error() {
            let mut errors = validate(&LeadFormFields {
                name: String::new(),
                company: String::new(),
                ..complete_lead()
            })
            .unwrap_err();

            assert!(!errors.clear_field(FieldId::Name));
            assert!(errors.for_field(FieldId::Name).is_none());
            assert!(errors.clear_field(FieldId::Company));
        }

        #[test]
        fn test_kind_messages() {
            assert_eq!(
                ValidationErrorKind::Missing.to_string(),
                "This field is required"
            );
            assert_eq!(
                ValidationErrorKind::InvalidEmail.to_string(),
                "Enter a valid email address"
            );
        }
    }
}
