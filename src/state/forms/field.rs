//! Lead form field value objects

use serde::{Deserialize, Serialize};

/// How a field is edited on the render surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text input
    Text,
    /// Fixed list of options, cycled with arrow keys
    Select,
}

/// Identifier for every field of the lead form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    Email,
    Company,
    InterestLevel,
    ProjectType,
    Message,
}

impl FieldId {
    pub const ALL: [FieldId; 6] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Company,
        FieldId::InterestLevel,
        FieldId::ProjectType,
        FieldId::Message,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Email => "Work Email",
            Self::Company => "Company",
            Self::InterestLevel => "Interest Level",
            Self::ProjectType => "Project Type",
            Self::Message => "Project Details (Optional)",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "John Smith",
            Self::Email => "john@company.com",
            Self::Company => "Your Company Name",
            Self::InterestLevel | Self::ProjectType => "Select...",
            Self::Message => {
                "Tell us about your energy storage needs, timeline, or any specific questions..."
            }
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(
            self,
            Self::Name | Self::Email | Self::Company | Self::InterestLevel
        )
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Message)
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::InterestLevel | Self::ProjectType => FieldKind::Select,
            _ => FieldKind::Text,
        }
    }

    /// Option values offered by a select field (empty for text fields)
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            Self::InterestLevel => &InterestLevel::VALUES,
            Self::ProjectType => &ProjectType::VALUES,
            _ => &[],
        }
    }

    /// Human-readable label for a stored option value
    pub fn option_label(&self, value: &str) -> Option<&'static str> {
        match self {
            Self::InterestLevel => InterestLevel::from_value(value).map(|l| l.label()),
            Self::ProjectType => ProjectType::from_value(value).map(|t| t.label()),
            _ => None,
        }
    }

    /// Value that follows `current` when cycling a select field.
    /// The unset state ("") sits before the first option.
    pub fn next_option(&self, current: &str) -> String {
        let options = self.options();
        if options.is_empty() {
            return current.to_string();
        }
        match options.iter().position(|v| *v == current) {
            Some(idx) if idx + 1 < options.len() => options[idx + 1].to_string(),
            Some(_) => String::new(),
            None => options[0].to_string(),
        }
    }

    /// Value that precedes `current` when cycling a select field
    pub fn prev_option(&self, current: &str) -> String {
        let options = self.options();
        if options.is_empty() {
            return current.to_string();
        }
        match options.iter().position(|v| *v == current) {
            Some(0) => String::new(),
            Some(idx) => options[idx - 1].to_string(),
            None => options[options.len() - 1].to_string(),
        }
    }
}

/// How far along a visitor is with their storage project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterestLevel {
    Exploring,
    Evaluating,
    Planning,
    Ready,
}

impl InterestLevel {
    pub const VALUES: [&'static str; 4] = ["exploring", "evaluating", "planning", "ready"];

    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "exploring" => Some(Self::Exploring),
            "evaluating" => Some(Self::Evaluating),
            "planning" => Some(Self::Planning),
            "ready" => Some(Self::Ready),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Exploring => "Just Exploring",
            Self::Evaluating => "Actively Evaluating",
            Self::Planning => "Planning a Project",
            Self::Ready => "Ready to Start",
        }
    }
}

/// Kind of storage deployment the lead is asking about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectType {
    Utility,
    Commercial,
    Microgrid,
    Ev,
    Other,
}

impl ProjectType {
    pub const VALUES: [&'static str; 5] = ["utility", "commercial", "microgrid", "ev", "other"];

    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "utility" => Some(Self::Utility),
            "commercial" => Some(Self::Commercial),
            "microgrid" => Some(Self::Microgrid),
            "ev" => Some(Self::Ev),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Utility => "Utility Scale",
            Self::Commercial => "Commercial & Industrial",
            Self::Microgrid => "Microgrid",
            Self::Ev => "EV Charging",
            Self::Other => "Other",
        }
    }
}

/// Snapshot of every lead form value.
///
/// Values are kept exactly as last written; select fields hold the option
/// value string (or "" when unset). Updates go through [`with_field`],
/// which returns a new snapshot and leaves `self` untouched.
///
/// [`with_field`]: LeadFormFields::with_field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadFormFields {
    pub name: String,
    pub email: String,
    pub company: String,
    pub interest_level: String,
    pub project_type: String,
    pub message: String,
}

impl LeadFormFields {
    /// Current raw value of a field
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Company => &self.company,
            FieldId::InterestLevel => &self.interest_level,
            FieldId::ProjectType => &self.project_type,
            FieldId::Message => &self.message,
        }
    }

    /// New snapshot with one field replaced
    pub fn with_field(&self, field: FieldId, value: impl Into<String>) -> Self {
        let value = value.into();
        let mut next = self.clone();
        match field {
            FieldId::Name => next.name = value,
            FieldId::Email => next.email = value,
            FieldId::Company => next.company = value,
            FieldId::InterestLevel => next.interest_level = value,
            FieldId::ProjectType => next.project_type = value,
            FieldId::Message => next.message = value,
        }
        next
    }

    pub fn interest_level(&self) -> Option<InterestLevel> {
        InterestLevel::from_value(&self.interest_level)
    }

    pub fn project_type(&self) -> Option<ProjectType> {
        ProjectType::from_value(&self.project_type)
    }

    /// Text shown for a field on the render surface
    pub fn display_value(&self, field: FieldId) -> String {
        let raw = self.get(field);
        match field.kind() {
            FieldKind::Text => raw.to_string(),
            FieldKind::Select => field
                .option_label(raw)
                .map(str::to_string)
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod field_id {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_required_fields() {
            let required: Vec<FieldId> = FieldId::ALL
                .into_iter()
                .filter(|f| f.is_required())
                .collect();
            assert_eq!(
                required,
                vec![
                    FieldId::Name,
                    FieldId::Email,
                    FieldId::Company,
                    FieldId::InterestLevel
                ]
            );
        }

        #[test]
        fn test_only_message_is_multiline() {
            for field in FieldId::ALL {
                assert_eq!(field.is_multiline(), field == FieldId::Message);
            }
        }

        #[test]
        fn test_select_fields_have_options() {
            assert_eq!(FieldId::InterestLevel.options().len(), 4);
            assert_eq!(FieldId::ProjectType.options().len(), 5);
            assert!(FieldId::Name.options().is_empty());
        }

        #[test]
        fn test_next_option_cycles_through_unset() {
            let field = FieldId::InterestLevel;
            assert_eq!(field.next_option(""), "exploring");
            assert_eq!(field.next_option("exploring"), "evaluating");
            assert_eq!(field.next_option("ready"), "");
        }

        #[test]
        fn test_prev_option_cycles_through_unset() {
            let field = FieldId::ProjectType;
            assert_eq!(field.prev_option(""), "other");
            assert_eq!(field.prev_option("utility"), "");
            assert_eq!(field.prev_option("ev"), "microgrid");
        }

        #[test]
        fn test_cycling_text_field_keeps_value() {
            assert_eq!(FieldId::Company.next_option("Acme"), "Acme");
            assert_eq!(FieldId::Company.prev_option("Acme"), "Acme");
        }
    }

    mod options {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_every_listed_value_parses() {
            for value in InterestLevel::VALUES {
                assert!(InterestLevel::from_value(value).is_some(), "{value}");
            }
            for value in ProjectType::VALUES {
                assert!(ProjectType::from_value(value).is_some(), "{value}");
            }
            assert!(InterestLevel::from_value("someday").is_none());
            assert_eq!(
                InterestLevel::from_value("planning"),
                Some(InterestLevel::Planning)
            );
        }

        #[test]
        fn test_project_type_labels() {
            assert_eq!(ProjectType::Commercial.label(), "Commercial & Industrial");
            assert_eq!(ProjectType::Ev.label(), "EV Charging");
        }
    }

    mod lead_form_fields {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_with_field_replaces_only_that_field() {
            let before = LeadFormFields::default().with_field(FieldId::Company, "Acme Corp");
            let after = before.with_field(FieldId::Name, "Jane Doe");

            assert_eq!(before.name, "");
            assert_eq!(after.name, "Jane Doe");
            assert_eq!(after.company, "Acme Corp");
            assert_eq!(
                after,
                LeadFormFields {
                    name: "Jane Doe".to_string(),
                    company: "Acme Corp".to_string(),
                    ..Default::default()
                }
            );
        }

        #[test]
        fn test_last_write_wins() {
            let fields = LeadFormFields::default()
                .with_field(FieldId::Email, "a@b.com")
                .with_field(FieldId::Message, "first")
                .with_field(FieldId::Email, "jane@acme.com");
            assert_eq!(fields.get(FieldId::Email), "jane@acme.com");
            assert_eq!(fields.get(FieldId::Message), "first");
        }

        #[test]
        fn test_get_matches_every_field() {
            let mut fields = LeadFormFields::default();
            for (idx, field) in FieldId::ALL.into_iter().enumerate() {
                fields = fields.with_field(field, format!("v{idx}"));
            }
            for (idx, field) in FieldId::ALL.into_iter().enumerate() {
                assert_eq!(fields.get(field), format!("v{idx}"));
            }
        }

        #[test]
        fn test_typed_accessors() {
            let fields = LeadFormFields::default()
                .with_field(FieldId::InterestLevel, "planning")
                .with_field(FieldId::ProjectType, "bogus");
            assert_eq!(fields.interest_level(), Some(InterestLevel::Planning));
            assert_eq!(fields.project_type(), None);
        }

        #[test]
        fn test_display_value_uses_option_label() {
            let fields = LeadFormFields::default()
                .with_field(FieldId::ProjectType, "microgrid")
                .with_field(FieldId::Name, "Jane");
            assert_eq!(fields.display_value(FieldId::ProjectType), "Microgrid");
            assert_eq!(fields.display_value(FieldId::InterestLevel), "");
            assert_eq!(fields.display_value(FieldId::Name), "Jane");
        }

        #[test]
        fn test_serializes_with_camel_case_keys() {
            let fields = LeadFormFields::default().with_field(FieldId::InterestLevel, "ready");
            let json = serde_json::to_value(&fields).unwrap();
            assert_eq!(json["interestLevel"], "ready");
            assert_eq!(json["projectType"], "");
        }
    }
}
