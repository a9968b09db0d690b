//! Form buffers and presence validation.

use crate::model::record::{EntityKind, Record, RecordId};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// User-facing text shown when a commit is rejected.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields.";

/// Transient draft record collected by a screen's add form.
pub trait Draft: Default {
    /// Record produced by a successful commit.
    type Output: Record;

    /// Checks required fields. No format checks beyond what the record type
    /// needs to be constructed.
    fn validate(&self) -> Result<(), ValidationError>;

    /// Builds the full record, applying defaults for blank optional fields.
    ///
    /// Only called after `validate` succeeded.
    fn build(&self, id: RecordId) -> Self::Output;

    /// Success notification description for this draft.
    fn success_message(&self) -> String;

    /// Clears every field back to blank.
    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Draft rejected because required fields are blank or unusable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub entity: EntityKind,
    /// Required fields that were blank after normalization, in form order.
    pub missing: Vec<&'static str>,
    /// Fields present but not convertible to the record type.
    pub malformed: Vec<&'static str>,
}

impl ValidationError {
    /// Text for the error notification.
    pub fn user_message(&self) -> &'static str {
        REQUIRED_FIELDS_MESSAGE
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let entity = self.entity.display_name();
        match (self.missing.is_empty(), self.malformed.is_empty()) {
            (false, true) => write!(
                f,
                "{entity} is missing required fields: {}",
                self.missing.join(", ")
            ),
            (true, false) => write!(
                f,
                "{entity} has malformed fields: {}",
                self.malformed.join(", ")
            ),
            _ => write!(
                f,
                "{entity} is missing required fields: {}; malformed fields: {}",
                self.missing.join(", "),
                self.malformed.join(", ")
            ),
        }
    }
}

impl Error for ValidationError {}

/// Accumulates field problems for one draft.
#[derive(Debug)]
pub struct FieldCheck {
    entity: EntityKind,
    missing: Vec<&'static str>,
    malformed: Vec<&'static str>,
}

impl FieldCheck {
    pub fn new(entity: EntityKind) -> Self {
        Self {
            entity,
            missing: Vec::new(),
            malformed: Vec::new(),
        }
    }

    /// Records `field` as missing when `value` is blank after normalization.
    pub fn require(mut self, field: &'static str, value: &str) -> Self {
        if is_blank(value) {
            self.missing.push(field);
        }
        self
    }

    /// Records `field` as malformed when `condition` holds.
    pub fn malformed_if(mut self, field: &'static str, condition: bool) -> Self {
        if condition {
            self.malformed.push(field);
        }
        self
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        if self.missing.is_empty() && self.malformed.is_empty() {
            return Ok(());
        }
        Err(ValidationError {
            entity: self.entity,
            missing: self.missing,
            malformed: self.malformed,
        })
    }
}

/// Trims a form value; inner spacing is kept as typed.
pub fn normalize_field(value: &str) -> String {
    value.trim().to_string()
}

/// Trims a name-like value and collapses inner whitespace runs to one space.
///
/// Only for fields used to identify someone (member names, medication and
/// appointment owners), where `"Grace  Johnson"` must match `"Grace Johnson"`.
pub fn normalize_name(value: &str) -> String {
    WHITESPACE_RE.replace_all(value.trim(), " ").into_owned()
}

/// Trimmed value, or `default` when the field was left blank.
pub fn field_or(value: &str, default: &str) -> String {
    let trimmed = normalize_field(value);
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed
    }
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::{field_or, normalize_field, normalize_name, FieldCheck};
    use crate::model::record::EntityKind;

    #[test]
    fn normalize_field_trims_but_keeps_inner_spacing() {
        assert_eq!(normalize_field("  Dr.   Smith \n"), "Dr.   Smith");
        assert_eq!(normalize_field("\t "), "");
    }

    #[test]
    fn normalize_name_collapses_inner_whitespace() {
        assert_eq!(normalize_name("  Grace \t  Johnson \n"), "Grace Johnson");
        assert_eq!(normalize_name("   "), "");
    }

    #[test]
    fn field_or_uses_default_for_blank_values() {
        assert_eq!(field_or("   ", "TBD"), "TBD");
        assert_eq!(field_or(" Room  201 ", "TBD"), "Room  201");
    }

    #[test]
    fn field_check_reports_missing_fields_in_order() {
        let err = FieldCheck::new(EntityKind::Medication)
            .require("name", "")
            .require("dosage", "10mg")
            .require("person", "  ")
            .finish()
            .unwrap_err();
        assert_eq!(err.missing, vec!["name", "person"]);
        assert!(err.malformed.is_empty());
        assert_eq!(
            err.to_string(),
            "medication is missing required fields: name, person"
        );
    }

    #[test]
    fn field_check_passes_when_everything_is_present() {
        FieldCheck::new(EntityKind::Appointment)
            .require("date", "2024-02-01")
            .malformed_if("date", false)
            .finish()
            .expect("complete draft should pass");
    }
}
