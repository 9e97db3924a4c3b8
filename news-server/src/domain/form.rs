use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};

/// Accepted shapes for the `created_on` field.
pub const DATE_INPUT_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Raw field values as submitted. Missing fields deserialize to empty
/// strings so validation, not deserialization, reports them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewsItemFormData {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub created_on: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidDate,
}

impl FieldError {
    pub fn message(&self) -> &'static str {
        match self {
            FieldError::Required => "This field is required.",
            FieldError::InvalidDate => "Enter a valid date.",
        }
    }
}

// Templates see the human-readable message, not the variant name.
impl Serialize for FieldError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

/// Per-field validation outcome; a field is `None` when it passed.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct FormErrors {
    pub title: Option<FieldError>,
    pub text: Option<FieldError>,
    pub created_on: Option<FieldError>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.text.is_none() && self.created_on.is_none()
    }
}

/// Output of a successful validation, ready to be persisted.
#[derive(Debug, Clone)]
pub struct ValidNewsItem {
    pub title: String,
    pub text: String,
    pub created_on: NaiveDate,
}

impl NewsItemFormData {
    /// Checks every field and collects all failures, so the form can be
    /// re-rendered with one annotation per field. Pure: no store access.
    pub fn validate(&self) -> Result<ValidNewsItem, FormErrors> {
        let mut errors = FormErrors::default();

        let title = self.title.trim();
        if title.is_empty() {
            errors.title = Some(FieldError::Required);
        }

        let text = self.text.trim();
        if text.is_empty() {
            errors.text = Some(FieldError::Required);
        }

        let raw_date = self.created_on.trim();
        let created_on = if raw_date.is_empty() {
            errors.created_on = Some(FieldError::Required);
            None
        } else {
            let parsed = parse_date(raw_date);
            if parsed.is_none() {
                errors.created_on = Some(FieldError::InvalidDate);
            }
            parsed
        };

        match created_on {
            Some(date) if errors.is_empty() => Ok(ValidNewsItem {
                title: title.to_owned(),
                text: text.to_owned(),
                created_on: date,
            }),
            _ => Err(errors),
        }
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    DATE_INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}
