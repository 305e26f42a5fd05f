//! Contact form values, field errors, sanitization and validation

use super::field::ContactField;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Current values of all contact-form fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSnapshot {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormSnapshot {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    /// True when every field is empty (not merely blank)
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// Field name to message mapping. Empty means valid.
///
/// Keys are wire names rather than [`ContactField`] so that errors the server
/// reports for fields this client does not know about are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap(BTreeMap<String, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: ContactField) -> Option<&str> {
        self.0.get(field.name()).map(String::as_str)
    }

    pub fn contains(&self, field: ContactField) -> bool {
        self.0.contains_key(field.name())
    }

    pub fn remove(&mut self, field: ContactField) -> Option<String> {
        self.0.remove(field.name())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// First invalid known field in validation order
    pub fn first_invalid(&self) -> Option<ContactField> {
        ContactField::ALL.into_iter().find(|f| self.contains(*f))
    }

    /// Entries whose key is not one of the form's fields
    pub fn unknown_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter()
            .filter(|(k, _)| ContactField::from_name(k).is_none())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Strip characters that must never reach the endpoint. Does not trim.
pub fn sanitize(raw: &str) -> String {
    raw.chars().filter(|c| !matches!(c, '<' | '>')).collect()
}

struct LengthRule {
    label: &'static str,
    min: Option<usize>,
    max: usize,
}

impl ContactField {
    fn length_rule(&self) -> LengthRule {
        match self {
            Self::Name => LengthRule {
                label: "Name",
                min: Some(2),
                max: 50,
            },
            Self::Email => LengthRule {
                label: "Email",
                min: None,
                max: 100,
            },
            Self::Subject => LengthRule {
                label: "Subject",
                min: Some(3),
                max: 100,
            },
            Self::Message => LengthRule {
                label: "Message",
                min: Some(10),
                max: 1000,
            },
        }
    }
}

/// Validate a snapshot. Rules per field run in the order
/// required, too short, too long, format; the first failure wins.
pub fn validate(snapshot: &FormSnapshot) -> ErrorMap {
    let mut errors = ErrorMap::new();

    for field in ContactField::ALL {
        if let Some(message) = check_field(field, snapshot.get(field)) {
            errors.insert(field.name(), message);
        }
    }

    errors
}

fn check_field(field: ContactField, raw: &str) -> Option<String> {
    let value = raw.trim();
    let rule = field.length_rule();
    let len = value.chars().count();

    if value.is_empty() {
        return Some(format!("{} is required", rule.label));
    }
    if let Some(min) = rule.min {
        if len < min {
            return Some(format!("{} must be at least {min} characters", rule.label));
        }
    }
    if len > rule.max {
        return Some(format!(
            "{} must be less than {} characters",
            rule.label, rule.max
        ));
    }
    if field == ContactField::Email && !is_valid_email(value) {
        return Some("Please enter a valid email address".to_string());
    }

    None
}

/// `local@domain.tld`: exactly one `@`, no whitespace, and a `.` inside the
/// domain with at least one character on each side.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
