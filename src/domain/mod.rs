use std::fmt;

use serde::Serialize;

/// The closed set of fields a contact form knows about, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    FirstName,
    LastName,
    Company,
    Website,
    Email,
    Message,
}

impl FieldName {
    pub const ALL: [FieldName; 6] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Company,
        FieldName::Website,
        FieldName::Email,
        FieldName::Message,
    ];

    pub const REQUIRED: [FieldName; 4] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Email,
        FieldName::Message,
    ];

    /// The camelCase key used when the record is serialized.
    pub fn key(self) -> &'static str {
        match self {
            FieldName::FirstName => "firstName",
            FieldName::LastName => "lastName",
            FieldName::Company => "company",
            FieldName::Website => "website",
            FieldName::Email => "email",
            FieldName::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldName::FirstName => "First name",
            FieldName::LastName => "Last name",
            FieldName::Company => "Company",
            FieldName::Website => "Website",
            FieldName::Email => "Email",
            FieldName::Message => "Message",
        }
    }

    pub fn hint(self) -> Option<&'static str> {
        match self {
            FieldName::Company => Some("optional"),
            FieldName::Website => Some("https://…"),
            FieldName::Email => Some("you@example.com"),
            _ => None,
        }
    }

    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }

    pub fn accepts_newlines(self) -> bool {
        matches!(self, FieldName::Message)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The live, unvalidated candidate: every field holds whatever the user has
/// typed so far, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawContactInput {
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub website: String,
    pub email: String,
    pub message: String,
}

impl RawContactInput {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::Company => &self.company,
            FieldName::Website => &self.website,
            FieldName::Email => &self.email,
            FieldName::Message => &self.message,
        }
    }

    pub fn get_mut(&mut self, field: FieldName) -> &mut String {
        match field {
            FieldName::FirstName => &mut self.first_name,
            FieldName::LastName => &mut self.last_name,
            FieldName::Company => &mut self.company,
            FieldName::Website => &mut self.website,
            FieldName::Email => &mut self.email,
            FieldName::Message => &mut self.message,
        }
    }

    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }
}

/// A validated, normalized record. Absent optional fields serialize to no key
/// at all rather than an empty value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub email: String,
    pub message: String,
}
