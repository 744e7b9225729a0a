// Local contact lookup
use crate::domain::model::CallerRecord;

/// Suffix that marks a number as a known contact.
pub const DEFAULT_MARKER_SUFFIX: &str = "1234";

/// Synchronous, side-effect free lookup of local contacts.
///
/// There is no device contact store behind this: a number counts as a
/// contact when it ends with the marker suffix.
#[derive(Debug, Clone)]
pub struct ContactDirectory {
    marker_suffix: String,
}

impl ContactDirectory {
    pub fn new() -> Self {
        Self::with_marker_suffix(DEFAULT_MARKER_SUFFIX)
    }

    pub fn with_marker_suffix(suffix: impl Into<String>) -> Self {
        Self {
            marker_suffix: suffix.into(),
        }
    }

    pub fn marker_suffix(&self) -> &str {
        &self.marker_suffix
    }

    pub fn is_known_contact(&self, phone_number: &str) -> bool {
        !self.marker_suffix.is_empty() && phone_number.ends_with(&self.marker_suffix)
    }

    /// Record sourced from local contacts. Never fails.
    pub fn contact_record(&self, phone_number: &str) -> CallerRecord {
        CallerRecord {
            name: Some("Contact Name".to_string()),
            location: Some("From Contacts".to_string()),
            ..CallerRecord::new(phone_number)
        }
    }
}

impl Default for ContactDirectory {
    fn default() -> Self {
        Self::new()
    }
}
