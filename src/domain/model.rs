use serde::{Deserialize, Serialize};

/// Raw phone number as received from the call event. Compared byte for byte,
/// no normalization is applied.
pub type PhoneNumber = String;

/// Name carried by the placeholder record returned when resolution fails.
pub const LOOKUP_FAILED_NAME: &str = "Lookup Failed";

/// Spam likelihood above which a caller is flagged to the user.
pub const SPAM_WARNING_THRESHOLD: u8 = 75;

/// Resolved identity and reputation of a phone number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CallerRecord {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    pub phone_number: PhoneNumber,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub spam_likelihood: Option<u8>, // 0..=100
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tags: Option<Vec<String>>,
    /// Set only on copies handed out from the cache, never on stored entries.
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub cached: bool,
}

impl CallerRecord {
    pub fn new(phone_number: impl Into<PhoneNumber>) -> Self {
        Self {
            phone_number: phone_number.into(),
            ..Self::default()
        }
    }

    /// Degraded record returned on timeout or lookup failure.
    pub fn lookup_failed(phone_number: impl Into<PhoneNumber>) -> Self {
        Self {
            name: Some(LOOKUP_FAILED_NAME.to_string()),
            ..Self::new(phone_number)
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.name.as_deref() == Some(LOOKUP_FAILED_NAME)
            && self.location.is_none()
            && self.spam_likelihood.is_none()
            && self.tags.is_none()
    }

    pub fn is_likely_spam(&self) -> bool {
        self.spam_likelihood
            .map(|s| s > SPAM_WARNING_THRESHOLD)
            .unwrap_or(false)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags
            .as_ref()
            .map(|tags| tags.iter().any(|t| t == tag))
            .unwrap_or(false)
    }

    /// Name if known, else the number, else "Unknown".
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ if !self.phone_number.is_empty() => &self.phone_number,
            _ => "Unknown",
        }
    }

    /// Copy of this record marked as served from the cache.
    pub fn as_cached(&self) -> Self {
        Self {
            cached: true,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_failed_record_is_degraded() {
        let record = CallerRecord::lookup_failed("+15550000");
        assert_eq!(record.phone_number, "+15550000");
        assert_eq!(record.name.as_deref(), Some("Lookup Failed"));
        assert!(record.is_degraded());
        assert!(!record.cached);
    }

    #[test]
    fn spam_warning_is_strictly_above_threshold() {
        let mut record = CallerRecord::new("1");
        assert!(!record.is_likely_spam());
        record.spam_likelihood = Some(75);
        assert!(!record.is_likely_spam());
        record.spam_likelihood = Some(76);
        assert!(record.is_likely_spam());
    }

    #[test]
    fn display_name_falls_back_to_number() {
        let mut record = CallerRecord::new("+15550001");
        assert_eq!(record.display_name(), "+15550001");
        record.name = Some("Alice".to_string());
        assert_eq!(record.display_name(), "Alice");
        assert_eq!(CallerRecord::new("").display_name(), "Unknown");
    }

    #[test]
    fn json_omits_absent_fields_and_unset_cached_flag() {
        let record = CallerRecord::lookup_failed("+15550002");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Lookup Failed", "phoneNumber": "+15550002" })
        );

        let cached = serde_json::to_value(record.as_cached()).unwrap();
        assert_eq!(cached["cached"], serde_json::json!(true));
    }
}
