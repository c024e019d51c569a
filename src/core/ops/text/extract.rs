//! Pattern-based information extraction

use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;

use crate::core::{CoreError, CoreResult};

// Cached regexes for each extraction kind
static RE_EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b").expect("valid regex")
});
static RE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"http[s]?://(?:[a-zA-Z]|[0-9]|[$-_@.&+]|[!*\(\),]|(?:%[0-9a-fA-F][0-9a-fA-F]))+")
        .expect("valid regex")
});
static RE_PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:\+?1[-.\s]?)?\(?([0-9]{3})\)?[-.\s]?([0-9]{3})[-.\s]?([0-9]{4})\b")
        .expect("valid regex")
});
static RE_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:\d{1,2}[/-]\d{1,2}[/-]\d{2,4}|\d{4}[/-]\d{1,2}[/-]\d{1,2})\b")
        .expect("valid regex")
});
static RE_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d+(?:\.\d+)?\b").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractKind {
    Emails,
    Urls,
    PhoneNumbers,
    Dates,
    Numbers,
}

impl ExtractKind {
    pub const ALL: [ExtractKind; 5] = [
        ExtractKind::Emails,
        ExtractKind::Urls,
        ExtractKind::PhoneNumbers,
        ExtractKind::Dates,
        ExtractKind::Numbers,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractKind::Emails => "emails",
            ExtractKind::Urls => "urls",
            ExtractKind::PhoneNumbers => "phone_numbers",
            ExtractKind::Dates => "dates",
            ExtractKind::Numbers => "numbers",
        }
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            ExtractKind::Emails => &*RE_EMAIL,
            ExtractKind::Urls => &*RE_URL,
            ExtractKind::PhoneNumbers => &*RE_PHONE,
            ExtractKind::Dates => &*RE_DATE,
            ExtractKind::Numbers => &*RE_NUMBER,
        }
    }

    /// All matches in order of appearance, duplicates kept
    pub fn extract(&self, text: &str) -> CoreResult<Vec<String>> {
        let re = self.pattern();
        if *self != ExtractKind::PhoneNumbers {
            return Ok(re.find_iter(text).map(|m| m.as_str().to_string()).collect());
        }

        re.captures_iter(text)
            .map(|caps| match (caps.get(1), caps.get(2), caps.get(3)) {
                (Some(area), Some(exchange), Some(line)) => Ok(format!(
                    "({}) {}-{}",
                    area.as_str(),
                    exchange.as_str(),
                    line.as_str()
                )),
                _ => Err(CoreError::internal("phone pattern matched without all capture groups")),
            })
            .collect()
    }
}

impl FromStr for ExtractKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|k| k.as_str() == s).ok_or_else(|| {
            let available: Vec<&str> = Self::ALL.iter().map(|k| k.as_str()).collect();
            CoreError::invalid(format!(
                "Unknown extraction type '{}'. Available: {}",
                s,
                available.join(", ")
            ))
        })
    }
}

/// Parse `kind` and extract matches from `text`
pub fn extract(text: &str, kind: &str) -> CoreResult<Vec<String>> {
    kind.parse::<ExtractKind>()?.extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;

    #[test]
    fn test_phone_numbers_are_normalized() {
        let found = extract("Call 555-123-4567 or (555) 123-4567", "phone_numbers").unwrap();
        assert_eq!(found, vec!["(555) 123-4567", "(555) 123-4567"]);
    }

    #[test]
    fn test_phone_number_with_country_code() {
        let found = extract("Reach us at +1 800.555.0199 today", "phone_numbers").unwrap();
        assert_eq!(found, vec!["(800) 555-0199"]);
    }

    #[test]
    fn test_emails() {
        let found = extract("Mail a.b@example.com, then c@test.org.", "emails").unwrap();
        assert_eq!(found, vec!["a.b@example.com", "c@test.org"]);
    }

    #[test]
    fn test_urls() {
        let found = extract("See https://example.com/path?q=1 and http://x.io", "urls").unwrap();
        assert_eq!(found, vec!["https://example.com/path?q=1", "http://x.io"]);
    }

    #[test]
    fn test_dates() {
        let found = extract("Due 12/25/2024, moved to 2025-01-15.", "dates").unwrap();
        assert_eq!(found, vec!["12/25/2024", "2025-01-15"]);
    }

    #[test]
    fn test_numbers_keep_duplicates() {
        let found = extract("3 apples, 3.5 pears and 3 more", "numbers").unwrap();
        assert_eq!(found, vec!["3", "3.5", "3"]);
    }

    #[test]
    fn test_no_matches() {
        assert!(extract("nothing here", "emails").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_kind_lists_valid_kinds() {
        let err = extract("text", "addresses").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        let msg = err.to_string();
        assert!(msg.contains("addresses"));
        for kind in ExtractKind::ALL {
            assert!(msg.contains(kind.as_str()));
        }
    }
}
