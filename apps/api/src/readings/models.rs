//! Inbound data model for the Reading API.
//!
//! Conditionally-required fields are `Option` on purpose: presence is
//! enforced per reading type in `validation.rs`, so callers get a 400
//! naming the missing field set instead of an opaque decode failure.

use serde::Deserialize;

/// Discriminator selecting which prompt template and required-field set
/// applies. Wire values are snake_case (`"daily_horoscope"` etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingType {
    Natal,
    Health,
    Matching,
    DailyHoroscope,
    Numerology,
}

/// One person's birth data. `name` is optional; the rest is required
/// whenever the block itself is required by the reading type.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BirthDetails {
    pub name: Option<String>,
    pub dob: Option<String>,
    pub tob: Option<String>,
    pub city: Option<String>,
}

/// Name and date of birth driving a numerology reading.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NumerologyDetails {
    pub name: Option<String>,
    pub dob: Option<String>,
}

/// The inbound payload for `POST /api/v1/readings`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingRequest {
    pub reading_type: ReadingType,
    #[serde(default)]
    pub birth_details_partner1: Option<BirthDetails>,
    #[serde(default)]
    pub birth_details_partner2: Option<BirthDetails>,
    /// Free-text focus question. With `previous_reading` it selects the
    /// follow-up template; alone it is woven into the chart prompts.
    #[serde(default)]
    pub user_query: Option<String>,
    /// Target year for the annual forecast template.
    #[serde(default)]
    pub year_input: Option<i32>,
    /// A prior reading's text, carried back for follow-up questions.
    #[serde(default)]
    pub previous_reading: Option<String>,
    /// Required for `daily_horoscope` only.
    #[serde(default)]
    pub zodiac_sign: Option<String>,
    /// Required for `numerology` only.
    #[serde(default)]
    pub numerology_details: Option<NumerologyDetails>,
}

/// Treats absent and blank strings alike; callers routinely send `""`.
pub fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_type_wire_values() {
        assert!(matches!(
            serde_json::from_str::<ReadingType>(r#""natal""#).unwrap(),
            ReadingType::Natal
        ));
        assert!(matches!(
            serde_json::from_str::<ReadingType>(r#""daily_horoscope""#).unwrap(),
            ReadingType::DailyHoroscope
        ));
        assert!(serde_json::from_str::<ReadingType>(r#""tarot""#).is_err());
    }

    #[test]
    fn test_request_deserializes_camel_case_fields() {
        let json = r#"{
            "readingType": "matching",
            "birthDetailsPartner1": {"name": "Asha", "dob": "1990-04-12", "tob": "06:45", "city": "Pune"},
            "birthDetailsPartner2": {"dob": "1991-11-02", "tob": "23:10", "city": "Jaipur"}
        }"#;

        let request: ReadingRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.reading_type, ReadingType::Matching);
        let p1 = request.birth_details_partner1.unwrap();
        assert_eq!(p1.name.as_deref(), Some("Asha"));
        let p2 = request.birth_details_partner2.unwrap();
        assert!(p2.name.is_none());
        assert_eq!(p2.city.as_deref(), Some("Jaipur"));
    }

    #[test]
    fn test_request_without_reading_type_fails() {
        let json = r#"{"userQuery": "What about my career?"}"#;
        assert!(serde_json::from_str::<ReadingRequest>(json).is_err());
    }

    #[test]
    fn test_optional_fields_default_to_none() {
        let request: ReadingRequest =
            serde_json::from_str(r#"{"readingType": "natal"}"#).unwrap();
        assert!(request.birth_details_partner1.is_none());
        assert!(request.user_query.is_none());
        assert!(request.year_input.is_none());
        assert!(request.previous_reading.is_none());
    }

    #[test]
    fn test_non_blank_filters_whitespace() {
        assert_eq!(non_blank(&Some("  Leo ".to_string())), Some("Leo"));
        assert_eq!(non_blank(&Some("   ".to_string())), None);
        assert_eq!(non_blank(&None), None);
    }
}
