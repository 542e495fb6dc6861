//! Per-type required-field checks, run before any template is rendered.
//! A request that fails here never reaches the generation API.

use crate::errors::AppError;
use crate::readings::models::{non_blank, BirthDetails, ReadingRequest, ReadingType};

/// Validates the type-specific required-field set:
///
/// - `natal`, `health`: complete `birthDetailsPartner1`
/// - `matching`: complete `birthDetailsPartner1` AND `birthDetailsPartner2`
/// - `daily_horoscope`: `zodiacSign`
/// - `numerology`: `numerologyDetails.name` and `.dob`
///
/// Each failure names the missing field set in the 400 message.
pub fn validate(request: &ReadingRequest) -> Result<(), AppError> {
    match request.reading_type {
        ReadingType::Natal | ReadingType::Health => require_birth_details(
            request.birth_details_partner1.as_ref(),
            "birthDetailsPartner1",
        ),
        ReadingType::Matching => {
            require_birth_details(
                request.birth_details_partner1.as_ref(),
                "birthDetailsPartner1",
            )?;
            require_birth_details(
                request.birth_details_partner2.as_ref(),
                "birthDetailsPartner2",
            )
        }
        ReadingType::DailyHoroscope => match non_blank(&request.zodiac_sign) {
            Some(_) => Ok(()),
            None => Err(AppError::Validation(
                "zodiacSign is required for daily_horoscope readings".to_string(),
            )),
        },
        ReadingType::Numerology => {
            let Some(details) = &request.numerology_details else {
                return Err(AppError::Validation(
                    "numerologyDetails (name, dob) is required for numerology readings".to_string(),
                ));
            };

            let mut missing = Vec::new();
            if non_blank(&details.name).is_none() {
                missing.push("name");
            }
            if non_blank(&details.dob).is_none() {
                missing.push("dob");
            }

            if missing.is_empty() {
                Ok(())
            } else {
                Err(AppError::Validation(format!(
                    "numerologyDetails is missing: {}",
                    missing.join(", ")
                )))
            }
        }
    }
}

/// Requires a complete birth-details block: dob, tob, and city.
/// `name` stays optional throughout.
fn require_birth_details(
    block: Option<&BirthDetails>,
    field_name: &str,
) -> Result<(), AppError> {
    let Some(details) = block else {
        return Err(AppError::Validation(format!(
            "{field_name} (dob, tob, city) is required for this reading type"
        )));
    };

    let mut missing = Vec::new();
    if non_blank(&details.dob).is_none() {
        missing.push("dob");
    }
    if non_blank(&details.tob).is_none() {
        missing.push("tob");
    }
    if non_blank(&details.city).is_none() {
        missing.push("city");
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "{field_name} is missing: {}",
            missing.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readings::models::NumerologyDetails;

    fn complete_details(name: Option<&str>) -> BirthDetails {
        BirthDetails {
            name: name.map(String::from),
            dob: Some("1990-04-12".to_string()),
            tob: Some("06:45".to_string()),
            city: Some("Pune".to_string()),
        }
    }

    fn base_request(reading_type: ReadingType) -> ReadingRequest {
        ReadingRequest {
            reading_type,
            birth_details_partner1: None,
            birth_details_partner2: None,
            user_query: None,
            year_input: None,
            previous_reading: None,
            zodiac_sign: None,
            numerology_details: None,
        }
    }

    fn error_message(result: Result<(), AppError>) -> String {
        match result {
            Err(AppError::Validation(msg)) => msg,
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_natal_requires_partner1() {
        let request = base_request(ReadingType::Natal);
        let msg = error_message(validate(&request));
        assert!(msg.contains("birthDetailsPartner1"));
    }

    #[test]
    fn test_natal_with_complete_details_passes() {
        let mut request = base_request(ReadingType::Natal);
        request.birth_details_partner1 = Some(complete_details(Some("Asha")));
        assert!(validate(&request).is_ok());
    }

    #[test]
    fn test_name_is_optional() {
        let mut request = base_request(ReadingType::Natal);
        request.birth_details_partner1 = Some(complete_details(None));
        assert!(validate(&request).is_ok());
    }

    #[test]
    fn test_partial_birth_details_names_missing_fields() {
        let mut request = base_request(ReadingType::Health);
        request.birth_details_partner1 = Some(BirthDetails {
            name: None,
            dob: Some("1990-04-12".to_string()),
            tob: None,
            city: Some("  ".to_string()), // blank counts as missing
        });
        let msg = error_message(validate(&request));
        assert!(msg.contains("tob"));
        assert!(msg.contains("city"));
        assert!(!msg.contains("dob"));
    }

    #[test]
    fn test_matching_requires_both_partners() {
        let mut request = base_request(ReadingType::Matching);
        request.birth_details_partner1 = Some(complete_details(Some("Asha")));
        let msg = error_message(validate(&request));
        assert!(msg.contains("birthDetailsPartner2"));
    }

    #[test]
    fn test_matching_with_both_partners_passes() {
        let mut request = base_request(ReadingType::Matching);
        request.birth_details_partner1 = Some(complete_details(Some("Asha")));
        request.birth_details_partner2 = Some(complete_details(Some("Rohan")));
        assert!(validate(&request).is_ok());
    }

    #[test]
    fn test_daily_horoscope_requires_zodiac_sign() {
        let request = base_request(ReadingType::DailyHoroscope);
        let msg = error_message(validate(&request));
        assert!(msg.contains("zodiacSign"));
    }

    #[test]
    fn test_daily_horoscope_ignores_chart_fields() {
        let mut request = base_request(ReadingType::DailyHoroscope);
        request.zodiac_sign = Some("Leo".to_string());
        assert!(validate(&request).is_ok());
    }

    #[test]
    fn test_numerology_requires_details_block() {
        let request = base_request(ReadingType::Numerology);
        let msg = error_message(validate(&request));
        assert!(msg.contains("numerologyDetails"));
    }

    #[test]
    fn test_numerology_requires_name_and_dob() {
        let mut request = base_request(ReadingType::Numerology);
        request.numerology_details = Some(NumerologyDetails {
            name: Some("Asha".to_string()),
            dob: None,
        });
        let msg = error_message(validate(&request));
        assert!(msg.contains("dob"));
        assert!(!msg.contains("name,"));
    }

    #[test]
    fn test_numerology_complete_passes() {
        let mut request = base_request(ReadingType::Numerology);
        request.numerology_details = Some(NumerologyDetails {
            name: Some("Asha".to_string()),
            dob: Some("1990-04-12".to_string()),
        });
        assert!(validate(&request).is_ok());
    }
}
