//! Template selection and prompt rendering.
//!
//! Exactly one template applies per request, decided by a fixed precedence
//! chain; templates are never combined. Selection and rendering are pure so
//! both can be tested without touching the network.

use crate::readings::models::{non_blank, BirthDetails, ReadingRequest, ReadingType};
use crate::readings::prompts::{
    ANNUAL_FORECAST_PROMPT_TEMPLATE, ANNUAL_FORECAST_SYSTEM, DAILY_HOROSCOPE_PROMPT_TEMPLATE,
    DAILY_HOROSCOPE_SYSTEM, FOLLOW_UP_PROMPT_TEMPLATE, FOLLOW_UP_SYSTEM, HEALTH_PROMPT_TEMPLATE,
    HEALTH_SYSTEM, MATCHING_PROMPT_TEMPLATE, MATCHING_SYSTEM, NATAL_PROMPT_TEMPLATE, NATAL_SYSTEM,
    NUMEROLOGY_PROMPT_TEMPLATE, NUMEROLOGY_SYSTEM,
};

/// One composed (system, user) instruction pair, ready for the generation API.
#[derive(Debug, Clone)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

/// The seven templates. Selection never combines them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Matching,
    Health,
    FollowUp,
    AnnualForecast,
    DailyHoroscope,
    Numerology,
    Natal,
}

impl TemplateKind {
    /// Daily horoscope and numerology readings omit chart data entirely.
    pub fn uses_chart_data(self) -> bool {
        !matches!(self, TemplateKind::DailyHoroscope | TemplateKind::Numerology)
    }
}

/// Picks the template by fixed precedence:
/// matching, health, follow-up (previousReading AND userQuery), annual
/// forecast (yearInput), daily horoscope, numerology, natal default.
pub fn select_template(request: &ReadingRequest) -> TemplateKind {
    if request.reading_type == ReadingType::Matching {
        return TemplateKind::Matching;
    }
    if request.reading_type == ReadingType::Health {
        return TemplateKind::Health;
    }
    if non_blank(&request.previous_reading).is_some() && non_blank(&request.user_query).is_some() {
        return TemplateKind::FollowUp;
    }
    if request.year_input.is_some() {
        return TemplateKind::AnnualForecast;
    }
    match request.reading_type {
        ReadingType::DailyHoroscope => TemplateKind::DailyHoroscope,
        ReadingType::Numerology => TemplateKind::Numerology,
        // Matching and Health returned above; only Natal can reach here.
        _ => TemplateKind::Natal,
    }
}

/// Renders the selected template against the request: fills the template's
/// placeholders, then appends the chart-data block for partner 1 (and
/// partner 2 for matching) unless the template kind omits chart data.
pub fn render_prompts(kind: TemplateKind, request: &ReadingRequest) -> PromptPair {
    let chart = if kind.uses_chart_data() {
        chart_block(request, kind == TemplateKind::Matching)
    } else {
        String::new()
    };

    let (system, user) = match kind {
        TemplateKind::Matching => (
            MATCHING_SYSTEM,
            MATCHING_PROMPT_TEMPLATE.replace("{chart_data}", &chart),
        ),
        TemplateKind::Health => (
            HEALTH_SYSTEM,
            HEALTH_PROMPT_TEMPLATE
                .replace("{focus}", &focus_line(&request.user_query))
                .replace("{chart_data}", &chart),
        ),
        TemplateKind::FollowUp => (
            FOLLOW_UP_SYSTEM,
            FOLLOW_UP_PROMPT_TEMPLATE
                .replace(
                    "{previous_reading}",
                    non_blank(&request.previous_reading).unwrap_or_default(),
                )
                .replace(
                    "{user_query}",
                    non_blank(&request.user_query).unwrap_or_default(),
                )
                .replace("{chart_data}", &chart),
        ),
        TemplateKind::AnnualForecast => (
            ANNUAL_FORECAST_SYSTEM,
            ANNUAL_FORECAST_PROMPT_TEMPLATE
                .replace(
                    "{year}",
                    &request
                        .year_input
                        .map(|y| y.to_string())
                        .unwrap_or_default(),
                )
                .replace("{chart_data}", &chart),
        ),
        TemplateKind::DailyHoroscope => (
            DAILY_HOROSCOPE_SYSTEM,
            DAILY_HOROSCOPE_PROMPT_TEMPLATE.replace(
                "{zodiac_sign}",
                non_blank(&request.zodiac_sign).unwrap_or_default(),
            ),
        ),
        TemplateKind::Numerology => {
            let details = request.numerology_details.clone().unwrap_or_default();
            (
                NUMEROLOGY_SYSTEM,
                NUMEROLOGY_PROMPT_TEMPLATE
                    .replace("{name}", non_blank(&details.name).unwrap_or_default())
                    .replace("{dob}", non_blank(&details.dob).unwrap_or_default()),
            )
        }
        TemplateKind::Natal => (
            NATAL_SYSTEM,
            NATAL_PROMPT_TEMPLATE
                .replace("{focus}", &focus_line(&request.user_query))
                .replace("{chart_data}", &chart),
        ),
    };

    PromptPair {
        system: system.to_string(),
        user: user.trim_end().to_string(),
    }
}

/// Formats the chart-data block appended to chart-based templates.
/// Partner labels only appear for dual-chart (matching) prompts.
fn chart_block(request: &ReadingRequest, include_partner2: bool) -> String {
    let mut blocks = Vec::new();

    if let Some(p1) = &request.birth_details_partner1 {
        let label = if include_partner2 {
            "BIRTH DETAILS (PARTNER 1)"
        } else {
            "BIRTH DETAILS"
        };
        blocks.push(details_block(label, p1));
    }

    if include_partner2 {
        if let Some(p2) = &request.birth_details_partner2 {
            blocks.push(details_block("BIRTH DETAILS (PARTNER 2)", p2));
        }
    }

    blocks.join("\n\n")
}

fn details_block(label: &str, details: &BirthDetails) -> String {
    let mut block = format!("{label}:");
    if let Some(name) = non_blank(&details.name) {
        block.push_str(&format!("\nName: {name}"));
    }
    if let Some(dob) = non_blank(&details.dob) {
        block.push_str(&format!("\nDate of birth: {dob}"));
    }
    if let Some(tob) = non_blank(&details.tob) {
        block.push_str(&format!("\nTime of birth: {tob}"));
    }
    if let Some(city) = non_blank(&details.city) {
        block.push_str(&format!("\nCity of birth: {city}"));
    }
    block
}

fn focus_line(user_query: &Option<String>) -> String {
    match non_blank(user_query) {
        Some(query) => format!("\nFocus especially on this question: {query}"),
        None => String::new(),
    }
}
