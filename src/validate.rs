//! Per-field answer validation.
//!
//! Each validator takes the raw text and the session locale and returns a
//! typed value or a [`ValidationError`] naming the rejected field. Token
//! matching is case-insensitive via Unicode lowercasing, so the Cyrillic
//! option sets match too.

use crate::error::{Field, ValidationError};
use crate::profile::{ActivityLevel, Gender};
use crate::texts::{self, Locale};

const AGE_RANGE: std::ops::RangeInclusive<i64> = 10..=120;
const HEIGHT_RANGE: std::ops::RangeInclusive<f64> = 50.0..=250.0;
const WEIGHT_RANGE: std::ops::RangeInclusive<f64> = 30.0..=180.0;

/// Case-insensitive comparison of a raw answer against a literal token.
pub(crate) fn matches_token(raw: &str, token: &str) -> bool {
    raw.trim().to_lowercase() == token.to_lowercase()
}

/// Parse a real-valued measurement and check it against its inclusive bounds.
fn parse_bounded(
    raw: &str,
    field: Field,
    range: std::ops::RangeInclusive<f64>,
) -> Result<f64, ValidationError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::Parse { field })?;
    if !range.contains(&value) {
        return Err(ValidationError::Range { field, value });
    }
    Ok(value)
}

/// Age in whole years, within [10, 120].
pub fn parse_age(raw: &str, _locale: Locale) -> Result<u32, ValidationError> {
    let age: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::Parse { field: Field::Age })?;
    if !AGE_RANGE.contains(&age) {
        return Err(ValidationError::Range {
            field: Field::Age,
            value: age as f64,
        });
    }
    Ok(age as u32)
}

/// Gender, matched against the locale's two tokens.
pub fn parse_gender(raw: &str, locale: Locale) -> Result<Gender, ValidationError> {
    let [male, female] = texts::gender_options(locale);
    if matches_token(raw, male) {
        Ok(Gender::Male)
    } else if matches_token(raw, female) {
        Ok(Gender::Female)
    } else {
        Err(ValidationError::ChoiceMismatch {
            field: Field::Gender,
        })
    }
}

/// Height in centimeters, within [50, 250].
pub fn parse_height(raw: &str, _locale: Locale) -> Result<f64, ValidationError> {
    parse_bounded(raw, Field::Height, HEIGHT_RANGE)
}

/// Weight in kilograms, within [30, 180].
pub fn parse_weight(raw: &str, _locale: Locale) -> Result<f64, ValidationError> {
    parse_bounded(raw, Field::Weight, WEIGHT_RANGE)
}

/// Activity level, matched against the locale's five tokens in multiplier
/// order.
pub fn parse_activity(raw: &str, locale: Locale) -> Result<ActivityLevel, ValidationError> {
    let tokens = texts::activity_options(locale);
    for (token, level) in tokens.iter().zip(ActivityLevel::ALL) {
        if matches_token(raw, token) {
            return Ok(level);
        }
    }
    Err(ValidationError::ChoiceMismatch {
        field: Field::Activity,
    })
}

/// Outcome of parsing a weekly goal.
///
/// `TooAggressive` is the soft branch: syntactically valid but above the
/// recommended 1 kg/week ceiling. It re-prompts with the warning text and
/// counts as neither a success nor a failure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GoalCheck {
    Accepted(f64),
    TooAggressive,
}

/// Weekly weight-loss goal in kg. Accepts (0, 1]; values above 1 take the
/// warning branch; zero and below are rejected.
pub fn parse_goal(raw: &str, _locale: Locale) -> Result<GoalCheck, ValidationError> {
    let goal: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::Parse { field: Field::Goal })?;
    if !goal.is_finite() || goal <= 0.0 {
        return Err(ValidationError::Range {
            field: Field::Goal,
            value: goal,
        });
    }
    if goal > 1.0 {
        return Ok(GoalCheck::TooAggressive);
    }
    Ok(GoalCheck::Accepted(goal))
}
