//! The collected user profile and its typed fields.

use serde::{Deserialize, Serialize};

/// Gender, as used by the basal metabolic estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Male => "male",
            Self::Female => "female",
        };
        write!(f, "{s}")
    }
}

/// Activity level, ordered by expenditure multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    SuperActive,
}

impl ActivityLevel {
    /// All levels in ascending multiplier order. Matches the token order in
    /// the locale tables.
    pub const ALL: [ActivityLevel; 5] = [
        Self::Sedentary,
        Self::LightlyActive,
        Self::ModeratelyActive,
        Self::VeryActive,
        Self::SuperActive,
    ];

    /// Expenditure multiplier applied to the basal estimate.
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::LightlyActive => 1.375,
            Self::ModeratelyActive => 1.55,
            Self::VeryActive => 1.725,
            Self::SuperActive => 1.9,
        }
    }
}

impl std::fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Sedentary => "sedentary",
            Self::LightlyActive => "lightly active",
            Self::ModeratelyActive => "moderately active",
            Self::VeryActive => "very active",
            Self::SuperActive => "super active",
        };
        write!(f, "{s}")
    }
}

/// Answers collected so far for one session.
///
/// A field is present only after its answer passed validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub activity: Option<ActivityLevel>,
    pub weekly_goal_kg: Option<f64>,
}

impl Profile {
    /// Drop every collected answer.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// The fully collected profile, if every field is present.
    pub fn complete(&self) -> Option<CompleteProfile> {
        Some(CompleteProfile {
            age: self.age?,
            gender: self.gender?,
            height_cm: self.height_cm?,
            weight_kg: self.weight_kg?,
            activity: self.activity?,
            weekly_goal_kg: self.weekly_goal_kg?,
        })
    }

    /// Human-readable recap of the fields collected so far, one per line.
    /// Empty when nothing has been collected yet.
    pub fn summary(&self) -> String {
        let mut lines = Vec::new();
        if let Some(age) = self.age {
            lines.push(format!("Age: {age}"));
        }
        if let Some(gender) = self.gender {
            lines.push(format!("Gender: {gender}"));
        }
        if let Some(height) = self.height_cm {
            lines.push(format!("Height: {height} cm"));
        }
        if let Some(weight) = self.weight_kg {
            lines.push(format!("Weight: {weight} kg"));
        }
        if let Some(activity) = self.activity {
            lines.push(format!("Activity level: {activity}"));
        }
        if let Some(goal) = self.weekly_goal_kg {
            lines.push(format!("Goal: {goal} kg/week"));
        }
        lines.join("\n")
    }
}

/// A profile with every field collected. The calculation engine only accepts
/// this type, so it can never see a partial profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompleteProfile {
    pub age: u32,
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity: ActivityLevel,
    pub weekly_goal_kg: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_profile() -> Profile {
        Profile {
            age: Some(25),
            gender: Some(Gender::Male),
            height_cm: Some(170.0),
            weight_kg: Some(70.0),
            activity: Some(ActivityLevel::Sedentary),
            weekly_goal_kg: Some(0.5),
        }
    }

    #[test]
    fn multipliers_are_ascending() {
        let multipliers: Vec<f64> = ActivityLevel::ALL.iter().map(|a| a.multiplier()).collect();
        assert_eq!(multipliers, vec![1.2, 1.375, 1.55, 1.725, 1.9]);
    }

    #[test]
    fn complete_requires_every_field() {
        let mut profile = full_profile();
        assert!(profile.complete().is_some());

        profile.weekly_goal_kg = None;
        assert!(profile.complete().is_none());

        profile.clear();
        assert!(profile.complete().is_none());
        assert!(profile.age.is_none());
    }

    #[test]
    fn summary_lists_only_present_fields() {
        let mut profile = Profile::default();
        assert!(profile.summary().is_empty());

        profile.age = Some(34);
        profile.height_cm = Some(182.0);
        let summary = profile.summary();
        assert!(summary.contains("Age: 34"));
        assert!(summary.contains("Height: 182 cm"));
        assert!(!summary.contains("Gender"));
        assert!(!summary.contains("Weight"));
        assert_eq!(summary.lines().count(), 2);
    }

    #[test]
    fn summary_of_full_profile_has_six_lines() {
        assert_eq!(full_profile().summary().lines().count(), 6);
    }

    #[test]
    fn profile_serde_roundtrip() {
        let profile = full_profile();
        let json = serde_json::to_string(&profile).unwrap();
        let parsed: Profile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.age, Some(25));
        assert_eq!(parsed.gender, Some(Gender::Male));
        assert_eq!(parsed.activity, Some(ActivityLevel::Sedentary));
        assert_eq!(parsed.weekly_goal_kg, Some(0.5));
    }
}
