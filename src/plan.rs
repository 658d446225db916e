//! Diet plan calculation.
//!
//! Pure and deterministic: basal metabolic estimate, activity-adjusted daily
//! expenditure, and the daily deficit implied by the weekly weight-loss goal.

use serde::Serialize;

use crate::profile::{ActivityLevel, CompleteProfile, Gender};

/// Energy equivalent of one kilogram of body mass, in kcal.
const KCAL_PER_KG: f64 = 7700.0;

/// The computed plan, truncated to whole calories for display.
///
/// `target_kcal` is not clamped; an aggressive goal on a low baseline can
/// push it below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DietPlan {
    /// Daily maintenance intake: basal estimate times activity multiplier.
    pub maintenance_kcal: i64,
    /// Daily intake after subtracting the goal deficit.
    pub target_kcal: i64,
}

/// Basal metabolic estimate in kcal/day, gender-branched.
pub fn basal_metabolic_rate(age: u32, gender: Gender, weight_kg: f64, height_cm: f64) -> f64 {
    let age = f64::from(age);
    match gender {
        Gender::Male => 88.362 + 13.397 * weight_kg + 4.799 * height_cm - 5.677 * age,
        Gender::Female => 447.593 + 9.247 * weight_kg + 3.098 * height_cm - 4.330 * age,
    }
}

/// Daily expenditure: basal estimate scaled by the activity multiplier.
pub fn daily_expenditure(bmr: f64, activity: ActivityLevel) -> f64 {
    bmr * activity.multiplier()
}

/// Build the plan for a fully collected profile.
pub fn plan_for(profile: &CompleteProfile) -> DietPlan {
    let bmr = basal_metabolic_rate(
        profile.age,
        profile.gender,
        profile.weight_kg,
        profile.height_cm,
    );
    let expenditure = daily_expenditure(bmr, profile.activity);
    let daily_deficit = profile.weekly_goal_kg * KCAL_PER_KG / 7.0;
    DietPlan {
        maintenance_kcal: expenditure as i64,
        target_kcal: (expenditure - daily_deficit) as i64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_profile() -> CompleteProfile {
        CompleteProfile {
            age: 25,
            gender: Gender::Male,
            height_cm: 170.0,
            weight_kg: 70.0,
            activity: ActivityLevel::Sedentary,
            weekly_goal_kg: 0.5,
        }
    }

    #[test]
    fn male_reference_values() {
        let bmr = basal_metabolic_rate(25, Gender::Male, 70.0, 170.0);
        assert!((bmr - 1700.057).abs() < 1e-9, "bmr = {bmr}");

        let plan = plan_for(&reference_profile());
        assert_eq!(plan.maintenance_kcal, 2040);
        // Deficit: 0.5 kg/week * 7700 kcal/kg / 7 days = 550 kcal/day.
        assert_eq!(plan.target_kcal, 1490);
    }

    #[test]
    fn female_branch_uses_its_own_coefficients() {
        let bmr = basal_metabolic_rate(30, Gender::Female, 60.0, 165.0);
        let expected = 447.593 + 9.247 * 60.0 + 3.098 * 165.0 - 4.330 * 30.0;
        assert!((bmr - expected).abs() < 1e-9);
        assert!(bmr < basal_metabolic_rate(30, Gender::Male, 60.0, 165.0));
    }

    #[test]
    fn expenditure_scales_with_activity() {
        let bmr = 1500.0;
        assert!((daily_expenditure(bmr, ActivityLevel::Sedentary) - 1800.0).abs() < 1e-9);
        assert!((daily_expenditure(bmr, ActivityLevel::SuperActive) - 2850.0).abs() < 1e-9);
    }

    #[test]
    fn target_is_not_clamped_below_zero() {
        let profile = CompleteProfile {
            age: 80,
            gender: Gender::Female,
            height_cm: 150.0,
            weight_kg: 40.0,
            activity: ActivityLevel::Sedentary,
            weekly_goal_kg: 1.0,
        };
        let plan = plan_for(&profile);
        // 1 kg/week implies an 1100 kcal/day deficit, far above this baseline.
        assert!(plan.target_kcal < plan.maintenance_kcal - 1000);
        assert!(plan.target_kcal < 500);
    }

    #[test]
    fn outputs_truncate_toward_zero() {
        // Sedentary female, values chosen so the raw numbers are fractional.
        let profile = CompleteProfile {
            age: 40,
            gender: Gender::Female,
            height_cm: 160.5,
            weight_kg: 55.3,
            activity: ActivityLevel::LightlyActive,
            weekly_goal_kg: 0.3,
        };
        let bmr = basal_metabolic_rate(40, Gender::Female, 55.3, 160.5);
        let expenditure = daily_expenditure(bmr, ActivityLevel::LightlyActive);
        let plan = plan_for(&profile);
        assert_eq!(plan.maintenance_kcal, expenditure.trunc() as i64);
        assert_eq!(
            plan.target_kcal,
            (expenditure - 0.3 * 7700.0 / 7.0).trunc() as i64
        );
    }
}
