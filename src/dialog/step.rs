//! Dialog step machine — tracks which collection step a session is in.

use serde::{Deserialize, Serialize};

/// The steps of the data-collection dialog.
///
/// Collection progresses linearly: ChooseLanguage → CollectAge →
/// CollectGender → CollectHeight → CollectWeight → CollectActivity →
/// CollectGoal → PlanReady. AwaitingRestartChoice is entered from any
/// collection step after repeated invalid answers, and PlanReady loops back
/// to ChooseLanguage on recalculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogStep {
    #[default]
    ChooseLanguage,
    CollectAge,
    CollectGender,
    CollectHeight,
    CollectWeight,
    CollectActivity,
    CollectGoal,
    PlanReady,
    AwaitingRestartChoice,
}

impl DialogStep {
    /// The next step in the linear collection order, if any.
    pub fn next(&self) -> Option<DialogStep> {
        use DialogStep::*;
        match self {
            ChooseLanguage => Some(CollectAge),
            CollectAge => Some(CollectGender),
            CollectGender => Some(CollectHeight),
            CollectHeight => Some(CollectWeight),
            CollectWeight => Some(CollectActivity),
            CollectActivity => Some(CollectGoal),
            CollectGoal => Some(PlanReady),
            PlanReady | AwaitingRestartChoice => None,
        }
    }
}

impl std::fmt::Display for DialogStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::ChooseLanguage => "choose_language",
            Self::CollectAge => "collect_age",
            Self::CollectGender => "collect_gender",
            Self::CollectHeight => "collect_height",
            Self::CollectWeight => "collect_weight",
            Self::CollectActivity => "collect_activity",
            Self::CollectGoal => "collect_goal",
            Self::PlanReady => "plan_ready",
            Self::AwaitingRestartChoice => "awaiting_restart_choice",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_walks_the_collection_order() {
        use DialogStep::*;
        let expected = [
            CollectAge,
            CollectGender,
            CollectHeight,
            CollectWeight,
            CollectActivity,
            CollectGoal,
            PlanReady,
        ];
        let mut current = ChooseLanguage;
        for expected_next in expected {
            let next = current.next().unwrap();
            assert_eq!(next, expected_next);
            current = next;
        }
        assert!(current.next().is_none());
        assert!(AwaitingRestartChoice.next().is_none());
    }

    #[test]
    fn display_matches_serde() {
        use DialogStep::*;
        let steps = [
            ChooseLanguage,
            CollectAge,
            CollectGender,
            CollectHeight,
            CollectWeight,
            CollectActivity,
            CollectGoal,
            PlanReady,
            AwaitingRestartChoice,
        ];
        for step in steps {
            let display = format!("{step}");
            let json = serde_json::to_string(&step).unwrap();
            assert_eq!(json, format!("\"{display}\""), "mismatch for {step:?}");
        }
    }

    #[test]
    fn default_is_language_selection() {
        assert_eq!(DialogStep::default(), DialogStep::ChooseLanguage);
    }
}
