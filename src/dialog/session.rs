//! Session state and the dialog turn handler.

use rand::seq::SliceRandom;

use crate::channels::SessionId;
use crate::config::BotConfig;
use crate::dialog::step::DialogStep;
use crate::plan;
use crate::profile::Profile;
use crate::texts::{self, Locale, MessageKey};
use crate::validate::{self, GoalCheck};

/// One outbound message produced by a turn.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: String,
    /// Quick-reply tokens the transport should offer, in order.
    pub choices: Option<Vec<String>>,
}

impl Reply {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            choices: None,
        }
    }

    pub fn with_choices<I, S>(text: impl Into<String>, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            text: text.into(),
            choices: Some(choices.into_iter().map(Into::into).collect()),
        }
    }
}

/// Side effect the caller must perform after a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEffect {
    /// Nothing beyond delivering the replies.
    None,
    /// A plan was produced; (re-)register the progress reminder.
    PlanReady,
    /// The session ended; drop it and cancel its reminder.
    SessionEnded,
}

/// Result of feeding one inbound message to a session.
#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    pub replies: Vec<Reply>,
    pub effect: TurnEffect,
}

impl Turn {
    fn one(reply: Reply) -> Self {
        Self {
            replies: vec![reply],
            effect: TurnEffect::None,
        }
    }
}

/// One user's dialog session: locale, current step, collected profile, and
/// the retry counter for the current step.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: SessionId,
    pub locale: Locale,
    pub step: DialogStep,
    pub profile: Profile,
    pub retries: u32,
}

impl Session {
    pub fn new(id: SessionId) -> Self {
        Self {
            id,
            locale: Locale::default(),
            step: DialogStep::default(),
            profile: Profile::default(),
            retries: 0,
        }
    }

    /// Begin (or fully restart) the dialog from the language step. Clears the
    /// profile, the retry counter, and the locale choice.
    pub fn start(&mut self) -> Turn {
        self.locale = Locale::default();
        self.step = DialogStep::ChooseLanguage;
        self.profile.clear();
        self.retries = 0;
        Turn::one(self.step_prompt(DialogStep::ChooseLanguage))
    }

    /// Out-of-band cancel hook: ends the session from any dialog state.
    pub fn handle_cancel(&self) -> Turn {
        Turn {
            replies: vec![Reply::new(texts::text(self.locale, MessageKey::Cancel))],
            effect: TurnEffect::SessionEnded,
        }
    }

    /// Feed one inbound answer to the current step.
    pub fn handle_text(&mut self, raw: &str, config: &BotConfig) -> Turn {
        match self.step {
            DialogStep::ChooseLanguage => self.on_language(raw, config),
            DialogStep::CollectAge => self.on_age(raw, config),
            DialogStep::CollectGender => self.on_gender(raw, config),
            DialogStep::CollectHeight => self.on_height(raw, config),
            DialogStep::CollectWeight => self.on_weight(raw, config),
            DialogStep::CollectActivity => self.on_activity(raw, config),
            DialogStep::CollectGoal => self.on_goal(raw, config),
            DialogStep::PlanReady => self.on_plan_ready(raw),
            DialogStep::AwaitingRestartChoice => self.on_restart_choice(raw),
        }
    }

    // ── Step handlers ───────────────────────────────────────────────

    fn on_language(&mut self, raw: &str, config: &BotConfig) -> Turn {
        let [english, russian] = texts::language_options();
        let chosen = if validate::matches_token(raw, english) {
            Some(Locale::En)
        } else if validate::matches_token(raw, russian) {
            Some(Locale::Ru)
        } else {
            None
        };
        match chosen {
            Some(locale) => {
                self.locale = locale;
                let next = self.advance();
                Turn::one(self.step_prompt(next))
            }
            None => self.reject(self.step_prompt(DialogStep::ChooseLanguage), config),
        }
    }

    fn on_age(&mut self, raw: &str, config: &BotConfig) -> Turn {
        match validate::parse_age(raw, self.locale) {
            Ok(age) => {
                self.profile.age = Some(age);
                let next = self.advance();
                Turn::one(self.step_prompt(next))
            }
            Err(e) => self.reject(Reply::new(texts::text(self.locale, e.message_key())), config),
        }
    }

    fn on_gender(&mut self, raw: &str, config: &BotConfig) -> Turn {
        match validate::parse_gender(raw, self.locale) {
            Ok(gender) => {
                self.profile.gender = Some(gender);
                let next = self.advance();
                Turn::one(self.step_prompt(next))
            }
            Err(e) => self.reject(
                Reply::with_choices(
                    texts::text(self.locale, e.message_key()),
                    texts::gender_options(self.locale),
                ),
                config,
            ),
        }
    }

    fn on_height(&mut self, raw: &str, config: &BotConfig) -> Turn {
        match validate::parse_height(raw, self.locale) {
            Ok(height) => {
                self.profile.height_cm = Some(height);
                let next = self.advance();
                Turn::one(self.step_prompt(next))
            }
            Err(e) => self.reject(Reply::new(texts::text(self.locale, e.message_key())), config),
        }
    }

    fn on_weight(&mut self, raw: &str, config: &BotConfig) -> Turn {
        match validate::parse_weight(raw, self.locale) {
            Ok(weight) => {
                self.profile.weight_kg = Some(weight);
                let next = self.advance();
                Turn {
                    replies: vec![self.tip_reply(), self.step_prompt(next)],
                    effect: TurnEffect::None,
                }
            }
            Err(e) => self.reject(Reply::new(texts::text(self.locale, e.message_key())), config),
        }
    }

    fn on_activity(&mut self, raw: &str, config: &BotConfig) -> Turn {
        match validate::parse_activity(raw, self.locale) {
            Ok(activity) => {
                self.profile.activity = Some(activity);
                let next = self.advance();
                Turn {
                    replies: vec![self.tip_reply(), self.step_prompt(next)],
                    effect: TurnEffect::None,
                }
            }
            Err(e) => self.reject(
                Reply::with_choices(
                    texts::text(self.locale, e.message_key()),
                    texts::activity_options(self.locale),
                ),
                config,
            ),
        }
    }

    fn on_goal(&mut self, raw: &str, config: &BotConfig) -> Turn {
        match validate::parse_goal(raw, self.locale) {
            Ok(GoalCheck::Accepted(goal)) => {
                self.profile.weekly_goal_kg = Some(goal);
                self.retries = 0;
                self.finish_plan()
            }
            // Soft branch: re-prompt with the warning, counter untouched.
            Ok(GoalCheck::TooAggressive) => {
                Turn::one(Reply::new(texts::text(self.locale, MessageKey::GoalWarning)))
            }
            Err(e) => self.reject(Reply::new(texts::text(self.locale, e.message_key())), config),
        }
    }

    fn on_plan_ready(&mut self, raw: &str) -> Turn {
        if validate::matches_token(raw, texts::recalculate_token(self.locale)) {
            self.start()
        } else {
            Turn::one(Reply::new(texts::text(self.locale, MessageKey::InvalidInput)))
        }
    }

    fn on_restart_choice(&mut self, raw: &str) -> Turn {
        let [start_over, use_previous] = texts::restart_options(self.locale);
        if validate::matches_token(raw, start_over) {
            self.start()
        } else if validate::matches_token(raw, use_previous) {
            self.resume_previous()
        } else {
            // No retry escalation of its own.
            Turn::one(Reply::new(texts::text(self.locale, MessageKey::InvalidInput)))
        }
    }

    // ── Transitions ─────────────────────────────────────────────────

    /// Record a successful answer: reset the counter and move to the next
    /// collection step.
    fn advance(&mut self) -> DialogStep {
        self.retries = 0;
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        self.step
    }

    /// Record a rejected answer; at the threshold, escalate to the restart
    /// choice instead of re-prompting.
    fn reject(&mut self, reply: Reply, config: &BotConfig) -> Turn {
        self.retries += 1;
        if self.retries >= config.retry_threshold {
            return self.escalate();
        }
        Turn::one(reply)
    }

    fn escalate(&mut self) -> Turn {
        self.step = DialogStep::AwaitingRestartChoice;
        Turn::one(self.step_prompt(DialogStep::AwaitingRestartChoice))
    }

    /// Resume at the earliest step whose field is missing; with a full
    /// profile the stored goal is reused and the plan is recomputed at once.
    fn resume_previous(&mut self) -> Turn {
        self.retries = 0;
        let missing = [
            (self.profile.age.is_none(), DialogStep::CollectAge),
            (self.profile.gender.is_none(), DialogStep::CollectGender),
            (self.profile.height_cm.is_none(), DialogStep::CollectHeight),
            (self.profile.weight_kg.is_none(), DialogStep::CollectWeight),
            (self.profile.activity.is_none(), DialogStep::CollectActivity),
            (
                self.profile.weekly_goal_kg.is_none(),
                DialogStep::CollectGoal,
            ),
        ]
        .into_iter()
        .find_map(|(absent, step)| absent.then_some(step));

        match missing {
            Some(step) => {
                self.step = step;
                Turn::one(self.step_prompt(step))
            }
            None => self.finish_plan(),
        }
    }

    /// Compute and present the plan, entering PlanReady.
    fn finish_plan(&mut self) -> Turn {
        match self.profile.complete() {
            Some(complete) => {
                let plan = plan::plan_for(&complete);
                self.step = DialogStep::PlanReady;
                Turn {
                    replies: vec![
                        Reply::new(texts::plan_ready(
                            self.locale,
                            plan.maintenance_kcal,
                            plan.target_kcal,
                        )),
                        self.step_prompt(DialogStep::PlanReady),
                    ],
                    effect: TurnEffect::PlanReady,
                }
            }
            None => self.resume_previous(),
        }
    }

    // ── Prompts ─────────────────────────────────────────────────────

    /// The prompt (and keyboard, where the step has one) shown on entering a
    /// step.
    fn step_prompt(&self, step: DialogStep) -> Reply {
        let locale = self.locale;
        match step {
            DialogStep::ChooseLanguage => Reply::with_choices(
                texts::text(locale, MessageKey::ChooseLanguage),
                texts::language_options(),
            ),
            DialogStep::CollectAge => Reply::new(texts::text(locale, MessageKey::AgePrompt)),
            DialogStep::CollectGender => Reply::with_choices(
                texts::text(locale, MessageKey::GenderPrompt),
                texts::gender_options(locale),
            ),
            DialogStep::CollectHeight => Reply::new(texts::text(locale, MessageKey::HeightPrompt)),
            DialogStep::CollectWeight => Reply::new(texts::text(locale, MessageKey::WeightPrompt)),
            DialogStep::CollectActivity => Reply::with_choices(
                texts::text(locale, MessageKey::ActivityPrompt),
                texts::activity_options(locale),
            ),
            DialogStep::CollectGoal => Reply::new(texts::text(locale, MessageKey::GoalPrompt)),
            DialogStep::PlanReady => Reply::with_choices(
                texts::text(locale, MessageKey::RecalculatePrompt),
                [texts::recalculate_token(locale)],
            ),
            DialogStep::AwaitingRestartChoice => {
                let prompt = texts::text(locale, MessageKey::RestartPrompt);
                let summary = self.profile.summary();
                let text = if summary.is_empty() {
                    prompt.to_string()
                } else {
                    format!("{prompt}\n\n{summary}")
                };
                Reply {
                    text,
                    choices: Some(
                        texts::restart_options(locale)
                            .iter()
                            .map(|s| s.to_string())
                            .collect(),
                    ),
                }
            }
        }
    }

    fn tip_reply(&self) -> Reply {
        let tip = texts::tips(self.locale)
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or_default();
        Reply::new(format!(
            "{}{tip}",
            texts::text(self.locale, MessageKey::NutritionTip)
        ))
    }
}
