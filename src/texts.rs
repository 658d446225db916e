//! Locale text tables, quick-reply tokens, and nutrition tips.
//!
//! Every user-facing string is looked up by a closed `(Locale, MessageKey)`
//! pair, so a missing translation is a compile error rather than a runtime
//! key miss. Token sets double as keyboard rows and as the literal answers
//! the validators accept.

use serde::{Deserialize, Serialize};

/// The language a session runs in. Chosen at the first step, reset only by a
/// full restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::En => "en",
            Self::Ru => "ru",
        };
        write!(f, "{s}")
    }
}

/// Every fixed message the dialog can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    ChooseLanguage,
    AgePrompt,
    AgeError,
    GenderPrompt,
    GenderError,
    HeightPrompt,
    HeightError,
    WeightPrompt,
    WeightError,
    ActivityPrompt,
    ActivityError,
    GoalPrompt,
    GoalError,
    GoalWarning,
    Cancel,
    RecalculatePrompt,
    RestartPrompt,
    InvalidInput,
    NutritionTip,
    ProgressReminder,
}

/// Look up a fixed message.
pub fn text(locale: Locale, key: MessageKey) -> &'static str {
    use MessageKey::*;
    match locale {
        Locale::En => match key {
            ChooseLanguage => "Please choose your language:",
            AgePrompt => "Step 1 of 6: Please provide your age (e.g., 25):",
            AgeError => "Please enter a valid age (e.g., 25).",
            GenderPrompt => "Step 2 of 6: Please specify your gender (Male or Female):",
            GenderError => "Invalid input. Please select your gender using the buttons.",
            HeightPrompt => "Step 3 of 6: Please enter your height in cm (e.g., 170):",
            HeightError => "Please enter a valid height (e.g., 170 cm).",
            WeightPrompt => "Step 4 of 6: Please enter your weight in kg (e.g., 70):",
            WeightError => "Please enter a valid weight (e.g., 70 kg).",
            ActivityPrompt => "Step 5 of 6: Please select your activity level:",
            ActivityError => "Invalid activity level. Please choose one from the options provided.",
            GoalPrompt => {
                "Step 6 of 6: Please enter your weight loss goal in kg per week (e.g., 0.5):"
            }
            GoalError => "Please enter a valid weight loss goal (e.g., 0.5 kg per week).",
            GoalWarning => {
                "Losing more than 1 kg per week is generally not recommended as it can be \
                 unhealthy. Remember, 'Patience is a virtue'. Please consider setting a more \
                 gradual goal."
            }
            Cancel => "You have canceled the conversation.",
            RecalculatePrompt => "If you would like to recalculate, please press the 'Recalculate' button.",
            RestartPrompt => {
                "You've entered incorrect values multiple times. Would you like to start over \
                 or use your previous valid inputs?"
            }
            InvalidInput => "Invalid input. Please follow the instructions.",
            NutritionTip => "Here's a nutrition tip for you: ",
            ProgressReminder => {
                "It's time to update your progress! How are you doing with your weight loss goal?"
            }
        },
        Locale::Ru => match key {
            ChooseLanguage => "Пожалуйста, выберите ваш язык:",
            AgePrompt => "Шаг 1 из 6: Пожалуйста, укажите ваш возраст (например, 25):",
            AgeError => "Пожалуйста, введите корректный возраст (например, 25).",
            GenderPrompt => "Шаг 2 из 6: Пожалуйста, укажите ваш пол (Мужской или Женский):",
            GenderError => "Неверный ввод. Пожалуйста, выберите ваш пол, используя кнопки.",
            HeightPrompt => "Шаг 3 из 6: Пожалуйста, введите ваш рост в см (например, 170):",
            HeightError => "Пожалуйста, введите корректный рост (например, 170 см).",
            WeightPrompt => "Шаг 4 из 6: Пожалуйста, введите ваш вес в кг (например, 70):",
            WeightError => "Пожалуйста, введите корректный вес (например, 70 кг).",
            ActivityPrompt => "Шаг 5 из 6: Пожалуйста, выберите ваш уровень активности:",
            ActivityError => {
                "Неверный уровень активности. Пожалуйста, выберите один из предложенных вариантов."
            }
            GoalPrompt => {
                "Шаг 6 из 6: Пожалуйста, введите вашу цель по снижению веса в кг в неделю \
                 (например, 0.5):"
            }
            GoalError => {
                "Пожалуйста, введите корректное значение для вашей цели по снижению веса \
                 (например, 0.5 кг в неделю)."
            }
            GoalWarning => {
                "Похудение более чем на 1 кг в неделю обычно не рекомендуется, так как это \
                 может быть нездорово. Помните, 'Терпение — добродетель'. Пожалуйста, \
                 рассмотрите возможность установки более постепенной цели."
            }
            Cancel => "Вы отменили разговор.",
            RecalculatePrompt => "Если вы хотите пересчитать, нажмите кнопку 'Пересчитать'.",
            RestartPrompt => {
                "Вы несколько раз ввели неверные данные. Хотите начать сначала или \
                 использовать предыдущие допустимые значения?"
            }
            InvalidInput => "Неверный ввод. Пожалуйста, следуйте инструкциям.",
            NutritionTip => "Вот совет по питанию: ",
            ProgressReminder => "Пора обновить ваши данные! Как у вас дела с достижением цели по снижению веса?",
        },
    }
}

/// The completed-plan message, with both daily intakes already truncated to
/// whole calories.
pub fn plan_ready(locale: Locale, maintenance_kcal: i64, target_kcal: i64) -> String {
    match locale {
        Locale::En => format!(
            "Your diet plan is ready!\n\
             Recommended daily calorie intake: {maintenance_kcal} calories.\n\
             Suggested daily calorie intake for weight loss: {target_kcal} calories.\n\
             Remember: 'Slow and steady wins the race.'"
        ),
        Locale::Ru => format!(
            "Ваш план диеты готов!\n\
             Рекомендуемое ежедневное потребление калорий: {maintenance_kcal} калорий.\n\
             Предлагаемое ежедневное потребление калорий для снижения веса: {target_kcal} калорий.\n\
             Помните: 'Тише едешь — дальше будешь.'"
        ),
    }
}

// ── Quick-reply token sets ──────────────────────────────────────────
//
// Order is part of the contract: the validators map tokens to enum values
// by position (gender: male/female; activity: multiplier order; restart:
// start-over/use-previous).

/// Language tokens, the same set in every locale.
pub fn language_options() -> [&'static str; 2] {
    ["English", "Русский"]
}

/// Gender tokens: male, female.
pub fn gender_options(locale: Locale) -> [&'static str; 2] {
    match locale {
        Locale::En => ["Male", "Female"],
        Locale::Ru => ["Мужской", "Женский"],
    }
}

/// Activity tokens, in ascending multiplier order.
pub fn activity_options(locale: Locale) -> [&'static str; 5] {
    match locale {
        Locale::En => [
            "Sedentary",
            "Lightly Active",
            "Moderately Active",
            "Very Active",
            "Super Active",
        ],
        Locale::Ru => [
            "Сидячий",
            "Малоактивный",
            "Умеренно активный",
            "Очень активный",
            "Суперактивный",
        ],
    }
}

/// Restart tokens: start over, use previous.
pub fn restart_options(locale: Locale) -> [&'static str; 2] {
    match locale {
        Locale::En => ["Start Over", "Use Previous"],
        Locale::Ru => ["Начать сначала", "Использовать предыдущие"],
    }
}

/// The recalculate button token.
pub fn recalculate_token(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Recalculate",
        Locale::Ru => "Пересчитать",
    }
}

/// The locale's nutrition tips.
pub fn tips(locale: Locale) -> &'static [&'static str] {
    match locale {
        Locale::En => &[
            "Drink at least 8 glasses of water daily to stay hydrated!",
            "Include a variety of fruits and vegetables in your diet to get essential vitamins and minerals.",
            "Balance your meals with protein, carbohydrates, and healthy fats.",
            "Regular physical activity helps maintain a healthy weight and boosts overall health.",
            "Try to limit sugary drinks and snacks, opting for whole foods instead.",
            "Eat more fiber-rich foods like whole grains, legumes, and vegetables to support digestion.",
            "Incorporate healthy fats, such as those from avocados, nuts, and olive oil, into your diet.",
            "Avoid skipping breakfast; it's important to fuel your body for the day ahead.",
            "Practice portion control to avoid overeating and maintain a healthy weight.",
            "Limit your intake of processed and fast foods, which are often high in unhealthy fats and sodium.",
            "Consider eating smaller, more frequent meals throughout the day to keep your energy levels stable.",
            "Choose lean protein sources, such as chicken, fish, and plant-based options, to support muscle growth and repair.",
            "Be mindful of your salt intake; too much sodium can lead to high blood pressure.",
            "Enjoy meals with others whenever possible, as this can encourage healthier eating habits.",
            "Plan your meals ahead of time to make healthier choices and avoid last-minute unhealthy options.",
        ],
        Locale::Ru => &[
            "Пейте не менее 8 стаканов воды в день, чтобы оставаться гидратированными!",
            "Включайте в свой рацион разнообразные фрукты и овощи, чтобы получать необходимые витамины и минералы.",
            "Сбалансируйте приемы пищи, включая белки, углеводы и полезные жиры.",
            "Регулярная физическая активность помогает поддерживать здоровый вес и укрепляет общее здоровье.",
            "Старайтесь ограничивать употребление сладких напитков и закусок, выбирая вместо этого цельные продукты.",
            "Ешьте больше продуктов, богатых клетчаткой, таких как цельные зерна, бобовые и овощи, чтобы поддерживать работу пищеварения.",
            "Включайте в рацион полезные жиры, такие как авокадо, орехи и оливковое масло.",
            "Не пропускайте завтрак; важно запастись энергией на весь день.",
            "Практикуйте контроль порций, чтобы избежать переедания и поддерживать здоровый вес.",
            "Ограничивайте употребление обработанных и фастфуд-продуктов, которые часто содержат вредные жиры и много соли.",
            "Рассмотрите возможность частых, но небольших приемов пищи в течение дня, чтобы поддерживать стабильный уровень энергии.",
            "Выбирайте нежирные источники белка, такие как курица, рыба и растительные продукты, для поддержки роста и восстановления мышц.",
            "Следите за потреблением соли; избыток натрия может привести к повышению артериального давления.",
            "Старайтесь есть вместе с другими людьми, это может способствовать формированию здоровых пищевых привычек.",
            "Планируйте приемы пищи заранее, чтобы делать более здоровый выбор и избегать незапланированных нездоровых вариантов.",
        ],
    }
}
