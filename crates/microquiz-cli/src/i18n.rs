//! Display strings for each supported language.
//!
//! A [`Messages`] value is chosen once per run and handed to the commands;
//! nothing here is cached globally.

use microquiz_core::Locale;

#[derive(Debug, Clone, Copy)]
pub struct Messages {
    locale: Locale,
}

impl Messages {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    fn pick(&self, en: &'static str, ru: &'static str) -> &'static str {
        match self.locale {
            Locale::En => en,
            Locale::Ru => ru,
        }
    }

    pub fn empty_catalog(&self) -> &'static str {
        self.pick("[X] Task database is empty!", "[X] База задач пуста!")
    }

    pub fn all_completed(&self) -> &'static str {
        self.pick(
            "[*] Congratulations! All tasks completed!",
            "[*] Поздравляем! Все задания выполнены!",
        )
    }

    pub fn category_completed(&self, category: &str) -> String {
        match self.locale {
            Locale::En => format!("All tasks in category '{category}' completed!"),
            Locale::Ru => format!("Все задания в категории '{category}' выполнены!"),
        }
    }

    pub fn total_solved(&self, n: u32) -> String {
        format!("{}: {n}", self.total_solved_label())
    }

    pub fn total_solved_label(&self) -> &'static str {
        self.pick("Total solved", "Всего решено")
    }

    pub fn streak_days(&self, n: u32) -> String {
        format!("{}: {n}", self.streak_days_label())
    }

    pub fn streak_days_label(&self) -> &'static str {
        self.pick("Streak days", "Дней подряд")
    }

    pub fn category_label(&self) -> &'static str {
        self.pick("Category", "Категория")
    }

    pub fn options_label(&self) -> &'static str {
        self.pick("Options", "Варианты")
    }

    pub fn answer_hint(&self) -> &'static str {
        self.pick("Type your answer or 'q' to quit", "Введите ответ или 'q' для выхода")
    }

    pub fn answer_prompt(&self) -> &'static str {
        self.pick("Your answer: ", "Ваш ответ: ")
    }

    pub fn bye(&self) -> &'static str {
        self.pick("Bye!", "Пока!")
    }

    pub fn correct(&self) -> &'static str {
        self.pick("[OK] Correct!", "[OK] Правильно!")
    }

    pub fn wrong(&self) -> &'static str {
        self.pick("[X] Wrong!", "[X] Неправильно!")
    }

    pub fn correct_answer(&self, answer: &str) -> String {
        match self.locale {
            Locale::En => format!("Correct answer: {answer}"),
            Locale::Ru => format!("Правильный ответ: {answer}"),
        }
    }

    pub fn already_solved(&self) -> &'static str {
        self.pick(
            "This task was already solved; progress unchanged.",
            "Это задание уже решено; прогресс не изменён.",
        )
    }

    pub fn statistics_title(&self) -> &'static str {
        self.pick("Statistics", "Статистика")
    }

    pub fn metric_header(&self) -> &'static str {
        self.pick("Metric", "Показатель")
    }

    pub fn value_header(&self) -> &'static str {
        self.pick("Value", "Значение")
    }

    pub fn last_solved_label(&self) -> &'static str {
        self.pick("Last solved", "Последнее решение")
    }

    pub fn by_category_title(&self) -> &'static str {
        self.pick("By category", "По категориям")
    }

    pub fn solved_header(&self) -> &'static str {
        self.pick("Solved", "Решено")
    }

    pub fn recently_completed(&self) -> &'static str {
        self.pick("Recently completed:", "Недавно решённые:")
    }

    pub fn never(&self) -> &'static str {
        self.pick("never", "никогда")
    }

    pub fn categories_title(&self) -> &'static str {
        self.pick("Categories", "Категории")
    }

    pub fn tasks_header(&self) -> &'static str {
        self.pick("Tasks", "Задач")
    }

    pub fn reset_warning(&self) -> &'static str {
        self.pick(
            "[!] Are you sure you want to reset progress?\nThis action cannot be undone!",
            "[!] Вы уверены, что хотите сбросить прогресс?\nЭто действие нельзя отменить!",
        )
    }

    pub fn reset_prompt(&self) -> &'static str {
        self.pick("Enter 'yes' to confirm: ", "Введите 'да' для подтверждения: ")
    }

    /// Inputs accepted as confirmation. English `yes` works in every language.
    pub fn confirm_words(&self) -> &'static [&'static str] {
        match self.locale {
            Locale::En => &["yes"],
            Locale::Ru => &["да", "yes"],
        }
    }

    pub fn reset_done(&self) -> &'static str {
        self.pick("[OK] Progress reset!", "[OK] Прогресс сброшен!")
    }

    pub fn cancelled(&self) -> &'static str {
        self.pick("Cancelled.", "Отменено.")
    }
}
