use chrono::Local;
use std::time::{Duration, Instant};

use crate::i18n::Language;
use crate::models::Category;
use crate::store::BudgetStore;

/// Upper end of the income slider's range. The store itself accepts more.
pub(crate) const INCOME_MAX: i64 = 70_000;
pub(crate) const ONBOARDING_STEP: i64 = 500;
pub(crate) const EDIT_STEP: i64 = 1_000;
/// Delete mode switches itself off after this long without a key press.
pub(crate) const DELETE_MODE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct IncomeSlider {
    value: i64,
    step: i64,
}

impl IncomeSlider {
    /// A stored income above the slider range is shown and kept as is until
    /// the slider is moved.
    pub(crate) fn new(value: i64, step: i64) -> Self {
        Self {
            value: value.max(0),
            step,
        }
    }

    pub(crate) fn value(&self) -> i64 {
        self.value
    }

    pub(crate) fn increase(&mut self) {
        self.value = (self.value.min(INCOME_MAX) + self.step).min(INCOME_MAX);
    }

    pub(crate) fn decrease(&mut self) {
        self.value = (self.value.min(INCOME_MAX) - self.step).max(0);
    }

    pub(crate) fn ratio(&self) -> f64 {
        self.value.min(INCOME_MAX) as f64 / INCOME_MAX as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DraftField {
    Category,
    Name,
    Amount,
}

/// Fields of the add-expense form. Nothing here reaches the store until the
/// form is confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExpenseDraft {
    pub(crate) category_index: usize,
    pub(crate) custom_name: String,
    pub(crate) amount: String,
    pub(crate) field: DraftField,
}

impl ExpenseDraft {
    pub(crate) fn new() -> Self {
        Self {
            category_index: 0,
            custom_name: String::new(),
            amount: String::new(),
            field: DraftField::Category,
        }
    }

    pub(crate) fn category(&self) -> Category {
        Category::all()
            .get(self.category_index)
            .copied()
            .unwrap_or(Category::Other)
    }

    pub(crate) fn next_category(&mut self) {
        self.category_index = (self.category_index + 1) % Category::all().len();
    }

    pub(crate) fn prev_category(&mut self) {
        let len = Category::all().len();
        self.category_index = (self.category_index + len - 1) % len;
    }

    pub(crate) fn next_field(&mut self) {
        self.field = match self.field {
            DraftField::Category if self.category().takes_custom_name() => DraftField::Name,
            DraftField::Category | DraftField::Name => DraftField::Amount,
            DraftField::Amount => DraftField::Category,
        };
    }

    pub(crate) fn prev_field(&mut self) {
        self.field = match self.field {
            DraftField::Amount if self.category().takes_custom_name() => DraftField::Name,
            DraftField::Amount | DraftField::Name => DraftField::Category,
            DraftField::Category => DraftField::Amount,
        };
    }

    pub(crate) fn push_char(&mut self, c: char) {
        match self.field {
            DraftField::Name => self.custom_name.push(c),
            DraftField::Amount if c.is_ascii_digit() => self.amount.push(c),
            _ => {}
        }
    }

    pub(crate) fn pop_char(&mut self) {
        match self.field {
            DraftField::Name => {
                self.custom_name.pop();
            }
            DraftField::Amount => {
                self.amount.pop();
            }
            DraftField::Category => {}
        }
    }

    /// Saving is offered only once both a name and an amount are present.
    pub(crate) fn is_complete(&self) -> bool {
        let has_name =
            !self.category().takes_custom_name() || !self.custom_name.trim().is_empty();
        has_name && !self.amount.is_empty()
    }
}

/// Which screen is showing. Overlays are variants too, so at most one of
/// them can be open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Screen {
    Onboarding(IncomeSlider),
    Budget,
    EditingIncome(IncomeSlider),
    AddingExpense(ExpenseDraft),
    EditingName(String),
}

impl Screen {
    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Onboarding(_) => "WELCOME",
            Self::Budget => "BUDGET",
            Self::EditingIncome(_) => "INCOME",
            Self::AddingExpense(_) => "ADD",
            Self::EditingName(_) => "NAME",
        }
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) lang: Language,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    pub(crate) current_month: String,

    // Expense list
    pub(crate) expense_index: usize,
    pub(crate) expense_scroll: usize,
    /// When delete mode was last armed or used.
    pub(crate) delete_mode: Option<Instant>,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    /// First launch (no income yet) starts at onboarding.
    pub(crate) fn new(store: &BudgetStore, lang: Language) -> Self {
        let income = store.state().monthly_income;
        let screen = if income == 0 {
            Screen::Onboarding(IncomeSlider::new(0, ONBOARDING_STEP))
        } else {
            Screen::Budget
        };

        Self {
            running: true,
            screen,
            lang,
            status_message: String::new(),
            show_help: false,
            current_month: Local::now().format("%B %Y").to_string(),

            expense_index: 0,
            expense_scroll: 0,
            delete_mode: None,

            visible_rows: 10,
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    pub(crate) fn in_delete_mode(&self) -> bool {
        self.delete_mode.is_some()
    }

    pub(crate) fn toggle_delete_mode(&mut self, now: Instant) {
        self.delete_mode = match self.delete_mode {
            Some(_) => None,
            None => Some(now),
        };
    }

    /// Restart the inactivity timer if delete mode is on.
    pub(crate) fn touch_delete_mode(&mut self, now: Instant) {
        if self.delete_mode.is_some() {
            self.delete_mode = Some(now);
        }
    }

    pub(crate) fn expire_delete_mode(&mut self, now: Instant) {
        if let Some(armed) = self.delete_mode {
            if now.saturating_duration_since(armed) >= DELETE_MODE_TIMEOUT {
                self.delete_mode = None;
            }
        }
    }

    /// Keep the cursor inside a list that may have shrunk.
    pub(crate) fn clamp_selection(&mut self, len: usize) {
        if len == 0 {
            self.expense_index = 0;
            self.expense_scroll = 0;
        } else if self.expense_index >= len {
            self.expense_index = len - 1;
        }
        if self.expense_scroll > self.expense_index {
            self.expense_scroll = self.expense_index;
        }
    }

    /// Key of the highlighted row, read from a fresh sort.
    pub(crate) fn selected_key(&self, store: &BudgetStore) -> Option<String> {
        store
            .sorted_expenses()
            .get(self.expense_index)
            .map(|e| e.key.clone())
    }
}
