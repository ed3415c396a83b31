use std::collections::BTreeMap;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::Expense;

/// Everything that is persisted about the current month.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetState {
    pub monthly_income: i64,
    /// Keyed by `Expense::key`.
    pub expenses: BTreeMap<String, Expense>,
    pub display_name: String,
}

impl BudgetState {
    /// Expenses ordered by descending amount, ties by key.
    pub fn sorted_expenses(&self) -> Vec<&Expense> {
        let mut sorted: Vec<&Expense> = self.expenses.values().collect();
        sorted.sort_by(|a, b| b.amount.cmp(&a.amount).then_with(|| a.key.cmp(&b.key)));
        sorted
    }

    pub fn metrics(&self) -> Metrics {
        Metrics::compute(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpendingStatus {
    SavingALot,
    StillSaving,
    SpendingALot,
    SpendingAlmostEverything,
}

impl SpendingStatus {
    /// Buckets are half-open: `[0, 0.5)`, `[0.5, 0.7)`, `[0.7, 0.9)`, `[0.9, ∞)`.
    pub fn from_ratio(ratio: Decimal) -> Self {
        if ratio < Decimal::new(5, 1) {
            Self::SavingALot
        } else if ratio < Decimal::new(7, 1) {
            Self::StillSaving
        } else if ratio < Decimal::new(9, 1) {
            Self::SpendingALot
        } else {
            Self::SpendingAlmostEverything
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SavingALot => "saving a lot",
            Self::StillSaving => "still saving",
            Self::SpendingALot => "spending a lot",
            Self::SpendingAlmostEverything => "spending almost everything",
        }
    }
}

impl std::fmt::Display for SpendingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Values derived from a `BudgetState`. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metrics {
    pub total_expenses: i64,
    pub monthly_savings: i64,
    pub yearly_savings: i64,
    pub spending_ratio: Decimal,
    pub status: SpendingStatus,
}

impl Metrics {
    pub fn compute(state: &BudgetState) -> Self {
        let total_expenses = state
            .expenses
            .values()
            .fold(0i64, |acc, e| acc.saturating_add(e.amount));
        let monthly_savings = state.monthly_income.saturating_sub(total_expenses);
        let yearly_savings = monthly_savings.saturating_mul(12);

        let spending_ratio = if state.monthly_income > 0 {
            Decimal::from(total_expenses) / Decimal::from(state.monthly_income)
        } else {
            Decimal::ZERO
        };

        Self {
            total_expenses,
            monthly_savings,
            yearly_savings,
            spending_ratio,
            status: SpendingStatus::from_ratio(spending_ratio),
        }
    }

    /// Ratio clamped to `[0, 1]` for drawing a bar. Not used for bucketing.
    pub fn progress(&self) -> f64 {
        self.spending_ratio.to_f64().unwrap_or(0.0).clamp(0.0, 1.0)
    }
}
