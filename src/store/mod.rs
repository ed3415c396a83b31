//! The budget store: the only sanctioned way to read or change the budget.
//!
//! Every mutation updates the in-memory `BudgetState` first and then writes
//! the affected aggregate (income, expense mapping or display name) back in
//! full. Rejected input leaves both untouched.

use anyhow::Result;

use crate::db::Database;
use crate::models::{parse_amount, BudgetState, Category, Expense, Metrics};

pub(crate) struct BudgetStore {
    db: Database,
    state: BudgetState,
}

impl BudgetStore {
    /// Read the persisted budget. Missing data yields an empty budget.
    pub(crate) fn load(db: Database) -> Result<Self> {
        let state = BudgetState {
            monthly_income: db.load_income()?,
            expenses: db
                .load_expenses()?
                .into_iter()
                .map(|e| (e.key.clone(), e))
                .collect(),
            display_name: db.load_display_name()?,
        };
        Ok(Self { db, state })
    }

    pub(crate) fn state(&self) -> &BudgetState {
        &self.state
    }

    pub(crate) fn metrics(&self) -> Metrics {
        self.state.metrics()
    }

    pub(crate) fn sorted_expenses(&self) -> Vec<&Expense> {
        self.state.sorted_expenses()
    }

    /// Fractions are truncated; negative and non-finite values store as 0.
    pub(crate) fn set_income(&mut self, value: f64) -> Result<()> {
        let income = if value.is_finite() && value > 0.0 {
            value.trunc() as i64
        } else {
            0
        };
        self.state.monthly_income = income;
        self.db.save_income(income)
    }

    /// Insert or overwrite the expense at `label`. Returns `false` without
    /// touching anything when the label is blank or the amount is not a
    /// non-negative whole number.
    pub(crate) fn upsert_expense(&mut self, label: &str, amount: &str) -> Result<bool> {
        let label = label.trim();
        if label.is_empty() {
            return Ok(false);
        }
        let Some(amount) = parse_amount(amount) else {
            return Ok(false);
        };
        self.insert(Expense::new(label.to_string(), amount))
    }

    /// Same as `upsert_expense`, but keyed and decorated from a catalog entry.
    pub(crate) fn upsert_category(
        &mut self,
        category: Category,
        custom_name: &str,
        amount: &str,
    ) -> Result<bool> {
        let Some(amount) = parse_amount(amount) else {
            return Ok(false);
        };
        match Expense::from_category(category, custom_name, amount) {
            Some(expense) => self.insert(expense),
            None => Ok(false),
        }
    }

    fn insert(&mut self, expense: Expense) -> Result<bool> {
        self.state.expenses.insert(expense.key.clone(), expense);
        self.db.save_expenses(self.state.expenses.values())?;
        Ok(true)
    }

    /// Removing a key that is not there is not an error; returns whether
    /// anything was removed.
    pub(crate) fn remove_expense(&mut self, key: &str) -> Result<bool> {
        let removed = self.state.expenses.remove(key).is_some();
        self.db.save_expenses(self.state.expenses.values())?;
        Ok(removed)
    }

    pub(crate) fn set_display_name(&mut self, name: &str) -> Result<()> {
        let name = name.trim();
        self.state.display_name = name.to_string();
        self.db.save_display_name(name)
    }

    #[cfg(test)]
    pub(crate) fn into_database(self) -> Database {
        self.db
    }
}
