mod budget;
mod expense;

pub use budget::{BudgetState, Metrics, SpendingStatus};
pub use expense::{parse_amount, Category, Expense};
