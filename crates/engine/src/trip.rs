//! Trip ledger records.
//!
//! A `Trip` owns the ordered list of expenses recorded for it. Settlement is
//! always derived from that list, never stored.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{EngineError, Expense, ResultEngine, settlement};

pub const DEFAULT_TRIP_TITLE: &str = "Weekend Trip";
pub const DEFAULT_EXPENSE_DESCRIPTION: &str = "Expense";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trip {
    pub id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub expenses: Vec<RecordedExpense>,
}

impl Trip {
    /// New empty trip with a fresh id. A blank title falls back to
    /// [`DEFAULT_TRIP_TITLE`].
    pub fn new(title: Option<&str>) -> Self {
        let title = title
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_TRIP_TITLE);
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            created_at: Utc::now(),
            expenses: Vec::new(),
        }
    }

    pub fn rename(&mut self, title: &str) -> ResultEngine<()> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(EngineError::InvalidTrip(
                "title cannot be empty".to_string(),
            ));
        }
        self.title = trimmed.to_string();
        Ok(())
    }

    /// Expense records in the order they were added.
    pub fn ledger(&self) -> Vec<Expense> {
        self.expenses.iter().map(|r| r.expense.clone()).collect()
    }

    pub fn total_spent(&self) -> ResultEngine<Decimal> {
        settlement::total_expenses(&self.ledger())
    }
}

/// An expense as stored in a trip ledger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedExpense {
    pub id: Uuid,
    pub expense: Expense,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Input for recording a new expense.
#[derive(Clone, Debug)]
pub struct ExpenseNew {
    pub amount: Decimal,
    pub paid_by: String,
    pub split_between: Vec<String>,
    pub description: Option<String>,
}

impl ExpenseNew {
    /// Validate the input and stamp it with an id.
    pub fn record(self) -> ResultEngine<RecordedExpense> {
        let expense = Expense {
            amount: self.amount,
            paid_by: self.paid_by,
            split_between: self.split_between,
        }
        .validated()?;
        let description = self
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(DEFAULT_EXPENSE_DESCRIPTION)
            .to_string();

        Ok(RecordedExpense {
            id: Uuid::new_v4(),
            expense,
            description,
            created_at: Utc::now(),
        })
    }
}
