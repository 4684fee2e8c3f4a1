//! The module contains the `Expense` type, the input record of a settlement.
//!
//! An expense is immutable once validated: the amount is positive and every
//! participant identifier is trimmed, NFC-normalised and non-blank.
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::{EngineError, ResultEngine};

/// A shared cost paid by one participant and split equally between others.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub amount: Decimal,
    pub paid_by: String,
    pub split_between: Vec<String>,
}

impl Expense {
    /// Build a validated expense.
    ///
    /// Identifiers are normalised and duplicates in `split_between` collapse
    /// to a single share, keeping the first occurrence.
    pub fn new<I, S>(amount: Decimal, paid_by: &str, split_between: I) -> ResultEngine<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let expense = Self {
            amount,
            paid_by: paid_by.to_string(),
            split_between: split_between
                .into_iter()
                .map(|name| name.as_ref().to_string())
                .collect(),
        };
        expense.validated()
    }

    /// Validate and normalise a record that was built field by field (e.g.
    /// deserialized).
    pub fn validated(self) -> ResultEngine<Self> {
        if self.amount <= Decimal::ZERO {
            return Err(EngineError::InvalidExpense(format!(
                "amount must be > 0, got {}",
                self.amount
            )));
        }

        let paid_by = normalize_participant(&self.paid_by, "paid_by")?;

        if self.split_between.is_empty() {
            return Err(EngineError::InvalidExpense(
                "split_between must contain at least one name".to_string(),
            ));
        }

        let mut split_between: Vec<String> = Vec::with_capacity(self.split_between.len());
        for name in &self.split_between {
            let name = normalize_participant(name, "split_between")?;
            if !split_between.contains(&name) {
                split_between.push(name);
            }
        }
        if split_between.len() != self.split_between.len() {
            tracing::warn!(
                "duplicate participants in split_between collapsed to one share each: {:?}",
                self.split_between
            );
        }

        Ok(Self {
            amount: self.amount,
            paid_by,
            split_between,
        })
    }

    /// Share owed by each participant of the split.
    pub(crate) fn share(&self) -> ResultEngine<Decimal> {
        let count = Decimal::from(self.split_between.len());
        self.amount.checked_div(count).ok_or_else(|| {
            EngineError::ComputationFailure(format!(
                "cannot split {} between {} participants",
                self.amount, count
            ))
        })
    }
}

/// Trim and NFC-normalise a participant identifier, rejecting blank ones.
pub fn normalize_participant(value: &str, label: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidExpense(format!(
            "{label} must not contain blank names"
        )));
    }
    Ok(trimmed.nfc().collect())
}
