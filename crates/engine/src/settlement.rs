//! Settlement of shared expenses.
//!
//! Expenses are accrued into exact net balances, rounded to cents without
//! losing the zero sum, and matched greedily into the transfers that settle
//! everyone. The computation is pure: the same expenses always produce the
//! same transfers.
//!
//! Rounding residue: every participant ends within one cent of their exact
//! net balance. When an equal split does not divide into whole cents, the
//! leftover cent is assigned to the participant whose share was rounded the
//! most (earliest participant on ties) and shows up in the transfer amounts.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::{EngineError, Expense, MoneyCents, ResultEngine, money::CURRENCY_SCALE};

pub use balances::{Balance, EPSILON};

mod balances;
mod matching;

/// Summary returned when there is nothing left to pay.
pub const SETTLED_UP: &str = "All settled up!";

/// A directed payment: `from_person` owes `to_person` `amount`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transfer {
    pub from_person: String,
    pub to_person: String,
    pub amount: MoneyCents,
}

impl fmt::Display for Transfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} owes {}: {}", self.from_person, self.to_person, self.amount)
    }
}

fn validate_all(expenses: &[Expense]) -> ResultEngine<Vec<Expense>> {
    expenses
        .iter()
        .enumerate()
        .map(|(idx, expense)| {
            expense.clone().validated().map_err(|err| match err {
                EngineError::InvalidExpense(reason) => {
                    EngineError::InvalidExpense(format!("expense #{}: {reason}", idx + 1))
                }
                other => other,
            })
        })
        .collect()
}

/// Exact net balance of every participant, in order of first appearance.
pub fn net_balances(expenses: &[Expense]) -> ResultEngine<Vec<Balance>> {
    balances::accrue(&validate_all(expenses)?)
}

/// Balance of every participant as settlement pays it out: rounded to cents,
/// summing to exactly zero, in order of first appearance.
pub fn settled_balances(expenses: &[Expense]) -> ResultEngine<Vec<(String, MoneyCents)>> {
    let balances = net_balances(expenses)?;
    let settled = balances::normalize(&balances)?;
    Ok(balances
        .into_iter()
        .map(|balance| balance.participant)
        .zip(settled)
        .collect())
}

/// Compute the transfers that settle `expenses`.
///
/// An empty expense list settles to an empty transfer list. Any malformed
/// expense aborts the whole computation with [`EngineError::InvalidExpense`].
pub fn calculate_settlements(expenses: &[Expense]) -> ResultEngine<Vec<Transfer>> {
    if expenses.is_empty() {
        return Ok(Vec::new());
    }

    let balances = net_balances(expenses)?;
    let settled = balances::normalize(&balances)?;
    let transfers = matching::match_greedy(&balances, &settled);

    tracing::debug!(
        "settled {} expenses between {} participants with {} transfers",
        expenses.len(),
        balances.len(),
        transfers.len()
    );
    Ok(transfers)
}

/// Render transfers one per line, e.g. `"Bob owes Alice: $10.00"`.
pub fn format_settlement_summary(transfers: &[Transfer]) -> String {
    if transfers.is_empty() {
        return SETTLED_UP.to_string();
    }
    transfers
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Sum of all expense amounts, rounded to currency precision.
pub fn total_expenses(expenses: &[Expense]) -> ResultEngine<Decimal> {
    expenses
        .iter()
        .try_fold(Decimal::ZERO, |acc, expense| acc.checked_add(expense.amount))
        .map(|total| {
            total.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero)
        })
        .ok_or_else(|| EngineError::ComputationFailure("total expenses overflow".to_string()))
}
