//! Balance accrual and normalisation to currency precision.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::{EngineError, Expense, MoneyCents, ResultEngine};

/// Balances whose magnitude does not exceed this value are considered settled.
pub const EPSILON: Decimal = Decimal::from_parts(1, 0, 0, false, 9);

/// Net position of one participant across all expenses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Balance {
    pub participant: String,
    /// Positive = is owed money, negative = owes money.
    pub net: Decimal,
}

/// Accumulates balances keyed by participant, in first-appearance order.
#[derive(Default)]
struct Ledger {
    index: HashMap<String, usize>,
    balances: Vec<Balance>,
}

impl Ledger {
    fn entry(&mut self, participant: &str) -> &mut Decimal {
        let position = match self.index.get(participant) {
            Some(position) => *position,
            None => {
                self.balances.push(Balance {
                    participant: participant.to_string(),
                    net: Decimal::ZERO,
                });
                let position = self.balances.len() - 1;
                self.index.insert(participant.to_string(), position);
                position
            }
        };
        &mut self.balances[position].net
    }

    fn credit(&mut self, participant: &str, amount: Decimal) -> ResultEngine<()> {
        let net = self.entry(participant);
        *net = net.checked_add(amount).ok_or_else(|| overflow(participant))?;
        Ok(())
    }

    fn debit(&mut self, participant: &str, amount: Decimal) -> ResultEngine<()> {
        let net = self.entry(participant);
        *net = net.checked_sub(amount).ok_or_else(|| overflow(participant))?;
        Ok(())
    }
}

fn overflow(participant: &str) -> EngineError {
    EngineError::ComputationFailure(format!("balance overflow for \"{participant}\""))
}

/// Exact net balances of already validated expenses.
pub(super) fn accrue(expenses: &[Expense]) -> ResultEngine<Vec<Balance>> {
    let mut ledger = Ledger::default();
    for expense in expenses {
        ledger.credit(&expense.paid_by, expense.amount)?;
        let share = expense.share()?;
        for participant in &expense.split_between {
            ledger.debit(participant, share)?;
        }
    }
    Ok(ledger.balances)
}

/// Round every balance to cents so that the rounded balances sum to zero.
///
/// Returns one entry per input balance, same order. Each rounded balance is
/// within one cent of its exact value. Drift left by rounding is absorbed one
/// cent at a time by the participants whose rounding moved furthest in the
/// direction of the drift; ties go to the earliest participant.
pub(super) fn normalize(balances: &[Balance]) -> ResultEngine<Vec<MoneyCents>> {
    let mut rounded = Vec::with_capacity(balances.len());
    // (position, rounding error = rounded - exact)
    let mut adjustable = Vec::new();

    for (position, balance) in balances.iter().enumerate() {
        if balance.net.abs() <= EPSILON {
            rounded.push(MoneyCents::ZERO);
            continue;
        }
        let cents = MoneyCents::from_decimal(balance.net)?;
        adjustable.push((position, cents.to_decimal() - balance.net));
        rounded.push(cents);
    }

    let drift = rounded
        .iter()
        .try_fold(MoneyCents::ZERO, |acc, cents| acc.checked_add(*cents))
        .ok_or_else(|| EngineError::ComputationFailure("balance sum overflow".to_string()))?;

    if !drift.is_zero() {
        tracing::debug!("absorbing {drift} rounding drift across {} balances", adjustable.len());
        let step = if drift.is_positive() {
            // Rounded up too much: take a cent from the largest positive errors.
            adjustable.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
            MoneyCents::new(-1)
        } else {
            adjustable.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0)));
            MoneyCents::new(1)
        };
        let count = drift.cents().unsigned_abs() as usize;
        for (position, _) in adjustable.iter().cycle().take(count) {
            rounded[*position] += step;
        }
    }

    let residue: MoneyCents = rounded.iter().copied().sum();
    if !residue.is_zero() {
        return Err(EngineError::ComputationFailure(format!(
            "balances do not sum to zero after rounding ({residue})"
        )));
    }

    Ok(rounded)
}
