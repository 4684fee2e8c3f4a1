//! Greedy creditor/debtor matching over normalised balances.

use super::{Balance, Transfer};
use crate::MoneyCents;

/// A participant with an outstanding amount (always positive).
#[derive(Clone, Copy, Debug)]
struct Party {
    position: usize,
    remaining: MoneyCents,
}

/// Index of the party with the largest remaining amount; ties go to the
/// earliest participant.
fn largest(parties: &[Party]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (idx, party) in parties.iter().enumerate() {
        match best {
            Some(current)
                if parties[current].remaining > party.remaining
                    || (parties[current].remaining == party.remaining
                        && parties[current].position <= party.position) => {}
            _ => best = Some(idx),
        }
    }
    best
}

/// Pair the largest creditor with the largest debtor until everyone is
/// settled.
///
/// `settled` holds the normalised balance of each entry of `balances`, which
/// must sum to zero.
pub(super) fn match_greedy(balances: &[Balance], settled: &[MoneyCents]) -> Vec<Transfer> {
    let mut creditors = Vec::new();
    let mut debtors = Vec::new();
    for (position, cents) in settled.iter().enumerate() {
        if cents.is_positive() {
            creditors.push(Party {
                position,
                remaining: *cents,
            });
        } else if cents.is_negative() {
            debtors.push(Party {
                position,
                remaining: cents.abs(),
            });
        }
    }

    let mut transfers = Vec::new();
    while let (Some(c), Some(d)) = (largest(&creditors), largest(&debtors)) {
        let amount = creditors[c].remaining.min(debtors[d].remaining);
        transfers.push(Transfer {
            from_person: balances[debtors[d].position].participant.clone(),
            to_person: balances[creditors[c].position].participant.clone(),
            amount,
        });

        creditors[c].remaining -= amount;
        debtors[d].remaining -= amount;
        if creditors[c].remaining.is_zero() {
            creditors.remove(c);
        }
        if debtors[d].remaining.is_zero() {
            debtors.remove(d);
        }
    }

    transfers
}
