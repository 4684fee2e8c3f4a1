use rust_decimal::Decimal;

use crate::{
    ExpenseNew, RecordedExpense, ResultEngine, Transfer, TripStore, calculate_settlements,
    format_settlement_summary, total_expenses,
};

use super::Engine;

/// Settlement of a trip ledger at a point in time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settlement {
    pub trip_id: String,
    pub transfers: Vec<Transfer>,
    pub total_expenses: Decimal,
    pub summary: String,
}

/// An expense just appended to a trip, with the trip total that includes it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpenseAdded {
    pub record: RecordedExpense,
    pub total_spent: Decimal,
}

impl<S: TripStore> Engine<S> {
    /// Validate and append an expense to a trip.
    ///
    /// Malformed expenses are rejected here so the ledger never holds a record
    /// that would make settlement fail. The returned total is taken under the
    /// same trip lock as the append.
    pub async fn add_expense(
        &self,
        trip_id: &str,
        expense: ExpenseNew,
    ) -> ResultEngine<ExpenseAdded> {
        let record = expense.record()?;
        let total_spent = self
            .store
            .update(trip_id, |trip| {
                trip.expenses.push(record.clone());
                trip.total_spent()
            })
            .await?;
        Ok(ExpenseAdded {
            record,
            total_spent,
        })
    }

    /// Expenses of a trip, oldest first.
    pub async fn expenses(&self, trip_id: &str) -> ResultEngine<Vec<RecordedExpense>> {
        Ok(self.store.get(trip_id).await?.expenses)
    }

    /// Compute who owes whom for the current ledger of a trip.
    ///
    /// The ledger is snapshotted under the trip lock; the computation runs
    /// without holding it.
    pub async fn settle(&self, trip_id: &str) -> ResultEngine<Settlement> {
        let ledger = self.store.get(trip_id).await?.ledger();
        let transfers = calculate_settlements(&ledger)?;
        let summary = format_settlement_summary(&transfers);

        Ok(Settlement {
            trip_id: trip_id.to_string(),
            total_expenses: total_expenses(&ledger)?,
            transfers,
            summary,
        })
    }
}
