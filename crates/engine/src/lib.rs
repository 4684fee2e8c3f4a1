//! Collie engine: trip expense ledger and settlement.
//!
//! The settlement functions ([`calculate_settlements`],
//! [`format_settlement_summary`]) are pure and know nothing about trips. The
//! [`Engine`] facade records expenses per trip through a [`TripStore`] and
//! settles them on demand.

pub use error::EngineError;
pub use expense::{Expense, normalize_participant};
pub use money::MoneyCents;
pub use ops::{Engine, EngineBuilder, ExpenseAdded, Settlement};
pub use settlement::{
    Balance, EPSILON, SETTLED_UP, Transfer, calculate_settlements, format_settlement_summary,
    net_balances, settled_balances, total_expenses,
};
pub use store::{MemoryStore, TripStore};
pub use trip::{
    DEFAULT_EXPENSE_DESCRIPTION, DEFAULT_TRIP_TITLE, ExpenseNew, RecordedExpense, Trip,
};

mod error;
mod expense;
mod money;
mod ops;
mod settlement;
mod store;
mod trip;

type ResultEngine<T> = Result<T, EngineError>;
