//! JSON request and response bodies of the Collie API.
//!
//! Monetary amounts travel as JSON numbers with two decimals.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct Status {
    pub status: String,
    pub message: String,
}

pub mod trip {
    use super::*;

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct TripNew {
        pub title: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TripCreated {
        pub trip_id: String,
        pub title: String,
        /// Link members use to join the trip.
        pub invite_link: String,
        pub created_at: DateTime<Utc>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TripView {
        pub trip_id: String,
        pub title: String,
        pub expense_count: usize,
        #[serde(with = "rust_decimal::serde::float")]
        pub total_spent: Decimal,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TripUpdate {
        pub title: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TripUpdated {
        pub ok: bool,
        pub title: String,
    }
}

pub mod expense {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseNew {
        #[serde(with = "rust_decimal::serde::float")]
        pub amount: Decimal,
        pub paid_by: String,
        pub split_between: Vec<String>,
        pub description: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseView {
        pub id: Uuid,
        #[serde(with = "rust_decimal::serde::float")]
        pub amount: Decimal,
        pub paid_by: String,
        pub split_between: Vec<String>,
        pub description: String,
        pub created_at: DateTime<Utc>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseCreated {
        pub ok: bool,
        pub expense: ExpenseView,
        #[serde(with = "rust_decimal::serde::float")]
        pub total_spent: Decimal,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseList {
        pub expenses: Vec<ExpenseView>,
        #[serde(with = "rust_decimal::serde::float")]
        pub total_spent: Decimal,
    }
}

pub mod settlement {
    use super::*;

    /// `from_person` owes `to_person` `amount`.
    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    pub struct TransferView {
        pub from_person: String,
        pub to_person: String,
        #[serde(with = "rust_decimal::serde::float")]
        pub amount: Decimal,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct SettlementResponse {
        pub trip_id: String,
        pub transfers: Vec<TransferView>,
        #[serde(with = "rust_decimal::serde::float")]
        pub total_expenses: Decimal,
        pub summary: String,
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn amounts_are_json_numbers() {
        let transfer = settlement::TransferView {
            from_person: "Bob".to_string(),
            to_person: "Alice".to_string(),
            amount: dec!(10.50),
        };
        let json = serde_json::to_value(&transfer).unwrap();
        assert_eq!(json["amount"], serde_json::json!(10.5));
    }

    #[test]
    fn expense_new_accepts_numbers_and_optional_description() {
        let body: expense::ExpenseNew = serde_json::from_str(
            r#"{"amount": 12.34, "paid_by": "Alice", "split_between": ["Alice", "Bob"]}"#,
        )
        .unwrap();
        assert_eq!(body.amount, dec!(12.34));
        assert!(body.description.is_none());
    }
}
