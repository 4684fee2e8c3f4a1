//! Expense file readers.

use std::{error::Error, io::Read};

use engine::{Expense, MoneyCents};
use serde::Deserialize;

/// Separator between names in the CSV `split_between` column.
const SPLIT_SEPARATOR: char = ';';

#[derive(Debug, Deserialize)]
struct CsvRow {
    amount: String,
    paid_by: String,
    split_between: String,
}

/// Read expenses from CSV with header `amount,paid_by,split_between`.
///
/// Extra columns (e.g. `description`) are ignored.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<Expense>, Box<dyn Error + Send + Sync>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut expenses = Vec::new();
    for (idx, row) in reader.deserialize::<CsvRow>().enumerate() {
        let line = idx + 2;
        let row = row.map_err(|err| format!("line {line}: {err}"))?;
        let amount: MoneyCents = row
            .amount
            .parse()
            .map_err(|err| format!("line {line}: {err}"))?;
        let split = row
            .split_between
            .split(SPLIT_SEPARATOR)
            .filter(|name| !name.trim().is_empty());
        let expense = Expense::new(amount.to_decimal(), &row.paid_by, split)
            .map_err(|err| format!("line {line}: {err}"))?;
        expenses.push(expense);
    }
    Ok(expenses)
}

/// Read expenses from a JSON array of `{amount, paid_by, split_between}`.
pub fn read_json<R: Read>(reader: R) -> Result<Vec<Expense>, Box<dyn Error + Send + Sync>> {
    let rows: Vec<Expense> = serde_json::from_reader(reader)?;
    let mut expenses = Vec::with_capacity(rows.len());
    for (idx, row) in rows.into_iter().enumerate() {
        let expense = row
            .validated()
            .map_err(|err| format!("expense #{}: {err}", idx + 1))?;
        expenses.push(expense);
    }
    Ok(expenses)
}
