use std::collections::HashMap;

use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use engine::{
    EPSILON, EngineError, Expense, MoneyCents, Transfer, calculate_settlements,
    format_settlement_summary, net_balances,
};

fn expense(amount: Decimal, paid_by: &str, split: &[&str]) -> Expense {
    Expense::new(amount, paid_by, split.iter().copied()).unwrap()
}

fn flat(transfers: &[Transfer]) -> Vec<(&str, &str, i64)> {
    transfers
        .iter()
        .map(|t| (t.from_person.as_str(), t.to_person.as_str(), t.amount.cents()))
        .collect()
}

/// Net balance left for each participant once the transfers are paid.
fn residue(expenses: &[Expense], transfers: &[Transfer]) -> HashMap<String, Decimal> {
    let mut left: HashMap<String, Decimal> = net_balances(expenses)
        .unwrap()
        .into_iter()
        .map(|b| (b.participant, b.net))
        .collect();
    for transfer in transfers {
        *left.get_mut(&transfer.from_person).unwrap() += transfer.amount.to_decimal();
        *left.get_mut(&transfer.to_person).unwrap() -= transfer.amount.to_decimal();
    }
    left
}

fn ledgers() -> Vec<Vec<Expense>> {
    vec![
        vec![expense(dec!(30), "Alice", &["Alice", "Bob", "Carol"])],
        vec![
            expense(dec!(60), "Alice", &["Alice", "Bob"]),
            expense(dec!(20), "Bob", &["Alice", "Bob"]),
        ],
        vec![expense(dec!(10), "A", &["A", "B", "C"])],
        vec![
            expense(dec!(0.01), "A", &["A", "B", "C"]),
            expense(dec!(0.02), "B", &["C"]),
        ],
        vec![
            expense(dec!(123.45), "Ana", &["Ana", "Ben", "Cy", "Dee", "Eve", "Flo", "Gus"]),
            expense(dec!(87.10), "Ben", &["Cy", "Dee", "Eve"]),
            expense(dec!(45.99), "Gus", &["Ana", "Gus"]),
            expense(dec!(19.99), "Eve", &["Ben", "Flo", "Gus"]),
            expense(dec!(250), "Hal", &["Ana", "Ben", "Cy", "Hal"]),
            expense(dec!(7.77), "Cy", &["Cy", "Dee", "Eve", "Flo", "Gus", "Hal"]),
        ],
    ]
}

#[rstest]
#[case::single_expense(
    vec![expense(dec!(30), "Alice", &["Alice", "Bob", "Carol"])],
    vec![("Bob", "Alice", 1000), ("Carol", "Alice", 1000)]
)]
#[case::two_payers_net_out(
    vec![
        expense(dec!(60), "Alice", &["Alice", "Bob"]),
        expense(dec!(20), "Bob", &["Alice", "Bob"]),
    ],
    vec![("Bob", "Alice", 2000)]
)]
#[case::two_payers_partly_cancel(
    vec![
        expense(dec!(60), "Alice", &["Alice", "Bob"]),
        expense(dec!(40), "Bob", &["Alice", "Bob"]),
    ],
    vec![("Bob", "Alice", 1000)]
)]
#[case::everyone_paid_their_turn(
    vec![
        expense(dec!(30), "A", &["A", "B", "C"]),
        expense(dec!(30), "B", &["A", "B", "C"]),
        expense(dec!(30), "C", &["A", "B", "C"]),
    ],
    vec![]
)]
#[case::payer_included_four_way(
    vec![expense(dec!(100), "A", &["A", "B", "C", "D"])],
    vec![("B", "A", 2500), ("C", "A", 2500), ("D", "A", 2500)]
)]
#[case::payer_not_in_split(
    vec![expense(dec!(40), "A", &["B", "C"])],
    vec![("B", "A", 2000), ("C", "A", 2000)]
)]
#[case::duplicates_count_once(
    vec![expense(dec!(30), "A", &["A", "B", "B", "C"])],
    vec![("B", "A", 1000), ("C", "A", 1000)]
)]
#[case::largest_debtor_first(
    vec![
        expense(dec!(90), "A", &["B", "C"]),
        expense(dec!(30), "D", &["C"]),
    ],
    vec![("C", "A", 7500), ("B", "D", 3000), ("B", "A", 1500)]
)]
fn settles_known_scenarios(#[case] expenses: Vec<Expense>, #[case] expected: Vec<(&str, &str, i64)>) {
    let transfers = calculate_settlements(&expenses).unwrap();
    assert_eq!(flat(&transfers), expected);
}

#[test]
fn three_way_rounding_stays_within_a_cent() {
    let expenses = vec![expense(dec!(10), "A", &["A", "B", "C"])];
    let transfers = calculate_settlements(&expenses).unwrap();

    assert_eq!(transfers.len(), 2);
    let paid: MoneyCents = transfers.iter().map(|t| t.amount).sum();
    assert!(paid.is_positive());
    assert!((paid.to_decimal() - dec!(6.67)).abs() <= dec!(0.01));
    assert!(paid.to_decimal() <= dec!(10.02));
    for t in &transfers {
        assert!(t.amount.is_positive());
    }
}

#[test]
fn net_balances_sum_to_zero() {
    for expenses in ledgers() {
        let total: Decimal = net_balances(&expenses).unwrap().iter().map(|b| b.net).sum();
        assert!(total.abs() <= EPSILON, "sum was {total}");
    }
}

#[test]
fn transfers_settle_every_participant() {
    for expenses in ledgers() {
        let transfers = calculate_settlements(&expenses).unwrap();
        for (participant, left) in residue(&expenses, &transfers) {
            assert!(left.abs() <= dec!(0.01), "{participant} left with {left}");
        }
    }
}

#[test]
fn transfer_count_is_minimal_and_well_formed() {
    for expenses in ledgers() {
        let transfers = calculate_settlements(&expenses).unwrap();
        let nonzero = net_balances(&expenses)
            .unwrap()
            .iter()
            .filter(|b| b.net.abs() > EPSILON)
            .count();
        assert!(transfers.len() <= nonzero.saturating_sub(1));
        for t in &transfers {
            assert_ne!(t.from_person, t.to_person);
            assert!(t.amount.is_positive());
        }
    }
}

#[test]
fn recomputation_is_idempotent() {
    for expenses in ledgers() {
        assert_eq!(
            calculate_settlements(&expenses).unwrap(),
            calculate_settlements(&expenses).unwrap()
        );
    }
}

#[test]
fn expense_order_does_not_change_amounts_owed() {
    let mut expenses = ledgers().pop().unwrap();
    let forward = residue(&expenses, &calculate_settlements(&expenses).unwrap());
    expenses.reverse();
    let backward = residue(&expenses, &calculate_settlements(&expenses).unwrap());
    for (participant, left) in forward {
        assert!((left - backward[&participant]).abs() <= dec!(0.02));
    }
}

#[test]
fn empty_ledger_is_settled() {
    let transfers = calculate_settlements(&[]).unwrap();
    assert!(transfers.is_empty());
    assert_eq!(format_settlement_summary(&transfers), "All settled up!");
}

#[test]
fn summary_matches_scenario_one() {
    let expenses = vec![expense(dec!(30), "Alice", &["Alice", "Bob", "Carol"])];
    let transfers = calculate_settlements(&expenses).unwrap();
    assert_eq!(
        format_settlement_summary(&transfers),
        "Bob owes Alice: $10.00\nCarol owes Alice: $10.00"
    );
}

#[rstest]
#[case::zero_amount(dec!(0), "A", vec!["A"])]
#[case::negative_amount(dec!(-3), "A", vec!["A"])]
#[case::empty_split(dec!(3), "A", vec![])]
#[case::blank_payer(dec!(3), "", vec!["A"])]
#[case::blank_participant(dec!(3), "A", vec!["A", "  "])]
fn malformed_expense_aborts(
    #[case] amount: Decimal,
    #[case] paid_by: &str,
    #[case] split_between: Vec<&str>,
) {
    let expenses = vec![
        expense(dec!(10), "A", &["A", "B"]),
        Expense {
            amount,
            paid_by: paid_by.to_string(),
            split_between: split_between.into_iter().map(String::from).collect(),
        },
    ];
    assert!(matches!(
        calculate_settlements(&expenses),
        Err(EngineError::InvalidExpense(_))
    ));
}

#[test]
fn overflowing_amounts_fail_as_computation_errors() {
    let expenses = vec![
        expense(Decimal::MAX, "A", &["B"]),
        expense(Decimal::MAX, "A", &["B"]),
    ];
    assert!(matches!(
        calculate_settlements(&expenses),
        Err(EngineError::ComputationFailure(_))
    ));
}
