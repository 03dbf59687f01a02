//! FILENAME: budget/tests/common/mod.rs
//! Ledger fixtures for budget integration tests.

use budget::{Budget, Ledger, MonthKey};

pub fn budget(month: &str, withdrawals: &[u64], deposits: &[u64]) -> Budget {
    let key: MonthKey = month.parse().unwrap();
    Budget::new(key, withdrawals.to_vec(), deposits.to_vec())
}

/// Five months from NOV16 to MAR17, newest first.
pub fn winter_ledger() -> Ledger {
    Ledger::from_budgets(vec![
        budget("MAR17", &[], &[10, 10]),
        budget("FEB17", &[5, 22], &[30, 10]),
        budget("JAN17", &[2, 7, 3, 8], &[5, 10, 20]),
        budget("DEC16", &[25], &[]),
        budget("NOV16", &[5, 10, 10, 5], &[30, 5]),
    ])
    .unwrap()
}
