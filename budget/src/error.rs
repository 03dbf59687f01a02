//! FILENAME: budget/src/error.rs

use thiserror::Error;

use crate::month::MonthKey;

#[derive(Error, Debug, PartialEq)]
pub enum BudgetError {
    /// Not of the form MONXX (e.g. "MAR17").
    #[error("Invalid month key: {0:?}")]
    InvalidMonth(String),

    #[error("Duplicate budget for {0}")]
    DuplicateMonth(MonthKey),

    #[error("No withdrawals recorded in any month")]
    NoWithdrawals,

    #[error("No deposits recorded in any month")]
    NoDeposits,
}
