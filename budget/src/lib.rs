//! FILENAME: budget/src/lib.rs
//! Monthly budget tracking.
//!
//! Keeps withdrawal and deposit amounts per calendar month and reports the
//! largest single withdrawal and deposit along with the months they fall in.
//! Independent of the determinant engine; the two crates share nothing.

mod error;
pub mod ledger;
pub mod month;


pub use error::BudgetError;
pub use ledger::{best_and_worst, find, Budget, Extremes, Ledger};
pub use month::{Month, MonthKey};
