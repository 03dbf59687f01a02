//! FILENAME: budget/src/ledger.rs
//! PURPOSE: Monthly budget records and the queries run over them.
//! CONTEXT: A `Budget` holds the raw withdrawal and deposit amounts for one
//! month. A `Ledger` keeps budgets in insertion order with at most one
//! budget per month; that order is the order every query reports months in.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::BudgetError;
use crate::month::MonthKey;

/// Withdrawals and deposits for a single month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    pub month: MonthKey,
    pub withdrawals: Vec<u64>,
    pub deposits: Vec<u64>,
}

impl Budget {
    pub fn new(month: MonthKey, withdrawals: Vec<u64>, deposits: Vec<u64>) -> Self {
        Budget {
            month,
            withdrawals,
            deposits,
        }
    }

    /// Summed in `u128`, which holds any realistic count of `u64` amounts.
    pub fn total_withdrawals(&self) -> u128 {
        self.withdrawals.iter().map(|&w| u128::from(w)).sum()
    }

    pub fn total_deposits(&self) -> u128 {
        self.deposits.iter().map(|&d| u128::from(d)).sum()
    }

    /// Deposits minus withdrawals. Negative when the month ran a deficit.
    pub fn net(&self) -> i128 {
        let deposits: i128 = self.deposits.iter().map(|&d| i128::from(d)).sum();
        let withdrawals: i128 = self.withdrawals.iter().map(|&w| i128::from(w)).sum();
        deposits - withdrawals
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Budget for the month of {}:", self.month)?;
        writeln!(f, "Withdrawals:{:?}", self.withdrawals)?;
        writeln!(f, "Deposits:{:?}", self.deposits)?;
        write!(f, "Net:{}", self.net())
    }
}

/// Largest single withdrawal and deposit across a set of budgets, with
/// every month that contains them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extremes {
    pub max_deposit: u64,
    pub max_withdrawal: u64,
    pub deposit_months: Vec<MonthKey>,
    pub withdrawal_months: Vec<MonthKey>,
}

/// Withdrawals and deposits of the budget for `month`, if present.
pub fn find<'a>(month: &MonthKey, budgets: &'a [Budget]) -> Option<(&'a [u64], &'a [u64])> {
    budgets
        .iter()
        .find(|b| b.month == *month)
        .map(|b| (b.withdrawals.as_slice(), b.deposits.as_slice()))
}

/// Finds the largest withdrawal and deposit and the months they occur in.
///
/// Months are reported in the order they appear in `budgets`. Fails when
/// the whole list has no withdrawal, or no deposit, to take a maximum of.
pub fn best_and_worst(budgets: &[Budget]) -> Result<Extremes, BudgetError> {
    let max_withdrawal = budgets
        .iter()
        .flat_map(|b| b.withdrawals.iter().copied())
        .max()
        .ok_or(BudgetError::NoWithdrawals)?;
    let max_deposit = budgets
        .iter()
        .flat_map(|b| b.deposits.iter().copied())
        .max()
        .ok_or(BudgetError::NoDeposits)?;

    let extremes = Extremes {
        max_deposit,
        max_withdrawal,
        deposit_months: months_containing(
            budgets.iter().map(|b| (b.month, b.deposits.as_slice())),
            max_deposit,
        ),
        withdrawal_months: months_containing(
            budgets.iter().map(|b| (b.month, b.withdrawals.as_slice())),
            max_withdrawal,
        ),
    };

    log::debug!(
        target: "BUDGET",
        "best_and_worst over {} budgets: max deposit {} in {} month(s), max withdrawal {} in {} month(s)",
        budgets.len(),
        extremes.max_deposit,
        extremes.deposit_months.len(),
        extremes.max_withdrawal,
        extremes.withdrawal_months.len()
    );

    Ok(extremes)
}

/// Months whose amounts include `amount`, first occurrence order, no repeats.
fn months_containing<'a, I>(entries: I, amount: u64) -> Vec<MonthKey>
where
    I: IntoIterator<Item = (MonthKey, &'a [u64])>,
{
    let mut months: Vec<MonthKey> = Vec::new();
    for (month, amounts) in entries {
        if amounts.contains(&amount) && !months.contains(&month) {
            months.push(month);
        }
    }
    months
}

/// An ordered collection of budgets with unique months.
/// Serializes as a plain list; deserializing re-checks uniqueness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Budget>", into = "Vec<Budget>")]
pub struct Ledger {
    budgets: Vec<Budget>,
}

impl Ledger {
    pub fn new() -> Self {
        Ledger {
            budgets: Vec::new(),
        }
    }

    /// Builds a ledger, rejecting the first repeated month.
    pub fn from_budgets(budgets: Vec<Budget>) -> Result<Self, BudgetError> {
        let mut ledger = Ledger::new();
        for budget in budgets {
            ledger.insert(budget)?;
        }
        Ok(ledger)
    }

    pub fn insert(&mut self, budget: Budget) -> Result<(), BudgetError> {
        if self.get(&budget.month).is_some() {
            log::warn!(target: "BUDGET", "duplicate budget for {}", budget.month);
            return Err(BudgetError::DuplicateMonth(budget.month));
        }
        self.budgets.push(budget);
        Ok(())
    }

    pub fn get(&self, month: &MonthKey) -> Option<&Budget> {
        self.budgets.iter().find(|b| b.month == *month)
    }

    pub fn find(&self, month: &MonthKey) -> Option<(&[u64], &[u64])> {
        find(month, &self.budgets)
    }

    pub fn best_and_worst(&self) -> Result<Extremes, BudgetError> {
        best_and_worst(&self.budgets)
    }

    /// Sum of every month's net.
    pub fn total_net(&self) -> i128 {
        self.budgets.iter().map(Budget::net).sum()
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    pub fn len(&self) -> usize {
        self.budgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.budgets.is_empty()
    }
}

impl TryFrom<Vec<Budget>> for Ledger {
    type Error = BudgetError;

    fn try_from(budgets: Vec<Budget>) -> Result<Self, Self::Error> {
        Ledger::from_budgets(budgets)
    }
}

impl From<Ledger> for Vec<Budget> {
    fn from(ledger: Ledger) -> Self {
        ledger.budgets
    }
}
