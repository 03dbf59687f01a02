//! FILENAME: budget/src/month.rs
//! PURPOSE: Calendar month keys in MONXX form.
//! CONTEXT: A key is a three-letter upper-case month followed by a two-digit
//! year counted from 2000, so "MAR00" is March 2000 and "DEC16" is
//! December 2016. Keys serialize as their string form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BudgetError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Month::Jan => "JAN",
            Month::Feb => "FEB",
            Month::Mar => "MAR",
            Month::Apr => "APR",
            Month::May => "MAY",
            Month::Jun => "JUN",
            Month::Jul => "JUL",
            Month::Aug => "AUG",
            Month::Sep => "SEP",
            Month::Oct => "OCT",
            Month::Nov => "NOV",
            Month::Dec => "DEC",
        }
    }

    fn from_abbreviation(s: &str) -> Option<Month> {
        Month::ALL.into_iter().find(|m| m.abbreviation() == s)
    }
}

/// A month of a specific year, e.g. MAR17.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey {
    month: Month,
    /// Two-digit year, 0..=99.
    year: u8,
}

impl MonthKey {
    pub fn new(month: Month, year: u8) -> Result<Self, BudgetError> {
        if year > 99 {
            return Err(BudgetError::InvalidMonth(format!("{}{}", month.abbreviation(), year)));
        }
        Ok(MonthKey { month, year })
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn year(&self) -> u8 {
        self.year
    }
}

impl FromStr for MonthKey {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BudgetError::InvalidMonth(s.to_string());

        if s.len() != 5 || !s.is_ascii() {
            return Err(invalid());
        }
        let (name, digits) = s.split_at(3);
        let month = Month::from_abbreviation(name).ok_or_else(invalid)?;
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let year = digits.parse::<u8>().map_err(|_| invalid())?;

        Ok(MonthKey { month, year })
    }
}

impl TryFrom<String> for MonthKey {
    type Error = BudgetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MonthKey> for String {
    fn from(key: MonthKey) -> Self {
        key.to_string()
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:02}", self.month.abbreviation(), self.year)
    }
}
