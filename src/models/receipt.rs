//! Receipt model
//!
//! A receipt is described entirely by its filename. The stem (the name
//! without `.pdf`) holds six fields separated by `-`:
//! `DATE-PAYEE-AMOUNT-DESC-CATEGORY-STORE`.

use std::fmt;

use super::money::Money;
use crate::error::{TallyError, TallyResult};

/// Separator between the fields of a receipt filename
pub const FIELD_SEPARATOR: char = '-';

/// Number of fields every receipt filename must carry
pub const FIELD_COUNT: usize = 6;

const DATE: usize = 0;
const PAYEE: usize = 1;
const AMOUNT: usize = 2;
const DESCRIPTION: usize = 3;
const CATEGORY: usize = 4;
const STORE: usize = 5;

/// One receipt parsed from its filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// The filename stem this receipt was parsed from
    file_name: String,

    /// The six raw fields, in filename order
    parts: Vec<String>,
}

impl Receipt {
    /// Parse a receipt from a filename stem (without the `.pdf` extension)
    ///
    /// # Examples
    /// ```
    /// use receipt_tally::models::Receipt;
    /// let receipt = Receipt::from_file_name("041525-target-29.87-desc-category-store").unwrap();
    /// assert_eq!(receipt.category(), "category");
    /// assert_eq!(receipt.cost().unwrap().to_string(), "$29.87");
    /// ```
    pub fn from_file_name(file_name: &str) -> TallyResult<Self> {
        let parts: Vec<String> = file_name
            .split(FIELD_SEPARATOR)
            .map(str::to_string)
            .collect();

        if parts.len() != FIELD_COUNT || parts.iter().any(String::is_empty) {
            return Err(TallyError::format(file_name));
        }

        Ok(Self {
            file_name: file_name.to_string(),
            parts,
        })
    }

    /// The filename stem this receipt came from
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// The date field, verbatim
    pub fn date(&self) -> &str {
        &self.parts[DATE]
    }

    /// Who was paid
    pub fn payee(&self) -> &str {
        &self.parts[PAYEE]
    }

    /// The raw amount field, before parsing
    pub fn amount(&self) -> &str {
        &self.parts[AMOUNT]
    }

    /// Free-text description of the purchase
    pub fn description(&self) -> &str {
        &self.parts[DESCRIPTION]
    }

    /// The grouping key, verbatim (case-sensitive, untrimmed)
    pub fn category(&self) -> &str {
        &self.parts[CATEGORY]
    }

    /// The store the receipt came from
    pub fn store(&self) -> &str {
        &self.parts[STORE]
    }

    /// Parse the amount field into Money
    pub fn cost(&self) -> TallyResult<Money> {
        Money::parse(self.amount()).map_err(|source| TallyError::Parse {
            file_name: self.file_name.clone(),
            source,
        })
    }

    /// One-line summary: `[date] [payee] [desc] => $amount`
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] [{}] [{}] => ",
            self.date(),
            self.payee(),
            self.description()
        )?;
        // Unparseable amounts never reach a report, but still render something
        match self.cost() {
            Ok(cost) => write!(f, "{}", cost),
            Err(_) => write!(f, "{}", self.amount()),
        }
    }
}
