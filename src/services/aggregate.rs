//! Category aggregation
//!
//! Folds receipts into per-category running totals and per-category
//! listings. Both maps are ordered by category name so a report built from
//! the same receipts is always byte-identical.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::TallyResult;
use crate::models::{Money, Receipt};

/// Running totals and listings for a batch of receipts
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    /// Category -> running total
    totals: BTreeMap<String, Money>,
    /// Category -> receipts, in the order they were added
    listings: BTreeMap<String, Vec<Receipt>>,
}

impl Aggregator {
    /// Create an empty aggregator
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an aggregator from filename stems, stopping at the first bad one
    pub fn from_file_names<I, S>(names: I) -> TallyResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut aggregator = Self::new();
        for name in names {
            aggregator.add_file_name(name.as_ref())?;
        }
        Ok(aggregator)
    }

    /// Parse a filename stem and fold it in
    pub fn add_file_name(&mut self, name: &str) -> TallyResult<()> {
        let receipt = Receipt::from_file_name(name)?;
        self.add(receipt)
    }

    /// Fold a receipt into its category's total and listing
    ///
    /// The cost is parsed before anything is recorded, so a failure leaves
    /// the aggregator unchanged.
    pub fn add(&mut self, receipt: Receipt) -> TallyResult<()> {
        let cost = receipt.cost()?;
        let category = receipt.category().to_string();

        debug!("Adding {} to category '{}'", cost, category);

        *self.totals.entry(category.clone()).or_default() += cost;
        self.listings.entry(category).or_default().push(receipt);

        Ok(())
    }

    /// Sum of every category total
    pub fn grand_total(&self) -> Money {
        self.totals.values().copied().sum()
    }

    /// Categories in report order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.totals.keys().map(String::as_str)
    }

    /// Total for one category, if any receipt used it
    pub fn total_for(&self, category: &str) -> Option<Money> {
        self.totals.get(category).copied()
    }

    /// Receipts of one category in the order they were added
    pub fn receipts_for(&self, category: &str) -> &[Receipt] {
        self.listings
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of receipts folded in so far
    pub fn receipt_count(&self) -> usize {
        self.listings.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}
