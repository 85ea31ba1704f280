//! Invoice Report
//!
//! Renders aggregated receipts as the grand-total invoice: a header, the
//! grand total, then one block per category listing its receipts.

use serde::Serialize;
use std::io::Write;

use crate::error::{TallyError, TallyResult};
use crate::models::{Money, Receipt};
use crate::services::Aggregator;

/// A single receipt line in the report
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceLine {
    pub date: String,
    pub payee: String,
    pub description: String,
    pub category: String,
    pub store: String,
    /// Cost in cents
    pub amount: Money,
    /// Preformatted `[date] [payee] [desc] => $amount` text
    #[serde(skip)]
    pub summary: String,
}

impl InvoiceLine {
    fn from_receipt(receipt: &Receipt) -> TallyResult<Self> {
        Ok(Self {
            date: receipt.date().to_string(),
            payee: receipt.payee().to_string(),
            description: receipt.description().to_string(),
            category: receipt.category().to_string(),
            store: receipt.store().to_string(),
            amount: receipt.cost()?,
            summary: receipt.describe(),
        })
    }
}

/// All receipts of one category
#[derive(Debug, Clone, Serialize)]
pub struct CategorySection {
    /// Category name as it appeared in the filenames
    pub name: String,
    /// Sum of the receipts in this category
    pub total: Money,
    /// Receipts in discovery order
    pub receipts: Vec<InvoiceLine>,
}

/// Invoice Report
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceReport {
    /// Invoice name, uppercased
    pub invoice: String,
    /// Sum of every category total
    pub total: Money,
    /// One section per category, sorted by category name
    pub categories: Vec<CategorySection>,
}

impl InvoiceReport {
    /// Generate a report from aggregated receipts
    pub fn generate(invoice_name: &str, aggregator: &Aggregator) -> TallyResult<Self> {
        let categories = aggregator
            .categories()
            .map(|category| {
                let receipts = aggregator
                    .receipts_for(category)
                    .iter()
                    .map(InvoiceLine::from_receipt)
                    .collect::<TallyResult<Vec<_>>>()?;

                Ok(CategorySection {
                    name: category.to_string(),
                    total: aggregator.total_for(category).unwrap_or_default(),
                    receipts,
                })
            })
            .collect::<TallyResult<Vec<_>>>()?;

        Ok(Self {
            invoice: invoice_name.to_uppercase(),
            total: aggregator.grand_total(),
            categories,
        })
    }

    /// Number of receipts across all categories
    pub fn receipt_count(&self) -> usize {
        self.categories.iter().map(|c| c.receipts.len()).sum()
    }

    /// Format the report as the plain-text invoice
    pub fn format_text(&self) -> String {
        let mut output = String::new();

        output.push_str(&self.invoice);
        output.push('\n');
        output.push_str(&format!("TOTAL: {}\n\n", self.total));

        for section in &self.categories {
            output.push_str(&format!(
                "{} {}:\n",
                section.name.to_uppercase(),
                section.total
            ));
            for line in &section.receipts {
                output.push('\t');
                output.push_str(&line.summary);
                output.push('\n');
            }
            output.push_str("\n\n");
        }

        output
    }

    /// Export the report as pretty-printed JSON
    pub fn export_json<W: Write>(&self, writer: &mut W) -> TallyResult<()> {
        serde_json::to_writer_pretty(&mut *writer, self)?;
        writeln!(writer).map_err(|e| TallyError::Io(e.to_string()))?;
        Ok(())
    }
}
