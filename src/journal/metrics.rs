//! Pure aggregation over sale records. Nothing here touches storage or IO.

use crate::journal::SaleRecord;

/// Derived figures for a single record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordMetrics {
    /// Cash plus card sales.
    pub gross_sales: f64,
    /// Gross sales minus expenses.
    pub net_total: f64,
    /// Cash sales minus expenses, the drawer balance after paying costs.
    pub cash_remaining: f64,
}

/// Collection-wide totals across every record.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SalesTotals {
    pub cash_total: f64,
    pub card_total: f64,
    pub expense_total: f64,
    pub net_total_sale: f64,
    pub cash_remaining: f64,
}

pub fn record_metrics(record: &SaleRecord) -> RecordMetrics {
    let gross_sales = record.cash_sales + record.card_sales;
    RecordMetrics {
        gross_sales,
        net_total: gross_sales - record.expenses,
        cash_remaining: record.cash_sales - record.expenses,
    }
}

/// Folds the whole collection in one pass. An empty slice yields all zeros.
pub fn totals(records: &[SaleRecord]) -> SalesTotals {
    let mut acc = SalesTotals::default();
    for record in records {
        acc.cash_total += record.cash_sales;
        acc.card_total += record.card_sales;
        acc.expense_total += record.expenses;
    }
    acc.net_total_sale = acc.cash_total + acc.card_total - acc.expense_total;
    acc.cash_remaining = acc.cash_total - acc.expense_total;
    acc
}

/// Returns the `count` most recent records by date, oldest first so a chart
/// reads left to right. Works on a slice in any order.
pub fn recent_window(records: &[SaleRecord], count: usize) -> Vec<&SaleRecord> {
    let mut chronological: Vec<&SaleRecord> = records.iter().collect();
    chronological.sort_by_key(|record| record.date);
    let skip = chronological.len().saturating_sub(count);
    chronological.split_off(skip)
}
