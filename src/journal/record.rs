use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{Result, SaleTrackError};

/// One day's takings: cash and card sales plus expenses, with an optional note.
///
/// Field names serialize in camelCase so blobs written by earlier releases of
/// the tracker keep loading unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRecord {
    pub id: Uuid,
    pub date: NaiveDate,
    pub cash_sales: f64,
    pub card_sales: f64,
    pub expenses: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl SaleRecord {
    /// Creates a record with a fresh id. Amounts must be finite and
    /// non-negative; a blank note is dropped.
    pub fn new(
        date: NaiveDate,
        cash_sales: f64,
        card_sales: f64,
        expenses: f64,
        note: Option<String>,
    ) -> Result<Self> {
        validate_amount("cash sales", cash_sales)?;
        validate_amount("card sales", card_sales)?;
        validate_amount("expenses", expenses)?;
        Ok(Self {
            id: Uuid::new_v4(),
            date,
            cash_sales,
            card_sales,
            expenses,
            note: note.filter(|value| !value.trim().is_empty()),
        })
    }
}

fn validate_amount(label: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(SaleTrackError::InvalidRecord(format!(
            "{label} must be a finite number"
        )));
    }
    if value < 0.0 {
        return Err(SaleTrackError::InvalidRecord(format!(
            "{label} cannot be negative"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn new_assigns_unique_ids() {
        let first = SaleRecord::new(day(1), 10.0, 5.0, 2.0, None).unwrap();
        let second = SaleRecord::new(day(1), 10.0, 5.0, 2.0, None).unwrap();
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn zero_amounts_are_valid() {
        let record = SaleRecord::new(day(2), 0.0, 0.0, 0.0, None).unwrap();
        assert_eq!(record.cash_sales, 0.0);
    }

    #[test]
    fn negative_amounts_are_rejected() {
        for (cash, card, expenses) in [(-1.0, 0.0, 0.0), (0.0, -1.0, 0.0), (0.0, 0.0, -0.5)] {
            let err = SaleRecord::new(day(3), cash, card, expenses, None).unwrap_err();
            assert!(matches!(err, SaleTrackError::InvalidRecord(_)));
        }
    }

    #[test]
    fn non_finite_amounts_are_rejected() {
        assert!(SaleRecord::new(day(4), f64::NAN, 0.0, 0.0, None).is_err());
        assert!(SaleRecord::new(day(4), 0.0, f64::INFINITY, 0.0, None).is_err());
    }

    #[test]
    fn blank_note_becomes_none() {
        let record = SaleRecord::new(day(5), 1.0, 1.0, 0.0, Some("   ".into())).unwrap();
        assert!(record.note.is_none());
        let noted = SaleRecord::new(day(5), 1.0, 1.0, 0.0, Some("restock".into())).unwrap();
        assert_eq!(noted.note.as_deref(), Some("restock"));
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let record = SaleRecord::new(day(6), 100.0, 50.0, 30.0, None).unwrap();
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("cashSales").is_some());
        assert!(value.get("cardSales").is_some());
        assert!(value.get("cash_sales").is_none());
    }

    #[test]
    fn parses_blobs_with_and_without_note() {
        let json = r#"[
            {"id":"7f2c6a44-9f02-4e34-bd7b-5f37cf2e8e11","date":"2024-01-06",
             "cashSales":100,"cardSales":50,"expenses":30,"note":""},
            {"id":"0d6f1b20-1b3f-4c86-908c-34e441f7a57d","date":"2024-01-07",
             "cashSales":20.5,"cardSales":0,"expenses":5}
        ]"#;
        let records: Vec<SaleRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].cash_sales, 100.0);
        assert_eq!(records[0].note.as_deref(), Some(""));
        assert!(records[1].note.is_none());
    }
}
