//! On-demand financial analysis of recent records through a pluggable
//! text-generation backend.
//!
//! The orchestration never fails: whatever happens on the wire, the caller
//! gets a printable message back. Replies are not cached; asking twice asks
//! the service twice.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::errors::Result;
use crate::journal::{recent_window, SaleRecord};

pub use gemini::GeminiClient;
pub use mock::MockInsight;

/// Most recent records forwarded to the advisor per request.
pub const INSIGHT_RECORD_LIMIT: usize = 30;

/// Shown when there is nothing to analyze; the backend is not called.
pub const NO_DATA_MESSAGE: &str = "No data available for analysis yet.";
/// Shown when the service answered with empty text.
pub const EMPTY_REPLY_MESSAGE: &str = "Unable to generate analysis at this time.";
/// Shown when the request itself failed.
pub const UNAVAILABLE_MESSAGE: &str =
    "The financial advisor is currently unavailable. Please check your data manually.";

/// Interface every insight backend implements.
#[async_trait]
pub trait InsightBackend: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Builds the fixed advisory prompt over the given records, one summary line
/// per record.
pub fn build_prompt(records: &[&SaleRecord]) -> String {
    let mut lines = String::new();
    for record in records {
        lines.push_str(&format!(
            "Date: {}, Cash: {}, Card: {}, Exp: {}\n",
            record.date, record.cash_sales, record.card_sales, record.expenses
        ));
    }
    format!(
        "Analyze these daily business records and provide a brief summary of trends, \
         efficiency, and one actionable tip to increase net profit.\n\
         Keep it professional and concise.\n\nRecords:\n{lines}"
    )
}

/// Asks the backend about the most recent records. Always returns a
/// user-presentable message, falling back to fixed text on failure.
pub async fn request_insight(backend: &dyn InsightBackend, records: &[SaleRecord]) -> String {
    if records.is_empty() {
        return NO_DATA_MESSAGE.to_string();
    }
    let window = recent_window(records, INSIGHT_RECORD_LIMIT);
    let prompt = build_prompt(&window);
    debug!(records = window.len(), "Requesting financial insight.");
    match backend.generate(&prompt).await {
        Ok(reply) if reply.trim().is_empty() => EMPTY_REPLY_MESSAGE.to_string(),
        Ok(reply) => reply.trim().to_string(),
        Err(err) => {
            warn!(error = %err, "Insight request failed.");
            UNAVAILABLE_MESSAGE.to_string()
        }
    }
}
