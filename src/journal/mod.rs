pub mod metrics;
pub mod record;

pub use metrics::{recent_window, record_metrics, totals, RecordMetrics, SalesTotals};
pub use record::SaleRecord;
