#![doc(test(attr(deny(warnings))))]

//! SaleTrack keeps a small business's daily sales and expense records, computes
//! the derived performance metrics, and can ask an LLM advisor for a short
//! financial analysis of recent activity.

pub mod cli;
pub mod config;
pub mod errors;
pub mod insight;
pub mod journal;
pub mod storage;
pub mod store;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("SaleTrack tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
