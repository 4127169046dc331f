//! Canned insight backend for tests and offline development.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;

use crate::errors::{Result, SaleTrackError};

use super::InsightBackend;

/// Mock backend returning a fixed reply and recording what it was asked.
#[derive(Clone, Default)]
pub struct MockInsight {
    reply: String,
    fail: bool,
    calls: Arc<AtomicUsize>,
    last_prompt: Arc<Mutex<Option<String>>>,
}

impl MockInsight {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            ..Self::default()
        }
    }

    /// Every generate call fails with a service error.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt
            .lock()
            .expect("mock prompt lock poisoned")
            .clone()
    }
}

#[async_trait]
impl InsightBackend for MockInsight {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().expect("mock prompt lock poisoned") =
            Some(prompt.to_string());
        if self.fail {
            return Err(SaleTrackError::InsightError("mock backend offline".into()));
        }
        Ok(self.reply.clone())
    }
}
