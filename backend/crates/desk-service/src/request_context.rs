use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use uuid::Uuid;

static REQUEST_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Correlation and timing for one service call
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Unique correlation ID for this request
    pub correlation_id: String,
    /// Sequence number within this server instance
    pub request_seq: u64,
    /// Claimed writer or receiver identity
    pub actor: String,
    pub started_at: Instant,
}

impl RequestContext {
    pub fn new(actor: &str) -> Self {
        let request_seq = REQUEST_COUNTER.fetch_add(1, Ordering::SeqCst);

        Self {
            correlation_id: format!("req-{}-{}", request_seq, Uuid::new_v4().as_simple()),
            request_seq,
            actor: actor.to_string(),
            started_at: Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.started_at.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    pub fn log_prefix(&self) -> String {
        let actor: String = self.actor.chars().take(32).collect();
        format!("[req={} actor={}]", self.correlation_id, actor)
    }
}
