// src/config/options.rs
use std::num::NonZeroUsize;

use super::consts::DEFAULT_BASE_URL;

/// What the extraction pool does when a row does not match a known layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// The first bad row aborts the batch; no records are returned.
    #[default]
    FailFast,
    /// Bad rows are reported next to the records that did extract.
    SkipInvalid,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    pub query: String,
    pub base_url: String,
    pub workers: NonZeroUsize,
    pub policy: FailurePolicy,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            query: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            workers: default_workers(),
            policy: FailurePolicy::default(),
        }
    }
}

impl SearchOptions {
    pub fn new(query: impl Into<String>) -> Self {
        Self { query: query.into(), ..Self::default() }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_workers(mut self, workers: NonZeroUsize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// One worker per available processing unit (1 if the host won't say).
pub fn default_workers() -> NonZeroUsize {
    std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
}
