//! Token and work-unit usage accounting.

use serde::{Deserialize, Serialize};

/// Accumulated usage counters for one accounting scope.
///
/// A scope is either a single request or a longer-lived session total; a new
/// scope starts from `TokenUsage::default()`. Counters only ever grow:
/// [`TokenUsage::append`] is the sole mutation and there is no subtraction or
/// reset. A ledger has a single writer per scope; wrap it in external
/// synchronization before sharing it across tasks.
///
/// # Examples
///
/// ```rust,ignore
/// use unillm::types::TokenUsage;
///
/// let mut ledger = TokenUsage::default();
/// ledger.append(&TokenUsage { total_input_tokens: 10, total_output_tokens: 5, ..Default::default() });
/// ledger.append(&TokenUsage { total_input_tokens: 3, ..Default::default() });
/// assert_eq!(ledger.total_input_tokens, 13);
/// assert_eq!(ledger.total_output_tokens, 5);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenUsage {
    /// Prompt tokens consumed.
    pub total_input_tokens: u64,
    /// Completion tokens generated.
    pub total_output_tokens: u64,
    /// Tokens spent on internal reasoning.
    pub total_reasoning_tokens: u64,
    /// Prompt tokens served from a provider-side cache.
    pub total_cache_read_tokens: u64,
    /// Prompt tokens written into a provider-side cache.
    pub total_cache_write_tokens: u64,
    /// Images generated.
    pub total_images: u64,
    /// Web searches performed on behalf of the model.
    pub total_web_searches: u64,
    /// Upstream requests issued.
    pub total_requests: u64,
}

impl TokenUsage {
    /// Add every counter of `delta` onto the receiver, in place.
    ///
    /// Safe to call once per usage chunk as they arrive on a stream; the
    /// final value equals the field-wise sum of every snapshot appended.
    pub fn append(&mut self, delta: &TokenUsage) {
        self.total_input_tokens += delta.total_input_tokens;
        self.total_output_tokens += delta.total_output_tokens;
        self.total_reasoning_tokens += delta.total_reasoning_tokens;
        self.total_cache_read_tokens += delta.total_cache_read_tokens;
        self.total_cache_write_tokens += delta.total_cache_write_tokens;
        self.total_images += delta.total_images;
        self.total_web_searches += delta.total_web_searches;
        self.total_requests += delta.total_requests;
    }

    /// Record one upstream request.
    pub fn add_request(&mut self) {
        self.total_requests += 1;
    }

    /// Input plus output plus reasoning tokens.
    pub const fn total_tokens(&self) -> u64 {
        self.total_input_tokens + self.total_output_tokens + self.total_reasoning_tokens
    }

    /// True when every counter is zero.
    pub const fn is_empty(&self) -> bool {
        self.total_input_tokens == 0
            && self.total_output_tokens == 0
            && self.total_reasoning_tokens == 0
            && self.total_cache_read_tokens == 0
            && self.total_cache_write_tokens == 0
            && self.total_images == 0
            && self.total_web_searches == 0
            && self.total_requests == 0
    }
}

impl std::fmt::Display for TokenUsage {
    /// Canonical single-line JSON rendering of the snapshot.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        f.write_str(&json)
    }
}
