// HBDI report endpoint: metrics in, model-written report JSON out.
// All completion calls go through llm_client; this module owns the prompt and output handling.

pub mod handlers;
pub mod output;
pub mod pipeline;
pub mod prompts;
pub mod validator;

#[cfg(test)]
pub(crate) mod test_support;

/// Metric name to score, in the order the caller sent them.
pub type MetricSet = serde_json::Map<String, serde_json::Value>;
