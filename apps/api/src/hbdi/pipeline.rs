//! HBDI report pipeline.
//!
//! Flow: render_prompt → completion call → strip_code_fence → JSON decode → validate.
//!
//! Stateless per run. No retries: the first failure is returned to the caller.

use std::sync::Arc;

use serde_json::Value;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::hbdi::output::decode_model_output;
use crate::hbdi::prompts::{render_prompt, HBDI_SYSTEM};
use crate::hbdi::validator::Validator;
use crate::hbdi::MetricSet;
use crate::llm_client::CompletionClient;

/// One parameterized pipeline. Validated and trusting variants differ only in `validator`.
#[derive(Clone)]
pub struct HbdiPipeline {
    llm: Arc<dyn CompletionClient>,
    validator: Arc<dyn Validator>,
}

impl HbdiPipeline {
    pub fn new(llm: Arc<dyn CompletionClient>, validator: Arc<dyn Validator>) -> Self {
        Self { llm, validator }
    }

    /// Runs the full pipeline for one request and returns the report JSON.
    pub async fn run(&self, metrics: &MetricSet) -> Result<Value, AppError> {
        let span = info_span!(
            "hbdi_report",
            request_id = %Uuid::new_v4(),
            metric_count = metrics.len()
        );

        async move {
            let prompt = render_prompt(metrics);
            let raw = self.llm.complete(&prompt, HBDI_SYSTEM).await?;

            let decoded = decode_model_output(&raw).inspect_err(|_| {
                warn!(
                    "Model output is not JSON: {:?}",
                    raw.chars().take(80).collect::<String>()
                );
            })?;

            let report = self.validator.validate(decoded)?;
            info!("HBDI report generated");
            Ok(report)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hbdi::test_support::StubClient;
    use crate::hbdi::validator::{SchemaValidator, TrustValidator};
    use crate::llm_client::LlmError;
    use serde_json::json;

    fn metrics(pairs: &[(&str, i64)]) -> MetricSet {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), json!(value)))
            .collect()
    }

    fn trusting(stub: Arc<StubClient>) -> HbdiPipeline {
        HbdiPipeline::new(stub, Arc::new(TrustValidator))
    }

    #[tokio::test]
    async fn test_fenced_arabic_report_round_trips() {
        let stub = StubClient::text(
            "```json\n{\"metrics\":{\"الاستدلال\":80,\"القياس\":70},\"dominant_quadrant\":{\"الربع المهيمن\":\"X\",\"color\":\"#fff\"}}\n```",
        );
        let pipeline = trusting(stub.clone());

        let report = pipeline
            .run(&metrics(&[("الاستدلال", 80), ("القياس", 70)]))
            .await
            .unwrap();

        assert_eq!(
            report,
            json!({
                "metrics": {"الاستدلال": 80, "القياس": 70},
                "dominant_quadrant": {"الربع المهيمن": "X", "color": "#fff"}
            })
        );
        assert_eq!(stub.calls(), 1);
    }

    #[tokio::test]
    async fn test_unfenced_report_round_trips() {
        let stub = StubClient::text("  {\"recommended_careers\": [\"مهندس\"]}\n");
        let report = trusting(stub).run(&MetricSet::new()).await.unwrap();
        assert_eq!(report, json!({"recommended_careers": ["مهندس"]}));
    }

    #[tokio::test]
    async fn test_prompt_sent_upstream_carries_metric_lines() {
        let stub = StubClient::text("{}");
        trusting(stub.clone())
            .run(&metrics(&[("التنفيذ", 50), ("التجريب", 10)]))
            .await
            .unwrap();

        let prompt = stub.last_prompt().unwrap();
        assert!(prompt.contains("التنفيذ: 50\nالتجريب: 10"));
    }

    #[tokio::test]
    async fn test_non_json_output_is_malformed_output() {
        let stub = StubClient::text("not json");
        let err = trusting(stub).run(&MetricSet::new()).await.unwrap_err();
        assert!(matches!(err, AppError::MalformedOutput(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_upstream_status_error_is_llm_error() {
        let stub = StubClient::api_error(500, "internal failure");
        let err = trusting(stub).run(&MetricSet::new()).await.unwrap_err();
        assert!(
            matches!(err, AppError::Llm(LlmError::Api { status: 500, .. })),
            "got {err:?}"
        );
    }

    #[tokio::test]
    async fn test_missing_choices_is_llm_error() {
        let stub = StubClient::missing_choices();
        let err = trusting(stub).run(&MetricSet::new()).await.unwrap_err();
        assert!(
            matches!(err, AppError::Llm(LlmError::MalformedResponse(_))),
            "got {err:?}"
        );
        assert!(!err.to_string().is_empty());
    }

    #[tokio::test]
    async fn test_strict_validator_rejects_partial_report() {
        let stub = StubClient::text("{\"metrics\": {\"الاستدلال\": 80}}");
        let pipeline = HbdiPipeline::new(stub, Arc::new(SchemaValidator));

        let err = pipeline.run(&MetricSet::new()).await.unwrap_err();
        assert!(matches!(err, AppError::SchemaViolation(_)), "got {err:?}");
    }
}
