//! Output validation — pluggable, trait-based check applied to the decoded report.
//!
//! Default: `TrustValidator` (returns the model's JSON untouched).
//! Hardened: `SchemaValidator` (requires the documented `HbdiReport` shape).
//!
//! `HbdiPipeline` holds an `Arc<dyn Validator>`, picked at startup via config.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::config::OutputValidation;
use crate::errors::AppError;

/// The validator trait. Implement this to change how model output is checked
/// without touching the pipeline or the handler.
pub trait Validator: Send + Sync {
    fn validate(&self, report: Value) -> Result<Value, AppError>;
}

/// Accepts whatever the model returned.
pub struct TrustValidator;

impl Validator for TrustValidator {
    fn validate(&self, report: Value) -> Result<Value, AppError> {
        Ok(report)
    }
}

/// The report shape the prompt asks for. Extra fields are tolerated.
#[allow(dead_code)] // deserialized for shape checking only
#[derive(Debug, Deserialize)]
pub struct HbdiReport {
    pub metrics: BTreeMap<String, i64>,
    pub dominant_quadrant: BTreeMap<String, String>,
    pub headline_description: BTreeMap<String, String>,
    pub mind_mechanism: BTreeMap<String, String>,
    pub key_capabilities: Vec<Value>,
    pub unique_fingerprint: Vec<Value>,
    pub detailed_personality_profile: BTreeMap<String, String>,
    pub unsuitable_environments: Vec<Value>,
    pub recommended_careers: Vec<Value>,
    pub core_strengths: BTreeMap<String, Vec<Value>>,
}

/// Rejects output that does not deserialize into `HbdiReport`.
/// On success the original value is returned, so key order and extra fields survive.
pub struct SchemaValidator;

impl Validator for SchemaValidator {
    fn validate(&self, report: Value) -> Result<Value, AppError> {
        if !report.is_object() {
            return Err(AppError::SchemaViolation(format!(
                "expected a JSON object, got {}",
                json_kind(&report)
            )));
        }

        HbdiReport::deserialize(&report)
            .map_err(|e| AppError::SchemaViolation(e.to_string()))?;

        Ok(report)
    }
}

/// Builds the validator selected by `mode`.
pub fn validator_for(mode: OutputValidation) -> Arc<dyn Validator> {
    match mode {
        OutputValidation::Trust => Arc::new(TrustValidator),
        OutputValidation::Strict => Arc::new(SchemaValidator),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
