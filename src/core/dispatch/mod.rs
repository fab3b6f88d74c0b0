//! Request parsing and dispatch
//!
//! An inbound request carries exactly one functional key. The one-of
//! constraint is enforced in a single parsing step that produces a tagged
//! union, so the rest of the pipeline never sees a zero- or many-key
//! request.


use crate::core::ai::AiClient;
use crate::core::math;
use crate::utils::error::{GatewayError, Result};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::info;

/// Functional keys recognized in a request body
const FUNCTIONAL_KEYS: [&str; 5] = ["fibonacci", "prime", "lcm", "hcf", "AI"];

/// The single operation a request asks for
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Generate a Fibonacci series of the given length
    Fibonacci(i64),
    /// Filter the values down to primes
    PrimeFilter(Vec<i64>),
    /// Least common multiple of the values
    Lcm(Vec<i64>),
    /// Highest common factor of the values
    Hcf(Vec<i64>),
    /// Forward a question to the external AI endpoint
    AskAi(String),
}

impl Operation {
    /// Parse a request body, enforcing the exactly-one-key invariant.
    ///
    /// A key with a JSON `null` value counts as absent; unknown keys are
    /// ignored.
    pub fn from_value(body: &Value) -> Result<Self> {
        let object = body.as_object().ok_or_else(|| {
            GatewayError::InvalidRequest("Request body must be a JSON object".to_string())
        })?;

        let present: Vec<&str> = FUNCTIONAL_KEYS
            .iter()
            .copied()
            .filter(|key| object.get(*key).is_some_and(|v| !v.is_null()))
            .collect();

        match present.as_slice() {
            [] => Err(GatewayError::InvalidRequest(
                "Request must contain exactly one key: fibonacci, prime, lcm, hcf, or AI"
                    .to_string(),
            )),
            [key] => Self::parse_single(key, &object[*key]),
            keys => Err(GatewayError::InvalidRequest(format!(
                "Request must contain exactly one key, but {} were provided",
                keys.len()
            ))),
        }
    }

    fn parse_single(key: &str, value: &Value) -> Result<Self> {
        match key {
            "fibonacci" => Ok(Self::Fibonacci(parse_field(key, value)?)),
            "prime" => Ok(Self::PrimeFilter(parse_field(key, value)?)),
            "lcm" => Ok(Self::Lcm(parse_field(key, value)?)),
            "hcf" => Ok(Self::Hcf(parse_field(key, value)?)),
            "AI" => Ok(Self::AskAi(parse_field(key, value)?)),
            other => Err(GatewayError::Internal(format!(
                "Unmatched functional key: {}",
                other
            ))),
        }
    }
}

fn parse_field<T: DeserializeOwned>(key: &str, value: &Value) -> Result<T> {
    serde_json::from_value(value.clone()).map_err(|e| {
        GatewayError::InvalidRequest(format!("Invalid value for key '{}': {}", key, e))
    })
}

/// Route a parsed operation to its implementation.
///
/// Errors raised by the operations propagate unchanged; success values are
/// wrapped as JSON. Holds no state and is safe to invoke concurrently.
pub async fn execute(operation: Operation, ai: &AiClient) -> Result<Value> {
    match operation {
        Operation::Fibonacci(n) => {
            info!("Processing fibonacci({})", n);
            Ok(json!(math::fibonacci(n)?))
        }
        Operation::PrimeFilter(values) => {
            info!("Processing prime filter on {} values", values.len());
            Ok(json!(math::filter_primes(&values)?))
        }
        Operation::Lcm(values) => {
            info!("Processing LCM on {} values", values.len());
            Ok(json!(math::compute_lcm(&values)?))
        }
        Operation::Hcf(values) => {
            info!("Processing HCF on {} values", values.len());
            Ok(json!(math::compute_hcf(&values)?))
        }
        Operation::AskAi(question) => {
            info!("Processing AI question");
            Ok(json!(ai.ask(&question).await?))
        }
    }
}
