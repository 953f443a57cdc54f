//! AWS Lambda handler for goal calculations
//!
//! Accepts a `CalculatorInputs` JSON body through a Lambda Function URL and
//! returns the `CalculationResult` JSON. Inputs without a solution get a 422
//! with the reason, so the front end can fall back to its help content.
//! `OPTIONS` preflight requests are answered with the CORS headers only.

use aws_lambda_events::event::lambda_function_urls::{
    LambdaFunctionUrlRequest, LambdaFunctionUrlResponse,
};
use aws_lambda_events::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CONTENT_TYPE,
};
use aws_lambda_events::http::{HeaderMap, HeaderValue};
use first_million::{calculate_investment, CalculationResult, CalculatorInputs};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde::Serialize;
use std::time::Instant;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CalculationResponse {
    result: CalculationResult,
    execution_time_us: u64,
}

fn cors_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static("POST, OPTIONS"));
    headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static("Content-Type"));
    headers
}

fn response(status: i64, body: Option<String>) -> LambdaFunctionUrlResponse {
    LambdaFunctionUrlResponse {
        status_code: status,
        headers: cors_headers(),
        body,
        is_base64_encoded: false,
        cookies: Vec::new(),
    }
}

fn error_response(status: i64, message: &str) -> LambdaFunctionUrlResponse {
    response(status, Some(serde_json::json!({ "error": message }).to_string()))
}

/// Builds the response for one request
fn respond(request: LambdaFunctionUrlRequest) -> Result<LambdaFunctionUrlResponse, Error> {
    let start = Instant::now();

    if request.request_context.http.method.as_deref() == Some("OPTIONS") {
        return Ok(response(200, None));
    }

    if request.is_base64_encoded {
        return Ok(error_response(400, "Binary request bodies are not supported"));
    }

    let body = request.body.unwrap_or_default();
    let inputs: CalculatorInputs = match serde_json::from_str(&body) {
        Ok(inputs) => inputs,
        Err(e) => return Ok(error_response(400, &format!("Invalid JSON: {}", e))),
    };

    match calculate_investment(&inputs) {
        Ok(result) => {
            let body = serde_json::to_string(&CalculationResponse {
                result,
                execution_time_us: start.elapsed().as_micros() as u64,
            })?;
            Ok(response(200, Some(body)))
        }
        Err(reason) => Ok(error_response(422, &reason.to_string())),
    }
}

/// Lambda handler function
async fn handler(
    event: LambdaEvent<LambdaFunctionUrlRequest>,
) -> Result<LambdaFunctionUrlResponse, Error> {
    respond(event.payload)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
