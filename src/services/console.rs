use serde_json::Value;

use crate::{
    error::GatewayError,
    models::{BackendResponse, ChaincodeRequest, InvocationForm, InvocationMethod, QueryForm, QueryMethod},
    utils::pretty_json,
};

/// Outcome of a query POST: fresh per request, never carried over.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOutcome {
    pub transactions: Vec<Value>,
    pub message: Option<String>,
}

pub fn build_invocation(form: &InvocationForm) -> ChaincodeRequest {
    let method = InvocationMethod::parse(&form.method);
    ChaincodeRequest {
        channel: form.channel.clone(),
        chaincode: form.chaincode.clone(),
        chaincode_ver: form.chaincode_ver.clone(),
        method: method.as_str().to_string(),
        args: method.args(form),
    }
}

pub fn build_query(form: &QueryForm) -> ChaincodeRequest {
    let method = QueryMethod::parse(&form.method);
    ChaincodeRequest {
        channel: form.channel.clone(),
        chaincode: form.chaincode.clone(),
        chaincode_ver: form.chaincode_ver.clone(),
        method: method.as_str().to_string(),
        args: method.args(form),
    }
}

/// Message shown under the invocation form after the backend replied (or failed to).
pub fn invocation_message(
    request: &ChaincodeRequest,
    reply: Result<BackendResponse, GatewayError>,
) -> String {
    let envelope = pretty_json(request);
    match reply {
        Ok(reply) if reply.is_success() => format!(
            "{}\n\nTransaction added!\n\ntransactionID: {}",
            envelope,
            reply.transaction_id.unwrap_or_default()
        ),
        Ok(reply) => {
            tracing::warn!(
                "Invocation {} rejected with returnCode {:?}",
                request.method,
                reply.return_code
            );
            error_message(&envelope, &reply.info.unwrap_or_default())
        }
        Err(err) => {
            tracing::error!("Invocation {} failed: {}", request.method, err);
            error_message(&envelope, &err.to_string())
        }
    }
}

pub fn query_outcome(
    request: &ChaincodeRequest,
    reply: Result<BackendResponse, GatewayError>,
) -> QueryOutcome {
    let envelope = pretty_json(request);
    match reply {
        Ok(reply) if reply.is_success() => match decode_transactions(reply.result) {
            Ok(transactions) => QueryOutcome {
                transactions,
                message: None,
            },
            Err(detail) => {
                tracing::warn!("Query {} returned an unusable result: {}", request.method, detail);
                QueryOutcome {
                    transactions: Vec::new(),
                    message: Some(error_message(&envelope, &detail)),
                }
            }
        },
        Ok(reply) => {
            tracing::warn!(
                "Query {} rejected with returnCode {:?}",
                request.method,
                reply.return_code
            );
            QueryOutcome {
                transactions: Vec::new(),
                message: Some(error_message(&envelope, &reply.info.unwrap_or_default())),
            }
        }
        Err(err) => {
            tracing::error!("Query {} failed: {}", request.method, err);
            QueryOutcome {
                transactions: Vec::new(),
                message: Some(error_message(&envelope, &err.to_string())),
            }
        }
    }
}

fn error_message(envelope: &str, detail: &str) -> String {
    format!("{}\n\nError!\n\n{}", envelope, detail)
}

// A JSON array becomes the list as-is; any other document is one entry.
fn decode_transactions(result: Option<Value>) -> Result<Vec<Value>, String> {
    let decoded = match result {
        None | Some(Value::Null) => return Err("Backend reply carried no result".to_string()),
        Some(Value::String(raw)) => serde_json::from_str::<Value>(&raw)
            .map_err(|e| format!("Backend result is not valid JSON: {}", e))?,
        Some(other) => other,
    };

    Ok(match decoded {
        Value::Array(items) => items,
        single => vec![single],
    })
}
