//! Turns an `Endpoint` into a transport-ready `HttpRequest`.
//!
//! GET parameters become query pairs; every other method carries them as a
//! JSON object body. Nothing here performs I/O.

use serde::Serialize;
use serde_json::{Map, Value};
use url::Url;

use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};

/// Build the request described by `endpoint`.
///
/// Fails with `EncodingError` when the parameters do not serialize to a JSON
/// object, and with `InvalidUrl` when base URL and path do not form a URL.
pub fn build_request<E>(endpoint: &E) -> Result<HttpRequest, ApiError>
where
    E: Endpoint + ?Sized,
{
    let mut url = resolve(endpoint.base_url(), &endpoint.path())?;
    let method = endpoint.method();
    let headers = endpoint.headers().unwrap_or_default();

    let mut body = None;
    if let Some(params) = endpoint.parameters() {
        let mapping = encode_mapping(&params)?;
        if method == HttpMethod::Get {
            if !mapping.is_empty() {
                let mut pairs = url.query_pairs_mut();
                for (key, value) in &mapping {
                    pairs.append_pair(key, &query_value(value));
                }
            }
        } else {
            body = Some(Value::Object(mapping).to_string());
        }
    }

    Ok(HttpRequest {
        method,
        url: url.into(),
        headers,
        body,
    })
}

/// Join `path` onto `base_url` with exactly one slash between them.
fn resolve(base_url: &str, path: &str) -> Result<Url, ApiError> {
    let joined = format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    Url::parse(&joined).map_err(|e| ApiError::InvalidUrl(format!("{joined}: {e}")))
}

fn encode_mapping<P: Serialize>(params: &P) -> Result<Map<String, Value>, ApiError> {
    match serde_json::to_value(params) {
        Ok(Value::Object(mapping)) => Ok(mapping),
        Ok(other) => Err(ApiError::EncodingError(format!(
            "parameters must encode as a JSON object, got {other}"
        ))),
        Err(e) => Err(ApiError::EncodingError(e.to_string())),
    }
}

/// Strings go in raw; every other value uses its JSON text.
fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
