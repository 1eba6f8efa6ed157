use serde_json::Value;

use crate::error::{ApiError, Result};

/// Turn a response into its decoded payload, or classify the failure.
///
/// Bodies that are not valid JSON are passed through as a JSON string, with
/// invalid UTF-8 sequences replaced.
pub fn interpret(url: &str, status: u16, body: &[u8]) -> Result<Value> {
    if status == 200 {
        return Ok(serde_json::from_slice(body).unwrap_or_else(|_| Value::String(lossy_text(body))));
    }

    let url = url.to_string();
    let body = lossy_text(body);
    let err = match status {
        401 | 500 => ApiError::Authorization { status, url, body },
        408 => ApiError::Overload { status, url, body },
        _ => ApiError::Request { status, url, body },
    };
    log::debug!("Request to {} failed with status {}", err.url().unwrap_or_default(), status);
    Err(err)
}

fn lossy_text(body: &[u8]) -> String {
    String::from_utf8_lossy(body).into_owned()
}
