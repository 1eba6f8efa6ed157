use std::fmt;
use std::time::Duration;

use serde_json::Value;
use ureq::http::Response;
use ureq::tls::{TlsConfig, TlsProvider};
use ureq::{Agent, Body};

use crate::constants::headers;
use crate::error::{ApiError, Result};
use crate::interfaces::response::interpret;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        })
    }
}

/// Everything needed to issue one API request.
#[derive(Debug, Clone, PartialEq)]
pub struct Request<'a> {
    pub method: Method,
    pub url: &'a str,
    pub body: Option<&'a Value>,
    pub requires_auth: bool,
}

impl<'a> Request<'a> {
    pub fn get(url: &'a str, requires_auth: bool) -> Self {
        Self {
            method: Method::Get,
            url,
            body: None,
            requires_auth,
        }
    }

    pub fn post(url: &'a str, body: &'a Value, requires_auth: bool) -> Self {
        Self {
            method: Method::Post,
            url,
            body: Some(body),
            requires_auth,
        }
    }

    pub fn delete(url: &'a str, requires_auth: bool) -> Self {
        Self {
            method: Method::Delete,
            url,
            body: None,
            requires_auth,
        }
    }
}

/// Headers sent with every request. The `Authorization` header is added when
/// the request requires it, carrying an empty value if no token is known.
pub fn generate_headers(requires_auth: bool, token: Option<&str>) -> Vec<(&'static str, String)> {
    let mut hdrs: Vec<(&'static str, String)> = headers::FIXED
        .iter()
        .map(|(k, v)| (*k, v.to_string()))
        .collect();
    if requires_auth {
        hdrs.push((headers::AUTHORIZATION, token.unwrap_or_default().to_string()));
    }
    hdrs
}

/// Blocking HTTP transport for the API.
#[derive(Clone)]
pub struct Transport {
    agent: Agent,
}

impl Transport {
    pub fn new(timeout: Duration) -> Self {
        let config = Agent::config_builder()
            .tls_config(TlsConfig::builder().provider(TlsProvider::NativeTls).build())
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build();
        Self {
            agent: Agent::new_with_config(config),
        }
    }

    /// Issue `request` and interpret the response.
    ///
    /// `token` is only consulted when the request requires authorization.
    pub fn send(&self, request: &Request, token: Option<&str>) -> Result<Value> {
        log::debug!("{} {}", request.method, request.url);
        let hdrs = generate_headers(request.requires_auth, token);

        let response = match (request.method, request.body) {
            (Method::Get, _) => {
                let mut req = self.agent.get(request.url);
                for (k, v) in &hdrs {
                    req = req.header(*k, v.as_str());
                }
                req.call()
            }
            (Method::Delete, _) => {
                let mut req = self.agent.delete(request.url);
                for (k, v) in &hdrs {
                    req = req.header(*k, v.as_str());
                }
                req.call()
            }
            (Method::Post, body) => {
                let mut req = self.agent.post(request.url);
                for (k, v) in &hdrs {
                    req = req.header(*k, v.as_str());
                }
                req.send_json(body.unwrap_or(&Value::Null))
            }
        }
        .map_err(|e| {
            log::warn!("{} {} failed: {}", request.method, request.url, e);
            ApiError::network(request.url, e)
        })?;

        let (status, body) = read_response(request.url, response)?;
        interpret(request.url, status, &body)
    }
}

/// Read the full body as bytes. Unfiltered sensor and value searches can
/// exceed ureq's default body limit.
fn read_response(url: &str, response: Response<Body>) -> Result<(u16, Vec<u8>)> {
    let status = response.status().as_u16();
    let mut body = response.into_body();
    let bytes = body
        .with_config()
        .limit(u64::MAX)
        .read_to_vec()
        .map_err(|e| ApiError::network(url, e))?;
    Ok((status, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    use mockito::Matcher;
    use serde_json::json;

    use crate::error::ErrorKind;

    fn transport() -> Transport {
        Transport::new(Duration::from_secs(5))
    }

    #[test]
    fn fixed_headers_without_auth() {
        let hdrs = generate_headers(false, Some("tok"));
        assert_eq!(hdrs.len(), 4);
        assert!(hdrs.iter().all(|(k, _)| *k != headers::AUTHORIZATION));
        assert!(hdrs.contains(&("accept", "application/json".to_string())));
        assert!(hdrs.contains(&("cache-control", "no-cache".to_string())));
    }

    #[test]
    fn auth_header_present_even_without_token() {
        let hdrs = generate_headers(true, None);
        assert_eq!(hdrs.last(), Some(&(headers::AUTHORIZATION, String::new())));
        let hdrs = generate_headers(true, Some("tok123"));
        assert_eq!(hdrs.last(), Some(&(headers::AUTHORIZATION, "tok123".to_string())));
    }

    #[test]
    fn get_sends_headers_and_decodes_body() {
        let mut server = mockito::Server::new();
        let m = server
            .mock("GET", "/units/1")
            .match_query(Matcher::Any)
            .match_header("accept", "application/json")
            .match_header("cache-control", "no-cache")
            .match_header("Authorization", "tok123")
            .with_body(r#"{"id": 1, "name": "celsius", "measurandId": 1}"#)
            .expect(1)
            .create();

        let url = format!("{}/units/1?", server.url());
        let res = transport()
            .send(&Request::get(&url, true), Some("tok123"))
            .unwrap();
        assert_eq!(res, json!({"id": 1, "name": "celsius", "measurandId": 1}));
        m.assert();
    }

    #[test]
    fn post_sends_json_body() {
        let mut server = mockito::Server::new();
        let body = json!({"sensorId": 61, "timestamp": "2019-11-23T01:23:45.678Z", "numberValue": 1.0});
        let m = server
            .mock("POST", "/sensors/addValue")
            .match_query(Matcher::Any)
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(body.clone()))
            .with_body("OK")
            .expect(1)
            .create();

        let url = format!("{}/sensors/addValue?", server.url());
        let res = transport()
            .send(&Request::post(&url, &body, true), Some("tok"))
            .unwrap();
        assert_eq!(res, json!("OK"));
        m.assert();
    }

    #[test]
    fn large_body_is_read_in_full() {
        let mut server = mockito::Server::new();
        let sensors: Vec<Value> = (0..250_000)
            .map(|id| json!({"id": id, "sensorModel": "DWD station", "licenseId": 4}))
            .collect();
        let body = Value::Array(sensors).to_string();
        assert!(body.len() > 10 * 1024 * 1024);
        let m = server
            .mock("GET", "/sensors")
            .match_query(Matcher::Any)
            .with_body(&body)
            .expect(1)
            .create();

        let url = format!("{}/sensors?", server.url());
        let res = transport().send(&Request::get(&url, false), None).unwrap();
        assert_eq!(res.as_array().map(Vec::len), Some(250_000));
        m.assert();
    }

    #[test]
    fn invalid_utf8_body_is_returned_as_text() {
        let mut server = mockito::Server::new();
        let m = server
            .mock("GET", "/units")
            .match_query(Matcher::Any)
            .with_body([0x4f_u8, 0xff, 0x4b])
            .expect(1)
            .create();

        let url = format!("{}/units?", server.url());
        let res = transport().send(&Request::get(&url, false), None).unwrap();
        assert_eq!(res, json!("O\u{fffd}K"));
        m.assert();
    }

    #[test]
    fn delete_surfaces_status_failures() {
        let mut server = mockito::Server::new();
        let m = server
            .mock("DELETE", "/sensors/61")
            .match_query(Matcher::Any)
            .with_status(404)
            .with_body("not found")
            .expect(1)
            .create();

        let url = format!("{}/sensors/61?", server.url());
        let err = transport()
            .send(&Request::delete(&url, true), None)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::GenericRequestFailure);
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.url(), Some(url.as_str()));
        m.assert();
    }

    #[test]
    fn unreachable_host_is_network_failure() {
        let err = transport()
            .send(&Request::get("http://127.0.0.1:1/units?", false), None)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NetworkFailure);
        assert_eq!(err.status(), None);
    }
}
