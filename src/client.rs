use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::constants::defaults;
use crate::error::{ApiError, Result};
use crate::helpers::query::{build_query, ParamValue};
use crate::helpers::RetryPolicy;
use crate::interfaces::{Request, Transport};
use crate::session::Session;

/// Configures and builds a [`Client`].
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    endpoint: String,
    username: Option<String>,
    password: Option<String>,
    timeout: Duration,
    reauth_retries: u32,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            endpoint: defaults::API_ENDPOINT.to_string(),
            username: None,
            password: None,
            timeout: defaults::API_REQUEST_TIMEOUT,
            reauth_retries: defaults::REAUTH_RETRIES,
        }
    }
}

impl ClientBuilder {
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Credentials used to log in again when the server refuses a request.
    /// They are not sent until such a refusal, or an explicit [`Client::login`].
    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn reauth_retries(mut self, retries: u32) -> Self {
        self.reauth_retries = retries;
        self
    }

    pub fn build(self) -> Result<Client> {
        Url::parse(&self.endpoint).map_err(|source| ApiError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            source,
        })?;

        let mut session = Session::new(self.endpoint);
        session.set_credentials(self.username, self.password, None);

        Ok(Client {
            transport: Transport::new(self.timeout),
            session: Mutex::new(session),
            retry: RetryPolicy::new(self.reauth_retries),
        })
    }
}

/// A session with the opensense.network API.
///
/// The client can be shared between threads; the session is only locked
/// while reading or updating it, never while a request is in flight.
pub struct Client {
    transport: Transport,
    session: Mutex<Session>,
    retry: RetryPolicy,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("session", &*self.session())
            .field("retry", &self.retry)
            .finish()
    }
}

impl Client {
    /// Client for the public API endpoint, without credentials.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    fn session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the current session.
    pub fn session_state(&self) -> Session {
        self.session().clone()
    }

    pub fn endpoint(&self) -> String {
        self.session().endpoint().to_string()
    }

    pub fn auth_token(&self) -> Option<String> {
        self.session().auth_token().map(str::to_string)
    }

    pub(crate) fn set_credentials(&self, username: &str, password: &str, token: &str) {
        self.session().set_credentials(
            Some(username.to_string()),
            Some(password.to_string()),
            Some(token.to_string()),
        );
    }

    pub(crate) fn query(&self, target: &str, params: &[(&str, ParamValue)]) -> String {
        build_query(self.session().endpoint(), target, params)
    }

    /// Send a request once, without re-authentication.
    pub(crate) fn send_once(&self, request: &Request) -> Result<Value> {
        let token = if request.requires_auth {
            self.auth_token()
        } else {
            None
        };
        self.transport.send(request, token.as_deref())
    }

    /// Send a request, logging in again with the stored credentials and
    /// retrying if the server refuses it for lack of authorization.
    pub(crate) fn send(&self, request: &Request) -> Result<Value> {
        self.retry.run(
            || self.send_once(request),
            ApiError::is_authorization,
            |_| self.try_login(),
        )
    }

    pub(crate) fn get(&self, url: &str, requires_auth: bool) -> Result<Value> {
        self.send(&Request::get(url, requires_auth))
    }

    pub(crate) fn post(&self, url: &str, body: &Value, requires_auth: bool) -> Result<Value> {
        self.send(&Request::post(url, body, requires_auth))
    }

    pub(crate) fn delete(&self, url: &str, requires_auth: bool) -> Result<Value> {
        self.send(&Request::delete(url, requires_auth))
    }

    fn try_login(&self) -> bool {
        let Some((username, password)) = self.session().stored_credentials() else {
            log::debug!("Request refused and no credentials stored; not retrying");
            return false;
        };
        log::warn!("Request refused; logging in again as {}", username);
        match self.login(&username, &password) {
            Ok(_) => true,
            Err(e) => {
                log::warn!("Re-authentication failed: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::ErrorKind;

    #[test]
    fn builder_defaults_to_public_endpoint() {
        let client = Client::new().unwrap();
        assert_eq!(client.endpoint(), defaults::API_ENDPOINT);
        assert_eq!(client.auth_token(), None);
        assert_eq!(client.retry.retries(), 1);
    }

    #[test]
    fn builder_stores_credentials_without_token() {
        let client = Client::builder()
            .endpoint("http://localhost:8080/api")
            .credentials("u", "p")
            .build()
            .unwrap();
        let session = client.session_state();
        assert_eq!(session.endpoint(), "http://localhost:8080/api");
        assert_eq!(session.stored_credentials(), Some(("u".into(), "p".into())));
        assert_eq!(session.auth_token(), None);
    }

    #[test]
    fn invalid_endpoint_is_rejected() {
        let err = Client::builder().endpoint("not a url").build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn query_uses_session_endpoint() {
        let client = Client::builder()
            .endpoint("http://localhost:8080/api/")
            .build()
            .unwrap();
        assert_eq!(
            client.query("/units", &[("name", "celsius".into())]),
            "http://localhost:8080/api/units?name=celsius"
        );
    }

    #[test]
    fn client_is_shareable_between_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Client>();
    }
}
