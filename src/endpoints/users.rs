use serde::Deserialize;
use serde_json::json;

use crate::client::Client;
use crate::constants::paths;
use crate::error::{ApiError, Result};
use crate::interfaces::Request;
use crate::models::Profile;

#[derive(Debug, Deserialize)]
struct LoginResponse {
    id: String,
}

impl Client {
    /// Log in and keep the returned token for requests that need it.
    ///
    /// Username and password are stored as well, so that a later refused
    /// request can log in again on its own. Tokens are valid for one hour.
    pub fn login(&self, username: &str, password: &str) -> Result<String> {
        let url = self.query(paths::LOGIN, &[]);
        let body = json!({"username": username, "password": password});
        let resp = self.send_once(&Request::post(&url, &body, false))?;

        let token = LoginResponse::deserialize(&resp)
            .map_err(|_| ApiError::MissingToken {
                url: url.clone(),
                body: resp.to_string(),
            })?
            .id;

        self.set_credentials(username, password, &token);
        log::info!("Logged in as {}", username);
        Ok(token)
    }

    /// Profile of the logged in user, e.g. `[{"username": "...", "id": 123}]`.
    pub fn profile(&self) -> Result<Profile> {
        self.get(&self.query(paths::PROFILE, &[]), true)
    }
}
