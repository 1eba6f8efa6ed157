use std::fmt;

/// Endpoint and credentials of one API session.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Session {
    endpoint: String,
    username: Option<String>,
    password: Option<String>,
    auth_token: Option<String>,
}

impl Session {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    /// Stored username and password, if both are set and non-empty.
    pub fn stored_credentials(&self) -> Option<(String, String)> {
        match (self.username(), self.password()) {
            (Some(u), Some(p)) if !u.is_empty() && !p.is_empty() => {
                Some((u.to_string(), p.to_string()))
            }
            _ => None,
        }
    }

    pub fn set_credentials(
        &mut self,
        username: Option<String>,
        password: Option<String>,
        auth_token: Option<String>,
    ) {
        self.username = username;
        self.password = password;
        self.auth_token = auth_token;
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("endpoint", &self.endpoint)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("auth_token", &self.auth_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
