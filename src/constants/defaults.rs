use std::time::Duration;

pub const API_ENDPOINT: &str = "https://www.opensense.network/beta/api/v1.0/";
pub const API_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
pub const REAUTH_RETRIES: u32 = 1;
pub const LOG_LEVEL: &str = "info";
