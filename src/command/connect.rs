use std::time::Duration;

use anyhow::{Context, Result};
use osnapi::Client;

use crate::argsets::ConnArgs;

/// Build a client from the connection arguments, logging in up front when
/// both username and password were given.
pub fn connect(args: ConnArgs) -> Result<Client> {
    let mut builder = Client::builder();
    if let Some(endpoint) = args.endpoint {
        builder = builder.endpoint(endpoint);
    }
    if let Some(secs) = args.timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    let client = builder.build()?;

    if let (Some(username), Some(password)) = (args.username, args.password) {
        client
            .login(&username, &password)
            .with_context(|| format!("Could not log in as '{username}'"))?;
    }
    Ok(client)
}
