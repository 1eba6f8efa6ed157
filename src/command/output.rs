use anyhow::Result;
use serde_json::Value;

pub fn print_payload(payload: &Value) -> Result<()> {
    // A bare string (e.g. "OK" or a token) is printed without quotes
    match payload.as_str() {
        Some(s) => println!("{s}"),
        None => println!("{}", serde_json::to_string_pretty(payload)?),
    }
    Ok(())
}
