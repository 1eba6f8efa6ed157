//! Client for the opensense.network sensor data API.
//!
//! ```no_run
//! use osnapi::{Client, SensorFilter};
//!
//! # fn main() -> osnapi::Result<()> {
//! let client = Client::builder().credentials("user", "secret").build()?;
//! let units = client.get_units(Some("celsius"), None)?;
//! let nearby = client.get_sensors(&SensorFilter {
//!     ref_point: Some(vec![50.5605, 9.6711]),
//!     max_distance: Some(5000.0),
//!     ..Default::default()
//! })?;
//! println!("{units}\n{nearby}");
//! # Ok(())
//! # }
//! ```
//!
//! Requests the server refuses for lack of authorization are retried once,
//! after logging in again with the stored credentials.

mod client;
mod endpoints;
mod error;
mod session;

pub mod constants;
pub mod helpers;
pub mod interfaces;
pub mod models;

pub use client::{Client, ClientBuilder};
pub use error::{ApiError, ErrorKind, Result};
pub use models::{LicenseFilter, LicenseFlags, Payload, SensorFilter, ValueFilter, ValueRange};
pub use session::Session;
