pub mod http_api;
pub mod response;

pub use http_api::{Method, Request, Transport};
