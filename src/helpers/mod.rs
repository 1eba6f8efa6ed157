mod backoff_retry;
pub mod query;

pub use backoff_retry::RetryPolicy;
