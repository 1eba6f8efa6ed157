use serde_json::json;

use crate::client::Client;
use crate::constants::paths;
use crate::error::{ApiError, Result};
use crate::models::{Measurement, Payload, SensorWithValues, ValueFilter, ValueRange};

fn first_last_suffix(first: bool, last: bool) -> Result<&'static str> {
    match (first, last) {
        (true, true) => Ok("firstlast"),
        (true, false) => Ok("first"),
        (false, true) => Ok("last"),
        (false, false) => Err(ApiError::InvalidArgument(format!(
            "at least one of first and last must be set (first: {first}, last: {last})"
        ))),
    }
}

impl Client {
    /// A sensor with its first and/or last value in `values`.
    ///
    /// Fails with an invalid argument error, without contacting the server,
    /// if neither `first` nor `last` is set.
    pub fn get_first_last_value_for_sensor(
        &self,
        id: u64,
        first: bool,
        last: bool,
    ) -> Result<SensorWithValues> {
        let suffix = first_last_suffix(first, last)?;
        let url = self.query(&format!("{}/{id}/values/{suffix}", paths::SENSORS), &[]);
        self.get(&url, false)
    }

    /// Sensors matching `filter`, each with its matching values.
    pub fn get_values(&self, filter: &ValueFilter) -> Result<SensorWithValues> {
        self.get(&self.query(paths::VALUES, &filter.params()), false)
    }

    pub fn get_values_for_sensor(&self, id: u64, range: &ValueRange) -> Result<SensorWithValues> {
        let url = self.query(&format!("{}/{id}/values", paths::SENSORS), &range.params());
        self.get(&url, false)
    }

    /// Add a value (`sensorId`, `timestamp`, `numberValue`) to one of your
    /// sensors. Requires login.
    pub fn add_value(&self, value: &Measurement) -> Result<Payload> {
        self.post(&self.query(paths::ADD_VALUE, &[]), value, true)
    }

    /// Add several values at once, possibly for different sensors.
    pub fn add_multiple_values(&self, values: &[Measurement]) -> Result<Payload> {
        let body = json!({ "collapsedMessages": values });
        self.post(&self.query(paths::ADD_MULTIPLE_VALUES, &[]), &body, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::ErrorKind;

    #[test]
    fn suffix_follows_flags() {
        assert_eq!(first_last_suffix(true, true).unwrap(), "firstlast");
        assert_eq!(first_last_suffix(true, false).unwrap(), "first");
        assert_eq!(first_last_suffix(false, true).unwrap(), "last");
    }

    #[test]
    fn neither_flag_is_invalid() {
        let err = first_last_suffix(false, false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
