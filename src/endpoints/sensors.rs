use crate::client::Client;
use crate::constants::paths;
use crate::error::Result;
use crate::models::{Payload, Sensor, SensorFilter};

impl Client {
    /// Sensors matching `filter`.
    ///
    /// Without any criteria this returns every sensor the service knows, which
    /// is a lot of data.
    pub fn get_sensors(&self, filter: &SensorFilter) -> Result<Payload> {
        self.get(&self.query(paths::SENSORS, &filter.params()), false)
    }

    pub fn get_sensor(&self, id: u64) -> Result<Sensor> {
        self.get(&self.query(&format!("{}/{id}", paths::SENSORS), &[]), false)
    }

    /// Create a sensor. Returns it with its assigned id. Requires login.
    pub fn add_sensor(&self, sensor: &Sensor) -> Result<Sensor> {
        self.post(&self.query(paths::ADD_SENSOR, &[]), sensor, true)
    }

    /// Delete one of your own sensors. Returns `"OK"`. Requires login.
    pub fn delete_sensor(&self, id: u64) -> Result<Payload> {
        self.delete(&self.query(&format!("{}/{id}", paths::SENSORS), &[]), true)
    }

    pub fn my_sensors(&self) -> Result<Payload> {
        self.get(&self.query(paths::MY_SENSORS, &[]), true)
    }

    pub fn my_sensor_ids(&self) -> Result<Payload> {
        self.get(&self.query(paths::MY_SENSOR_IDS, &[]), true)
    }
}
