use anyhow::{anyhow, Result};
use osnapi::{Client, LicenseFilter, Payload, SensorFilter, ValueRange};
use serde_json::Value;

use crate::argsets::Cmd;

pub fn execute(client: &Client, cmd: Cmd) -> Result<Payload> {
    let payload = match cmd {
        Cmd::Login => Value::String(
            client
                .auth_token()
                .ok_or_else(|| anyhow!("'login' requires --username and --password"))?,
        ),
        Cmd::Profile => client.profile()?,
        Cmd::Sensors {
            measurand_id,
            max_sensors,
        } => client.get_sensors(&SensorFilter {
            measurand_id,
            max_sensors,
            ..Default::default()
        })?,
        Cmd::Sensor(id) => client.get_sensor(id)?,
        Cmd::MySensors => client.my_sensors()?,
        Cmd::MySensorIds => client.my_sensor_ids()?,
        Cmd::DeleteSensor(id) => client.delete_sensor(id)?,
        Cmd::FirstLast { id, first, last } => {
            client.get_first_last_value_for_sensor(id, first, last)?
        }
        Cmd::SensorValues {
            id,
            min_timestamp,
            max_timestamp,
        } => client.get_values_for_sensor(
            id,
            &ValueRange {
                min_timestamp,
                max_timestamp,
                ..Default::default()
            },
        )?,
        Cmd::Measurands(name) => client.get_measurands(name.as_deref())?,
        Cmd::Measurand(id) => client.get_measurand(id)?,
        Cmd::Licenses(short_name) => client.get_licenses(&LicenseFilter {
            short_name,
            ..Default::default()
        })?,
        Cmd::License(id) => client.get_license(id)?,
        Cmd::Units { name, measurand_id } => client.get_units(name.as_deref(), measurand_id)?,
        Cmd::Unit(id) => client.get_unit(id)?,
    };
    Ok(payload)
}
