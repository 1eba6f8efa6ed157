use anyhow::{anyhow, Result};
use pico_args::Arguments;

pub const COMMANDS: &[&str] = &[
    "login",
    "profile",
    "sensors",
    "sensor",
    "my-sensors",
    "my-sensor-ids",
    "delete-sensor",
    "first-last",
    "sensor-values",
    "measurands",
    "measurand",
    "licenses",
    "license",
    "units",
    "unit",
];

pub struct ConnArgs {
    pub endpoint: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub timeout: Option<u64>,
}

impl ConnArgs {
    pub fn from_args(args: &mut Arguments) -> Result<Self> {
        Ok(Self {
            endpoint: args.opt_value_from_str("--endpoint")?,
            username: args.opt_value_from_str("--username")?,
            password: args.opt_value_from_str("--password")?,
            timeout: args.opt_value_from_str("--timeout")?,
        })
    }
}

pub enum Cmd {
    Login,
    Profile,
    Sensors {
        measurand_id: Option<u64>,
        max_sensors: Option<u32>,
    },
    Sensor(u64),
    MySensors,
    MySensorIds,
    DeleteSensor(u64),
    FirstLast {
        id: u64,
        first: bool,
        last: bool,
    },
    SensorValues {
        id: u64,
        min_timestamp: Option<String>,
        max_timestamp: Option<String>,
    },
    Measurands(Option<String>),
    Measurand(u64),
    Licenses(Option<String>),
    License(u64),
    Units {
        name: Option<String>,
        measurand_id: Option<u64>,
    },
    Unit(u64),
}

impl Cmd {
    pub fn from_args(subcommand: Option<&str>, args: &mut Arguments) -> Result<Self> {
        let cmd = match subcommand {
            Some("login") => Self::Login,
            Some("profile") => Self::Profile,
            Some("sensors") => Self::Sensors {
                measurand_id: args.opt_value_from_str("--measurand-id")?,
                max_sensors: args.opt_value_from_str("--max-sensors")?,
            },
            Some("sensor") => Self::Sensor(args.free_from_str()?),
            Some("my-sensors") => Self::MySensors,
            Some("my-sensor-ids") => Self::MySensorIds,
            Some("delete-sensor") => Self::DeleteSensor(args.free_from_str()?),
            Some("first-last") => Self::FirstLast {
                first: args.contains("--first"),
                last: args.contains("--last"),
                id: args.free_from_str()?,
            },
            Some("sensor-values") => Self::SensorValues {
                min_timestamp: args.opt_value_from_str("--min-timestamp")?,
                max_timestamp: args.opt_value_from_str("--max-timestamp")?,
                id: args.free_from_str()?,
            },
            Some("measurands") => Self::Measurands(args.opt_value_from_str("--name")?),
            Some("measurand") => Self::Measurand(args.free_from_str()?),
            Some("licenses") => Self::Licenses(args.opt_value_from_str("--short-name")?),
            Some("license") => Self::License(args.free_from_str()?),
            Some("units") => Self::Units {
                name: args.opt_value_from_str("--name")?,
                measurand_id: args.opt_value_from_str("--measurand-id")?,
            },
            Some("unit") => Self::Unit(args.free_from_str()?),
            _ => {
                return Err(anyhow!(
                    "Subcommand must be one of '{}'",
                    COMMANDS.join("', '")
                ))
            }
        };
        Ok(cmd)
    }
}
