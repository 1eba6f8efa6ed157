pub const LOGIN: &str = "/users/login";
pub const PROFILE: &str = "/users/profile";

pub const SENSORS: &str = "/sensors";
pub const ADD_SENSOR: &str = "/sensors/addSensor";
pub const MY_SENSORS: &str = "/sensors/mysensors";
pub const MY_SENSOR_IDS: &str = "/sensors/mysensorids";
pub const ADD_VALUE: &str = "/sensors/addValue";
pub const ADD_MULTIPLE_VALUES: &str = "/sensors/addMultipleValues";

pub const VALUES: &str = "/values";
pub const MEASURANDS: &str = "/measurands";
pub const LICENSES: &str = "/licenses";
pub const UNITS: &str = "/units";
