use serde_json::Value;

use crate::helpers::query::Params;

/// Decoded response body, passed through as the service sent it.
pub type Payload = Value;

pub type Sensor = Payload;
pub type SensorWithValues = Payload;
pub type Measurement = Payload;
pub type Measurand = Payload;
pub type License = Payload;
pub type Unit = Payload;
pub type Profile = Payload;

/// License restrictions shared by the sensor, value and license searches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LicenseFlags {
    pub allows_derivatives: Option<bool>,
    pub allows_redistribution: Option<bool>,
    pub requires_attribution: Option<bool>,
    pub requires_change_note: Option<bool>,
    pub requires_share_alike: Option<bool>,
    pub requires_keep_open: Option<bool>,
}

impl LicenseFlags {
    fn extend_params(&self, params: &mut Params) {
        let flags: Params = vec![
            ("allowsDerivatives", self.allows_derivatives.into()),
            ("allowsRedistribution", self.allows_redistribution.into()),
            ("requiresAttribution", self.requires_attribution.into()),
            ("requiresChangeNote", self.requires_change_note.into()),
            ("requiresShareAlike", self.requires_share_alike.into()),
            ("requiresKeepOpen", self.requires_keep_open.into()),
        ];
        params.extend(flags);
    }
}

/// Search criteria for `/sensors`. All fields are optional.
///
/// `max_distance` is in meters. Coordinates are `[lat, lng, ...]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SensorFilter {
    pub measurand_id: Option<u64>,
    pub ref_point: Option<Vec<f64>>,
    pub max_distance: Option<f64>,
    pub num_nearest: Option<u32>,
    pub bounding_box: Option<Vec<f64>>,
    pub bounding_polygon: Option<Vec<f64>>,
    pub min_accuracy: Option<u32>,
    pub max_accuracy: Option<u32>,
    pub max_sensors: Option<u32>,
    pub license: LicenseFlags,
}

impl SensorFilter {
    pub fn params(&self) -> Params {
        let mut params: Params = vec![
            ("measurandId", self.measurand_id.into()),
            ("refPoint", self.ref_point.clone().into()),
            ("maxDistance", self.max_distance.into()),
            ("numNearest", self.num_nearest.into()),
            ("boundingBox", self.bounding_box.clone().into()),
            ("boundingPolygon", self.bounding_polygon.clone().into()),
            ("minAccuracy", self.min_accuracy.into()),
            ("maxAccuracy", self.max_accuracy.into()),
            ("maxSensors", self.max_sensors.into()),
        ];
        self.license.extend_params(&mut params);
        params
    }
}

/// Time and value window for value queries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueRange {
    pub min_timestamp: Option<String>,
    pub max_timestamp: Option<String>,
    pub aggregation_type: Option<String>,
    pub aggregation_range: Option<String>,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
}

impl ValueRange {
    pub fn params(&self) -> Params {
        vec![
            ("minTimestamp", self.min_timestamp.clone().into()),
            ("maxTimestamp", self.max_timestamp.clone().into()),
            ("aggregationType", self.aggregation_type.clone().into()),
            ("aggregationRange", self.aggregation_range.clone().into()),
            ("minValue", self.min_value.into()),
            ("maxValue", self.max_value.into()),
        ]
    }
}

/// Search criteria for `/values`. All fields are optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueFilter {
    pub measurand_id: Option<u64>,
    pub ref_point: Option<Vec<f64>>,
    pub max_distance: Option<f64>,
    pub bounding_box: Option<Vec<f64>>,
    pub bounding_polygon: Option<Vec<f64>>,
    pub max_sensors: Option<u32>,
    pub range: ValueRange,
    pub license: LicenseFlags,
}

impl ValueFilter {
    pub fn params(&self) -> Params {
        let mut params: Params = vec![
            ("measurandId", self.measurand_id.into()),
            ("refPoint", self.ref_point.clone().into()),
            ("maxDistance", self.max_distance.into()),
            ("boundingBox", self.bounding_box.clone().into()),
            ("boundingPolygon", self.bounding_polygon.clone().into()),
            ("maxSensors", self.max_sensors.into()),
        ];
        params.extend(self.range.params());
        self.license.extend_params(&mut params);
        params
    }
}

/// Search criteria for `/licenses`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LicenseFilter {
    pub short_name: Option<String>,
    pub flags: LicenseFlags,
}

impl LicenseFilter {
    pub fn params(&self) -> Params {
        let mut params: Params = vec![("shortName", self.short_name.clone().into())];
        self.flags.extend_params(&mut params);
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::helpers::query::build_query;

    const ENDPOINT: &str = "http://localhost";

    #[test]
    fn empty_filter_yields_bare_query() {
        assert_eq!(
            build_query(ENDPOINT, "/sensors", &SensorFilter::default().params()),
            "http://localhost/sensors?"
        );
    }

    #[test]
    fn sensor_filter_keeps_declared_order() {
        let filter = SensorFilter {
            measurand_id: Some(1),
            ref_point: Some(vec![50.5605, 9.6711]),
            max_distance: Some(1000.0),
            license: LicenseFlags {
                allows_redistribution: Some(true),
                requires_keep_open: Some(false),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(
            build_query(ENDPOINT, "/sensors", &filter.params()),
            "http://localhost/sensors?measurandId=1&refPoint=50.5605,9.6711&maxDistance=1000.0&allowsRedistribution=true"
        );
    }

    #[test]
    fn value_filter_appends_range_before_license() {
        let filter = ValueFilter {
            max_sensors: Some(5),
            range: ValueRange {
                min_timestamp: Some("2019-11-23T00:00:00.000Z".into()),
                min_value: Some(0.0),
                max_value: Some(3.5),
                ..Default::default()
            },
            license: LicenseFlags {
                requires_attribution: Some(true),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(
            build_query(ENDPOINT, "values", &filter.params()),
            "http://localhost/values?maxSensors=5&minTimestamp=2019-11-23T00:00:00.000Z&maxValue=3.5&requiresAttribution=true"
        );
    }

    #[test]
    fn license_filter_params() {
        let filter = LicenseFilter {
            short_name: Some("ODC-BY-1.0".into()),
            flags: LicenseFlags {
                allows_derivatives: Some(true),
                ..Default::default()
            },
        };
        assert_eq!(
            build_query(ENDPOINT, "licenses", &filter.params()),
            "http://localhost/licenses?shortName=ODC-BY-1.0&allowsDerivatives=true"
        );
    }
}
