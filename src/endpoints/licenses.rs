use crate::client::Client;
use crate::constants::paths;
use crate::error::Result;
use crate::models::{License, LicenseFilter, Payload};

impl Client {
    /// Licenses matching `filter`. Always a list, empty if nothing matched.
    pub fn get_licenses(&self, filter: &LicenseFilter) -> Result<Payload> {
        self.get(&self.query(paths::LICENSES, &filter.params()), false)
    }

    pub fn get_license(&self, id: u64) -> Result<License> {
        self.get(&self.query(&format!("{}/{id}", paths::LICENSES), &[]), false)
    }
}
