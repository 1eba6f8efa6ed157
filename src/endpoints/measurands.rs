use crate::client::Client;
use crate::constants::paths;
use crate::error::Result;
use crate::models::{Measurand, Payload};

impl Client {
    /// All measurands, or those called `name`. Always a list.
    pub fn get_measurands(&self, name: Option<&str>) -> Result<Payload> {
        let url = self.query(paths::MEASURANDS, &[("name", name.into())]);
        self.get(&url, false)
    }

    pub fn get_measurand(&self, id: u64) -> Result<Measurand> {
        self.get(&self.query(&format!("{}/{id}", paths::MEASURANDS), &[]), false)
    }
}
