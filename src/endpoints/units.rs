use crate::client::Client;
use crate::constants::paths;
use crate::error::Result;
use crate::models::{Payload, Unit};

impl Client {
    pub fn get_units(&self, name: Option<&str>, measurand_id: Option<u64>) -> Result<Payload> {
        let url = self.query(
            paths::UNITS,
            &[("name", name.into()), ("measurandId", measurand_id.into())],
        );
        self.get(&url, false)
    }

    pub fn get_unit(&self, id: u64) -> Result<Unit> {
        self.get(&self.query(&format!("{}/{id}", paths::UNITS), &[]), false)
    }
}
