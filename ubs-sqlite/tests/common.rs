#![allow(dead_code)]

use ubs_core::{
    models::{NewBooking, Stay},
    ports::Application,
};
use ubs_sqlite::{Db, config::SqliteConfig};

pub struct TestApp(pub Db);

impl TestApp {
    pub async fn open() -> anyhow::Result<Self> {
        Ok(Self(Db::open(&SqliteConfig::default()).await?))
    }
}

impl Application for TestApp {
    type Repository = Db;

    fn database(&self) -> &Self::Repository {
        &self.0
    }
}

pub fn booking(guest_name: &str, unit_id: &str, check_in: &str, nights: u32) -> NewBooking {
    NewBooking {
        guest_name: guest_name.to_string(),
        unit_id: unit_id.to_string(),
        stay: Stay::new(check_in.parse().unwrap(), nights).unwrap(),
    }
}
