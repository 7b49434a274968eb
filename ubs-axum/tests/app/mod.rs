use ubs_core::ports::Application;
use ubs_sqlite::{Db, config::SqliteConfig};

#[derive(Clone)]
pub struct TestApp(pub Db);

impl TestApp {
    pub async fn open() -> Self {
        Self(Db::open(&SqliteConfig::default()).await.unwrap())
    }
}

impl Application for TestApp {
    type Repository = Db;

    fn database(&self) -> &Self::Repository {
        &self.0
    }
}
