use crate::storage::{ObjectStore, S3Store};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, TransactionTrait};
use std::{env, sync::Arc, time::Duration};
use tracing::log::LevelFilter;

pub trait StateTrait: Send + Sync + Clone + 'static {
    type Db: ConnectionTrait + TransactionTrait + Clone;
    type Storage: ObjectStore + ?Sized;

    fn db(&self) -> &Self::Db;
    fn storage(&self) -> &Self::Storage;
}

pub struct State {
    database: DbConn,
    storage: Arc<dyn ObjectStore>,
}

impl State {
    pub async fn new() -> anyhow::Result<Arc<Self>> {
        let database = Self::connect_database().await?;
        let storage = S3Store::from_env()?;

        Ok(Self::with_parts(database, Arc::new(storage)))
    }

    pub fn with_parts(database: DbConn, storage: Arc<dyn ObjectStore>) -> Arc<Self> {
        Arc::new(Self { database, storage })
    }

    async fn connect_database() -> anyhow::Result<DbConn> {
        info!("Trying to connect to database");

        let url = env::var("DATABASE_URL").inspect_err(|_| error!("DATABASE_URL is not set"))?;
        let mut opts = ConnectOptions::new(url);
        opts.max_connections(10)
            .connect_timeout(Duration::from_secs(30))
            .acquire_timeout(Duration::from_secs(30))
            .max_lifetime(Duration::from_secs(30))
            .sqlx_logging_level(LevelFilter::Debug);

        let db = Database::connect(opts)
            .await
            .inspect_err(|error| error!("failed to connect to database: {}", error))?;

        info!("Connected to database");

        Ok(db)
    }
}

impl StateTrait for Arc<State> {
    type Db = DbConn;
    type Storage = dyn ObjectStore;

    fn db(&self) -> &Self::Db {
        &self.database
    }

    fn storage(&self) -> &Self::Storage {
        self.storage.as_ref()
    }
}
