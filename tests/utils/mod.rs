pub mod macros;
pub mod prelude;
mod request;
mod response;
pub mod storage;

use exam_backend::State;
use migration::MigratorTrait;
use request::RequestBuilder;
use reqwest::Client;
use sea_orm::{ConnectOptions, Database, DbConn};
use std::{net::SocketAddr, sync::Arc};
use storage::MemoryStore;
use tokio::net::TcpListener;

/// Fresh in-memory database with every migration applied.
#[allow(unused)]
pub async fn setup_database() -> DbConn {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(opts)
        .await
        .expect("failed to connect to database");

    migration::Migrator::up(&db, None)
        .await
        .expect("failed to apply migrations");

    db
}

#[allow(unused)]
async fn setup_backend(db: DbConn, storage: Arc<MemoryStore>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let state = State::with_parts(db, storage);

    tokio::spawn(async move {
        exam_backend::run(listener, state).await.unwrap();
    });

    addr
}

#[allow(unused)]
#[derive(Clone)]
pub struct App {
    addr: SocketAddr,
    client: Client,
    db: DbConn,
    storage: Arc<MemoryStore>,
}

#[allow(unused)]
impl App {
    pub async fn new() -> Self {
        let db = setup_database().await;
        let storage = Arc::new(MemoryStore::default());
        let addr = setup_backend(db.clone(), storage.clone()).await;

        App {
            addr,
            client: Client::new(),
            db,
            storage,
        }
    }

    pub fn db(&self) -> &DbConn {
        &self.db
    }

    pub fn storage(&self) -> &MemoryStore {
        &self.storage
    }

    fn get_url(&self, url: &str) -> String {
        format!("http://{}{}", self.addr, url)
    }

    pub fn get(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.get(self.get_url(url)))
    }

    pub fn post(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.post(self.get_url(url)))
    }

    pub fn patch(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.patch(self.get_url(url)))
    }

    pub fn delete(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.delete(self.get_url(url)))
    }
}
