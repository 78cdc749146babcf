use crate::config::Config;
use migration::MigratorTrait;
use rand::{rngs::ThreadRng, Rng};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, DbErr};
use std::sync::Arc;
use tracing::log::LevelFilter;

pub trait StateTrait: Send + Sync + Clone + 'static {
    type Db: ConnectionTrait + Clone;
    type Rand: Rng;

    fn db(&self) -> &Self::Db;
    fn rng(&self) -> Self::Rand;
    fn api_key(&self) -> Option<Arc<str>>;
}

pub struct State {
    database: DbConn,
    config: Config,
}

impl State {
    /// Connects to the configured database and makes sure the schema exists.
    pub async fn new(config: Config) -> Result<Arc<Self>, DbErr> {
        let conn = Self::connect_database(&config.database_url).await?;

        info!("Applying pending migrations");
        migration::Migrator::up(&conn, None).await?;

        Ok(Self::with_database(config, conn))
    }

    pub fn with_database(config: Config, conn: DbConn) -> Arc<Self> {
        Arc::new(Self {
            database: conn,
            config,
        })
    }

    async fn connect_database(url: &str) -> Result<DbConn, DbErr> {
        info!("Trying to connect to database");

        let mut opts = ConnectOptions::new(url.to_owned());
        opts.sqlx_logging_level(LevelFilter::Debug);

        let db = Database::connect(opts).await?;

        info!("Connected to database");

        Ok(db)
    }
}

impl StateTrait for Arc<State> {
    type Db = DbConn;
    type Rand = ThreadRng;

    fn db(&self) -> &Self::Db {
        &self.database
    }

    fn rng(&self) -> Self::Rand {
        rand::thread_rng()
    }

    fn api_key(&self) -> Option<Arc<str>> {
        self.config.api_key.clone()
    }
}
