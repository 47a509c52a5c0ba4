use crate::config::settings::Settings;
use deadpool_postgres::{Config, CreatePoolError, Pool, PoolConfig, Runtime};
use tokio_postgres::NoTls;

pub struct Postgres;

impl Postgres {
    /// Creates the connection pool from the database settings.
    ///
    /// No connection is opened here; the first one is made when a request
    /// takes it from the pool.
    pub fn pool(settings: &Settings) -> Result<Pool, CreatePoolError> {
        let mut cfg = Config::new();
        cfg.host = Some(settings.db_host.clone());
        cfg.port = Some(settings.db_port);
        cfg.dbname = Some(settings.db_name.clone());
        cfg.user = Some(settings.db_user.clone());
        cfg.password = Some(settings.db_password.clone());
        cfg.pool = PoolConfig::new(settings.pool_size).into();

        cfg.create_pool(Some(Runtime::Tokio1), NoTls)
    }
}
