use crate::shared::exceptions::persistence_error::PersistenceError;
use deadpool_postgres::Pool;
use sql_builder::SqlBuilder;
use tokio_postgres::Row;

/// Builds the SQL of `sql_builder` and runs it on a pooled connection.
///
/// # Errors
///
/// - `PersistenceError::Pool` when no connection can be taken from the pool.
/// - `PersistenceError::QueryBuild` when the builder cannot render its SQL.
/// - `PersistenceError::TokioPostgres` when Postgres rejects the query.
pub async fn query_constructor_executor(
    pg_pool: &Pool,
    sql_builder: SqlBuilder,
) -> Result<Vec<Row>, PersistenceError> {
    let conn = pg_pool.get().await?;
    let sql = sql_builder.sql()?;
    log::debug!("{sql}");

    Ok(conn.query(sql.as_str(), &[]).await?)
}
