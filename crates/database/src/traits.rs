use super::*;

/// Schema metadata for PostgreSQL tables.
///
/// Purely describes table structure; all methods return `&'static str`
/// built with [`const_format::concatcp!`] so the DDL is assembled at
/// compile time. Running it is left to [`migrate`].
pub trait Schema {
    /// Returns the table name in the database.
    fn name() -> &'static str;
    /// Returns `CREATE TABLE IF NOT EXISTS` DDL statement.
    fn creates() -> &'static str;
    /// Returns `CREATE INDEX IF NOT EXISTS` statements for all indices.
    fn indices() -> &'static str;
}

/// Creates the table and its indices if they do not exist yet.
///
/// Safe to run on every startup. Tables referenced by foreign keys must be
/// migrated before the tables that reference them.
pub async fn migrate<T: Schema>(client: &Client) -> Result<(), PgErr> {
    log::info!("migrating table ({})", T::name());
    client.batch_execute(T::creates()).await?;
    client.batch_execute(T::indices()).await?;
    Ok(())
}
